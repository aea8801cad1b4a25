use super::{FaqList, PageHeader};
use crate::footer::{tel_href, CONTACT_EMAILS, CONTACT_PHONES};
use crate::forms::{ContactForm, SubmitError};
use crate::map::LocationMap;
use api::types::ContactField;
use dioxus::prelude::*;

#[component]
pub fn ContactPage() -> Element {
    let lang = crate::use_lang()();

    rsx! {
        PageHeader { title: "contact.title", subtitle: "contact.subtitle" }

        div { class: "two_col",
            ContactFormPanel {}

            div {
                section { class: "panel",
                    h2 { {crate::t(lang, "contact.info.title")} }
                    dl { class: "contact_info",
                        dt { {crate::t(lang, "contact.info.address")} }
                        dd { {crate::t(lang, "contact.address")} }
                        dt { {crate::t(lang, "contact.info.email")} }
                        for email in CONTACT_EMAILS {
                            dd { key: "{email}", a { href: "mailto:{email}", "{email}" } }
                        }
                        dt { {crate::t(lang, "contact.info.phone")} }
                        for phone in CONTACT_PHONES {
                            dd { key: "{phone}", a { href: tel_href(phone), "{phone}" } }
                        }
                        dt { {crate::t(lang, "contact.info.hours")} }
                        dd { {crate::t(lang, "contact.hours.weekday")} }
                        dd { {crate::t(lang, "contact.hours.saturday")} }
                    }
                }
                section { class: "panel cta_row",
                    a { class: "btn primary", href: "/register", {crate::t(lang, "contact.quick.training")} }
                    a { class: "btn", href: "/laboratory", {crate::t(lang, "contact.quick.analysis")} }
                }
            }
        }

        section { class: "panel",
            h2 { {crate::t(lang, "contact.map.title")} }
            p { class: "hint", {crate::t(lang, "contact.map.subtitle")} }
            LocationMap {}
        }

        FaqList {
            title: "contact.faq.title",
            entries: vec![
                ("contact.faq.q1", "contact.faq.a1"),
                ("contact.faq.q2", "contact.faq.a2"),
                ("contact.faq.q3", "contact.faq.a3"),
            ],
        }
    }
}

#[component]
fn ContactFormPanel() -> Element {
    let lang = crate::use_lang()();
    let toasts = crate::use_toasts();
    let mut form = use_signal(ContactForm::default);

    let draft = form.read().draft().clone();
    let submitting = form.read().is_submitting();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = match form.with_mut(|form| form.begin_submit()) {
            Ok(draft) => draft,
            Err(blocked) => {
                if let Some(notice) = blocked.notice() {
                    toasts.notify(notice);
                }
                return;
            }
        };
        spawn(async move {
            let outcome = api::submit_contact(draft)
                .await
                .map_err(|e| SubmitError::from_server(&e));
            let notice = form.with_mut(|form| form.finish_submit(outcome));
            toasts.notify(notice);
        });
    };

    rsx! {
        form { class: "panel form", onsubmit: onsubmit,
            h2 { {crate::t(lang, "contact.form.title")} }

            div { class: "form_row",
                label {
                    {crate::t(lang, "contact.form.first_name")}
                    input {
                        name: "first_name",
                        value: "{draft.first_name}",
                        placeholder: crate::t(lang, "contact.form.first_name.placeholder"),
                        oninput: move |e| form.with_mut(|f| f.set(ContactField::FirstName, e.value())),
                    }
                }
                label {
                    {crate::t(lang, "contact.form.last_name")}
                    input {
                        name: "last_name",
                        value: "{draft.last_name}",
                        placeholder: crate::t(lang, "contact.form.last_name.placeholder"),
                        oninput: move |e| form.with_mut(|f| f.set(ContactField::LastName, e.value())),
                    }
                }
            }
            label {
                {crate::t(lang, "contact.form.email")}
                input {
                    name: "email",
                    r#type: "email",
                    value: "{draft.email}",
                    placeholder: crate::t(lang, "contact.form.email.placeholder"),
                    oninput: move |e| form.with_mut(|f| f.set(ContactField::Email, e.value())),
                }
            }
            label {
                {crate::t(lang, "contact.form.message")}
                textarea {
                    name: "message",
                    rows: 6,
                    value: "{draft.message}",
                    placeholder: crate::t(lang, "contact.form.message.placeholder"),
                    oninput: move |e| form.with_mut(|f| f.set(ContactField::Message, e.value())),
                }
            }

            button { class: "btn primary", r#type: "submit", disabled: submitting,
                if submitting {
                    {crate::t(lang, "contact.form.sending")}
                } else {
                    {crate::t(lang, "contact.form.send")}
                }
            }
        }
    }
}
