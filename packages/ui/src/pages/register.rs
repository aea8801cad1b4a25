use crate::forms::{Previous, RegistrationWizard, SubmitError, WizardStep};
use api::types::{ExperienceLevel, RegistrationField, TrainingCourse};
use dioxus::prelude::*;

/// Three-step registration. `training` preselects a course by code.
///
/// `on_registered` fires after a successful submission and `on_leave` when
/// the visitor goes back from the first step.
#[component]
pub fn RegisterPage(
    training: Option<String>,
    on_registered: EventHandler<()>,
    on_leave: EventHandler<()>,
) -> Element {
    let lang = crate::use_lang()();
    let toasts = crate::use_toasts();
    let mut wizard = use_signal(|| RegistrationWizard::with_training(training.as_deref()));

    let step = wizard.read().step();
    let submitting = wizard.read().is_submitting();
    let can_advance = wizard.read().can_advance();
    let can_submit = wizard.read().can_submit();

    let submit = move |_| {
        let draft = match wizard.with_mut(|w| w.begin_submit()) {
            Ok(draft) => draft,
            Err(blocked) => {
                if let Some(notice) = blocked.notice() {
                    toasts.notify(notice);
                }
                return;
            }
        };
        spawn(async move {
            let outcome = api::submit_registration(draft)
                .await
                .map_err(|e| SubmitError::from_server(&e));
            let succeeded = outcome.is_ok();
            let notice = wizard.with_mut(|w| w.finish_submit(outcome));
            toasts.notify(notice);
            if succeeded {
                on_registered.call(());
            }
        });
    };

    rsx! {
        section { class: "panel register",
            h1 { {crate::t(lang, "register.title")} }
            p { class: "page_subtitle", {crate::t(lang, "register.subtitle")} }

            ol { class: "wizard_progress",
                for item in WizardStep::ALL {
                    li {
                        key: "{item.number()}",
                        class: if item <= step { "wizard_dot active" } else { "wizard_dot" },
                        span { class: "wizard_number", "{item.number()}" }
                        span { class: "wizard_label", {crate::t(lang, item.label_key())} }
                    }
                }
            }

            div { class: "form",
                h2 { {crate::t(lang, step.label_key())} }
                match step {
                    WizardStep::Personal => rsx! {
                        div { class: "form_row",
                            WizardInput { wizard: wizard, field: RegistrationField::FirstName, label: "register.first_name", placeholder: "register.first_name.placeholder" }
                            WizardInput { wizard: wizard, field: RegistrationField::LastName, label: "register.last_name", placeholder: "register.last_name.placeholder" }
                        }
                        WizardInput { wizard: wizard, field: RegistrationField::Email, label: "register.email", placeholder: "register.email.placeholder", kind: "email" }
                        WizardInput { wizard: wizard, field: RegistrationField::Phone, label: "register.phone", placeholder: "register.phone.placeholder", kind: "tel" }
                    },
                    WizardStep::Professional => rsx! {
                        WizardInput { wizard: wizard, field: RegistrationField::Company, label: "register.company", placeholder: "register.company.placeholder" }
                        WizardInput { wizard: wizard, field: RegistrationField::Position, label: "register.position", placeholder: "register.position.placeholder" }
                        WizardSelect {
                            wizard: wizard,
                            field: RegistrationField::ExperienceLevel,
                            label: "register.experience",
                            placeholder: "register.experience.placeholder",
                            options: ExperienceLevel::ALL.iter().map(|l| (l.code(), l.label_key())).collect::<Vec<_>>(),
                        }
                    },
                    WizardStep::Training => rsx! {
                        WizardSelect {
                            wizard: wizard,
                            field: RegistrationField::PreferredTraining,
                            label: "register.training",
                            placeholder: "register.training.placeholder",
                            options: TrainingCourse::ALL.iter().map(|c| (c.code(), c.label_key())).collect::<Vec<_>>(),
                        }
                        WizardInput { wizard: wizard, field: RegistrationField::StartDate, label: "register.start_date", placeholder: "register.start_date", kind: "date" }
                        label {
                            {crate::t(lang, "register.motivation")}
                            textarea {
                                rows: 4,
                                name: RegistrationField::Motivation.name(),
                                value: wizard.read().value(RegistrationField::Motivation).to_string(),
                                placeholder: crate::t(lang, "register.motivation.placeholder"),
                                oninput: move |e| wizard.with_mut(|w| w.set(RegistrationField::Motivation, e.value())),
                            }
                        }
                    },
                }
                p { class: "hint", {crate::t(lang, "register.required_hint")} }
            }

            div { class: "wizard_actions",
                button {
                    class: "btn wizard_back",
                    r#type: "button",
                    disabled: submitting,
                    onclick: move |_| {
                        if wizard.with_mut(|w| w.previous()) == Previous::LeaveWizard {
                            on_leave.call(());
                        }
                    },
                    if step == WizardStep::Personal {
                        {crate::t(lang, "register.back_to_catalog")}
                    } else {
                        {crate::t(lang, "register.previous")}
                    }
                }

                if step == WizardStep::Training {
                    button {
                        class: "btn primary",
                        r#type: "button",
                        disabled: !can_submit,
                        onclick: submit,
                        if submitting {
                            {crate::t(lang, "register.submitting")}
                        } else {
                            {crate::t(lang, "register.submit")}
                        }
                    }
                } else {
                    button {
                        class: "btn primary wizard_next",
                        r#type: "button",
                        disabled: !can_advance,
                        onclick: move |_| {
                            wizard.with_mut(|w| w.next());
                        },
                        {crate::t(lang, "register.next")}
                    }
                }
            }
        }
    }
}

#[component]
fn WizardInput(
    wizard: Signal<RegistrationWizard>,
    field: RegistrationField,
    label: &'static str,
    placeholder: &'static str,
    #[props(default = "text")] kind: &'static str,
) -> Element {
    let mut wizard = wizard;
    let lang = crate::use_lang()();
    let value = wizard.read().value(field).to_string();
    rsx! {
        label {
            {crate::t(lang, label)}
            input {
                r#type: kind,
                name: field.name(),
                value: "{value}",
                placeholder: crate::t(lang, placeholder),
                oninput: move |e| wizard.with_mut(|w| w.set(field, e.value())),
            }
        }
    }
}

#[component]
fn WizardSelect(
    wizard: Signal<RegistrationWizard>,
    field: RegistrationField,
    label: &'static str,
    placeholder: &'static str,
    options: Vec<(&'static str, &'static str)>,
) -> Element {
    let mut wizard = wizard;
    let lang = crate::use_lang()();
    let current = wizard.read().value(field).to_string();
    rsx! {
        label {
            {crate::t(lang, label)}
            select {
                name: field.name(),
                onchange: move |e| wizard.with_mut(|w| w.set(field, e.value())),
                option { value: "", selected: current.is_empty(), {crate::t(lang, placeholder)} }
                for (code, key) in options {
                    option { key: "{code}", value: code, selected: current == code, {crate::t(lang, key)} }
                }
            }
        }
    }
}
