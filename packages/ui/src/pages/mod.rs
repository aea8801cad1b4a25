//! One component per page. The web crate wraps each in its route.

use dioxus::prelude::*;

mod about;
mod contact;
mod home;
mod laboratory;
mod not_found;
mod register;
mod services;
mod thanks;
mod training;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use laboratory::LaboratoryPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
pub use services::ServicesPage;
pub use thanks::ThanksPage;
pub use training::TrainingPage;

const PAGES_CSS: Asset = asset!("/assets/styling/pages.css");

/// Title band at the top of every inner page.
#[component]
fn PageHeader(title: &'static str, subtitle: &'static str) -> Element {
    let lang = crate::use_lang()();
    rsx! {
        document::Link { rel: "stylesheet", href: PAGES_CSS }
        section { class: "page_header",
            h1 { {crate::t(lang, title)} }
            p { class: "page_subtitle", {crate::t(lang, subtitle)} }
        }
    }
}

#[component]
fn InfoCard(title: &'static str, body: &'static str, href: Option<&'static str>) -> Element {
    let lang = crate::use_lang()();
    rsx! {
        div { class: "card",
            h3 { {crate::t(lang, title)} }
            p { {crate::t(lang, body)} }
            if let Some(href) = href {
                a { class: "card_link", href: "{href}", {crate::t(lang, "common.learn_more")} }
            }
        }
    }
}

/// Question/answer pairs as collapsible entries.
#[component]
fn FaqList(title: &'static str, entries: Vec<(&'static str, &'static str)>) -> Element {
    let lang = crate::use_lang()();
    rsx! {
        section { class: "panel faq",
            h2 { {crate::t(lang, title)} }
            for (question, answer) in entries {
                details { key: "{question}", class: "faq_item",
                    summary { {crate::t(lang, question)} }
                    p { {crate::t(lang, answer)} }
                }
            }
        }
    }
}
