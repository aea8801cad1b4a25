use super::{InfoCard, PageHeader};
use dioxus::prelude::*;

const DOMAINS: [(&str, &str); 5] = [
    ("lab.domain.water", "lab.domain.water.body"),
    ("lab.domain.air", "lab.domain.air.body"),
    ("lab.domain.dust", "lab.domain.dust.body"),
    ("lab.domain.noise", "lab.domain.noise.body"),
    ("lab.domain.environment", "lab.domain.environment.body"),
];

#[component]
pub fn LaboratoryPage() -> Element {
    let lang = crate::use_lang()();

    rsx! {
        PageHeader { title: "lab.title", subtitle: "lab.subtitle" }

        section { class: "panel",
            h2 { {crate::t(lang, "lab.domains.title")} }
            div { class: "card_grid",
                for (title, body) in DOMAINS {
                    InfoCard { key: "{title}", title: title, body: body }
                }
            }
        }

        section { class: "panel",
            h2 { {crate::t(lang, "lab.standards.title")} }
            p { {crate::t(lang, "lab.standards.body")} }
            a { class: "btn primary", href: "/contact", {crate::t(lang, "lab.cta")} }
        }
    }
}
