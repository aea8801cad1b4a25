use super::PageHeader;
use dioxus::prelude::*;

const VALUES: [(&str, &str); 3] = [
    ("about.values.excellence", "about.values.excellence.body"),
    ("about.values.innovation", "about.values.innovation.body"),
    ("about.values.professionalism", "about.values.professionalism.body"),
];

#[component]
pub fn AboutPage() -> Element {
    let lang = crate::use_lang()();

    rsx! {
        PageHeader { title: "about.title", subtitle: "about.subtitle" }

        section { class: "panel",
            h2 { {crate::t(lang, "about.mission.title")} }
            p { {crate::t(lang, "about.mission.body")} }
        }

        section { class: "panel",
            h2 { {crate::t(lang, "about.values.title")} }
            div { class: "card_grid",
                for (title, body) in VALUES {
                    div { key: "{title}", class: "card",
                        h3 { {crate::t(lang, title)} }
                        p { {crate::t(lang, body)} }
                    }
                }
            }
        }

        section { class: "panel",
            h2 { {crate::t(lang, "about.vision.title")} }
            p { {crate::t(lang, "about.vision.body")} }
            a { class: "btn primary", href: "/contact", {crate::t(lang, "about.cta")} }
        }
    }
}
