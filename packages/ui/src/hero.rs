use dioxus::prelude::*;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero() -> Element {
    let lang = crate::use_lang()();
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        div {
            id: "hero",
            div { id: "links",
                h1 { {crate::t(lang, "hero.title")} }
                p { {crate::t(lang, "hero.subtitle")} }

                div { class: "cta_row",
                    a { class: "btn primary", href: "/services", {crate::t(lang, "hero.cta")} }
                    a { class: "btn", href: "/training", {crate::t(lang, "hero.cta_secondary")} }
                }
            }
        }
    }
}
