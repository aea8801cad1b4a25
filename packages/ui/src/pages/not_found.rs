use dioxus::prelude::*;

#[component]
pub fn NotFoundPage() -> Element {
    let lang = crate::use_lang()();
    rsx! {
        section { class: "panel not_found",
            h1 { "404" }
            h2 { {crate::t(lang, "not_found.title")} }
            p { {crate::t(lang, "not_found.body")} }
            a { class: "btn primary", href: "/", {crate::t(lang, "common.back_home")} }
        }
    }
}
