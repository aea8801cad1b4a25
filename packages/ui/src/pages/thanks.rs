use dioxus::prelude::*;

const NEXT_STEPS: [&str; 3] = ["thanks.next.step1", "thanks.next.step2", "thanks.next.step3"];

#[component]
pub fn ThanksPage() -> Element {
    let lang = crate::use_lang()();
    rsx! {
        section { class: "panel thanks",
            div { class: "thanks_mark", "✓" }
            h1 { {crate::t(lang, "thanks.title")} }
            p { class: "page_subtitle", {crate::t(lang, "thanks.message")} }

            h2 { {crate::t(lang, "thanks.next.title")} }
            ol { class: "steps",
                for step in NEXT_STEPS {
                    li { key: "{step}", {crate::t(lang, step)} }
                }
            }

            div { class: "cta_row",
                a { class: "btn primary", href: "/", {crate::t(lang, "common.back_home")} }
                a { class: "btn", href: "/training", {crate::t(lang, "thanks.more_training")} }
                a { class: "btn", href: "/contact", {crate::t(lang, "thanks.question")} }
            }
        }
    }
}
