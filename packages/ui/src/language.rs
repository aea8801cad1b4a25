use crate::i18n::{set_language, Lang};
use dioxus::prelude::*;

/// FR / EN toggle shown in the header.
#[component]
pub fn LanguageSelector() -> Element {
    let mut lang = crate::use_lang();
    let current = lang();

    rsx! {
        div { class: "lang_selector", role: "group", "aria-label": crate::t(current, "lang.label"),
            for option in Lang::ALL {
                button {
                    key: "{option.code()}",
                    class: if option == current { "lang_option active" } else { "lang_option" },
                    "aria-pressed": option == current,
                    onclick: move |_| {
                        set_language(&mut lang, option);
                    },
                    {option.code().to_uppercase()}
                }
            }
        }
    }
}
