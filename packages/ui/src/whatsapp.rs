use crate::footer::CONTACT_PHONES;
use dioxus::prelude::*;

/// Click-to-chat link for a displayed phone number; wa.me wants bare digits.
pub fn whatsapp_href(display: &str) -> String {
    let digits: String = display.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{digits}")
}

#[component]
pub fn WhatsAppButton() -> Element {
    let lang = crate::use_lang()();
    let label = crate::t(lang, "whatsapp.open");

    rsx! {
        a {
            class: "whatsapp_launcher",
            href: whatsapp_href(CONTACT_PHONES[0]),
            target: "_blank",
            rel: "noopener noreferrer",
            title: "{label}",
            "aria-label": "{label}",
            "WhatsApp"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_drops_plus_and_spaces() {
        assert_eq!(
            whatsapp_href("+225 07 14 61 34 89"),
            "https://wa.me/2250714613489"
        );
    }

    #[test]
    fn button_targets_the_mobile_line() {
        assert_eq!(whatsapp_href(CONTACT_PHONES[0]), "https://wa.me/2250714613489");
    }
}
