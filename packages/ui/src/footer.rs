use crate::i18n::tr;
use dioxus::prelude::*;

pub const CONTACT_EMAILS: [&str; 2] = ["info@exform.ci", "contact@exform.ci"];
pub const CONTACT_PHONES: [&str; 2] = ["+225 07 14 61 34 89", "+225 27 33 74 72 17"];

const QUICK_LINKS: [(&str, &str); 6] = [
    ("/", "nav.home"),
    ("/about", "nav.about"),
    ("/services", "nav.services"),
    ("/laboratory", "nav.laboratory"),
    ("/training", "nav.training"),
    ("/contact", "nav.contact"),
];

const SERVICE_KEYS: [&str; 4] = [
    "services.laboratory",
    "services.construction",
    "services.training",
    "services.maintenance",
];

/// `tel:` target for a displayed phone number.
pub fn tel_href(display: &str) -> String {
    let digits: String = display
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{digits}")
}

#[component]
pub fn SiteFooter() -> Element {
    let source = crate::use_lang();
    let lang = source();

    rsx! {
        footer { class: "site_footer",
            div { class: "site_footer_inner",
                div { class: "footer_col",
                    div { class: "brand_name", {crate::t(lang, "app.name")} }
                    p { class: "hint", {crate::t(lang, "hero.title")} }
                }
                div { class: "footer_col",
                    h3 { {crate::t(lang, "footer.quick_links")} }
                    ul {
                        for (href, key) in QUICK_LINKS {
                            li { key: "{href}",
                                a { href: "{href}", {tr(source, key).to_string()} }
                            }
                        }
                    }
                }
                div { class: "footer_col",
                    h3 { {crate::t(lang, "nav.services")} }
                    ul {
                        for key in SERVICE_KEYS {
                            li { key: "{key}", {tr(source, key).to_string()} }
                        }
                    }
                }
                div { class: "footer_col",
                    h3 { {crate::t(lang, "nav.contact")} }
                    p { {crate::t(lang, "contact.address")} }
                    for email in CONTACT_EMAILS {
                        a { key: "{email}", class: "footer_contact", href: "mailto:{email}", "{email}" }
                    }
                    for phone in CONTACT_PHONES {
                        a { key: "{phone}", class: "footer_contact", href: tel_href(phone), "{phone}" }
                    }
                }
            }
            div { class: "site_footer_bottom",
                "© EXFORM. "
                {crate::t(lang, "footer.rights")}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_links_keep_digits_and_plus() {
        assert_eq!(tel_href("+225 07 14 61 34 89"), "tel:+2250714613489");
    }
}
