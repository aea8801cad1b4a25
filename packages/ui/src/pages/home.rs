use super::{FaqList, InfoCard};
use crate::Hero;
use dioxus::prelude::*;

const STATS: [(&str, &str); 3] = [
    ("500+", "home.stats.clients"),
    ("15+", "home.stats.experience"),
    ("50+", "home.stats.formations"),
];

const WHY_POINTS: [&str; 4] = [
    "home.why.point1",
    "home.why.point2",
    "home.why.point3",
    "home.why.point4",
];

const PARTNERS: [&str; 9] = [
    "Cargill",
    "ARO",
    "Waterleau",
    "CODINORM",
    "CORAXEL",
    "Olam Cocoa",
    "El Paradis Cosmetic",
    "INHP",
    "LBTP",
];

/// Partner names scroll in a loop; the list is rendered twice so the track wraps seamlessly.
#[component]
fn PartnerStrip() -> Element {
    let lang = crate::use_lang()();
    let track = PARTNERS.iter().chain(PARTNERS.iter()).enumerate();

    rsx! {
        section { class: "panel partners",
            h2 { {crate::t(lang, "home.partners.title")} }
            p { class: "hint", {crate::t(lang, "home.partners.subtitle")} }
            div { class: "partner_viewport",
                div { class: "partner_track",
                    for (index, name) in track {
                        div { key: "{index}", class: "partner_card", "{name}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn HomePage() -> Element {
    let lang = crate::use_lang()();

    rsx! {
        Hero {}

        section { class: "stats_row",
            for (value, label) in STATS {
                div { key: "{label}", class: "stat",
                    div { class: "stat_value", "{value}" }
                    div { class: "stat_label", {crate::t(lang, label)} }
                }
            }
        }

        section { class: "panel",
            span { class: "badge", {crate::t(lang, "common.services_badge")} }
            h2 { {crate::t(lang, "services.title")} }
            p { class: "hint", {crate::t(lang, "home.services.subtitle")} }
            div { class: "card_grid",
                InfoCard { title: "services.laboratory", body: "services.laboratory.body", href: "/laboratory" }
                InfoCard { title: "services.training", body: "services.training.body", href: "/training" }
                InfoCard { title: "services.construction", body: "services.construction.body", href: "/services" }
                InfoCard { title: "services.maintenance", body: "services.maintenance.body", href: "/services" }
            }
        }

        section { class: "panel",
            h2 { {crate::t(lang, "home.why.title")} }
            p { {crate::t(lang, "home.why.subtitle")} }
            ul { class: "check_list",
                for point in WHY_POINTS {
                    li { key: "{point}", {crate::t(lang, point)} }
                }
            }
        }

        PartnerStrip {}

        FaqList {
            title: "home.faq.title",
            entries: vec![
                ("home.faq.q1", "home.faq.a1"),
                ("home.faq.q2", "home.faq.a2"),
                ("home.faq.q3", "home.faq.a3"),
            ],
        }

        section { class: "cta_band",
            h2 { {crate::t(lang, "home.cta.title")} }
            p { {crate::t(lang, "home.cta.subtitle")} }
            div { class: "cta_row",
                a { class: "btn primary", href: "/contact", {crate::t(lang, "nav.contact")} }
                a { class: "btn", href: "/register", {crate::t(lang, "nav.register")} }
            }
        }
    }
}
