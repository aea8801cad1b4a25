use super::{InfoCard, PageHeader};
use dioxus::prelude::*;

#[component]
pub fn ServicesPage() -> Element {
    rsx! {
        PageHeader { title: "services.title", subtitle: "services.subtitle" }

        section { class: "card_grid",
            InfoCard { title: "services.laboratory", body: "services.laboratory.body", href: "/laboratory" }
            InfoCard { title: "services.training", body: "services.training.body", href: "/training" }
            InfoCard { title: "services.construction", body: "services.construction.body", href: "/contact" }
            InfoCard { title: "services.maintenance", body: "services.maintenance.body", href: "/contact" }
        }
    }
}
