use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! { ui::AboutPage {} }
}

#[component]
pub fn Services() -> Element {
    rsx! { ui::ServicesPage {} }
}

#[component]
pub fn Laboratory() -> Element {
    rsx! { ui::LaboratoryPage {} }
}

#[component]
pub fn Training() -> Element {
    rsx! { ui::TrainingPage {} }
}

#[component]
pub fn Contact() -> Element {
    rsx! { ui::ContactPage {} }
}

#[component]
pub fn Register(training: Option<String>) -> Element {
    let nav = use_navigator();
    rsx! {
        ui::RegisterPage {
            training: training,
            on_registered: move |_| {
                nav.push(Route::Thanks {});
            },
            on_leave: move |_| {
                nav.push(Route::Training {});
            },
        }
    }
}

#[component]
pub fn Thanks() -> Element {
    rsx! { ui::ThanksPage {} }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let _ = segments;
    rsx! { ui::NotFoundPage {} }
}
