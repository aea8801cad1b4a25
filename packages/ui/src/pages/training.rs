use super::PageHeader;
use api::types::TrainingCourse;
use dioxus::prelude::*;

/// Registration link with the course already selected.
pub fn register_href(course: TrainingCourse) -> String {
    format!("/register?training={}", urlencoding::encode(course.code()))
}

#[component]
pub fn TrainingPage() -> Element {
    let lang = crate::use_lang()();

    rsx! {
        PageHeader { title: "training.title", subtitle: "training.subtitle" }

        section { class: "card_grid training_catalog",
            for course in TrainingCourse::ALL {
                div { key: "{course.code()}", class: "card",
                    h3 { {crate::t(lang, course.label_key())} }
                    p { {crate::t(lang, course.summary_key())} }
                    a { class: "btn primary", href: register_href(course),
                        {crate::t(lang, "training.register")}
                    }
                }
            }
        }

        section { class: "panel",
            h2 { {crate::t(lang, "training.custom.title")} }
            p { {crate::t(lang, "training.custom.body")} }
            a { class: "btn", href: "/contact", {crate::t(lang, "nav.contact")} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_links_name_the_course() {
        assert_eq!(
            register_href(TrainingCourse::Vibration),
            "/register?training=vibration"
        );
    }
}
