//! This crate contains all shared UI for the workspace.

mod hero;
pub use hero::Hero;

mod theme;
pub use theme::SiteTheme;

mod toast;
pub use toast::{use_toasts, Notice, NoticeKind, ToastProvider, Toasts};

mod i18n;
pub use i18n::{resolve, set_language, t, tr, use_lang, I18nProvider, Lang, LangSource, Localized};

mod language;
pub use language::LanguageSelector;

mod footer;
pub use footer::SiteFooter;

mod whatsapp;
pub use whatsapp::WhatsAppButton;

pub mod forms;
pub use forms::{RegistrationWizard, SubmitError, WizardStep};

pub mod chatbot;
pub use chatbot::Chatbot;

pub mod map;
pub use map::LocationMap;

mod pages;
pub use pages::{
    AboutPage, ContactPage, HomePage, LaboratoryPage, NotFoundPage, RegisterPage, ServicesPage,
    ThanksPage, TrainingPage,
};
