//! Client-side form controllers.
//!
//! The controllers are plain structs so the submit rules can be tested without
//! a renderer. A submission is split in two halves around the server call:
//! `begin_submit` checks the guards and hands out the draft to send, and
//! `finish_submit` takes the outcome and returns the notice to show.

use crate::toast::Notice;
use api::validation::ValidationError;
use dioxus::prelude::ServerFnError;

pub mod contact;
pub mod registration;

pub use contact::ContactForm;
pub use registration::{Previous, RegistrationWizard, WizardStep};

/// Why a submission ended without a receipt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Refused before any remote call.
    #[error("invalid input: {0}")]
    Validation(ValidationError),
    /// The server function failed: network, timeout or backend rejection.
    #[error("remote call failed: {0}")]
    Remote(String),
    /// Anything else, such as the server refusing a draft the browser accepted.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl SubmitError {
    pub fn from_server(err: &ServerFnError) -> Self {
        let message = err.to_string();
        if api::rejection_key(&message).is_some() {
            SubmitError::Unexpected(message)
        } else {
            SubmitError::Remote(message)
        }
    }

    pub fn notice(&self) -> Notice {
        match self {
            SubmitError::Validation(err) => Notice::error("form.invalid.title", err.key()),
            SubmitError::Remote(_) | SubmitError::Unexpected(_) => {
                Notice::error("form.failure.title", "form.failure.body")
            }
        }
    }
}

/// Why `begin_submit` did not hand out a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A previous submission has not finished yet.
    InFlight,
    /// Not on the last step, or its required fields are empty.
    NotReady,
    Invalid(ValidationError),
}

impl SubmitBlocked {
    /// Notice for the visitor, if this refusal deserves one.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            SubmitBlocked::Invalid(err) => Some(SubmitError::Validation(*err).notice()),
            SubmitBlocked::InFlight | SubmitBlocked::NotReady => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::NoticeKind;

    #[test]
    fn server_rejection_is_unexpected() {
        let err = ServerFnError::new("rejected: validation.email");
        assert!(matches!(SubmitError::from_server(&err), SubmitError::Unexpected(_)));

        let err = ServerFnError::new("contact submission failed: backend did not answer within 15000ms");
        assert!(matches!(SubmitError::from_server(&err), SubmitError::Remote(_)));
    }

    #[test]
    fn validation_notice_names_the_field() {
        let notice = SubmitError::Validation(ValidationError::PhoneInvalid).notice();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.title, "form.invalid.title");
        assert_eq!(notice.body, Some("validation.phone"));
    }

    #[test]
    fn remote_failures_share_a_generic_notice() {
        let remote = SubmitError::Remote("timeout".into()).notice();
        let unexpected = SubmitError::Unexpected("rejected".into()).notice();
        assert_eq!(remote, unexpected);
        assert_eq!(remote.body, Some("form.failure.body"));
    }

    #[test]
    fn only_invalid_refusals_are_shown() {
        assert_eq!(SubmitBlocked::InFlight.notice(), None);
        assert_eq!(SubmitBlocked::NotReady.notice(), None);
        assert!(SubmitBlocked::Invalid(ValidationError::EmailInvalid).notice().is_some());
    }
}
