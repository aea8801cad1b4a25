//! Single-step contact form.

use super::{SubmitBlocked, SubmitError};
use crate::toast::Notice;
use api::types::{ContactDraft, ContactField, SubmissionReceipt};
use api::validation::validate_contact;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    draft: ContactDraft,
    submitting: bool,
}

impl ContactForm {
    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        self.draft.set(field, value);
    }

    pub fn begin_submit(&mut self) -> Result<ContactDraft, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        validate_contact(&self.draft).map_err(SubmitBlocked::Invalid)?;
        self.submitting = true;
        Ok(self.draft.clone())
    }

    pub fn finish_submit(&mut self, outcome: Result<SubmissionReceipt, SubmitError>) -> Notice {
        self.submitting = false;
        match outcome {
            Ok(_) => {
                self.draft = ContactDraft::default();
                Notice::success("contact.toast.success", "contact.toast.description")
            }
            Err(err) => err.notice(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::NoticeKind;
    use api::validation::ValidationError;
    use time::OffsetDateTime;
    use uuid::Uuid;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(ContactField::FirstName, "Ama".into());
        form.set(ContactField::LastName, "Koffi".into());
        form.set(ContactField::Email, "ama@exform.ci".into());
        form.set(ContactField::Message, "Bonjour, je voudrais un devis.".into());
        form
    }

    #[test]
    fn short_message_is_refused_locally() {
        let mut form = filled();
        form.set(ContactField::Message, "Bonjour".into());
        assert_eq!(
            form.begin_submit(),
            Err(SubmitBlocked::Invalid(ValidationError::MessageLength))
        );
        assert!(!form.is_submitting());
        assert_eq!(form.draft().message, "Bonjour");
    }

    #[test]
    fn success_clears_the_form() {
        let mut form = filled();
        let draft = form.begin_submit().unwrap();
        assert_eq!(draft.first_name, "Ama");
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::InFlight));

        let notice = form.finish_submit(Ok(SubmissionReceipt {
            reference: Uuid::nil(),
            received_at: OffsetDateTime::UNIX_EPOCH,
        }));
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(form.draft(), &ContactDraft::default());
        assert!(!form.is_submitting());
    }

    #[test]
    fn failure_preserves_input() {
        let mut form = filled();
        let before = form.draft().clone();
        form.begin_submit().unwrap();
        let notice = form.finish_submit(Err(SubmitError::Unexpected("rejected".into())));
        assert_eq!(notice.title, "form.failure.title");
        assert_eq!(form.draft(), &before);
        assert!(!form.is_submitting());
    }
}
