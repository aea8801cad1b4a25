//! Three-step registration wizard.

use super::{SubmitBlocked, SubmitError};
use crate::toast::Notice;
use api::types::{RegistrationDraft, RegistrationField, SubmissionReceipt, TrainingCourse};
use api::validation::validate_registration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    #[default]
    Personal = 1,
    Professional = 2,
    Training = 3,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [
        WizardStep::Personal,
        WizardStep::Professional,
        WizardStep::Training,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn label_key(self) -> &'static str {
        match self {
            WizardStep::Personal => "register.step.personal",
            WizardStep::Professional => "register.step.professional",
            WizardStep::Training => "register.step.training",
        }
    }

    /// Fields that must be non-empty before leaving this step.
    pub fn required(self) -> &'static [RegistrationField] {
        match self {
            WizardStep::Personal => &[
                RegistrationField::FirstName,
                RegistrationField::LastName,
                RegistrationField::Email,
                RegistrationField::Phone,
            ],
            WizardStep::Professional => &[RegistrationField::Company, RegistrationField::Position],
            WizardStep::Training => &[
                RegistrationField::PreferredTraining,
                RegistrationField::StartDate,
            ],
        }
    }

    fn after(self) -> Option<Self> {
        match self {
            WizardStep::Personal => Some(WizardStep::Professional),
            WizardStep::Professional => Some(WizardStep::Training),
            WizardStep::Training => None,
        }
    }

    fn before(self) -> Option<Self> {
        match self {
            WizardStep::Personal => None,
            WizardStep::Professional => Some(WizardStep::Personal),
            WizardStep::Training => Some(WizardStep::Professional),
        }
    }
}

/// Outcome of going back one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Previous {
    Moved(WizardStep),
    /// Already on the first step; the view offers a way out of the wizard.
    LeaveWizard,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationWizard {
    draft: RegistrationDraft,
    step: WizardStep,
    submitting: bool,
}

impl RegistrationWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a course already picked, when the code names a known course.
    pub fn with_training(code: Option<&str>) -> Self {
        let mut wizard = Self::new();
        if let Some(course) = code.and_then(TrainingCourse::from_code) {
            wizard.set(RegistrationField::PreferredTraining, course.code().to_string());
        }
        wizard
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn value(&self, field: RegistrationField) -> &str {
        self.draft.get(field)
    }

    pub fn set(&mut self, field: RegistrationField, value: String) {
        self.draft.set(field, value);
    }

    /// Whether every required field of `step` has something in it.
    ///
    /// Only emptiness is checked here, so whitespace counts as filled; the
    /// strict rules, which trim, run on submit.
    pub fn step_filled(&self, step: WizardStep) -> bool {
        step.required()
            .iter()
            .all(|field| !self.draft.get(*field).is_empty())
    }

    pub fn can_advance(&self) -> bool {
        self.step.after().is_some() && self.step_filled(self.step)
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && self.step == WizardStep::Training && self.step_filled(self.step)
    }

    /// Move forward when the current step is filled in. Returns whether the
    /// step changed.
    pub fn next(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        match self.step.after() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    pub fn previous(&mut self) -> Previous {
        match self.step.before() {
            Some(step) => {
                self.step = step;
                Previous::Moved(step)
            }
            None => Previous::LeaveWizard,
        }
    }

    /// Check the guards and the strict rules, then hand out the draft to send.
    ///
    /// On success the wizard stays marked as submitting until `finish_submit`.
    pub fn begin_submit(&mut self) -> Result<RegistrationDraft, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        if self.step != WizardStep::Training || !self.step_filled(WizardStep::Training) {
            return Err(SubmitBlocked::NotReady);
        }

        self.submitting = true;
        match validate_registration(&self.draft) {
            Ok(_) => Ok(self.draft.clone()),
            Err(err) => {
                self.submitting = false;
                Err(SubmitBlocked::Invalid(err))
            }
        }
    }

    pub fn finish_submit(&mut self, outcome: Result<SubmissionReceipt, SubmitError>) -> Notice {
        self.submitting = false;
        match outcome {
            Ok(_) => {
                self.draft = RegistrationDraft::default();
                self.step = WizardStep::Personal;
                Notice::success("register.toast.success", "register.toast.description")
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

    fn receipt() -> SubmissionReceipt {
        SubmissionReceipt {
            reference: Uuid::nil(),
            received_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    fn fill_personal(wizard: &mut RegistrationWizard) {
        wizard.set(RegistrationField::FirstName, "Ama".into());
        wizard.set(RegistrationField::LastName, "Koffi".into());
        wizard.set(RegistrationField::Email, "a@b.com".into());
        wizard.set(RegistrationField::Phone, "0700000000".into());
    }

    fn at_last_step() -> RegistrationWizard {
        let mut wizard = RegistrationWizard::new();
        fill_personal(&mut wizard);
        assert!(wizard.next());
        wizard.set(RegistrationField::Company, "SIR".into());
        wizard.set(RegistrationField::Position, "Technicien".into());
        assert!(wizard.next());
        wizard.set(RegistrationField::PreferredTraining, "vibration".into());
        wizard.set(RegistrationField::StartDate, "2026-11-02".into());
        wizard
    }

    /// Drive one submission the way the register page does, counting calls.
    fn submit(
        wizard: &mut RegistrationWizard,
        calls: &mut usize,
        remote: Result<SubmissionReceipt, SubmitError>,
    ) -> Result<Notice, SubmitBlocked> {
        let _draft = wizard.begin_submit()?;
        *calls += 1;
        Ok(wizard.finish_submit(remote))
    }

    #[test]
    fn starts_on_personal_step() {
        let wizard = RegistrationWizard::new();
        assert_eq!(wizard.step(), WizardStep::Personal);
        assert_eq!(wizard.step().number(), 1);
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn next_is_gated_on_required_fields() {
        let mut wizard = RegistrationWizard::new();
        fill_personal(&mut wizard);
        wizard.set(RegistrationField::LastName, String::new());
        assert!(!wizard.next());
        assert_eq!(wizard.step(), WizardStep::Personal);

        wizard.set(RegistrationField::LastName, "Koffi".into());
        assert!(wizard.next());
        assert_eq!(wizard.step(), WizardStep::Professional);
    }

    #[test]
    fn whitespace_passes_the_step_gate_but_not_the_schema() {
        let mut wizard = RegistrationWizard::new();
        fill_personal(&mut wizard);
        wizard.set(RegistrationField::LastName, "   ".into());
        assert!(wizard.next());
        wizard.set(RegistrationField::Company, "SIR".into());
        wizard.set(RegistrationField::Position, "Technicien".into());
        assert!(wizard.next());
        wizard.set(RegistrationField::PreferredTraining, "vibration".into());
        wizard.set(RegistrationField::StartDate, "2026-11-02".into());

        assert!(wizard.can_submit());
        assert_eq!(
            wizard.begin_submit(),
            Err(SubmitBlocked::Invalid(ValidationError::LastNameLength))
        );
        assert!(!wizard.is_submitting());
        assert_eq!(wizard.step(), WizardStep::Training);
    }

    #[test]
    fn experience_is_optional_for_step_two() {
        let mut wizard = RegistrationWizard::new();
        fill_personal(&mut wizard);
        wizard.next();
        wizard.set(RegistrationField::Company, "SIR".into());
        assert!(!wizard.next());
        wizard.set(RegistrationField::Position, "Technicien".into());
        assert!(wizard.next());
        assert_eq!(wizard.step(), WizardStep::Training);
    }

    #[test]
    fn next_on_last_step_is_a_no_op() {
        let mut wizard = at_last_step();
        assert!(!wizard.can_advance());
        assert!(!wizard.next());
        assert_eq!(wizard.step(), WizardStep::Training);
    }

    #[test]
    fn previous_walks_back_then_leaves() {
        let mut wizard = at_last_step();
        assert_eq!(wizard.previous(), Previous::Moved(WizardStep::Professional));
        assert_eq!(wizard.previous(), Previous::Moved(WizardStep::Personal));
        assert_eq!(wizard.previous(), Previous::LeaveWizard);
        assert_eq!(wizard.step(), WizardStep::Personal);
        assert_eq!(wizard.value(RegistrationField::Company), "SIR");
    }

    #[test]
    fn submit_refused_before_last_step() {
        let mut wizard = RegistrationWizard::new();
        fill_personal(&mut wizard);
        assert_eq!(wizard.begin_submit(), Err(SubmitBlocked::NotReady));
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn submit_refused_when_last_step_is_empty() {
        let mut wizard = at_last_step();
        wizard.set(RegistrationField::StartDate, String::new());
        assert!(!wizard.can_submit());
        assert_eq!(wizard.begin_submit(), Err(SubmitBlocked::NotReady));
    }

    #[test]
    fn invalid_email_never_reaches_the_remote_call() {
        let mut wizard = at_last_step();
        wizard.set(RegistrationField::Email, "not-an-email".into());
        let before = wizard.draft().clone();

        let mut calls = 0;
        let outcome = submit(&mut wizard, &mut calls, Ok(receipt()));

        assert_eq!(outcome, Err(SubmitBlocked::Invalid(ValidationError::EmailInvalid)));
        assert_eq!(calls, 0);
        assert!(!wizard.is_submitting());
        assert_eq!(wizard.step(), WizardStep::Training);
        assert_eq!(wizard.draft(), &before);
    }

    #[test]
    fn first_error_in_field_order_is_reported() {
        let mut wizard = at_last_step();
        wizard.set(RegistrationField::FirstName, "A".into());
        wizard.set(RegistrationField::Email, "nope".into());
        assert_eq!(
            wizard.begin_submit(),
            Err(SubmitBlocked::Invalid(ValidationError::FirstNameLength))
        );
    }

    #[test]
    fn success_makes_one_call_and_resets() {
        let mut wizard = at_last_step();
        let mut calls = 0;
        let notice = submit(&mut wizard, &mut calls, Ok(receipt())).unwrap();

        assert_eq!(calls, 1);
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.title, "register.toast.success");
        assert!(!wizard.is_submitting());
        assert_eq!(wizard.step(), WizardStep::Personal);
        assert_eq!(wizard.draft(), &RegistrationDraft::default());
    }

    #[test]
    fn remote_failure_keeps_draft_and_step() {
        let mut wizard = at_last_step();
        let before = wizard.draft().clone();
        let mut calls = 0;
        let notice = submit(
            &mut wizard,
            &mut calls,
            Err(SubmitError::Remote("backend did not answer".into())),
        )
        .unwrap();

        assert_eq!(calls, 1);
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.body, Some("form.failure.body"));
        assert!(!wizard.is_submitting());
        assert_eq!(wizard.step(), WizardStep::Training);
        assert_eq!(wizard.draft(), &before);
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut wizard = at_last_step();
        assert!(wizard.begin_submit().is_ok());
        assert!(wizard.is_submitting());
        assert!(!wizard.can_submit());

        assert_eq!(wizard.begin_submit(), Err(SubmitBlocked::InFlight));

        wizard.finish_submit(Ok(receipt()));
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn prefill_accepts_known_course_only() {
        let wizard = RegistrationWizard::with_training(Some("hydraulics"));
        assert_eq!(wizard.value(RegistrationField::PreferredTraining), "hydraulics");

        let wizard = RegistrationWizard::with_training(Some("cooking"));
        assert_eq!(wizard.value(RegistrationField::PreferredTraining), "");
    }
}
