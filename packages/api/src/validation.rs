//! Strict acceptance checks applied right before a form is sent to the backend.
//!
//! Both validators stop at the first failing rule, in field order, and return the
//! trimmed row ready for insertion. They run in the browser before the server
//! function is called and again inside the server function.

use crate::types::{ContactDraft, ContactMessage, RegistrationDraft, SubmissionStatus, TrainingRegistration};
use regex::Regex;
use std::ops::RangeInclusive;
use std::sync::OnceLock;

const NAME_LEN: RangeInclusive<usize> = 2..=100;
const EMAIL_MAX: usize = 255;
const COMPANY_LEN: RangeInclusive<usize> = 2..=200;
const POSITION_LEN: RangeInclusive<usize> = 2..=100;
const MOTIVATION_MAX: usize = 2000;
const MESSAGE_LEN: RangeInclusive<usize> = 10..=1000;
const PHONE_LEN: RangeInclusive<usize> = 8..=20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("first name must be between 2 and 100 characters")]
    FirstNameLength,
    #[error("last name must be between 2 and 100 characters")]
    LastNameLength,
    #[error("email address is not valid")]
    EmailInvalid,
    #[error("email address must be at most 255 characters")]
    EmailTooLong,
    #[error("phone number is not valid")]
    PhoneInvalid,
    #[error("company must be between 2 and 200 characters")]
    CompanyLength,
    #[error("position must be between 2 and 100 characters")]
    PositionLength,
    #[error("a training must be selected")]
    TrainingMissing,
    #[error("a start date is required")]
    StartDateMissing,
    #[error("motivation must be at most 2000 characters")]
    MotivationTooLong,
    #[error("message must be between 10 and 1000 characters")]
    MessageLength,
}

impl ValidationError {
    /// Translation key of the message shown to the visitor.
    pub fn key(&self) -> &'static str {
        match self {
            ValidationError::FirstNameLength => "validation.first_name",
            ValidationError::LastNameLength => "validation.last_name",
            ValidationError::EmailInvalid => "validation.email",
            ValidationError::EmailTooLong => "validation.email_length",
            ValidationError::PhoneInvalid => "validation.phone",
            ValidationError::CompanyLength => "validation.company",
            ValidationError::PositionLength => "validation.position",
            ValidationError::TrainingMissing => "validation.training",
            ValidationError::StartDateMissing => "validation.start_date",
            ValidationError::MotivationTooLong => "validation.motivation",
            ValidationError::MessageLength => "validation.message",
        }
    }
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@.]+$").expect("email pattern compiles")
    })
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?[0-9 -]+$").expect("phone pattern compiles"))
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn within(value: &str, range: &RangeInclusive<usize>, err: ValidationError) -> Result<String, ValidationError> {
    if range.contains(&char_len(value)) {
        Ok(value.to_string())
    } else {
        Err(err)
    }
}

fn required(value: &str, err: ValidationError) -> Result<String, ValidationError> {
    if value.is_empty() {
        Err(err)
    } else {
        Ok(value.to_string())
    }
}

fn optional(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

pub fn validate_email(value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if !email_re().is_match(value) {
        return Err(ValidationError::EmailInvalid);
    }
    if char_len(value) > EMAIL_MAX {
        return Err(ValidationError::EmailTooLong);
    }
    Ok(value.to_string())
}

pub fn validate_phone(value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if phone_re().is_match(value) && PHONE_LEN.contains(&char_len(value)) {
        Ok(value.to_string())
    } else {
        Err(ValidationError::PhoneInvalid)
    }
}

pub fn validate_contact(draft: &ContactDraft) -> Result<ContactMessage, ValidationError> {
    Ok(ContactMessage {
        first_name: within(draft.first_name.trim(), &NAME_LEN, ValidationError::FirstNameLength)?,
        last_name: within(draft.last_name.trim(), &NAME_LEN, ValidationError::LastNameLength)?,
        email: validate_email(&draft.email)?,
        message: within(draft.message.trim(), &MESSAGE_LEN, ValidationError::MessageLength)?,
        status: SubmissionStatus::New,
    })
}

pub fn validate_registration(
    draft: &RegistrationDraft,
) -> Result<TrainingRegistration, ValidationError> {
    let first_name = within(draft.first_name.trim(), &NAME_LEN, ValidationError::FirstNameLength)?;
    let last_name = within(draft.last_name.trim(), &NAME_LEN, ValidationError::LastNameLength)?;
    let email = validate_email(&draft.email)?;
    let phone = validate_phone(&draft.phone)?;
    let company = within(draft.company.trim(), &COMPANY_LEN, ValidationError::CompanyLength)?;
    let position = within(draft.position.trim(), &POSITION_LEN, ValidationError::PositionLength)?;
    let preferred_training = required(draft.preferred_training.trim(), ValidationError::TrainingMissing)?;
    let start_date = required(draft.start_date.trim(), ValidationError::StartDateMissing)?;
    let motivation = draft.motivation.trim();
    if char_len(motivation) > MOTIVATION_MAX {
        return Err(ValidationError::MotivationTooLong);
    }

    Ok(TrainingRegistration::new(
        first_name,
        last_name,
        email,
        phone,
        company,
        position,
        optional(draft.experience_level.trim()),
        preferred_training,
        start_date,
        optional(motivation),
    ))
}
