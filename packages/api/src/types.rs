use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Status written on every freshly submitted row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    New,
}

impl SubmissionStatus {
    pub fn as_db(&self) -> &'static str {
        match self {
            SubmissionStatus::New => "new",
        }
    }
}

/// Courses offered in the training catalog and selectable during registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingCourse {
    Vibration,
    Hydraulics,
    Ammonia,
    Filtration,
    Pressure,
    Management,
}

impl TrainingCourse {
    pub const ALL: [TrainingCourse; 6] = [
        TrainingCourse::Vibration,
        TrainingCourse::Hydraulics,
        TrainingCourse::Ammonia,
        TrainingCourse::Filtration,
        TrainingCourse::Pressure,
        TrainingCourse::Management,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            TrainingCourse::Vibration => "vibration",
            TrainingCourse::Hydraulics => "hydraulics",
            TrainingCourse::Ammonia => "ammonia",
            TrainingCourse::Filtration => "filtration",
            TrainingCourse::Pressure => "pressure",
            TrainingCourse::Management => "management",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Translation key of the course title.
    pub fn label_key(&self) -> &'static str {
        match self {
            TrainingCourse::Vibration => "training.vibration",
            TrainingCourse::Hydraulics => "training.hydraulics",
            TrainingCourse::Ammonia => "training.ammonia",
            TrainingCourse::Filtration => "training.filtration",
            TrainingCourse::Pressure => "training.pressure",
            TrainingCourse::Management => "training.management",
        }
    }

    /// Translation key of the one-line course description.
    pub fn summary_key(&self) -> &'static str {
        match self {
            TrainingCourse::Vibration => "training.vibration.summary",
            TrainingCourse::Hydraulics => "training.hydraulics.summary",
            TrainingCourse::Ammonia => "training.ammonia.summary",
            TrainingCourse::Filtration => "training.filtration.summary",
            TrainingCourse::Pressure => "training.pressure.summary",
            TrainingCourse::Management => "training.management.summary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "0-2")]
    UpToTwo,
    #[serde(rename = "3-5")]
    ThreeToFive,
    #[serde(rename = "6-10")]
    SixToTen,
    #[serde(rename = "10+")]
    MoreThanTen,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::UpToTwo,
        ExperienceLevel::ThreeToFive,
        ExperienceLevel::SixToTen,
        ExperienceLevel::MoreThanTen,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ExperienceLevel::UpToTwo => "0-2",
            ExperienceLevel::ThreeToFive => "3-5",
            ExperienceLevel::SixToTen => "6-10",
            ExperienceLevel::MoreThanTen => "10+",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            ExperienceLevel::UpToTwo => "register.experience.0_2",
            ExperienceLevel::ThreeToFive => "register.experience.3_5",
            ExperienceLevel::SixToTen => "register.experience.6_10",
            ExperienceLevel::MoreThanTen => "register.experience.10_plus",
        }
    }
}

/// In-progress contact form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Message,
}

impl ContactDraft {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::FirstName => self.first_name = value,
            ContactField::LastName => self.last_name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }
}

/// In-progress registration input accumulated across the three wizard steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDraft {
    // personal
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    // professional
    pub company: String,
    pub position: String,
    pub experience_level: String,
    // training
    pub preferred_training: String,
    pub start_date: String,
    pub motivation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationField {
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
    Position,
    ExperienceLevel,
    PreferredTraining,
    StartDate,
    Motivation,
}

impl RegistrationField {
    /// Form control name, matching the row column it ends up in.
    pub fn name(self) -> &'static str {
        match self {
            RegistrationField::FirstName => "first_name",
            RegistrationField::LastName => "last_name",
            RegistrationField::Email => "email",
            RegistrationField::Phone => "phone",
            RegistrationField::Company => "company",
            RegistrationField::Position => "position",
            RegistrationField::ExperienceLevel => "experience_level",
            RegistrationField::PreferredTraining => "preferred_training",
            RegistrationField::StartDate => "start_date",
            RegistrationField::Motivation => "motivation",
        }
    }
}

impl RegistrationDraft {
    pub fn set(&mut self, field: RegistrationField, value: String) {
        let slot = match field {
            RegistrationField::FirstName => &mut self.first_name,
            RegistrationField::LastName => &mut self.last_name,
            RegistrationField::Email => &mut self.email,
            RegistrationField::Phone => &mut self.phone,
            RegistrationField::Company => &mut self.company,
            RegistrationField::Position => &mut self.position,
            RegistrationField::ExperienceLevel => &mut self.experience_level,
            RegistrationField::PreferredTraining => &mut self.preferred_training,
            RegistrationField::StartDate => &mut self.start_date,
            RegistrationField::Motivation => &mut self.motivation,
        };
        *slot = value;
    }

    pub fn get(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::FirstName => &self.first_name,
            RegistrationField::LastName => &self.last_name,
            RegistrationField::Email => &self.email,
            RegistrationField::Phone => &self.phone,
            RegistrationField::Company => &self.company,
            RegistrationField::Position => &self.position,
            RegistrationField::ExperienceLevel => &self.experience_level,
            RegistrationField::PreferredTraining => &self.preferred_training,
            RegistrationField::StartDate => &self.start_date,
            RegistrationField::Motivation => &self.motivation,
        }
    }
}

/// Row inserted into `contact_messages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
    pub status: SubmissionStatus,
}

/// Row inserted into `training_registrations`.
///
/// `profession` and `referral_source` mirror `position` and `experience_level`
/// for readers of the older table schema; both spellings are always written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub position: String,
    pub experience_level: Option<String>,
    pub preferred_training: String,
    pub start_date: String,
    pub motivation: Option<String>,
    pub status: SubmissionStatus,
    pub profession: String,
    pub referral_source: Option<String>,
}

impl TrainingRegistration {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        phone: String,
        company: String,
        position: String,
        experience_level: Option<String>,
        preferred_training: String,
        start_date: String,
        motivation: Option<String>,
    ) -> Self {
        Self {
            profession: position.clone(),
            referral_source: experience_level.clone(),
            first_name,
            last_name,
            email,
            phone,
            company,
            position,
            experience_level,
            preferred_training,
            start_date,
            motivation,
            status: SubmissionStatus::New,
        }
    }
}

/// Returned by the submission endpoints once the backend accepted the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub reference: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub received_at: OffsetDateTime,
}
