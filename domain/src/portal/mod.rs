//! Job-portal entities and request inputs.
//!
//! Entities mirror the JSON the portal API returns; inputs carry the
//! validation rules the client enforces before any request is sent.

pub mod attachment;
pub mod auth;
pub mod education;
pub mod experience;
mod lenient;
pub mod options;
pub mod profile;
pub mod vacancy;

pub use attachment::{Attachment, AttachmentUpload, DEFAULT_MAX_ATTACHMENT_BYTES};
pub use auth::{ChangePasswordInput, LoginInput, MIN_PASSWORD_LEN, RegisterInput, VerifyInput};
pub use education::{Education, EducationInput};
pub use experience::{Experience, ExperienceInput};
pub use options::{OptionItem, OptionKind};
pub use profile::{ProfileUpdate, UserProfile};
pub use vacancy::{JobApplication, JobVacancy, JobVacancyPage};

use crate::core::error::DomainError;
use crate::core::string::is_blank;
use chrono::{DateTime, NaiveDate};

/// Parse a date the portal sends either as RFC 3339 or as `YYYY-MM-DD...`.
pub fn parse_portal_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// Reject a blank required field.
pub(crate) fn require(field: &'static str, value: &str) -> Result<(), DomainError> {
    if is_blank(value) {
        return Err(DomainError::missing(field));
    }
    Ok(())
}
