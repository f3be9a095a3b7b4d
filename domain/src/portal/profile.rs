//! Personal details of the signed-in user

use super::{lenient, parse_portal_date, require};
use crate::core::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Minimum number of characters in a phone number
pub const MIN_PHONE_LEN: usize = 8;

/// Profile as returned by `GET /profile`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "lenient::text")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub dob: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub phone: Option<String>,
}

impl UserProfile {
    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        self.dob.as_deref().and_then(parse_portal_date)
    }
}

/// Body of `PUT /profile`; `dob` serializes as `YYYY-MM-DD`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub username: String,
    pub dob: NaiveDate,
    pub address: String,
    pub phone: String,
}

impl ProfileUpdate {
    /// Validate against the caller's notion of today.
    pub fn validate(&self, today: NaiveDate) -> Result<(), DomainError> {
        require("username", &self.username)?;
        require("address", &self.address)?;
        require("phone", &self.phone)?;
        if self.dob >= today {
            return Err(DomainError::InvalidInput(
                "date of birth must be before today".to_string(),
            ));
        }
        if self.phone.trim().chars().count() < MIN_PHONE_LEN {
            return Err(DomainError::InvalidInput(format!(
                "phone number must have at least {} characters",
                MIN_PHONE_LEN
            )));
        }
        Ok(())
    }
}
