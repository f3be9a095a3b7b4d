//! Education history

use super::{lenient, require};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Education record as listed by `GET /educations`.
///
/// Type, years and months come back as display values (`param_data`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: u64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title_education: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub education_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub education_grade: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub education_field_study: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub year_education_start: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub month_education_start: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub year_education_end: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub month_education_end: Option<String>,
}

impl Education {
    /// "Month Year - Month Year"
    pub fn period(&self) -> String {
        let part = |month: &Option<String>, year: &Option<String>| {
            format!(
                "{} {}",
                month.as_deref().unwrap_or("?"),
                year.as_deref().unwrap_or("?")
            )
        };
        format!(
            "{} - {}",
            part(&self.month_education_start, &self.year_education_start),
            part(&self.month_education_end, &self.year_education_end)
        )
    }
}

/// Body of `POST /educations` and `PUT /educations/{id}`.
///
/// Type, years and months are option ids from `/options/*`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationInput {
    pub title_education: String,
    pub education_type: u64,
    pub education_grade: String,
    pub education_field_study: String,
    pub year_education_start: u64,
    pub month_education_start: u64,
    pub year_education_end: u64,
    pub month_education_end: u64,
}

impl EducationInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        require("institution", &self.title_education)?;
        require("grade", &self.education_grade)?;
        require("field of study", &self.education_field_study)?;
        let start = (self.year_education_start, self.month_education_start);
        let end = (self.year_education_end, self.month_education_end);
        if end < start {
            return Err(DomainError::EndBeforeStart);
        }
        Ok(())
    }
}
