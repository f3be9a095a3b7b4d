//! Work experience

use super::{lenient, require};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Experience record as listed by `GET /experiences`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: u64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub employee_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub still_active: bool,
    #[serde(default, deserialize_with = "lenient::text")]
    pub start_year_experience: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub start_month_experience: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub end_year_experience: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub end_month_experience: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub desc_experience: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub desc_skill: Option<String>,
}

impl Experience {
    pub fn period(&self) -> String {
        let start = format!(
            "{} {}",
            self.start_month_experience.as_deref().unwrap_or("?"),
            self.start_year_experience.as_deref().unwrap_or("?")
        );
        if self.still_active {
            return format!("{} - present", start);
        }
        format!(
            "{} - {} {}",
            start,
            self.end_month_experience.as_deref().unwrap_or("?"),
            self.end_year_experience.as_deref().unwrap_or("?")
        )
    }
}

/// Body of `POST /experiences` and `PUT /experiences/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceInput {
    pub title: String,
    pub employee_type: u64,
    pub company_name: String,
    pub location: String,
    #[serde(serialize_with = "lenient::as_flag")]
    pub still_active: bool,
    pub start_year_experience: u64,
    pub start_month_experience: u64,
    pub end_year_experience: Option<u64>,
    pub end_month_experience: Option<u64>,
    pub desc_experience: String,
    pub desc_skill: String,
}

impl ExperienceInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        require("title", &self.title)?;
        require("company name", &self.company_name)?;
        require("location", &self.location)?;
        require("experience description", &self.desc_experience)?;
        require("skill description", &self.desc_skill)?;
        if !self.still_active {
            if self.end_year_experience.is_none() {
                return Err(DomainError::missing("end year"));
            }
            if self.end_month_experience.is_none() {
                return Err(DomainError::missing("end month"));
            }
        }
        Ok(())
    }

    /// Drop the end date of an ongoing position so it is sent as `null`.
    pub fn normalized(mut self) -> Self {
        if self.still_active {
            self.end_year_experience = None;
            self.end_month_experience = None;
        }
        self
    }
}
