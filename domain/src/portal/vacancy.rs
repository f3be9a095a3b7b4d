//! Job vacancies and applications

use super::lenient;
use super::parse_portal_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A published job vacancy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobVacancy {
    pub id: u64,
    #[serde(default, deserialize_with = "lenient::required_text")]
    pub job_title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub employee_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub education_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub job_specialization: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub age: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub end_at: Option<String>,
}

impl JobVacancy {
    pub fn published_on(&self) -> Option<NaiveDate> {
        self.created_at.as_deref().and_then(parse_portal_date)
    }

    pub fn closes_on(&self) -> Option<NaiveDate> {
        self.end_at.as_deref().and_then(parse_portal_date)
    }
}

fn one() -> u32 {
    1
}

/// One page of the vacancy listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobVacancyPage {
    #[serde(default)]
    pub job_vacancies: Vec<JobVacancy>,
    #[serde(rename = "totalPages", default = "one")]
    pub total_pages: u32,
    /// Page number that was requested (1-based); not part of the wire format
    #[serde(default = "one", skip_deserializing)]
    pub page: u32,
}

impl JobVacancyPage {
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// An application the signed-in user submitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: u64,
    #[serde(default)]
    pub job_vacancy_id: Option<u64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub job_title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_vacancy_page() {
        let json = r#"{
            "job_vacancies": [
                {"id": 7, "job_title": "Welder", "location": "Bekasi", "age": 30,
                 "end_at": "2024-12-31T00:00:00.000Z"}
            ],
            "totalPages": 4
        }"#;
        let page: JobVacancyPage = serde_json::from_str(json).unwrap();
        let page = page.with_page(2);
        assert_eq!(page.job_vacancies.len(), 1);
        assert_eq!(page.job_vacancies[0].age.as_deref(), Some("30"));
        assert_eq!(
            page.job_vacancies[0].closes_on(),
            NaiveDate::from_ymd_opt(2024, 12, 31)
        );
        assert!(page.has_previous());
        assert!(page.has_next());
    }

    #[test]
    fn test_last_page_has_no_next() {
        let page: JobVacancyPage = serde_json::from_str(r#"{"job_vacancies": []}"#).unwrap();
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }
}
