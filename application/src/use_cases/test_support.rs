//! Hand-written port doubles shared by the use case tests.

use crate::ports::alert::{Alert, AlertNotifier};
use crate::ports::job_portal::{JobPortalGateway, PortalError};
use crate::ports::session_store::{SessionStore, StorageError};
use async_trait::async_trait;
use jobseeker_domain::{
    Attachment, AttachmentUpload, ChangePasswordInput, Education, EducationInput, Experience,
    ExperienceInput, JobApplication, JobVacancy, JobVacancyPage, LoginInput, OptionItem,
    OptionKind, ProfileUpdate, RegisterInput, SessionToken, UserProfile, VerifyInput,
};
use std::sync::Mutex;

// ==================== Session store ====================

#[derive(Default)]
pub(crate) struct CellStore {
    token: Mutex<Option<SessionToken>>,
    pub fail_get: bool,
}

impl CellStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(SessionToken::new(token).ok()),
            fail_get: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_get: true,
            ..Self::with_token("abc123")
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap()
            .as_ref()
            .map(|t| t.as_str().to_string())
    }
}

#[async_trait]
impl SessionStore for CellStore {
    async fn get_token(&self) -> Result<Option<SessionToken>, StorageError> {
        if self.fail_get {
            return Err(StorageError::Corrupt("unreadable".into()));
        }
        Ok(self.token.lock().unwrap().clone())
    }

    async fn set_token(&self, token: &SessionToken) -> Result<(), StorageError> {
        *self.token.lock().unwrap() = Some(token.clone());
        Ok(())
    }

    async fn clear_token(&self) -> Result<(), StorageError> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}

// ==================== Alerts ====================

#[derive(Default)]
pub(crate) struct RecordingAlerts {
    pub alerts: Mutex<Vec<Alert>>,
}

impl AlertNotifier for RecordingAlerts {
    fn alert(&self, alert: Alert) {
        self.alerts.lock().unwrap().push(alert);
    }
}

// ==================== Gateway ====================

/// Gateway returning canned data and recording each call.
///
/// `fail_next` makes the next call return the given error instead.
#[derive(Default)]
pub(crate) struct MockGateway {
    pub calls: Mutex<Vec<String>>,
    pub tokens_seen: Mutex<Vec<String>>,
    pub fail_next: Mutex<Option<PortalError>>,
    pub verify_token: Option<String>,
    pub total_pages: u32,
    pub uploads: Mutex<Vec<(u64, String, usize)>>,
    pub experience_bodies: Mutex<Vec<ExperienceInput>>,
}

impl MockGateway {
    pub fn failing_with(error: PortalError) -> Self {
        Self {
            fail_next: Mutex::new(Some(error)),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) -> Result<(), PortalError> {
        self.calls.lock().unwrap().push(call.into());
        match self.fail_next.lock().unwrap().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn authorized(&self, token: &SessionToken, call: impl Into<String>) -> Result<(), PortalError> {
        self.tokens_seen
            .lock()
            .unwrap()
            .push(token.as_str().to_string());
        self.record(call)
    }
}

pub(crate) fn vacancy(id: u64) -> JobVacancy {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "job_title": format!("Vacancy {}", id),
        "location": "Jakarta",
    }))
    .unwrap()
}

pub(crate) fn option(id: u64, value: &str) -> OptionItem {
    OptionItem {
        id,
        param_data: value.to_string(),
    }
}

#[async_trait]
impl JobPortalGateway for MockGateway {
    async fn job_vacancies(&self, page: u32, limit: u32) -> Result<JobVacancyPage, PortalError> {
        self.record(format!("job_vacancies page={} limit={}", page, limit))?;
        Ok(JobVacancyPage {
            job_vacancies: vec![vacancy(1), vacancy(2)],
            total_pages: self.total_pages.max(1),
            page: 1,
        })
    }

    async fn job_vacancy(&self, id: u64) -> Result<JobVacancy, PortalError> {
        self.record(format!("job_vacancy {}", id))?;
        Ok(vacancy(id))
    }

    async fn apply(&self, token: &SessionToken, vacancy_id: u64) -> Result<(), PortalError> {
        self.authorized(token, format!("apply {}", vacancy_id))
    }

    async fn job_applications(
        &self,
        token: &SessionToken,
    ) -> Result<Vec<JobApplication>, PortalError> {
        self.authorized(token, "job_applications")?;
        Ok(Vec::new())
    }

    async fn register(&self, _input: &RegisterInput) -> Result<(), PortalError> {
        self.record("register")
    }

    async fn verify_registration(
        &self,
        _input: &VerifyInput,
    ) -> Result<Option<SessionToken>, PortalError> {
        self.record("verify_registration")?;
        Ok(self
            .verify_token
            .as_deref()
            .and_then(|raw| SessionToken::new(raw).ok()))
    }

    async fn login(&self, _input: &LoginInput) -> Result<SessionToken, PortalError> {
        self.record("login")?;
        SessionToken::new("tok-login").map_err(|e| PortalError::Decode(e.to_string()))
    }

    async fn change_password(
        &self,
        token: &SessionToken,
        _input: &ChangePasswordInput,
    ) -> Result<(), PortalError> {
        self.authorized(token, "change_password")
    }

    async fn profile(&self, token: &SessionToken) -> Result<UserProfile, PortalError> {
        self.authorized(token, "profile")?;
        serde_json::from_value(serde_json::json!({"username": "budi"}))
            .map_err(|e| PortalError::Decode(e.to_string()))
    }

    async fn update_profile(
        &self,
        token: &SessionToken,
        _update: &ProfileUpdate,
    ) -> Result<(), PortalError> {
        self.authorized(token, "update_profile")
    }

    async fn educations(&self, token: &SessionToken) -> Result<Vec<Education>, PortalError> {
        self.authorized(token, "educations")?;
        Ok(Vec::new())
    }

    async fn create_education(
        &self,
        token: &SessionToken,
        _input: &EducationInput,
    ) -> Result<(), PortalError> {
        self.authorized(token, "create_education")
    }

    async fn update_education(
        &self,
        token: &SessionToken,
        id: u64,
        _input: &EducationInput,
    ) -> Result<(), PortalError> {
        self.authorized(token, format!("update_education {}", id))
    }

    async fn experiences(&self, token: &SessionToken) -> Result<Vec<Experience>, PortalError> {
        self.authorized(token, "experiences")?;
        Ok(Vec::new())
    }

    async fn create_experience(
        &self,
        token: &SessionToken,
        input: &ExperienceInput,
    ) -> Result<(), PortalError> {
        self.authorized(token, "create_experience")?;
        self.experience_bodies.lock().unwrap().push(input.clone());
        Ok(())
    }

    async fn update_experience(
        &self,
        token: &SessionToken,
        id: u64,
        input: &ExperienceInput,
    ) -> Result<(), PortalError> {
        self.authorized(token, format!("update_experience {}", id))?;
        self.experience_bodies.lock().unwrap().push(input.clone());
        Ok(())
    }

    async fn delete_experience(&self, token: &SessionToken, id: u64) -> Result<(), PortalError> {
        self.authorized(token, format!("delete_experience {}", id))
    }

    async fn attachments(&self, token: &SessionToken) -> Result<Vec<Attachment>, PortalError> {
        self.authorized(token, "attachments")?;
        Ok(Vec::new())
    }

    async fn upload_attachment(
        &self,
        token: &SessionToken,
        upload: &AttachmentUpload,
    ) -> Result<(), PortalError> {
        self.authorized(token, "upload_attachment")?;
        self.uploads.lock().unwrap().push((
            upload.document_type_id,
            upload.mime_type.to_string(),
            upload.bytes.len(),
        ));
        Ok(())
    }

    async fn delete_attachment(&self, token: &SessionToken, id: u64) -> Result<(), PortalError> {
        self.authorized(token, format!("delete_attachment {}", id))
    }

    async fn options(&self, kind: OptionKind) -> Result<Vec<OptionItem>, PortalError> {
        self.record(format!("options {}", kind))?;
        Ok(match kind {
            OptionKind::EducationLevels => vec![option(1, "SMA"), option(3, "S1")],
            OptionKind::Years => vec![option(10, "2015"), option(11, "2016")],
            OptionKind::Months => vec![option(1, "Januari"), option(2, "Februari")],
            OptionKind::EmployeeTypes => vec![option(1, "Full Time"), option(2, "Contract")],
            OptionKind::DocumentTypes => vec![option(4, "CV")],
        })
    }
}
