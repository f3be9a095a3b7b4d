//! Job portal gateway port
//!
//! Defines the interface to the remote job-portal REST API. Authorized
//! operations take the session token read from the session store at call
//! time; the gateway never caches it.

use async_trait::async_trait;
use jobseeker_domain::{
    Attachment, AttachmentUpload, ChangePasswordInput, Education, EducationInput, Experience,
    ExperienceInput, JobApplication, JobVacancy, JobVacancyPage, LoginInput, OptionItem,
    OptionKind, ProfileUpdate, RegisterInput, SessionToken, UserProfile, VerifyInput,
};
use thiserror::Error;

/// Errors that can occur when talking to the portal.
///
/// Status codes are classified here; use cases decide what a given
/// classification means for their operation.
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Unauthorized: {}", .0.as_deref().unwrap_or("no details"))]
    Unauthorized(Option<String>),

    #[error("Not found")]
    NotFound,

    #[error("Conflict: {}", .0.as_deref().unwrap_or("no details"))]
    Conflict(Option<String>),

    #[error("Server error ({status}): {}", .message.as_deref().unwrap_or("no details"))]
    Server { status: u16, message: Option<String> },

    #[error("Connection error: {0}")]
    Transport(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl PortalError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, PortalError::Unauthorized(_))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, PortalError::Conflict(_))
    }
}

/// Gateway to the job-portal REST API
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait JobPortalGateway: Send + Sync {
    // ==================== Vacancies ====================

    /// One page of vacancies (`page` is 1-based)
    async fn job_vacancies(&self, page: u32, limit: u32) -> Result<JobVacancyPage, PortalError>;

    async fn job_vacancy(&self, id: u64) -> Result<JobVacancy, PortalError>;

    async fn apply(&self, token: &SessionToken, vacancy_id: u64) -> Result<(), PortalError>;

    async fn job_applications(&self, token: &SessionToken)
    -> Result<Vec<JobApplication>, PortalError>;

    // ==================== Account ====================

    async fn register(&self, input: &RegisterInput) -> Result<(), PortalError>;

    /// Returns a token when the portal signs the user in on verification
    async fn verify_registration(
        &self,
        input: &VerifyInput,
    ) -> Result<Option<SessionToken>, PortalError>;

    async fn login(&self, input: &LoginInput) -> Result<SessionToken, PortalError>;

    async fn change_password(
        &self,
        token: &SessionToken,
        input: &ChangePasswordInput,
    ) -> Result<(), PortalError>;

    // ==================== Profile ====================

    async fn profile(&self, token: &SessionToken) -> Result<UserProfile, PortalError>;

    async fn update_profile(
        &self,
        token: &SessionToken,
        update: &ProfileUpdate,
    ) -> Result<(), PortalError>;

    async fn educations(&self, token: &SessionToken) -> Result<Vec<Education>, PortalError>;

    async fn create_education(
        &self,
        token: &SessionToken,
        input: &EducationInput,
    ) -> Result<(), PortalError>;

    async fn update_education(
        &self,
        token: &SessionToken,
        id: u64,
        input: &EducationInput,
    ) -> Result<(), PortalError>;

    async fn experiences(&self, token: &SessionToken) -> Result<Vec<Experience>, PortalError>;

    async fn create_experience(
        &self,
        token: &SessionToken,
        input: &ExperienceInput,
    ) -> Result<(), PortalError>;

    async fn update_experience(
        &self,
        token: &SessionToken,
        id: u64,
        input: &ExperienceInput,
    ) -> Result<(), PortalError>;

    async fn delete_experience(&self, token: &SessionToken, id: u64) -> Result<(), PortalError>;

    async fn attachments(&self, token: &SessionToken) -> Result<Vec<Attachment>, PortalError>;

    async fn upload_attachment(
        &self,
        token: &SessionToken,
        upload: &AttachmentUpload,
    ) -> Result<(), PortalError>;

    async fn delete_attachment(&self, token: &SessionToken, id: u64) -> Result<(), PortalError>;

    // ==================== Options ====================

    async fn options(&self, kind: OptionKind) -> Result<Vec<OptionItem>, PortalError>;
}
