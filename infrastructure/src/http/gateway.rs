//! reqwest implementation of [`JobPortalGateway`].

use super::envelope::{Envelope, classify};
use async_trait::async_trait;
use jobseeker_application::{JobPortalGateway, PortalError};
use jobseeker_domain::{
    Attachment, AttachmentUpload, ChangePasswordInput, Education, EducationInput, Experience,
    ExperienceInput, JobApplication, JobVacancy, JobVacancyPage, LoginInput, OptionItem,
    OptionKind, ProfileUpdate, RegisterInput, SessionToken, UserProfile, VerifyInput,
};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder};
use std::time::Duration;
use tracing::{debug, trace};

const USER_AGENT: &str = concat!("jobseeker/", env!("CARGO_PKG_VERSION"));

/// Gateway talking to the portal REST API over HTTP
pub struct HttpPortalGateway {
    client: Client,
    base_url: String,
}

impl HttpPortalGateway {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PortalError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| PortalError::Transport(e.to_string()))?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    fn authorized(&self, method: Method, path: &str, token: &SessionToken) -> RequestBuilder {
        self.request(method, path)
            .header(reqwest::header::AUTHORIZATION, token.bearer())
    }

    async fn send(&self, request: RequestBuilder) -> Result<Envelope, PortalError> {
        let request = request
            .build()
            .map_err(|e| PortalError::InvalidRequest(e.to_string()))?;
        let label = format!("{} {}", request.method(), request.url().path());
        debug!("-> {}", label);

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| PortalError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| PortalError::Transport(e.to_string()))?;

        debug!("<- {} {}", status, label);
        trace!("Response body: {}", body);
        classify(status, &body)
    }
}

#[async_trait]
impl JobPortalGateway for HttpPortalGateway {
    // ==================== Vacancies ====================

    async fn job_vacancies(&self, page: u32, limit: u32) -> Result<JobVacancyPage, PortalError> {
        let request = self
            .request(Method::GET, "/job-vacancies")
            .query(&[("page", page), ("limit", limit)]);
        self.send(request).await?.data()
    }

    async fn job_vacancy(&self, id: u64) -> Result<JobVacancy, PortalError> {
        let request = self.request(Method::GET, &format!("/job-vacancies/{}", id));
        self.send(request).await?.data()
    }

    async fn apply(&self, token: &SessionToken, vacancy_id: u64) -> Result<(), PortalError> {
        let path = format!("/job-vacancies/{}/apply", vacancy_id);
        self.send(self.authorized(Method::POST, &path, token))
            .await?;
        Ok(())
    }

    async fn job_applications(
        &self,
        token: &SessionToken,
    ) -> Result<Vec<JobApplication>, PortalError> {
        self.send(self.authorized(Method::GET, "/job-applications", token))
            .await?
            .field("job_applications")
    }

    // ==================== Account ====================

    async fn register(&self, input: &RegisterInput) -> Result<(), PortalError> {
        let request = self.request(Method::POST, "/auth/register").json(input);
        self.send(request).await?;
        Ok(())
    }

    async fn verify_registration(
        &self,
        input: &VerifyInput,
    ) -> Result<Option<SessionToken>, PortalError> {
        let request = self
            .request(Method::POST, "/auth/verify-registration")
            .json(input);
        Ok(self.send(request).await?.token())
    }

    async fn login(&self, input: &LoginInput) -> Result<SessionToken, PortalError> {
        let request = self.request(Method::POST, "/auth/login").json(input);
        self.send(request)
            .await?
            .token()
            .ok_or_else(|| PortalError::Decode("login response has no data.token".to_string()))
    }

    async fn change_password(
        &self,
        token: &SessionToken,
        input: &ChangePasswordInput,
    ) -> Result<(), PortalError> {
        let request = self
            .authorized(Method::POST, "/auth/change-password", token)
            .json(input);
        self.send(request).await?;
        Ok(())
    }

    // ==================== Profile ====================

    async fn profile(&self, token: &SessionToken) -> Result<UserProfile, PortalError> {
        self.send(self.authorized(Method::GET, "/profile", token))
            .await?
            .data()
    }

    async fn update_profile(
        &self,
        token: &SessionToken,
        update: &ProfileUpdate,
    ) -> Result<(), PortalError> {
        let request = self.authorized(Method::PUT, "/profile", token).json(update);
        self.send(request).await?;
        Ok(())
    }

    async fn educations(&self, token: &SessionToken) -> Result<Vec<Education>, PortalError> {
        self.send(self.authorized(Method::GET, "/educations", token))
            .await?
            .field("educations")
    }

    async fn create_education(
        &self,
        token: &SessionToken,
        input: &EducationInput,
    ) -> Result<(), PortalError> {
        let request = self
            .authorized(Method::POST, "/educations", token)
            .json(input);
        self.send(request).await?;
        Ok(())
    }

    async fn update_education(
        &self,
        token: &SessionToken,
        id: u64,
        input: &EducationInput,
    ) -> Result<(), PortalError> {
        let path = format!("/educations/{}", id);
        let request = self.authorized(Method::PUT, &path, token).json(input);
        self.send(request).await?;
        Ok(())
    }

    async fn experiences(&self, token: &SessionToken) -> Result<Vec<Experience>, PortalError> {
        self.send(self.authorized(Method::GET, "/experiences", token))
            .await?
            .field("experiences")
    }

    async fn create_experience(
        &self,
        token: &SessionToken,
        input: &ExperienceInput,
    ) -> Result<(), PortalError> {
        let request = self
            .authorized(Method::POST, "/experiences", token)
            .json(input);
        self.send(request).await?;
        Ok(())
    }

    async fn update_experience(
        &self,
        token: &SessionToken,
        id: u64,
        input: &ExperienceInput,
    ) -> Result<(), PortalError> {
        let path = format!("/experiences/{}", id);
        let request = self.authorized(Method::PUT, &path, token).json(input);
        self.send(request).await?;
        Ok(())
    }

    async fn delete_experience(&self, token: &SessionToken, id: u64) -> Result<(), PortalError> {
        let path = format!("/experiences/{}", id);
        self.send(self.authorized(Method::DELETE, &path, token))
            .await?;
        Ok(())
    }

    async fn attachments(&self, token: &SessionToken) -> Result<Vec<Attachment>, PortalError> {
        self.send(self.authorized(Method::GET, "/profile/attachments", token))
            .await?
            .data()
    }

    async fn upload_attachment(
        &self,
        token: &SessionToken,
        upload: &AttachmentUpload,
    ) -> Result<(), PortalError> {
        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(upload.mime_type)
            .map_err(|e| PortalError::InvalidRequest(e.to_string()))?;
        let form = Form::new()
            .text("document_type_id", upload.document_type_id.to_string())
            .part("profile_attachment", part);

        let request = self
            .authorized(Method::POST, "/profile/attachments", token)
            .multipart(form);
        self.send(request).await?;
        Ok(())
    }

    async fn delete_attachment(&self, token: &SessionToken, id: u64) -> Result<(), PortalError> {
        let path = format!("/profile/attachments/{}", id);
        self.send(self.authorized(Method::DELETE, &path, token))
            .await?;
        Ok(())
    }

    // ==================== Options ====================

    async fn options(&self, kind: OptionKind) -> Result<Vec<OptionItem>, PortalError> {
        let path = format!("/options/{}", kind.path());
        self.send(self.request(Method::GET, &path))
            .await?
            .field(kind.data_key())
    }
}
