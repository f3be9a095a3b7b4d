//! Profile use case: personal details, education, experience, attachments
//! and the pick-list options their forms use.

use super::shared::current_token;
use crate::config::PortalParams;
use crate::ports::job_portal::{JobPortalGateway, PortalError};
use crate::ports::session_store::SessionStore;
use chrono::{Local, NaiveDate};
use jobseeker_domain::{
    Attachment, AttachmentUpload, DomainError, Education, EducationInput, Experience,
    ExperienceInput, OptionItem, OptionKind, ProfileUpdate, SessionToken, UserProfile,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("You are not logged in")]
    NotLoggedIn,

    #[error("{0}")]
    Invalid(#[from] DomainError),

    #[error("'{value}' is not a valid {kind} option")]
    UnknownOption { kind: OptionKind, value: String },

    #[error(transparent)]
    Portal(#[from] PortalError),
}

/// Option lists used by the education form
#[derive(Debug, Clone, Default)]
pub struct EducationOptions {
    pub levels: Vec<OptionItem>,
    pub years: Vec<OptionItem>,
    pub months: Vec<OptionItem>,
}

/// Option lists used by the experience form
#[derive(Debug, Clone, Default)]
pub struct ExperienceOptions {
    pub employee_types: Vec<OptionItem>,
    pub years: Vec<OptionItem>,
    pub months: Vec<OptionItem>,
}

pub struct ProfileUseCase {
    gateway: Arc<dyn JobPortalGateway>,
    store: Arc<dyn SessionStore>,
    params: PortalParams,
}

impl ProfileUseCase {
    pub fn new(
        gateway: Arc<dyn JobPortalGateway>,
        store: Arc<dyn SessionStore>,
        params: PortalParams,
    ) -> Self {
        Self {
            gateway,
            store,
            params,
        }
    }

    async fn token(&self) -> Result<SessionToken, ProfileError> {
        current_token(self.store.as_ref())
            .await
            .ok_or(ProfileError::NotLoggedIn)
    }

    // ==================== Personal details ====================

    pub async fn profile(&self) -> Result<UserProfile, ProfileError> {
        let token = self.token().await?;
        Ok(self.gateway.profile(&token).await?)
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ProfileError> {
        self.update_profile_as_of(update, Local::now().date_naive())
            .await
    }

    async fn update_profile_as_of(
        &self,
        update: &ProfileUpdate,
        today: NaiveDate,
    ) -> Result<(), ProfileError> {
        update.validate(today)?;
        let token = self.token().await?;
        self.gateway.update_profile(&token, update).await?;
        info!("Profile updated");
        Ok(())
    }

    // ==================== Education ====================

    pub async fn educations(&self) -> Result<Vec<Education>, ProfileError> {
        let token = self.token().await?;
        Ok(self.gateway.educations(&token).await?)
    }

    pub async fn create_education(&self, input: &EducationInput) -> Result<(), ProfileError> {
        input.validate()?;
        let token = self.token().await?;
        self.gateway.create_education(&token, input).await?;
        info!("Education added");
        Ok(())
    }

    pub async fn update_education(
        &self,
        id: u64,
        input: &EducationInput,
    ) -> Result<(), ProfileError> {
        input.validate()?;
        let token = self.token().await?;
        self.gateway.update_education(&token, id, input).await?;
        info!("Education {} updated", id);
        Ok(())
    }

    // ==================== Experience ====================

    pub async fn experiences(&self) -> Result<Vec<Experience>, ProfileError> {
        let token = self.token().await?;
        Ok(self.gateway.experiences(&token).await?)
    }

    pub async fn create_experience(&self, input: ExperienceInput) -> Result<(), ProfileError> {
        input.validate()?;
        let input = input.normalized();
        let token = self.token().await?;
        self.gateway.create_experience(&token, &input).await?;
        info!("Experience added");
        Ok(())
    }

    pub async fn update_experience(
        &self,
        id: u64,
        input: ExperienceInput,
    ) -> Result<(), ProfileError> {
        input.validate()?;
        let input = input.normalized();
        let token = self.token().await?;
        self.gateway.update_experience(&token, id, &input).await?;
        info!("Experience {} updated", id);
        Ok(())
    }

    pub async fn delete_experience(&self, id: u64) -> Result<(), ProfileError> {
        let token = self.token().await?;
        self.gateway.delete_experience(&token, id).await?;
        info!("Experience {} deleted", id);
        Ok(())
    }

    // ==================== Attachments ====================

    pub async fn attachments(&self) -> Result<Vec<Attachment>, ProfileError> {
        let token = self.token().await?;
        Ok(self.gateway.attachments(&token).await?)
    }

    pub async fn upload_attachment(&self, upload: &AttachmentUpload) -> Result<(), ProfileError> {
        upload.validate_size(self.params.max_attachment_bytes)?;
        let token = self.token().await?;
        debug!(
            "Uploading {} ({}, {} bytes)",
            upload.file_name,
            upload.mime_type,
            upload.size()
        );
        self.gateway.upload_attachment(&token, upload).await?;
        info!("Attachment uploaded");
        Ok(())
    }

    pub async fn delete_attachment(&self, id: u64) -> Result<(), ProfileError> {
        let token = self.token().await?;
        self.gateway.delete_attachment(&token, id).await?;
        info!("Attachment {} deleted", id);
        Ok(())
    }

    // ==================== Options ====================

    /// Fetch an option list. Does not need a session.
    pub async fn options(&self, kind: OptionKind) -> Result<Vec<OptionItem>, ProfileError> {
        Ok(self.gateway.options(kind).await?)
    }

    pub async fn education_options(&self) -> Result<EducationOptions, ProfileError> {
        let (levels, years, months) = futures::try_join!(
            self.gateway.options(OptionKind::EducationLevels),
            self.gateway.options(OptionKind::Years),
            self.gateway.options(OptionKind::Months),
        )?;
        Ok(EducationOptions {
            levels,
            years,
            months,
        })
    }

    pub async fn experience_options(&self) -> Result<ExperienceOptions, ProfileError> {
        let (employee_types, years, months) = futures::try_join!(
            self.gateway.options(OptionKind::EmployeeTypes),
            self.gateway.options(OptionKind::Years),
            self.gateway.options(OptionKind::Months),
        )?;
        Ok(ExperienceOptions {
            employee_types,
            years,
            months,
        })
    }

    /// Map a display value or id typed by the user to an option id.
    pub fn resolve_option(
        kind: OptionKind,
        items: &[OptionItem],
        query: &str,
    ) -> Result<u64, ProfileError> {
        OptionItem::resolve(items, query)
            .map(|item| item.id)
            .ok_or_else(|| ProfileError::UnknownOption {
                kind,
                value: query.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{CellStore, MockGateway};

    fn use_case(store: CellStore, gateway: Arc<MockGateway>) -> ProfileUseCase {
        ProfileUseCase::new(gateway, Arc::new(store), PortalParams::default())
    }

    fn logged_in(gateway: Arc<MockGateway>) -> ProfileUseCase {
        use_case(CellStore::with_token("abc123"), gateway)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn update(dob: NaiveDate, phone: &str) -> ProfileUpdate {
        ProfileUpdate {
            username: "budi".into(),
            dob,
            address: "Jl. Sudirman 1".into(),
            phone: phone.into(),
        }
    }

    fn experience(still_active: bool) -> ExperienceInput {
        ExperienceInput {
            title: "Backend Engineer".into(),
            employee_type: 1,
            company_name: "PT Maju".into(),
            location: "Jakarta".into(),
            still_active,
            start_year_experience: 10,
            start_month_experience: 1,
            end_year_experience: Some(11),
            end_month_experience: Some(2),
            desc_experience: "APIs".into(),
            desc_skill: "Rust".into(),
        }
    }

    #[tokio::test]
    async fn test_profile_requires_token() {
        let gateway = Arc::new(MockGateway::default());
        let profile = use_case(CellStore::default(), gateway.clone());

        assert!(matches!(
            profile.profile().await,
            Err(ProfileError::NotLoggedIn)
        ));
        assert!(matches!(
            profile.delete_experience(3).await,
            Err(ProfileError::NotLoggedIn)
        ));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_update_profile_rejects_future_dob() {
        let gateway = Arc::new(MockGateway::default());
        let profile = logged_in(gateway.clone());
        let today = date(2024, 6, 1);

        let err = profile
            .update_profile_as_of(&update(today, "08123456789"), today)
            .await
            .unwrap_err();
        assert!(matches!(err, ProfileError::Invalid(DomainError::InvalidInput(_))));

        let short_phone = profile
            .update_profile_as_of(&update(date(1990, 1, 1), "0812"), today)
            .await;
        assert!(matches!(short_phone, Err(ProfileError::Invalid(_))));
        assert!(gateway.calls().is_empty());

        profile
            .update_profile_as_of(&update(date(1990, 1, 1), "08123456789"), today)
            .await
            .unwrap();
        assert_eq!(gateway.calls(), vec!["update_profile"]);
    }

    #[tokio::test]
    async fn test_education_end_before_start_rejected() {
        let gateway = Arc::new(MockGateway::default());
        let profile = logged_in(gateway.clone());

        let input = EducationInput {
            title_education: "Universitas Indonesia".into(),
            education_type: 3,
            education_grade: "3.6".into(),
            education_field_study: "Computer Science".into(),
            year_education_start: 11,
            month_education_start: 2,
            year_education_end: 11,
            month_education_end: 1,
        };
        let err = profile.create_education(&input).await.unwrap_err();

        assert!(matches!(err, ProfileError::Invalid(DomainError::EndBeforeStart)));
        assert!(gateway.calls().is_empty());

        profile.update_education(9, &EducationInput {
            month_education_end: 6,
            ..input
        })
        .await
        .unwrap();
        assert_eq!(gateway.calls(), vec!["update_education 9"]);
    }

    #[tokio::test]
    async fn test_active_experience_drops_end_date() {
        let gateway = Arc::new(MockGateway::default());
        let profile = logged_in(gateway.clone());

        profile.create_experience(experience(true)).await.unwrap();
        profile.update_experience(5, experience(false)).await.unwrap();

        let bodies = gateway.experience_bodies.lock().unwrap();
        assert_eq!(bodies[0].end_year_experience, None);
        assert_eq!(bodies[0].end_month_experience, None);
        assert_eq!(bodies[1].end_year_experience, Some(11));
    }

    #[tokio::test]
    async fn test_finished_experience_needs_end_date() {
        let gateway = Arc::new(MockGateway::default());
        let profile = logged_in(gateway.clone());

        let input = ExperienceInput {
            end_month_experience: None,
            ..experience(false)
        };
        let err = profile.create_experience(input).await.unwrap_err();

        assert!(matches!(err, ProfileError::Invalid(DomainError::MissingField { .. })));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_upload_respects_size_limit() {
        let gateway = Arc::new(MockGateway::default());
        let profile = ProfileUseCase::new(
            gateway.clone(),
            Arc::new(CellStore::with_token("abc123")),
            PortalParams::default().with_max_attachment_bytes(4),
        );

        let too_big = AttachmentUpload::new(4, "cv.pdf", vec![0; 5]).unwrap();
        let err = profile.upload_attachment(&too_big).await.unwrap_err();
        assert!(matches!(
            err,
            ProfileError::Invalid(DomainError::AttachmentTooLarge { size: 5, limit: 4 })
        ));

        let fits = AttachmentUpload::new(4, "cv.pdf", vec![0; 4]).unwrap();
        profile.upload_attachment(&fits).await.unwrap();
        assert_eq!(
            *gateway.uploads.lock().unwrap(),
            vec![(4, "application/pdf".to_string(), 4)]
        );
    }

    #[tokio::test]
    async fn test_options_are_public() {
        let gateway = Arc::new(MockGateway::default());
        let profile = use_case(CellStore::default(), gateway);

        let months = profile.options(OptionKind::Months).await.unwrap();
        assert_eq!(months.len(), 2);
    }

    #[tokio::test]
    async fn test_education_options_loaded_together() {
        let gateway = Arc::new(MockGateway::default());
        let profile = use_case(CellStore::default(), gateway.clone());

        let options = profile.education_options().await.unwrap();

        assert_eq!(options.levels.len(), 2);
        assert_eq!(options.years.len(), 2);
        assert_eq!(gateway.calls().len(), 3);
        assert_eq!(
            ProfileUseCase::resolve_option(OptionKind::EducationLevels, &options.levels, "s1")
                .unwrap(),
            3
        );
        assert!(matches!(
            ProfileUseCase::resolve_option(OptionKind::Years, &options.years, "1999"),
            Err(ProfileError::UnknownOption { .. })
        ));
    }
}
