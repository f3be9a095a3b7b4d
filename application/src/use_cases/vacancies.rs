//! Vacancy listing, detail, applying and the user's applications.

use super::shared::current_token;
use crate::config::PortalParams;
use crate::ports::job_portal::{JobPortalGateway, PortalError};
use crate::ports::session_store::SessionStore;
use jobseeker_domain::{JobApplication, JobVacancy, JobVacancyPage, SessionToken};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum VacancyError {
    #[error("You are not logged in")]
    NotLoggedIn,

    #[error("Job vacancy {0} not found")]
    NotFound(u64),

    #[error("You have already applied for job vacancy {0}")]
    AlreadyApplied(u64),

    #[error(transparent)]
    Portal(#[from] PortalError),
}

pub struct VacancyUseCase {
    gateway: Arc<dyn JobPortalGateway>,
    store: Arc<dyn SessionStore>,
    params: PortalParams,
}

impl VacancyUseCase {
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

    async fn token(&self) -> Result<SessionToken, VacancyError> {
        current_token(self.store.as_ref())
            .await
            .ok_or(VacancyError::NotLoggedIn)
    }

    /// One page of vacancies. Pages are 1-based; 0 is treated as 1.
    pub async fn list(&self, page: u32) -> Result<JobVacancyPage, VacancyError> {
        let page = page.max(1);
        let result = self
            .gateway
            .job_vacancies(page, self.params.page_size)
            .await?
            .with_page(page);
        debug!(
            "Fetched {} vacancies (page {}/{})",
            result.job_vacancies.len(),
            result.page,
            result.total_pages
        );
        Ok(result)
    }

    pub async fn detail(&self, id: u64) -> Result<JobVacancy, VacancyError> {
        self.gateway.job_vacancy(id).await.map_err(|e| match e {
            PortalError::NotFound => VacancyError::NotFound(id),
            other => other.into(),
        })
    }

    pub async fn apply(&self, id: u64) -> Result<(), VacancyError> {
        let token = self.token().await?;
        self.gateway.apply(&token, id).await.map_err(|e| match e {
            PortalError::Conflict(_) => VacancyError::AlreadyApplied(id),
            PortalError::NotFound => VacancyError::NotFound(id),
            other => other.into(),
        })?;
        info!("Applied for job vacancy {}", id);
        Ok(())
    }

    pub async fn applications(&self) -> Result<Vec<JobApplication>, VacancyError> {
        let token = self.token().await?;
        Ok(self.gateway.job_applications(&token).await?)
    }
}
