//! Account use case: registration, verification, login and password change.
//!
//! Login and a token-issuing verification write the token to the session
//! store and then re-run [`SessionContext::check_login_status`], so the
//! session state is always derived from the store and never set directly.

use super::shared::current_token;
use crate::ports::job_portal::{JobPortalGateway, PortalError};
use crate::ports::session_store::{SessionStore, StorageError};
use crate::session::SessionContext;
use jobseeker_domain::{
    ChangePasswordInput, DomainError, LoginInput, RegisterInput, SessionState, VerifyInput,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("{0}")]
    Invalid(#[from] DomainError),

    #[error("Email is already registered")]
    EmailTaken,

    #[error("Invalid verification code")]
    InvalidCode,

    #[error("Account is already verified")]
    AlreadyVerified,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Old password is incorrect")]
    WrongPassword,

    #[error("You are not logged in")]
    NotLoggedIn,

    #[error("Could not save session: {0}")]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Portal(#[from] PortalError),
}

/// Result of a verification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Verified; the user still has to log in
    Verified,
    /// Verified and signed in with the token the portal returned
    SignedIn(SessionState),
}

pub struct AuthUseCase {
    gateway: Arc<dyn JobPortalGateway>,
    session: Arc<SessionContext>,
}

impl AuthUseCase {
    pub fn new(gateway: Arc<dyn JobPortalGateway>, session: Arc<SessionContext>) -> Self {
        Self { gateway, session }
    }

    pub async fn register(&self, input: &RegisterInput) -> Result<(), AuthError> {
        input.validate()?;
        self.gateway.register(input).await.map_err(|e| match e {
            PortalError::Conflict(_) => AuthError::EmailTaken,
            other => other.into(),
        })?;
        info!("Registration submitted");
        Ok(())
    }

    pub async fn verify(&self, input: &VerifyInput) -> Result<VerifyOutcome, AuthError> {
        input.validate()?;
        let token = self
            .gateway
            .verify_registration(input)
            .await
            .map_err(|e| match e {
                PortalError::Unauthorized(_) => AuthError::InvalidCode,
                PortalError::Conflict(_) => AuthError::AlreadyVerified,
                other => other.into(),
            })?;

        match token {
            Some(token) => {
                self.session.store().set_token(&token).await?;
                let state = self.session.check_login_status().await;
                info!("Account verified and signed in");
                Ok(VerifyOutcome::SignedIn(state))
            }
            None => {
                info!("Account verified");
                Ok(VerifyOutcome::Verified)
            }
        }
    }

    /// Log in and return the session state after the re-check.
    pub async fn login(&self, input: &LoginInput) -> Result<SessionState, AuthError> {
        input.validate()?;
        let token = self.gateway.login(input).await.map_err(|e| match e {
            PortalError::Unauthorized(_) => AuthError::InvalidCredentials,
            other => other.into(),
        })?;

        self.session.store().set_token(&token).await?;
        let state = self.session.check_login_status().await;
        info!("Logged in");
        debug!("Session state after login: {}", state);
        Ok(state)
    }

    pub async fn change_password(&self, input: &ChangePasswordInput) -> Result<(), AuthError> {
        input.validate()?;
        let token = current_token(self.session.store().as_ref())
            .await
            .ok_or(AuthError::NotLoggedIn)?;
        self.gateway
            .change_password(&token, input)
            .await
            .map_err(|e| match e {
                PortalError::Unauthorized(_) => AuthError::WrongPassword,
                other => other.into(),
            })?;
        info!("Password changed");
        Ok(())
    }
}
