//! Account inputs: registration, verification, login, password change

use super::require;
use crate::core::error::DomainError;
use serde::Serialize;

/// Minimum length for account passwords
pub const MIN_PASSWORD_LEN: usize = 8;

fn check_new_password(password: &str, confirmation: &str) -> Result<(), DomainError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(DomainError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    if password != confirmation {
        return Err(DomainError::PasswordMismatch);
    }
    Ok(())
}

/// Sign-up form
#[derive(Clone, Serialize)]
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing)]
    pub confirm_password: String,
}

impl RegisterInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        require("username", &self.username)?;
        require("email", &self.email)?;
        require("password", &self.password)?;
        require("password confirmation", &self.confirm_password)?;
        check_new_password(&self.password, &self.confirm_password)
    }
}

/// Email verification form
#[derive(Debug, Clone, Serialize)]
pub struct VerifyInput {
    pub email: String,
    #[serde(rename = "verificationCode")]
    pub verification_code: String,
}

impl VerifyInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        require("email", &self.email)?;
        require("verification code", &self.verification_code)
    }
}

/// Login form
#[derive(Clone, Serialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl LoginInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        require("email", &self.email)?;
        require("password", &self.password)
    }
}

/// Password change form
#[derive(Clone, Serialize)]
pub struct ChangePasswordInput {
    #[serde(rename = "oldPassword")]
    pub old_password: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
    #[serde(skip_serializing)]
    pub confirm_password: String,
}

impl ChangePasswordInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        require("old password", &self.old_password)?;
        require("new password", &self.new_password)?;
        require("password confirmation", &self.confirm_password)?;
        check_new_password(&self.new_password, &self.confirm_password)
    }
}
