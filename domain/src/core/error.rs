//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Session token cannot be empty")]
    EmptyToken,

    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Password confirmation does not match")]
    PasswordMismatch,

    #[error("End date must not be before start date")]
    EndBeforeStart,

    #[error("File is {size} bytes, the limit is {limit} bytes")]
    AttachmentTooLarge { size: u64, limit: u64 },

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),
}

impl DomainError {
    /// Shorthand for a missing required field
    pub fn missing(field: &'static str) -> Self {
        DomainError::MissingField { field }
    }
}
