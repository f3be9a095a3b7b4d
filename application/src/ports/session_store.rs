//! Session store port
//!
//! Durable key-value persistence of exactly one entry: the session token.

use async_trait::async_trait;
use jobseeker_domain::SessionToken;
use thiserror::Error;

/// Key the token is stored under
pub const TOKEN_KEY: &str = "token";

/// Failure of the underlying storage medium.
///
/// This is the only error kind the session core defines.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Session storage unavailable: {0}")]
    Unavailable(String),

    #[error("Session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session storage is corrupt: {0}")]
    Corrupt(String),
}

/// Persistence of the session token.
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the stored token. Blank stored values are reported as `None`.
    ///
    /// Side-effect free. Read paths treat an error like an absent token.
    async fn get_token(&self) -> Result<Option<SessionToken>, StorageError>;

    /// Store the token, replacing any previous one.
    async fn set_token(&self, token: &SessionToken) -> Result<(), StorageError>;

    /// Delete the token. Deleting an absent token is not an error.
    async fn clear_token(&self) -> Result<(), StorageError>;
}
