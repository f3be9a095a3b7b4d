//! In-memory session store, used with `storage.backend = "memory"`.

use async_trait::async_trait;
use jobseeker_application::{SessionStore, StorageError};
use jobseeker_domain::SessionToken;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<SessionToken>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: SessionToken) -> Self {
        Self {
            token: RwLock::new(Some(token)),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get_token(&self) -> Result<Option<SessionToken>, StorageError> {
        Ok(self.token.read().await.clone())
    }

    async fn set_token(&self, token: &SessionToken) -> Result<(), StorageError> {
        *self.token.write().await = Some(token.clone());
        Ok(())
    }

    async fn clear_token(&self) -> Result<(), StorageError> {
        self.token.write().await.take();
        Ok(())
    }
}
