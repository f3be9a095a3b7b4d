//! Session store adapters
//!
//! - [`FileSessionStore`]: JSON file under the user's data directory
//! - [`MemorySessionStore`]: process-local, nothing survives a restart

mod file_store;
mod memory_store;

pub use file_store::FileSessionStore;
pub use memory_store::MemorySessionStore;

use crate::config::{FileStorageConfig, StorageBackend};
use jobseeker_application::{SessionStore, StorageError};
use std::sync::Arc;
use tracing::debug;

/// Build the session store selected by `[storage]`.
pub fn build_session_store(
    config: &FileStorageConfig,
) -> Result<Arc<dyn SessionStore>, StorageError> {
    match config.backend {
        StorageBackend::Memory => {
            debug!("Using in-memory session store");
            Ok(Arc::new(MemorySessionStore::new()))
        }
        StorageBackend::File => {
            let path = config
                .path
                .clone()
                .or_else(FileSessionStore::default_path)
                .ok_or_else(|| {
                    StorageError::Unavailable("no data directory for the session file".into())
                })?;
            debug!("Using session file {}", path.display());
            Ok(Arc::new(FileSessionStore::new(path)))
        }
    }
}
