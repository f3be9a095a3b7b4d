//! Infrastructure layer for jobseeker
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileApiConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileStorageConfig, StorageBackend,
};
pub use http::HttpPortalGateway;
pub use storage::{FileSessionStore, MemorySessionStore, build_session_store};
