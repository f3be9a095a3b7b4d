//! Configuration file loading for jobseeker
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `JOBSEEKER_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./jobseeker.toml` or `./.jobseeker.toml`
//! 4. Global: `<config_dir>/jobseeker/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS, FileApiConfig, FileConfig,
    FileLoggingConfig, FileOutputConfig, FileStorageConfig, StorageBackend,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
