//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod api;
mod logging;
mod output;
mod storage;

pub use api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS, FileApiConfig};
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use storage::{FileStorageConfig, StorageBackend};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("api.base_url '{0}' is not an http(s) URL")]
    InvalidBaseUrl(String),

    #[error("api.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("api.page_size cannot be 0")]
    InvalidPageSize,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Portal API settings
    pub api: FileApiConfig,
    /// Session token storage
    pub storage: FileStorageConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let url = self.api.base_url.trim();
        let is_http = reqwest::Url::parse(url)
            .map(|u| matches!(u.scheme(), "http" | "https"))
            .unwrap_or(false);
        if !is_http {
            return Err(ConfigValidationError::InvalidBaseUrl(url.to_string()));
        }

        // Timeout of 0 seconds doesn't make sense
        if self.api.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.api.page_size == 0 {
            return Err(ConfigValidationError::InvalidPageSize);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobseeker_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[api]
base_url = "https://portal.example.com"
timeout_seconds = 10
page_size = 20

[storage]
backend = "memory"

[output]
format = "json"
color = false

[logging]
file = "/tmp/jobseeker.log"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url, "https://portal.example.com");
        assert_eq!(config.api.timeout_seconds, 10);
        assert_eq!(config.api.to_portal_params().page_size, 20);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.color);
        assert!(config.logging.file.is_some());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: FileConfig = toml::from_str("[api]\npage_size = 8\n").unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.page_size, 8);
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert!(config.storage.path.is_none());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = FileConfig::default();
        assert!(config.validate().is_ok());

        config.api.base_url = "not a url".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidBaseUrl(_))
        ));

        config.api.base_url = "ftp://portal.example.com".to_string();
        assert!(config.validate().is_err());

        config.api.base_url = DEFAULT_BASE_URL.to_string();
        config.api.timeout_seconds = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));

        config.api.timeout_seconds = 5;
        config.api.page_size = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidPageSize));
    }
}
