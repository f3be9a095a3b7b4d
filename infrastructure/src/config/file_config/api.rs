//! Portal API configuration from TOML (`[api]` section)

use jobseeker_application::PortalParams;
use jobseeker_application::config::portal_params::DEFAULT_PAGE_SIZE;
use jobseeker_domain::portal::DEFAULT_MAX_ATTACHMENT_BYTES;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Raw `[api]` configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Portal base URL, without a trailing path
    pub base_url: String,
    /// Per-request timeout
    pub timeout_seconds: u64,
    /// Vacancies per listing page
    pub page_size: u32,
    /// Upload limit for profile attachments
    pub max_attachment_bytes: u64,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            page_size: DEFAULT_PAGE_SIZE,
            max_attachment_bytes: DEFAULT_MAX_ATTACHMENT_BYTES,
        }
    }
}

impl FileApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn to_portal_params(&self) -> PortalParams {
        PortalParams::default()
            .with_page_size(self.page_size)
            .with_max_attachment_bytes(self.max_attachment_bytes)
    }
}
