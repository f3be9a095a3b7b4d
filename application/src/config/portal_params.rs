//! Portal parameters: limits applied by the screen use cases.
//!
//! These are application-layer concerns, not domain policy: the portal
//! itself decides what it accepts, the client only pre-checks.

use jobseeker_domain::portal::DEFAULT_MAX_ATTACHMENT_BYTES;
use serde::{Deserialize, Serialize};

/// Default number of vacancies requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Limits for vacancy paging and attachment uploads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalParams {
    /// Vacancies per page
    pub page_size: u32,
    /// Largest attachment accepted for upload, in bytes
    pub max_attachment_bytes: u64,
}

impl Default for PortalParams {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_attachment_bytes: DEFAULT_MAX_ATTACHMENT_BYTES,
        }
    }
}

impl PortalParams {
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_max_attachment_bytes(mut self, limit: u64) -> Self {
        self.max_attachment_bytes = limit;
        self
    }
}
