//! Application-level configuration.
//!
//! - [`PortalParams`]: paging and upload limits used by the portal use cases

pub mod portal_params;

pub use portal_params::PortalParams;
