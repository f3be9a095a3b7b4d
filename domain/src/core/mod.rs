//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: validation and invariant failures
//! - [`string`]: UTF-8 safe helpers used when rendering portal text

pub mod error;
pub mod string;
