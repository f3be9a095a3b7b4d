//! Loading indicator shown while a request is in flight

pub mod reporter;

pub use reporter::LoadingIndicator;
