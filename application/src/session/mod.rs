//! Session context
//!
//! The process-wide logged-in state, constructed explicitly at startup and
//! shared as `Arc<SessionContext>` with every consumer.

mod context;

pub use context::{LOGOUT_FAILED_MESSAGE, SessionContext};
