//! Session domain.
//!
//! - [`token::SessionToken`]: the opaque credential kept by a session store
//! - [`state::SessionState`]: logged-in status derived from token presence

pub mod state;
pub mod token;

pub use state::SessionState;
pub use token::SessionToken;
