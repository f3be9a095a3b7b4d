//! Session state

use super::token::SessionToken;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logged-in status of the application.
///
/// The state is a cache of "does the session store hold a token" as of the
/// last check. `Unknown` is the value before the first check completes and
/// gates navigation exactly like `LoggedOut`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn,
}

impl SessionState {
    /// Derive the state from the result of a store lookup.
    pub fn from_token(token: Option<&SessionToken>) -> Self {
        match token {
            Some(_) => SessionState::LoggedIn,
            None => SessionState::LoggedOut,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, SessionState::LoggedIn)
    }

    /// Whether the first check has completed
    pub fn is_resolved(&self) -> bool {
        !matches!(self, SessionState::Unknown)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionState::Unknown => "unknown",
            SessionState::LoggedOut => "logged out",
            SessionState::LoggedIn => "logged in",
        };
        f.write_str(label)
    }
}
