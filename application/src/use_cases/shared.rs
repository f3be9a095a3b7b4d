//! Shared helpers for use cases.

use crate::ports::session_store::SessionStore;
use jobseeker_domain::SessionToken;
use tracing::warn;

/// Read the token for an authorized request.
///
/// A storage failure is treated like a missing token.
pub(crate) async fn current_token(store: &dyn SessionStore) -> Option<SessionToken> {
    match store.get_token().await {
        Ok(token) => token,
        Err(e) => {
            warn!("Could not read session token: {}", e);
            None
        }
    }
}
