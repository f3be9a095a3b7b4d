//! Session context: the cached logged-in state and its two transitions.

use crate::ports::alert::{Alert, AlertNotifier};
use crate::ports::session_store::{SessionStore, StorageError};
use jobseeker_domain::SessionState;
use std::sync::Arc;
use tokio::sync::{Mutex, watch};
use tracing::{debug, error, info, warn};

/// Message shown when the token could not be removed
pub const LOGOUT_FAILED_MESSAGE: &str = "Error logging out\nPlease restart the app.";

/// Holder of the session state shared by every screen.
///
/// The state starts as [`SessionState::Unknown`] and is a cache of the
/// session store's token presence as of the last [`check_login_status`].
/// Changes are published on a watch channel so views re-render without a
/// manual refresh.
///
/// Transitions are serialized: overlapping calls run one after another in
/// arrival order, each observing the store as left by the previous one.
///
/// [`check_login_status`]: SessionContext::check_login_status
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
    alerts: Arc<dyn AlertNotifier>,
    state: watch::Sender<SessionState>,
    transition: Mutex<()>,
}

impl SessionContext {
    /// Create a context in the `Unknown` state without touching the store.
    pub fn new(store: Arc<dyn SessionStore>, alerts: Arc<dyn AlertNotifier>) -> Self {
        let (state, _) = watch::channel(SessionState::Unknown);
        Self {
            store,
            alerts,
            state,
            transition: Mutex::new(()),
        }
    }

    /// Create a context and run the initial login check.
    pub async fn init(
        store: Arc<dyn SessionStore>,
        alerts: Arc<dyn AlertNotifier>,
    ) -> Arc<Self> {
        let context = Arc::new(Self::new(store, alerts));
        context.check_login_status().await;
        context
    }

    pub fn state(&self) -> SessionState {
        *self.state.borrow()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state().is_logged_in()
    }

    /// Receive every subsequent state change
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// The store screens read the token from when authorizing requests
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Re-derive the state from the store.
    ///
    /// A storage failure yields `LoggedOut`: a broken store never grants access.
    pub async fn check_login_status(&self) -> SessionState {
        let _guard = self.transition.lock().await;

        let next = match self.store.get_token().await {
            Ok(token) => SessionState::from_token(token.as_ref()),
            Err(e) => {
                warn!("Could not read session token, treating as logged out: {}", e);
                SessionState::LoggedOut
            }
        };

        self.set_state(next);
        next
    }

    /// Delete the token and switch to `LoggedOut`.
    ///
    /// When the store cannot delete the token the state is left unchanged,
    /// one error alert is raised, and the error is returned.
    pub async fn handle_logout(&self) -> Result<(), StorageError> {
        let _guard = self.transition.lock().await;

        match self.store.clear_token().await {
            Ok(()) => {
                info!("Logged out");
                self.set_state(SessionState::LoggedOut);
                Ok(())
            }
            Err(e) => {
                error!("Logout failed, keeping current session: {}", e);
                self.alerts.alert(Alert::error(LOGOUT_FAILED_MESSAGE));
                Err(e)
            }
        }
    }

    fn set_state(&self, next: SessionState) {
        self.state.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            debug!("Session state {} -> {}", current, next);
            *current = next;
            true
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::alert::AlertSeverity;
    use async_trait::async_trait;
    use jobseeker_domain::SessionToken;
    use std::sync::Mutex as StdMutex;

    // ==================== Test Doubles ====================

    #[derive(Default)]
    struct FakeStore {
        token: StdMutex<Option<String>>,
        fail_get: bool,
        fail_clear: bool,
    }

    impl FakeStore {
        fn with_token(token: &str) -> Self {
            Self {
                token: StdMutex::new(Some(token.to_string())),
                ..Self::default()
            }
        }

        fn raw(&self) -> Option<String> {
            self.token.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SessionStore for FakeStore {
        async fn get_token(&self) -> Result<Option<SessionToken>, StorageError> {
            if self.fail_get {
                return Err(StorageError::Unavailable("disk gone".into()));
            }
            Ok(SessionToken::from_stored(self.raw()))
        }

        async fn set_token(&self, token: &SessionToken) -> Result<(), StorageError> {
            *self.token.lock().unwrap() = Some(token.as_str().to_string());
            Ok(())
        }

        async fn clear_token(&self) -> Result<(), StorageError> {
            if self.fail_clear {
                return Err(StorageError::Unavailable("read-only".into()));
            }
            *self.token.lock().unwrap() = None;
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingAlerts {
        alerts: StdMutex<Vec<Alert>>,
    }

    impl AlertNotifier for RecordingAlerts {
        fn alert(&self, alert: Alert) {
            self.alerts.lock().unwrap().push(alert);
        }
    }

    fn context(store: Arc<FakeStore>, alerts: Arc<RecordingAlerts>) -> SessionContext {
        SessionContext::new(store, alerts)
    }

    // ==================== Tests ====================

    #[test]
    fn test_starts_unknown() {
        let ctx = context(Arc::default(), Arc::default());
        assert_eq!(ctx.state(), SessionState::Unknown);
        assert!(!ctx.is_logged_in());
    }

    #[tokio::test]
    async fn test_token_present_logs_in() {
        let ctx = context(Arc::new(FakeStore::with_token("abc123")), Arc::default());
        assert_eq!(ctx.check_login_status().await, SessionState::LoggedIn);
        assert!(ctx.is_logged_in());
    }

    #[tokio::test]
    async fn test_absent_token_logs_out() {
        let ctx = context(Arc::default(), Arc::default());
        assert_eq!(ctx.check_login_status().await, SessionState::LoggedOut);
    }

    #[tokio::test]
    async fn test_blank_token_counts_as_absent() {
        let ctx = context(Arc::new(FakeStore::with_token("")), Arc::default());
        assert_eq!(ctx.check_login_status().await, SessionState::LoggedOut);
    }

    #[tokio::test]
    async fn test_storage_error_fails_closed() {
        let store = FakeStore {
            fail_get: true,
            ..FakeStore::with_token("abc123")
        };
        let alerts = Arc::new(RecordingAlerts::default());
        let ctx = context(Arc::new(store), alerts.clone());
        assert_eq!(ctx.check_login_status().await, SessionState::LoggedOut);
        // Read failures are swallowed, not shown
        assert!(alerts.alerts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_logout_clears_token() {
        let store = Arc::new(FakeStore::with_token("abc123"));
        let ctx = SessionContext::init(store.clone(), Arc::new(RecordingAlerts::default())).await;
        assert!(ctx.is_logged_in());

        ctx.handle_logout().await.unwrap();

        assert_eq!(ctx.state(), SessionState::LoggedOut);
        assert!(store.get_token().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_logout_of_absent_token_is_ok() {
        let ctx = SessionContext::init(Arc::new(FakeStore::default()), Arc::new(NoAlertsProbe)).await;
        assert!(ctx.handle_logout().await.is_ok());
        assert_eq!(ctx.state(), SessionState::LoggedOut);
    }

    struct NoAlertsProbe;
    impl AlertNotifier for NoAlertsProbe {
        fn alert(&self, _alert: Alert) {
            panic!("no alert expected");
        }
    }

    #[tokio::test]
    async fn test_failed_logout_keeps_state_and_alerts_once() {
        let store = Arc::new(FakeStore {
            fail_clear: true,
            ..FakeStore::with_token("abc123")
        });
        let alerts = Arc::new(RecordingAlerts::default());
        let ctx = SessionContext::init(store.clone(), alerts.clone()).await;

        let result = ctx.handle_logout().await;

        assert!(matches!(result, Err(StorageError::Unavailable(_))));
        assert_eq!(ctx.state(), SessionState::LoggedIn);
        assert_eq!(store.raw().as_deref(), Some("abc123"));
        let recorded = alerts.alerts.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].severity, AlertSeverity::Error);
        assert_eq!(recorded[0].message, LOGOUT_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let store = Arc::new(FakeStore::with_token("abc123"));
        let ctx = context(store, Arc::default());
        let mut rx = ctx.subscribe();

        ctx.check_login_status().await;
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), SessionState::LoggedIn);

        ctx.handle_logout().await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), SessionState::LoggedOut);
    }

    #[tokio::test]
    async fn test_recheck_after_external_login() {
        let store = Arc::new(FakeStore::default());
        let ctx = SessionContext::init(store.clone(), Arc::new(RecordingAlerts::default())).await;
        assert_eq!(ctx.state(), SessionState::LoggedOut);

        store
            .set_token(&SessionToken::new("fresh").unwrap())
            .await
            .unwrap();
        // The cached state stays stale until something re-checks
        assert_eq!(ctx.state(), SessionState::LoggedOut);
        assert_eq!(ctx.check_login_status().await, SessionState::LoggedIn);
    }
}
