//! Navigation root
//!
//! Chooses which navigation group is mounted from the session state alone.
//! The root never reads the session store; it follows the [`SessionContext`]
//! watch channel, so a login or logout re-renders it without a restart.

use crate::session::SessionContext;
use jobseeker_domain::{NavigationGroup, Screen, SessionState};
use tokio::sync::watch;

/// Observer of the session state that exposes the active navigation group
pub struct NavigationRoot {
    state: watch::Receiver<SessionState>,
}

impl NavigationRoot {
    pub fn new(context: &SessionContext) -> Self {
        Self {
            state: context.subscribe(),
        }
    }

    pub fn state(&self) -> SessionState {
        *self.state.borrow()
    }

    /// Group for the current state. `Unknown` renders as unauthenticated.
    pub fn current(&self) -> NavigationGroup {
        NavigationGroup::for_state(self.state())
    }

    pub fn allows(&self, screen: Screen) -> bool {
        self.current().contains(screen)
    }

    pub fn shows_logout_action(&self) -> bool {
        self.current().shows_logout_action()
    }

    /// The group selected by a change not yet observed, without waiting.
    pub fn take_change(&mut self) -> Option<NavigationGroup> {
        if !self.state.has_changed().unwrap_or(false) {
            return None;
        }
        let state = *self.state.borrow_and_update();
        Some(NavigationGroup::for_state(state))
    }

    /// Wait for the next session change and return the group it selects.
    ///
    /// Returns `None` once the context has been dropped.
    pub async fn changed(&mut self) -> Option<NavigationGroup> {
        self.state.changed().await.ok()?;
        let state = *self.state.borrow_and_update();
        Some(NavigationGroup::for_state(state))
    }
}
