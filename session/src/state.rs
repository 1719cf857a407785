//! Process-wide session state with change notification.
//!
//! SYSTEM CONTEXT
//! ==============
//! Created once at application start and shared by cloning. Route guards and
//! user-aware components subscribe to it; only `auth` and the initializer
//! write to it.
//!
//! DESIGN
//! ======
//! Backed by `tokio::sync::watch`: `set` swaps the whole snapshot in one step,
//! so a reader never sees a half-updated session, and every subscriber is
//! woken on the next replacement instead of polling.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use tokio::sync::watch;

use crate::types::Session;

/// Receiving side of a session subscription.
pub type SessionReceiver = watch::Receiver<Session>;

/// Shared handle to the current session snapshot and the readiness flag.
#[derive(Clone, Debug)]
pub struct SessionState {
    session: Arc<watch::Sender<Session>>,
    ready: Arc<watch::Sender<bool>>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Fresh state holding the unauthenticated default, not yet initialized.
    #[must_use]
    pub fn new() -> Self {
        let (session, _) = watch::channel(Session::default());
        let (ready, _) = watch::channel(false);
        Self { session: Arc::new(session), ready: Arc::new(ready) }
    }

    /// Current session snapshot.
    #[must_use]
    pub fn get(&self) -> Session {
        self.session.borrow().clone()
    }

    /// Replace the session snapshot and notify subscribers.
    pub fn set(&self, next: Session) {
        self.session.send_replace(next);
    }

    /// Receiver that observes every subsequent `set`.
    #[must_use]
    pub fn subscribe(&self) -> SessionReceiver {
        self.session.subscribe()
    }

    /// Whether startup initialization has reached a terminal state.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        *self.ready.borrow()
    }

    /// Flag initialization as finished. Returns `true` only for the first call.
    pub fn mark_ready(&self) -> bool {
        self.ready.send_if_modified(|ready| {
            if *ready {
                false
            } else {
                *ready = true;
                true
            }
        })
    }

    #[must_use]
    pub fn subscribe_ready(&self) -> watch::Receiver<bool> {
        self.ready.subscribe()
    }

    /// Wait until initialization has finished.
    pub async fn wait_ready(&self) {
        let mut rx = self.ready.subscribe();
        // The sender lives in `self`, so the channel cannot close while waiting.
        let _ = rx.wait_for(|ready| *ready).await;
    }
}
