//! Route guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client::components::guard` wraps protected and guest-only pages with
//! these. The decision is a returned value so it can be tested without a
//! router; the component turns `Redirect` into navigation.
//!
//! DESIGN
//! ======
//! A `Guard` re-reads the local session snapshot only; it never calls the
//! remote authority. It is woken by `SessionState` on every change, so an
//! external logout reaches an already-rendered protected view immediately.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::pin::pin;

use futures::future::{Either, select};
use tokio::sync::watch;

use crate::state::SessionState;
use crate::types::Session;

/// Navigation targets the auth flow knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
}

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardKind {
    /// Only signed-in users pass; others go to `/login`.
    Authenticated,
    /// Only signed-out users pass; others go to `/dashboard`.
    GuestOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Startup initialization has not finished; show a placeholder.
    Checking,
    /// Render the wrapped view.
    Render,
    /// Navigate away.
    Redirect(Route),
}

impl GuardKind {
    #[must_use]
    pub fn decide(self, ready: bool, session: &Session) -> Decision {
        if !ready {
            return Decision::Checking;
        }
        match (self, session.is_authenticated()) {
            (Self::Authenticated, true) | (Self::GuestOnly, false) => Decision::Render,
            (Self::Authenticated, false) => Decision::Redirect(Route::Login),
            (Self::GuestOnly, true) => Decision::Redirect(Route::Dashboard),
        }
    }
}

/// One guard instance subscribed to the session and readiness channels.
#[derive(Debug)]
pub struct Guard {
    kind: GuardKind,
    session: watch::Receiver<Session>,
    ready: watch::Receiver<bool>,
    last: Decision,
}

impl Guard {
    #[must_use]
    pub fn new(kind: GuardKind, state: &SessionState) -> Self {
        let mut guard = Self {
            kind,
            session: state.subscribe(),
            ready: state.subscribe_ready(),
            last: Decision::Checking,
        };
        guard.last = guard.evaluate();
        guard
    }

    #[must_use]
    pub fn kind(&self) -> GuardKind {
        self.kind
    }

    /// Decision for the latest snapshot.
    pub fn current(&mut self) -> Decision {
        self.last = self.evaluate();
        self.last
    }

    /// Wait for the next change that alters the decision.
    ///
    /// Returns `None` once the session state has been dropped.
    pub async fn changed(&mut self) -> Option<Decision> {
        loop {
            let result = {
                let session = pin!(self.session.changed());
                let ready = pin!(self.ready.changed());
                match select(session, ready).await {
                    Either::Left((r, _)) | Either::Right((r, _)) => r,
                }
            };
            if result.is_err() {
                return None;
            }
            let next = self.evaluate();
            if next != self.last {
                log::debug!("guard {:?}: {:?} -> {:?}", self.kind, self.last, next);
                self.last = next;
                return Some(next);
            }
        }
    }

    fn evaluate(&mut self) -> Decision {
        let ready = *self.ready.borrow_and_update();
        let session = self.session.borrow_and_update();
        self.kind.decide(ready, &session)
    }
}
