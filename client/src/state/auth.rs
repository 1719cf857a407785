//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. `App` provides a `BrowserAuth` and a
//! `RwSignal<Session>` by context; `mirror_session` keeps the signal in step
//! with every state replacement.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use session::state::SessionReceiver;
use session::{Auth, Session};

use crate::util::storage::LocalStorage;

/// Session transitions backed by `localStorage`.
pub type BrowserAuth = Auth<LocalStorage>;

/// Copy each published session into `signal` until the state is dropped.
pub async fn mirror_session(mut rx: SessionReceiver, signal: RwSignal<Session>) {
    while rx.changed().await.is_ok() {
        let next = rx.borrow_and_update().clone();
        signal.set(next);
    }
}

/// Name shown in the header; "Guest" when signed out.
pub fn display_name(session: &Session) -> String {
    session.user().map_or_else(|| "Guest".to_owned(), |u| u.username.clone())
}

pub fn display_email(session: &Session) -> String {
    session.user().map_or_else(|| "guest@example.com".to_owned(), |u| u.email.clone())
}

/// Uppercased first letter of the username for the avatar bubble.
pub fn avatar_initial(session: &Session) -> char {
    session
        .user()
        .and_then(|u| u.username.chars().next())
        .map_or('G', |c| c.to_uppercase().next().unwrap_or(c))
}
