//! Session data model.
//!
//! DESIGN
//! ======
//! `Session` stores an optional token/user pair instead of a separate
//! `is_authenticated` flag, so "authenticated iff user and token are present"
//! cannot be violated by a partial update.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account record as returned by the API and cached under `user_data`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned numeric identifier.
    pub id: i64,
    /// Display name.
    pub username: String,
    /// Login email address.
    pub email: String,
}

/// A bearer token together with the user it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub user: User,
}

/// Snapshot of the current authentication state.
///
/// The default value is the unauthenticated session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    credentials: Option<Credentials>,
}

impl Session {
    /// Authenticated session for `user` holding `token`.
    #[must_use]
    pub fn authenticated(user: User, token: String) -> Self {
        Self { credentials: Some(Credentials { token, user }) }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.credentials.as_ref().map(|c| &c.user)
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.token.as_str())
    }

    #[must_use]
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }
}

impl From<Credentials> for Session {
    fn from(credentials: Credentials) -> Self {
        Self { credentials: Some(credentials) }
    }
}
