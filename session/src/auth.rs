//! Session state transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Auth` is the only writer of `SessionState` outside startup. Login pages
//! call `authenticate`, the header calls `logout`, the refresher calls
//! `refresh_token`, and authenticated API calls report their status through
//! `observe_status` so a 401 anywhere ends the session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::error::SessionError;
use crate::guard::Route;
use crate::state::SessionState;
use crate::store::{CredentialStore, KeyValueStore};
use crate::types::{Session, User};
use crate::wire;

/// Session state plus its durable copy.
#[derive(Clone, Debug)]
pub struct Auth<K> {
    state: SessionState,
    store: CredentialStore<K>,
}

impl<K: KeyValueStore> Auth<K> {
    pub fn new(state: SessionState, store: CredentialStore<K>) -> Self {
        Self { state, store }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn store(&self) -> &CredentialStore<K> {
        &self.store
    }

    pub fn session(&self) -> Session {
        self.state.get()
    }

    /// Persist and publish a new authenticated session.
    ///
    /// # Errors
    ///
    /// Returns the storage error if persisting fails; the in-memory session
    /// is left unchanged in that case.
    pub fn authenticate(&self, user: User, token: String) -> Result<(), SessionError> {
        let (username, id) = (user.username.clone(), user.id);
        self.commit(user, token)?;
        log::info!("auth: authenticated user={username} id={id}");
        Ok(())
    }

    fn commit(&self, user: User, token: String) -> Result<(), SessionError> {
        if let Err(e) = self.store.save(&token, &user) {
            log::error!("auth: failed to save credentials: {e}");
            return Err(e);
        }
        self.state.set(Session::authenticated(user, token));
        Ok(())
    }

    /// Drop credentials and publish the unauthenticated default.
    ///
    /// Storage failures are logged, never propagated. Returns the route the
    /// caller should fully redirect to.
    pub fn logout(&self) -> Route {
        if let Err(e) = self.store.clear() {
            log::error!("auth: failed to clear credentials on logout: {e}");
        }
        self.state.set(Session::default());
        log::info!("auth: logged out");
        Route::Login
    }

    /// Swap in a rotated token, provided `previous` is still the current one.
    ///
    /// A logout or a new login since `previous` was read leaves the session
    /// alone.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` when there is no session or its token is no longer
    /// `previous`, or the storage error if persisting the new token fails.
    pub fn refresh_token(&self, previous: &str, token: String) -> Result<(), SessionError> {
        let current = self.state.get();
        if current.token() != Some(previous) {
            return Err(SessionError::NotAuthenticated);
        }
        let user = current.user().cloned().ok_or(SessionError::NotAuthenticated)?;
        self.commit(user, token)?;
        log::debug!("auth: token rotated");
        Ok(())
    }

    /// Feed back the HTTP status of an authenticated call.
    ///
    /// # Errors
    ///
    /// A 401 logs out and returns `Unauthorized`.
    pub fn observe_status(&self, status: u16) -> Result<(), SessionError> {
        if status == 401 {
            log::warn!("auth: received 401, token no longer accepted");
            self.logout();
            return Err(SessionError::Unauthorized);
        }
        Ok(())
    }

    /// `Authorization` header value for the current token.
    pub fn authorization(&self) -> Option<String> {
        self.state.get().token().map(wire::bearer)
    }
}
