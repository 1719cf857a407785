//! Startup session restoration.
//!
//! ARCHITECTURE
//! ============
//! ```text
//! Start -> LoadingCredentials -+-> NoCredentials -----------------> Unauthenticated
//!                              +-> Verifying -+-> Valid ----------> Authenticated
//!                                             +-> Invalid --------> Unauthenticated (storage cleared)
//!                                             +-> Unreachable ----> OfflineAuthenticated (policy on)
//!                                                              \--> Unauthenticated (policy off, storage kept)
//! ```
//!
//! Every path ends in a terminal phase and marks the session state ready
//! exactly once. The verifier call is bounded by `verify_timeout`; a timeout
//! is handled like any other unreachable authority.

#[cfg(test)]
#[path = "initializer_test.rs"]
mod initializer_test;

use std::time::Duration;

use crate::auth::Auth;
use crate::config::DEFAULT_VERIFY_TIMEOUT_SECS;
use crate::error::SessionError;
use crate::store::KeyValueStore;
use crate::timer::{Timer, with_timeout};
use crate::types::{Session, User};
use crate::verifier::{TokenVerifier, Verification};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitPhase {
    Start,
    LoadingCredentials,
    NoCredentials,
    Verifying,
    Authenticated,
    Unauthenticated,
    OfflineAuthenticated,
}

/// Terminal result of [`initialize`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InitOutcome {
    /// Token confirmed by the authority.
    Authenticated(User),
    /// No usable session; the reason is kept for logging and tests.
    Unauthenticated(SessionError),
    /// Authority unreachable; running on the cached user.
    OfflineAuthenticated(User),
}

impl InitOutcome {
    #[must_use]
    pub fn phase(&self) -> InitPhase {
        match self {
            Self::Authenticated(_) => InitPhase::Authenticated,
            Self::Unauthenticated(_) => InitPhase::Unauthenticated,
            Self::OfflineAuthenticated(_) => InitPhase::OfflineAuthenticated,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::Unauthenticated(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitConfig {
    pub allow_offline_auth: bool,
    pub verify_timeout: Duration,
}

impl Default for InitConfig {
    fn default() -> Self {
        Self { allow_offline_auth: true, verify_timeout: Duration::from_secs(DEFAULT_VERIFY_TIMEOUT_SECS) }
    }
}

/// Restore the session from storage, verifying the token with the authority.
pub async fn initialize<K, V, T>(auth: &Auth<K>, verifier: &V, timer: &T, config: InitConfig) -> InitOutcome
where
    K: KeyValueStore,
    V: TokenVerifier,
    T: Timer,
{
    let outcome = restore(auth, verifier, timer, config).await;
    match &outcome {
        InitOutcome::Authenticated(user) => log::info!("session init: authenticated as {}", user.username),
        InitOutcome::OfflineAuthenticated(user) => {
            log::warn!("session init: authority unreachable, using cached session for {}", user.username);
        }
        InitOutcome::Unauthenticated(reason) => log::info!("session init: unauthenticated ({reason})"),
    }
    if !auth.state().mark_ready() {
        log::warn!("session init: state was already marked ready");
    }
    outcome
}

async fn restore<K, V, T>(auth: &Auth<K>, verifier: &V, timer: &T, config: InitConfig) -> InitOutcome
where
    K: KeyValueStore,
    V: TokenVerifier,
    T: Timer,
{
    log::debug!("session init: {:?} -> {:?}", InitPhase::Start, InitPhase::LoadingCredentials);
    let cached = match auth.store().load() {
        Ok(creds) => creds,
        Err(e) => {
            log::debug!("session init: {:?} ({e})", InitPhase::NoCredentials);
            if matches!(e, SessionError::StorageCorrupt(_)) {
                clear_quietly(auth);
            }
            auth.state().set(Session::default());
            return InitOutcome::Unauthenticated(e);
        }
    };

    log::debug!("session init: {:?}", InitPhase::Verifying);
    let verification = with_timeout(timer, config.verify_timeout, verifier.verify(&cached.token))
        .await
        .unwrap_or_else(|| Verification::Unreachable(format!("verify timed out after {:?}", config.verify_timeout)));

    match verification {
        Verification::Valid(authoritative) => {
            let user = match authoritative {
                Some(user) if user != cached.user => {
                    if let Err(e) = auth.store().save(&cached.token, &user) {
                        log::warn!("session init: could not update cached user: {e}");
                    }
                    user
                }
                _ => cached.user,
            };
            auth.state().set(Session::authenticated(user.clone(), cached.token));
            InitOutcome::Authenticated(user)
        }
        Verification::Invalid => {
            clear_quietly(auth);
            auth.state().set(Session::default());
            InitOutcome::Unauthenticated(SessionError::TokenInvalid)
        }
        Verification::Unreachable(reason) => {
            if config.allow_offline_auth {
                let user = cached.user;
                auth.state().set(Session::authenticated(user.clone(), cached.token));
                InitOutcome::OfflineAuthenticated(user)
            } else {
                auth.state().set(Session::default());
                InitOutcome::Unauthenticated(SessionError::NetworkUnreachable(reason))
            }
        }
    }
}

fn clear_quietly<K: KeyValueStore>(auth: &Auth<K>) {
    if let Err(e) = auth.store().clear() {
        log::error!("session init: failed to clear credentials: {e}");
    }
}
