//! Periodic token rotation while signed in.
//!
//! A failed refresh is only logged; the next interval retries. Ending the
//! session is left to the verifier path and to 401s on regular API calls.

#[cfg(test)]
#[path = "refresher_test.rs"]
mod refresher_test;

use std::time::Duration;

use crate::auth::Auth;
use crate::error::SessionError;
use crate::store::KeyValueStore;
use crate::timer::Timer;
use crate::verifier::TokenRefresher;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// No session to refresh, or it changed while the refresh was in flight.
    Skipped,
    Refreshed,
    Failed(SessionError),
}

pub struct Refresher<K, R, T> {
    auth: Auth<K>,
    refresher: R,
    timer: T,
    interval: Duration,
}

impl<K, R, T> Refresher<K, R, T>
where
    K: KeyValueStore,
    R: TokenRefresher,
    T: Timer,
{
    pub fn new(auth: Auth<K>, refresher: R, timer: T, interval: Duration) -> Self {
        Self { auth, refresher, timer, interval }
    }

    /// Attempt one refresh of the current token.
    pub async fn tick(&self) -> RefreshOutcome {
        let Some(token) = self.auth.session().token().map(str::to_owned) else {
            return RefreshOutcome::Skipped;
        };
        let result = match self.refresher.refresh(&token).await {
            Ok(next) => self.auth.refresh_token(&token, next),
            Err(e) => Err(e),
        };
        match result {
            Err(SessionError::NotAuthenticated) => {
                log::debug!("token refresh: session changed while refreshing, discarding token");
                RefreshOutcome::Skipped
            }
            Ok(()) => {
                log::info!("token refresh: rotated");
                RefreshOutcome::Refreshed
            }
            Err(e) => {
                log::warn!("token refresh failed, will retry next interval: {e}");
                RefreshOutcome::Failed(e)
            }
        }
    }

    /// Sleep one interval, refresh, repeat. Runs until its task is cancelled.
    pub async fn run(self) {
        loop {
            self.timer.sleep(self.interval).await;
            self.tick().await;
        }
    }
}
