//! Remote token authority seams.
//!
//! Implementations perform the network call only; clearing credentials or
//! logging out in response is the caller's job.

use std::future::Future;

use crate::error::SessionError;
use crate::types::User;

/// Outcome of asking the authority whether a token is valid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verification {
    /// Token accepted. Carries the authoritative user when the server echoed one.
    Valid(Option<User>),
    /// Authority reachable and rejected the token.
    Invalid,
    /// Transport failure, timeout or server-side error.
    Unreachable(String),
}

pub trait TokenVerifier {
    /// Ask the authority about `token`.
    fn verify(&self, token: &str) -> impl Future<Output = Verification>;
}

pub trait TokenRefresher {
    /// Exchange `token` for a fresh one.
    ///
    /// # Errors
    ///
    /// `Unauthorized` for a 401, `Rejected`/`MalformedResponse` for other
    /// server answers and `NetworkUnreachable` for transport failures.
    fn refresh(&self, token: &str) -> impl Future<Output = Result<String, SessionError>>;
}
