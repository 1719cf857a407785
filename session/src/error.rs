//! Error taxonomy for the session subsystem.
//!
//! ERROR HANDLING
//! ==============
//! No variant is fatal. Storage corruption and rejected tokens end in the
//! unauthenticated state, transport failures are recovered by the offline
//! policy or retried by the refresher, and a 401 anywhere forces logout.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failures surfaced by storage, verification, refresh and configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// One or both credential keys are absent.
    #[error("no stored credentials")]
    StorageMissing,

    /// The stored user record could not be deserialized.
    #[error("stored credentials are corrupt: {0}")]
    StorageCorrupt(String),

    /// The storage backend refused a read or write.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// The authority rejected the token.
    #[error("token rejected by server")]
    TokenInvalid,

    /// Transport failure or timeout talking to the authority.
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    /// An authenticated call answered 401.
    #[error("unauthorized")]
    Unauthorized,

    /// The server answered with a non-success status.
    #[error("request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// A success response was missing required fields or was not JSON.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// An operation that needs a session ran without one.
    #[error("not authenticated")]
    NotAuthenticated,

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),
}

impl SessionError {
    /// Whether this error means the stored credentials must be discarded.
    #[must_use]
    pub fn invalidates_credentials(&self) -> bool {
        matches!(self, Self::StorageCorrupt(_) | Self::TokenInvalid | Self::Unauthorized)
    }
}
