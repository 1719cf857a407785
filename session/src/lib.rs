//! # session
//!
//! Browser-independent authentication session core for the dashboard client.
//!
//! Holds the session model, the credential store over a pluggable key-value
//! backend, the token verifier/refresher seams, the startup initializer, the
//! route-guard decision logic and the periodic token refresher. The `client`
//! crate supplies browser backends (localStorage, fetch, timers) for the
//! traits defined here.
//!
//! ARCHITECTURE
//! ============
//! `state` is the single owned source of truth and publishes every replacement
//! over a watch channel. Everything that mutates it goes through `auth`, so the
//! three transitions (authenticate, logout, refresh) always keep storage and
//! memory in step. Guards subscribe instead of polling.

pub mod auth;
pub mod config;
pub mod error;
pub mod guard;
pub mod initializer;
pub mod refresher;
pub mod state;
pub mod store;
pub mod task;
pub mod timer;
pub mod types;
pub mod verifier;
pub mod wire;

pub use auth::Auth;
pub use config::AuthConfig;
pub use error::SessionError;
pub use guard::{Decision, Guard, GuardKind, Route};
pub use initializer::{InitConfig, InitOutcome, initialize};
pub use refresher::{RefreshOutcome, Refresher};
pub use state::SessionState;
pub use store::{CredentialStore, KeyValueStore, MemoryStore};
pub use types::{Credentials, Session, User};
pub use verifier::{TokenRefresher, TokenVerifier, Verification};
