//! Auth configuration with defaults and key/value overrides.
//!
//! The browser build has no process environment, so the `client` crate feeds
//! `from_lookup` with values captured at compile time; host tools use
//! `from_env`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::error::SessionError;
use crate::initializer::InitConfig;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_VERIFY_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30 * 60;

pub const API_BASE_URL_KEY: &str = "AUTH_API_BASE_URL";
pub const ALLOW_OFFLINE_KEY: &str = "AUTH_ALLOW_OFFLINE";
pub const VERIFY_TIMEOUT_KEY: &str = "AUTH_VERIFY_TIMEOUT_SECS";
pub const REFRESH_INTERVAL_KEY: &str = "AUTH_REFRESH_INTERVAL_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Origin of the auth API, without trailing slash.
    pub api_base_url: String,
    /// Accept the cached session when the authority is unreachable at startup.
    pub allow_offline_auth: bool,
    /// Upper bound on the startup verification call.
    pub verify_timeout: Duration,
    /// Token refresh period; `None` disables the refresher.
    pub refresh_interval: Option<Duration>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            allow_offline_auth: true,
            verify_timeout: Duration::from_secs(DEFAULT_VERIFY_TIMEOUT_SECS),
            refresh_interval: Some(Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECS)),
        }
    }
}

impl AuthConfig {
    /// Build config from a key lookup, falling back to defaults for absent keys.
    ///
    /// Keys:
    /// - `AUTH_API_BASE_URL`: default `http://localhost:8080`
    /// - `AUTH_ALLOW_OFFLINE`: `true`/`false`/`1`/`0`, default `true`
    /// - `AUTH_VERIFY_TIMEOUT_SECS`: default 10
    /// - `AUTH_REFRESH_INTERVAL_SECS`: default 1800, `0` disables refresh
    ///
    /// # Errors
    ///
    /// Returns `Config` when a present value does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SessionError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = lookup(API_BASE_URL_KEY)
            .map(|v| v.trim().trim_end_matches('/').to_owned())
            .unwrap_or(defaults.api_base_url);
        let allow_offline_auth = match lookup(ALLOW_OFFLINE_KEY) {
            Some(raw) => parse_bool(ALLOW_OFFLINE_KEY, &raw)?,
            None => defaults.allow_offline_auth,
        };
        let verify_timeout = match lookup(VERIFY_TIMEOUT_KEY) {
            Some(raw) => Duration::from_secs(parse_secs(VERIFY_TIMEOUT_KEY, &raw)?),
            None => defaults.verify_timeout,
        };
        if verify_timeout.is_zero() {
            return Err(SessionError::Config(format!("{VERIFY_TIMEOUT_KEY} must be positive")));
        }
        let refresh_interval = match lookup(REFRESH_INTERVAL_KEY) {
            Some(raw) => match parse_secs(REFRESH_INTERVAL_KEY, &raw)? {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
            None => defaults.refresh_interval,
        };

        Ok(Self { api_base_url, allow_offline_auth, verify_timeout, refresh_interval })
    }

    /// Build config from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `Config` when a set variable does not parse.
    pub fn from_env() -> Result<Self, SessionError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Initializer policy derived from this config.
    #[must_use]
    pub fn init(&self) -> InitConfig {
        InitConfig { allow_offline_auth: self.allow_offline_auth, verify_timeout: self.verify_timeout }
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, SessionError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(SessionError::Config(format!("{key}: expected boolean, got {other:?}"))),
    }
}

fn parse_secs(key: &str, raw: &str) -> Result<u64, SessionError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| SessionError::Config(format!("{key}: {e}")))
}
