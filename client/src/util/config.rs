//! Build-time auth configuration.
//!
//! WASM has no process environment, so overrides are baked in when the crate
//! is compiled (`AUTH_API_BASE_URL=... trunk build`). Invalid values fall back
//! to defaults with an error in the console rather than failing to start.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use session::AuthConfig;
use session::config::{ALLOW_OFFLINE_KEY, API_BASE_URL_KEY, REFRESH_INTERVAL_KEY, VERIFY_TIMEOUT_KEY};

fn compiled(key: &str) -> Option<String> {
    let value = match key {
        API_BASE_URL_KEY => option_env!("AUTH_API_BASE_URL"),
        ALLOW_OFFLINE_KEY => option_env!("AUTH_ALLOW_OFFLINE"),
        VERIFY_TIMEOUT_KEY => option_env!("AUTH_VERIFY_TIMEOUT_SECS"),
        REFRESH_INTERVAL_KEY => option_env!("AUTH_REFRESH_INTERVAL_SECS"),
        _ => None,
    };
    value.map(str::to_owned)
}

/// Auth config from compile-time overrides, or defaults if they do not parse.
pub fn build_config() -> AuthConfig {
    AuthConfig::from_lookup(compiled).unwrap_or_else(|e| {
        log::error!("auth config: {e}; using defaults");
        AuthConfig::default()
    })
}
