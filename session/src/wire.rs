//! HTTP wire schema for the auth API and response classification.
//!
//! DESIGN
//! ======
//! Classification works on `(status, body)` pairs so the HTTP client in the
//! `client` crate stays a thin transport and every policy decision here is
//! testable without a browser.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::types::User;
use crate::verifier::Verification;

pub const LOGIN_PATH: &str = "/api/login";
pub const REGISTER_PATH: &str = "/api/register";
pub const VERIFY_TOKEN_PATH: &str = "/api/verify-token";
pub const REFRESH_TOKEN_PATH: &str = "/api/refresh-token";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of a successful login or registration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct VerifyResponse {
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RefreshResponse {
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Join `path` onto `base`, tolerating a trailing slash on the base.
#[must_use]
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// `Authorization` header value for `token`.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}

/// Classify a `GET /api/verify-token` response.
///
/// Any non-success status means the authority answered and refused the
/// token. Only an undecodable success body counts as unavailable; transport
/// failures and timeouts are mapped by the caller.
#[must_use]
pub fn classify_verify(status: u16, body: &str) -> Verification {
    if is_success(status) {
        if body.trim().is_empty() {
            return Verification::Valid(None);
        }
        return match serde_json::from_str::<VerifyResponse>(body) {
            Ok(resp) => Verification::Valid(resp.user),
            Err(e) => Verification::Unreachable(format!("undecodable verify response: {e}")),
        };
    }
    Verification::Invalid
}

/// Parse a login/register response.
///
/// # Errors
///
/// `Rejected` with the server `message` (or `fallback`) for non-success
/// statuses, `MalformedResponse` when a success body lacks `user`/`token`.
pub fn parse_auth_response(status: u16, body: &str, fallback: &str) -> Result<AuthResponse, SessionError> {
    if !is_success(status) {
        return Err(SessionError::Rejected { status, message: error_message(body, fallback) });
    }
    serde_json::from_str::<AuthResponse>(body).map_err(|e| SessionError::MalformedResponse(e.to_string()))
}

/// Parse a `POST /api/refresh-token` response into the new token.
///
/// # Errors
///
/// `Unauthorized` for 401, `Rejected` for other failures and
/// `MalformedResponse` when the body carries no token.
pub fn parse_refresh_response(status: u16, body: &str) -> Result<String, SessionError> {
    if status == 401 {
        return Err(SessionError::Unauthorized);
    }
    if !is_success(status) {
        return Err(SessionError::Rejected { status, message: error_message(body, "token refresh failed") });
    }
    serde_json::from_str::<RefreshResponse>(body)
        .map_err(|e| SessionError::MalformedResponse(e.to_string()))?
        .token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| SessionError::MalformedResponse("refresh response carried no token".to_owned()))
}
