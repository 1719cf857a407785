//! REST API helpers for communicating with the auth server.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Host builds: stubs that report the server as unreachable, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures map to `NetworkUnreachable`; every status decision is
//! delegated to `session::wire` so this module never decides policy.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
#[cfg(feature = "csr")]
use serde::Serialize;

use session::wire::{self, AuthResponse, LoginRequest, RegisterRequest, VerifyResponse};
use session::{Auth, KeyValueStore, SessionError, TokenRefresher, TokenVerifier, User, Verification};

#[cfg(any(test, feature = "csr"))]
fn transport_error(err: impl std::fmt::Display) -> SessionError {
    SessionError::NetworkUnreachable(err.to_string())
}

#[cfg(not(feature = "csr"))]
fn not_in_browser() -> SessionError {
    SessionError::NetworkUnreachable("not available outside the browser".to_owned())
}

/// HTTP client for the auth endpoints under one base URL.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn url(&self, path: &str) -> String {
        wire::endpoint(&self.base_url, path)
    }

    /// `POST /api/login`.
    ///
    /// # Errors
    ///
    /// `Rejected` with the server message on bad credentials, or a transport error.
    pub async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, SessionError> {
        #[cfg(feature = "csr")]
        {
            self.post_credentials(wire::LOGIN_PATH, req, "Login failed").await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = req;
            Err(not_in_browser())
        }
    }

    /// `POST /api/register`.
    ///
    /// # Errors
    ///
    /// `Rejected` with the server message, or a transport error.
    pub async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, SessionError> {
        #[cfg(feature = "csr")]
        {
            self.post_credentials(wire::REGISTER_PATH, req, "Registration failed").await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = req;
            Err(not_in_browser())
        }
    }

    #[cfg(feature = "csr")]
    async fn post_credentials<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        fallback: &str,
    ) -> Result<AuthResponse, SessionError> {
        let resp = gloo_net::http::Request::post(&self.url(path))
            .json(body)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        let status = resp.status();
        let text = resp.text().await.map_err(transport_error)?;
        wire::parse_auth_response(status, &text, fallback)
    }

    /// Authenticated `GET` of `path`, decoded as JSON.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Unauthorized` on 401, after the
    /// session has been logged out; `Rejected` for other failures.
    pub async fn authorized_get<K, T>(&self, auth: &Auth<K>, path: &str) -> Result<T, SessionError>
    where
        K: KeyValueStore,
        T: DeserializeOwned,
    {
        let header = auth.authorization().ok_or(SessionError::NotAuthenticated)?;
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.url(path))
                .header("Authorization", &header)
                .header("Content-Type", "application/json")
                .send()
                .await
                .map_err(transport_error)?;
            let status = resp.status();
            auth.observe_status(status)?;
            let text = resp.text().await.map_err(transport_error)?;
            decode_authorized(status, &text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (header, path);
            Err(not_in_browser())
        }
    }

    /// Server-confirmed account for the current token.
    ///
    /// # Errors
    ///
    /// See [`HttpAuthApi::authorized_get`].
    pub async fn fetch_account<K: KeyValueStore>(&self, auth: &Auth<K>) -> Result<Option<User>, SessionError> {
        let resp: VerifyResponse = self.authorized_get(auth, wire::VERIFY_TOKEN_PATH).await?;
        Ok(resp.user)
    }
}

#[cfg(any(test, feature = "csr"))]
fn decode_authorized<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, SessionError> {
    if !(200..300).contains(&status) {
        return Err(SessionError::Rejected { status, message: format!("request failed: {status}") });
    }
    serde_json::from_str(body).map_err(|e| SessionError::MalformedResponse(e.to_string()))
}

/// Classify a verify response whose body may have failed to arrive.
#[cfg(any(test, feature = "csr"))]
fn classify_verify_body<E: std::fmt::Display>(status: u16, body: Result<String, E>) -> Verification {
    match body {
        Ok(text) => wire::classify_verify(status, &text),
        Err(e) => Verification::Unreachable(format!("verify response unreadable: {e}")),
    }
}

impl TokenVerifier for HttpAuthApi {
    async fn verify(&self, token: &str) -> Verification {
        #[cfg(feature = "csr")]
        {
            let sent = gloo_net::http::Request::get(&self.url(wire::VERIFY_TOKEN_PATH))
                .header("Authorization", &wire::bearer(token))
                .header("Content-Type", "application/json")
                .send()
                .await;
            let resp = match sent {
                Ok(resp) => resp,
                Err(e) => return Verification::Unreachable(e.to_string()),
            };
            let status = resp.status();
            classify_verify_body(status, resp.text().await)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Verification::Unreachable(not_in_browser().to_string())
        }
    }
}

impl TokenRefresher for HttpAuthApi {
    async fn refresh(&self, token: &str) -> Result<String, SessionError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.url(wire::REFRESH_TOKEN_PATH))
                .header("Authorization", &wire::bearer(token))
                .header("Content-Type", "application/json")
                .send()
                .await
                .map_err(transport_error)?;
            let status = resp.status();
            let text = resp.text().await.map_err(transport_error)?;
            wire::parse_refresh_response(status, &text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(not_in_browser())
        }
    }
}
