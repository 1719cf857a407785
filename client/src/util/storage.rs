//! Browser `localStorage` backend for the credential store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the web-sys storage glue so `session::CredentialStore` can
//! persist the token and user record without knowing about the DOM. Outside
//! the browser every call reports the store as unavailable.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use session::{KeyValueStore, SessionError};

/// `window.localStorage`, looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
fn storage() -> Result<web_sys::Storage, SessionError> {
    let window = web_sys::window().ok_or_else(|| unavailable("no window"))?;
    window
        .local_storage()
        .map_err(|e| unavailable(&format!("{e:?}")))?
        .ok_or_else(|| unavailable("localStorage disabled"))
}

fn unavailable(reason: &str) -> SessionError {
    SessionError::StorageUnavailable(reason.to_owned())
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        #[cfg(feature = "csr")]
        {
            storage()?.get_item(key).map_err(|e| unavailable(&format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(unavailable("localStorage requires a browser"))
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        #[cfg(feature = "csr")]
        {
            storage()?.set_item(key, value).map_err(|e| unavailable(&format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(unavailable("localStorage requires a browser"))
        }
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        #[cfg(feature = "csr")]
        {
            storage()?.remove_item(key).map_err(|e| unavailable(&format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(unavailable("localStorage requires a browser"))
        }
    }
}
