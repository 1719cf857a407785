//! Durable credential persistence over a pluggable key-value backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser the backend is `localStorage` (see the `client` crate); on
//! the host and in tests it is `MemoryStore`. The two keys are part of the
//! on-disk contract with previously written sessions and must not change.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::SessionError;
use crate::types::{Credentials, User};

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "auth_token";
/// Storage key holding the JSON-serialized [`User`].
pub const USER_KEY: &str = "user_data";

/// Minimal string key-value persistence.
pub trait KeyValueStore {
    /// Read `key`, `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Remove `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the backend rejects the removal.
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// In-process backend; clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<R>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> R) -> Result<R, SessionError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| SessionError::StorageUnavailable("memory store lock poisoned".to_owned()))?;
        Ok(f(&mut entries))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        self.with_entries(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.with_entries(|entries| {
            entries.insert(key.to_owned(), value.to_owned());
        })
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.with_entries(|entries| {
            entries.remove(key);
        })
    }
}

/// Token/user persistence under [`TOKEN_KEY`] and [`USER_KEY`].
#[derive(Clone, Debug, Default)]
pub struct CredentialStore<K> {
    backend: K,
}

impl<K: KeyValueStore> CredentialStore<K> {
    pub fn new(backend: K) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    /// Persist `token` and `user`.
    ///
    /// The token is written first; if the user write fails the token is
    /// removed again so a later `load` does not find half a record.
    ///
    /// # Errors
    ///
    /// Returns the backend error of whichever write failed.
    pub fn save(&self, token: &str, user: &User) -> Result<(), SessionError> {
        let raw = serde_json::to_string(user).map_err(|e| SessionError::StorageUnavailable(e.to_string()))?;
        self.backend.set(TOKEN_KEY, token)?;
        if let Err(e) = self.backend.set(USER_KEY, &raw) {
            if let Err(rollback) = self.backend.remove(TOKEN_KEY) {
                log::warn!("credential store: token rollback failed: {rollback}");
            }
            return Err(e);
        }
        Ok(())
    }

    /// Read the persisted credentials.
    ///
    /// # Errors
    ///
    /// `StorageMissing` when either key is absent (or the token is empty),
    /// `StorageCorrupt` when the user record is not valid JSON for [`User`].
    /// The caller is responsible for clearing corrupt data.
    pub fn load(&self) -> Result<Credentials, SessionError> {
        let token = self.backend.get(TOKEN_KEY)?.filter(|t| !t.is_empty());
        let raw = self.backend.get(USER_KEY)?;
        let (Some(token), Some(raw)) = (token, raw) else {
            return Err(SessionError::StorageMissing);
        };
        let user = serde_json::from_str::<User>(&raw).map_err(|e| SessionError::StorageCorrupt(e.to_string()))?;
        Ok(Credentials { token, user })
    }

    /// Remove both keys. Idempotent; both removals are attempted even if the
    /// first fails.
    ///
    /// # Errors
    ///
    /// Returns the first backend failure.
    pub fn clear(&self) -> Result<(), SessionError> {
        let token = self.backend.remove(TOKEN_KEY);
        let user = self.backend.remove(USER_KEY);
        token.and(user)
    }
}
