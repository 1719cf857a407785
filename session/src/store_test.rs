use super::*;

fn alice() -> User {
    User { id: 1, username: "alice".to_owned(), email: "a@x.com".to_owned() }
}

/// Backend that refuses writes to one key.
#[derive(Clone, Default)]
struct RejectingStore {
    inner: MemoryStore,
    reject_key: &'static str,
}

impl KeyValueStore for RejectingStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        if key == self.reject_key {
            return Err(SessionError::StorageUnavailable("quota exceeded".to_owned()));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.inner.remove(key)
    }
}

// =============================================================================
// MemoryStore
// =============================================================================

#[test]
fn memory_store_get_missing_is_none() {
    assert_eq!(MemoryStore::new().get("nope").unwrap(), None);
}

#[test]
fn memory_store_clones_share_entries() {
    let a = MemoryStore::new();
    let b = a.clone();
    a.set("k", "v").unwrap();
    assert_eq!(b.get("k").unwrap().as_deref(), Some("v"));
}

// =============================================================================
// save / load
// =============================================================================

#[test]
fn save_then_load_returns_same_credentials() {
    let store = CredentialStore::new(MemoryStore::new());
    store.save("tok-1", &alice()).unwrap();
    let creds = store.load().unwrap();
    assert_eq!(creds.token, "tok-1");
    assert_eq!(creds.user, alice());
}

#[test]
fn save_writes_both_fixed_keys() {
    let backend = MemoryStore::new();
    let store = CredentialStore::new(backend.clone());
    store.save("tok-1", &alice()).unwrap();
    assert_eq!(backend.get(TOKEN_KEY).unwrap().as_deref(), Some("tok-1"));
    let raw = backend.get(USER_KEY).unwrap().unwrap();
    assert_eq!(serde_json::from_str::<User>(&raw).unwrap(), alice());
}

#[test]
fn load_empty_store_is_missing() {
    let store = CredentialStore::new(MemoryStore::new());
    assert_eq!(store.load(), Err(SessionError::StorageMissing));
}

#[test]
fn load_with_only_token_is_missing() {
    let backend = MemoryStore::new();
    backend.set(TOKEN_KEY, "tok-1").unwrap();
    assert_eq!(CredentialStore::new(backend).load(), Err(SessionError::StorageMissing));
}

#[test]
fn load_with_only_user_is_missing() {
    let backend = MemoryStore::new();
    backend.set(USER_KEY, r#"{"id":1,"username":"alice","email":"a@x.com"}"#).unwrap();
    assert_eq!(CredentialStore::new(backend).load(), Err(SessionError::StorageMissing));
}

#[test]
fn load_with_empty_token_is_missing() {
    let backend = MemoryStore::new();
    backend.set(TOKEN_KEY, "").unwrap();
    backend.set(USER_KEY, r#"{"id":1,"username":"alice","email":"a@x.com"}"#).unwrap();
    assert_eq!(CredentialStore::new(backend).load(), Err(SessionError::StorageMissing));
}

#[test]
fn load_with_garbage_user_is_corrupt() {
    let backend = MemoryStore::new();
    backend.set(TOKEN_KEY, "tok-1").unwrap();
    backend.set(USER_KEY, "{not json").unwrap();
    let err = CredentialStore::new(backend).load().unwrap_err();
    assert!(matches!(err, SessionError::StorageCorrupt(_)));
}

#[test]
fn failed_user_write_is_reported_and_token_rolled_back() {
    let backend = RejectingStore { inner: MemoryStore::new(), reject_key: USER_KEY };
    let store = CredentialStore::new(backend.clone());
    let err = store.save("tok-1", &alice()).unwrap_err();
    assert!(matches!(err, SessionError::StorageUnavailable(_)));
    assert_eq!(backend.get(TOKEN_KEY).unwrap(), None);
}

#[test]
fn failed_token_write_is_reported() {
    let backend = RejectingStore { inner: MemoryStore::new(), reject_key: TOKEN_KEY };
    let store = CredentialStore::new(backend.clone());
    assert!(store.save("tok-1", &alice()).is_err());
    assert_eq!(backend.get(USER_KEY).unwrap(), None);
}

// =============================================================================
// clear
// =============================================================================

#[test]
fn clear_removes_both_keys() {
    let store = CredentialStore::new(MemoryStore::new());
    store.save("tok-1", &alice()).unwrap();
    store.clear().unwrap();
    assert_eq!(store.load(), Err(SessionError::StorageMissing));
    assert_eq!(store.backend().get(TOKEN_KEY).unwrap(), None);
    assert_eq!(store.backend().get(USER_KEY).unwrap(), None);
}

#[test]
fn clear_twice_is_a_noop() {
    let store = CredentialStore::new(MemoryStore::new());
    store.save("tok-1", &alice()).unwrap();
    store.clear().unwrap();
    store.clear().unwrap();
    assert_eq!(store.load(), Err(SessionError::StorageMissing));
}
