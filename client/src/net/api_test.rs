use futures::executor::block_on;

use super::*;
use session::{CredentialStore, MemoryStore, SessionState};

fn alice() -> User {
    User { id: 1, username: "alice".to_owned(), email: "a@x.com".to_owned() }
}

#[test]
fn url_joins_base_and_endpoint() {
    let api = HttpAuthApi::new("http://localhost:8080/");
    assert_eq!(api.url(wire::VERIFY_TOKEN_PATH), "http://localhost:8080/api/verify-token");
    assert_eq!(api.url(wire::REFRESH_TOKEN_PATH), "http://localhost:8080/api/refresh-token");
}

#[test]
fn transport_error_is_network_unreachable() {
    assert_eq!(transport_error("refused"), SessionError::NetworkUnreachable("refused".to_owned()));
}

#[test]
fn decode_authorized_parses_success_body() {
    let resp: VerifyResponse =
        decode_authorized(200, r#"{"user":{"id":1,"username":"alice","email":"a@x.com"}}"#).unwrap();
    assert_eq!(resp.user, Some(alice()));
}

#[test]
fn decode_authorized_rejects_failure_status() {
    let err = decode_authorized::<VerifyResponse>(500, "").unwrap_err();
    assert!(matches!(err, SessionError::Rejected { status: 500, .. }));
}

#[test]
fn decode_authorized_flags_garbage() {
    let err = decode_authorized::<VerifyResponse>(200, "nope").unwrap_err();
    assert!(matches!(err, SessionError::MalformedResponse(_)));
}

#[test]
fn authorized_get_without_session_is_not_authenticated() {
    let auth = Auth::new(SessionState::new(), CredentialStore::new(MemoryStore::new()));
    let api = HttpAuthApi::new("http://localhost:8080");
    let err = block_on(api.fetch_account(&auth)).unwrap_err();
    assert_eq!(err, SessionError::NotAuthenticated);
}

#[cfg(not(feature = "csr"))]
#[test]
fn verify_outside_browser_counts_as_unreachable() {
    let api = HttpAuthApi::new("http://localhost:8080");
    assert!(matches!(block_on(api.verify("tok-1")), Verification::Unreachable(_)));
}

#[cfg(not(feature = "csr"))]
#[test]
fn host_stubs_keep_offline_session() {
    let auth = Auth::new(SessionState::new(), CredentialStore::new(MemoryStore::new()));
    auth.authenticate(alice(), "tok-1".to_owned()).unwrap();
    let api = HttpAuthApi::new("http://localhost:8080");
    assert!(matches!(block_on(api.fetch_account(&auth)), Err(SessionError::NetworkUnreachable(_))));
    assert!(auth.session().is_authenticated());
}

#[test]
fn unreadable_verify_body_is_unreachable_not_valid() {
    let verdict = classify_verify_body(200, Err::<String, _>("connection reset"));
    assert!(matches!(verdict, Verification::Unreachable(reason) if reason.contains("connection reset")));
}

#[test]
fn readable_verify_body_is_classified() {
    assert_eq!(classify_verify_body::<String>(200, Ok(String::new())), Verification::Valid(None));
    assert_eq!(classify_verify_body::<String>(401, Ok(String::new())), Verification::Invalid);
}
