use super::*;

fn alice() -> User {
    User { id: 1, username: "alice".to_owned(), email: "a@x.com".to_owned() }
}

// =============================================================================
// endpoint / bearer
// =============================================================================

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("http://localhost:8080", VERIFY_TOKEN_PATH), "http://localhost:8080/api/verify-token");
}

#[test]
fn endpoint_strips_trailing_slash() {
    assert_eq!(endpoint("http://api.test/", LOGIN_PATH), "http://api.test/api/login");
}

#[test]
fn endpoint_with_empty_base_is_relative() {
    assert_eq!(endpoint("", REFRESH_TOKEN_PATH), "/api/refresh-token");
}

#[test]
fn bearer_formats_header() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

// =============================================================================
// classify_verify
// =============================================================================

#[test]
fn verify_ok_with_user_is_valid_with_user() {
    let body = r#"{"user":{"id":1,"username":"alice","email":"a@x.com"}}"#;
    assert_eq!(classify_verify(200, body), Verification::Valid(Some(alice())));
}

#[test]
fn verify_ok_without_user_is_valid_without_user() {
    assert_eq!(classify_verify(200, r#"{"valid":true}"#), Verification::Valid(None));
    assert_eq!(classify_verify(204, ""), Verification::Valid(None));
}

#[test]
fn verify_client_errors_are_invalid() {
    assert_eq!(classify_verify(401, r#"{"message":"expired"}"#), Verification::Invalid);
    assert_eq!(classify_verify(403, ""), Verification::Invalid);
}

#[test]
fn verify_server_errors_are_invalid() {
    assert_eq!(classify_verify(500, r#"{"message":"db down"}"#), Verification::Invalid);
    assert_eq!(classify_verify(503, ""), Verification::Invalid);
}

#[test]
fn verify_garbage_success_body_is_unreachable() {
    assert!(matches!(classify_verify(200, "<html>proxy</html>"), Verification::Unreachable(_)));
}

// =============================================================================
// parse_auth_response
// =============================================================================

#[test]
fn auth_response_success_parses_user_and_token() {
    let body = r#"{"user":{"id":1,"username":"alice","email":"a@x.com"},"token":"tok-1"}"#;
    let resp = parse_auth_response(200, body, "Login failed").unwrap();
    assert_eq!(resp.user, alice());
    assert_eq!(resp.token, "tok-1");
}

#[test]
fn auth_response_failure_uses_server_message() {
    let err = parse_auth_response(401, r#"{"message":"Invalid credentials"}"#, "Login failed").unwrap_err();
    assert_eq!(err, SessionError::Rejected { status: 401, message: "Invalid credentials".to_owned() });
}

#[test]
fn auth_response_failure_without_message_uses_fallback() {
    let err = parse_auth_response(500, "oops", "Registration failed").unwrap_err();
    assert_eq!(err, SessionError::Rejected { status: 500, message: "Registration failed".to_owned() });
}

#[test]
fn auth_response_success_missing_token_is_malformed() {
    let body = r#"{"user":{"id":1,"username":"alice","email":"a@x.com"}}"#;
    assert!(matches!(parse_auth_response(200, body, "Login failed"), Err(SessionError::MalformedResponse(_))));
}

#[test]
fn login_request_serializes_expected_fields() {
    let req = LoginRequest { email: "a@x.com".to_owned(), password: "secret".to_owned() };
    assert_eq!(serde_json::to_value(&req).unwrap(), serde_json::json!({"email":"a@x.com","password":"secret"}));
}

// =============================================================================
// parse_refresh_response
// =============================================================================

#[test]
fn refresh_success_returns_token() {
    assert_eq!(parse_refresh_response(200, r#"{"token":"tok-2"}"#).unwrap(), "tok-2");
}

#[test]
fn refresh_401_is_unauthorized() {
    assert_eq!(parse_refresh_response(401, ""), Err(SessionError::Unauthorized));
}

#[test]
fn refresh_without_token_is_malformed() {
    assert!(matches!(parse_refresh_response(200, "{}"), Err(SessionError::MalformedResponse(_))));
}

#[test]
fn refresh_server_error_is_rejected() {
    assert!(matches!(parse_refresh_response(502, ""), Err(SessionError::Rejected { status: 502, .. })));
}
