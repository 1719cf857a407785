use super::*;
use session::User;

fn session_for(username: &str) -> Session {
    Session::authenticated(
        User { id: 7, username: username.to_owned(), email: format!("{username}@x.com") },
        "tok".to_owned(),
    )
}

// =============================================================
// Header identity helpers
// =============================================================

#[test]
fn guest_fallbacks_when_signed_out() {
    let session = Session::default();
    assert_eq!(display_name(&session), "Guest");
    assert_eq!(display_email(&session), "guest@example.com");
    assert_eq!(avatar_initial(&session), 'G');
}

#[test]
fn signed_in_identity_is_displayed() {
    let session = session_for("alice");
    assert_eq!(display_name(&session), "alice");
    assert_eq!(display_email(&session), "alice@x.com");
    assert_eq!(avatar_initial(&session), 'A');
}

#[test]
fn empty_username_falls_back_to_guest_initial() {
    assert_eq!(avatar_initial(&session_for("")), 'G');
}
