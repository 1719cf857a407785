use std::sync::{Arc, Mutex};

use super::*;
use crate::state::SessionState;
use crate::store::{CredentialStore, MemoryStore};
use crate::task::cancellable;
use crate::types::User;

fn alice() -> User {
    User { id: 1, username: "alice".to_owned(), email: "a@x.com".to_owned() }
}

#[derive(Clone)]
struct TokioTimer;

impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Refresher that pops scripted answers and records the tokens it was given.
#[derive(Clone, Default)]
struct ScriptedRefresher {
    answers: Arc<Mutex<Vec<Result<String, SessionError>>>>,
    seen: Arc<Mutex<Vec<String>>>,
}

impl ScriptedRefresher {
    fn with(answers: Vec<Result<String, SessionError>>) -> Self {
        let mut answers = answers;
        answers.reverse();
        Self { answers: Arc::new(Mutex::new(answers)), seen: Arc::default() }
    }

    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl TokenRefresher for ScriptedRefresher {
    async fn refresh(&self, token: &str) -> Result<String, SessionError> {
        self.seen.lock().unwrap().push(token.to_owned());
        self.answers
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Err(SessionError::NetworkUnreachable("script exhausted".to_owned())))
    }
}

fn signed_in() -> Auth<MemoryStore> {
    let auth = Auth::new(SessionState::new(), CredentialStore::new(MemoryStore::new()));
    auth.authenticate(alice(), "tok-1".to_owned()).unwrap();
    auth
}

#[tokio::test]
async fn tick_skips_without_session() {
    let auth = Auth::new(SessionState::new(), CredentialStore::new(MemoryStore::new()));
    let remote = ScriptedRefresher::with(vec![Ok("tok-2".to_owned())]);
    let refresher = Refresher::new(auth, remote.clone(), TokioTimer, Duration::from_secs(60));
    assert_eq!(refresher.tick().await, RefreshOutcome::Skipped);
    assert!(remote.seen().is_empty());
}

#[tokio::test]
async fn tick_rotates_token_and_persists_it() {
    let auth = signed_in();
    let remote = ScriptedRefresher::with(vec![Ok("tok-2".to_owned())]);
    let refresher = Refresher::new(auth.clone(), remote.clone(), TokioTimer, Duration::from_secs(60));

    assert_eq!(refresher.tick().await, RefreshOutcome::Refreshed);
    assert_eq!(remote.seen(), vec!["tok-1".to_owned()]);
    assert_eq!(auth.session().token(), Some("tok-2"));
    assert_eq!(auth.store().load().unwrap().token, "tok-2");
}

#[tokio::test]
async fn failed_refresh_keeps_session() {
    let auth = signed_in();
    let remote = ScriptedRefresher::with(vec![Err(SessionError::Unauthorized)]);
    let refresher = Refresher::new(auth.clone(), remote, TokioTimer, Duration::from_secs(60));

    assert_eq!(refresher.tick().await, RefreshOutcome::Failed(SessionError::Unauthorized));
    assert_eq!(auth.session().token(), Some("tok-1"));
    assert!(auth.store().load().is_ok());
}

#[tokio::test(start_paused = true)]
async fn run_retries_after_failure_on_next_interval() {
    let auth = signed_in();
    let remote = ScriptedRefresher::with(vec![
        Err(SessionError::NetworkUnreachable("offline".to_owned())),
        Ok("tok-2".to_owned()),
    ]);
    let refresher = Refresher::new(auth.clone(), remote.clone(), TokioTimer, Duration::from_secs(60));
    let (task, handle) = cancellable(refresher.run());
    let join = tokio::spawn(task);

    tokio::time::sleep(Duration::from_secs(61)).await;
    assert_eq!(auth.session().token(), Some("tok-1"));
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(auth.session().token(), Some("tok-2"));

    handle.cancel();
    join.await.unwrap();
    assert_eq!(remote.seen(), vec!["tok-1".to_owned(), "tok-1".to_owned()]);
}

/// Refresher whose server call races a logout and a login as someone else.
#[derive(Clone)]
struct RelogDuringRefresh {
    auth: Auth<MemoryStore>,
}

impl TokenRefresher for RelogDuringRefresh {
    async fn refresh(&self, token: &str) -> Result<String, SessionError> {
        self.auth.logout();
        let bob = User { id: 2, username: "bob".to_owned(), email: "b@x.com".to_owned() };
        self.auth.authenticate(bob, "bob-tok".to_owned())?;
        Ok(format!("{token}-rotated"))
    }
}

#[tokio::test]
async fn rotated_token_is_dropped_when_session_changed_mid_flight() {
    let auth = signed_in();
    let remote = RelogDuringRefresh { auth: auth.clone() };
    let refresher = Refresher::new(auth.clone(), remote, TokioTimer, Duration::from_secs(60));

    assert_eq!(refresher.tick().await, RefreshOutcome::Skipped);
    let session = auth.session();
    assert_eq!(session.user().map(|u| u.username.as_str()), Some("bob"));
    assert_eq!(session.token(), Some("bob-tok"));
    assert_eq!(auth.store().load().unwrap().token, "bob-tok");
}
