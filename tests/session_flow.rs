mod common;

use anyhow::Result;
use serde_json::json;

use jobly::api::ApiError;
use jobly::model::{Credentials, SignupData};
use jobly::store::{SessionStore, TOKEN_KEY};

use common::{open_context, spawn_backend, token_for};

fn creds(username: &str, password: &str) -> Credentials {
    Credentials {
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[test]
fn login_persists_token_and_loads_user() -> Result<()> {
    let backend = spawn_backend()?;
    let dir = tempfile::tempdir()?;
    let mut ctx = open_context(&backend, dir.path())?;

    let user = ctx.login(&creds("testuser", "password"))?;
    assert_eq!(user.username, "testuser");
    assert!(user.applications.is_empty());

    let stored: Option<String> = SessionStore::open(dir.path()).read(TOKEN_KEY);
    assert_eq!(stored.as_deref(), Some(token_for("testuser").as_str()));
    assert_eq!(ctx.current_user().map(|u| u.username.as_str()), Some("testuser"));

    let fetches = backend.requests_to("GET", "/users/testuser");
    assert_eq!(fetches.len(), 1);
    assert_eq!(
        fetches[0].auth.as_deref(),
        Some(format!("Bearer {}", token_for("testuser")).as_str())
    );
    Ok(())
}

#[test]
fn rejected_login_persists_nothing() -> Result<()> {
    let backend = spawn_backend()?;
    let dir = tempfile::tempdir()?;
    let mut ctx = open_context(&backend, dir.path())?;

    let err = ctx.login(&creds("testuser", "wrong")).unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.messages(), vec!["Invalid username/password".to_string()]);

    assert!(ctx.current_user().is_none());
    assert!(ctx.client().token().is_none());
    let stored: Option<String> = SessionStore::open(dir.path()).read(TOKEN_KEY);
    assert!(stored.is_none());
    assert!(backend.requests_to("GET", "/users/testuser").is_empty());
    Ok(())
}

#[test]
fn logout_clears_session_and_restore_finds_nothing() -> Result<()> {
    let backend = spawn_backend()?;
    let dir = tempfile::tempdir()?;
    let mut ctx = open_context(&backend, dir.path())?;
    ctx.login(&creds("testuser", "password"))?;

    let before = backend.requests().len();
    ctx.logout();
    assert_eq!(backend.requests().len(), before, "logout is local only");
    assert!(ctx.current_user().is_none());
    assert!(ctx.client().token().is_none());

    let mut fresh = open_context(&backend, dir.path())?;
    assert!(!fresh.restore());
    assert!(fresh.current_user().is_none());
    Ok(())
}

#[test]
fn restore_rehydrates_from_stored_token() -> Result<()> {
    let backend = spawn_backend()?;
    let dir = tempfile::tempdir()?;
    open_context(&backend, dir.path())?.login(&creds("testuser", "password"))?;

    let mut ctx = open_context(&backend, dir.path())?;
    assert!(ctx.current_user().is_none());
    assert!(ctx.restore());
    assert_eq!(ctx.current_user().map(|u| u.username.as_str()), Some("testuser"));
    assert_eq!(ctx.client().token(), Some(token_for("testuser").as_str()));
    Ok(())
}

#[test]
fn restore_discards_undecodable_token() -> Result<()> {
    let backend = spawn_backend()?;
    let dir = tempfile::tempdir()?;
    SessionStore::open(dir.path()).write(TOKEN_KEY, "not-a-jwt");

    let mut ctx = open_context(&backend, dir.path())?;
    assert!(!ctx.restore());
    let stored: Option<String> = SessionStore::open(dir.path()).read(TOKEN_KEY);
    assert!(stored.is_none());
    assert!(backend.requests().is_empty());
    Ok(())
}

#[test]
fn signup_checks_required_fields_before_calling_backend() -> Result<()> {
    let backend = spawn_backend()?;
    let dir = tempfile::tempdir()?;
    let mut ctx = open_context(&backend, dir.path())?;

    let data = SignupData {
        username: "newbie".to_string(),
        password: "secret123".to_string(),
        ..SignupData::default()
    };
    match ctx.signup(&data) {
        Err(ApiError::Invalid(messages)) => {
            assert_eq!(messages.len(), 3);
            assert!(messages.iter().all(|m| m.ends_with("is required")));
        }
        other => panic!("expected Invalid, got {:?}", other.map(|u| u.username.clone())),
    }
    assert!(backend.requests().is_empty());
    Ok(())
}

#[test]
fn signup_signs_in_the_new_user() -> Result<()> {
    let backend = spawn_backend()?;
    let dir = tempfile::tempdir()?;
    let mut ctx = open_context(&backend, dir.path())?;

    let data = SignupData {
        username: "newbie".to_string(),
        password: "secret123".to_string(),
        first_name: "New".to_string(),
        last_name: "Bie".to_string(),
        email: "new@bie.dev".to_string(),
    };
    let user = ctx.signup(&data)?;
    assert_eq!(user.username, "newbie");
    assert_eq!(user.first_name, "New");

    let sent = backend.requests_to("POST", "/auth/register");
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].body["firstName"], "New");

    let dup = ctx.signup(&data).unwrap_err();
    assert_eq!(dup.messages(), vec!["Duplicate username: newbie".to_string()]);
    assert_eq!(ctx.current_user().map(|u| u.username.as_str()), Some("newbie"));
    Ok(())
}

#[test]
fn login_reports_failed_user_fetch_and_stays_signed_out() -> Result<()> {
    let backend = spawn_backend()?;
    let dir = tempfile::tempdir()?;
    let mut ctx = open_context(&backend, dir.path())?;
    backend.fail(
        "GET",
        "/users/testuser",
        500,
        json!({ "error": { "message": "user lookup failed", "status": 500 } }),
    );

    let err = ctx.login(&creds("testuser", "password")).unwrap_err();
    assert_eq!(err.messages(), vec!["user lookup failed".to_string()]);
    assert!(ctx.current_user().is_none());
    assert!(ctx.client().token().is_none());

    // The token was persisted before the fetch.
    let stored: Option<String> = SessionStore::open(dir.path()).read(TOKEN_KEY);
    assert_eq!(stored.as_deref(), Some(token_for("testuser").as_str()));
    assert_eq!(backend.requests_to("GET", "/users/testuser").len(), 1);
    Ok(())
}

#[test]
fn restore_keeps_token_when_user_fetch_fails() -> Result<()> {
    let backend = spawn_backend()?;
    let dir = tempfile::tempdir()?;
    open_context(&backend, dir.path())?.login(&creds("testuser", "password"))?;
    backend.fail(
        "GET",
        "/users/testuser",
        500,
        json!({ "error": { "message": "user lookup failed", "status": 500 } }),
    );

    let mut ctx = open_context(&backend, dir.path())?;
    assert!(!ctx.restore());
    assert!(ctx.current_user().is_none());
    assert!(ctx.client().token().is_none());

    let stored: Option<String> = SessionStore::open(dir.path()).read(TOKEN_KEY);
    assert_eq!(stored.as_deref(), Some(token_for("testuser").as_str()));
    assert_eq!(backend.requests_to("GET", "/users/testuser").len(), 2);
    Ok(())
}
