mod common;

use common::{context_in, logged_in, ScriptedApi};
use textify::flows::auth;
use textify::{Endpoint, Notice, Token};

#[test]
fn test_login_success_sets_and_persists_token() {
    let dir = tempfile::tempdir().unwrap();
    let api = ScriptedApi::new();
    api.reply(200, "42\n");

    let mut ctx = context_in(dir.path(), &api);
    auth::login(&mut ctx, "ada@example.org", "secret").unwrap();

    assert_eq!(ctx.token(), &Token::User("42".into()));
    let request = api.last_request();
    assert_eq!(request.endpoint, Endpoint::Login);
    assert_eq!(request.field_value("email"), Some("ada@example.org"));
    assert_eq!(request.field_value("password"), Some("secret"));

    // A fresh start over the same store is already logged in
    let restarted = context_in(dir.path(), &api);
    assert!(restarted.is_logged_in());
    assert_eq!(restarted.token().as_form_value(), "42");
}

#[test]
fn test_login_rejected_shows_server_body() {
    let dir = tempfile::tempdir().unwrap();
    let api = ScriptedApi::new();
    api.reply(401, "Invalid credentials");

    let mut ctx = context_in(dir.path(), &api);
    let notice = auth::login(&mut ctx, "ada@example.org", "wrong").unwrap_err();

    assert_eq!(notice, Notice::error("Invalid credentials"));
    assert!(!ctx.is_logged_in());
    assert!(!context_in(dir.path(), &api).is_logged_in());
}

#[test]
fn test_connection_error_leaves_session_alone() {
    let dir = tempfile::tempdir().unwrap();
    let api = ScriptedApi::new();
    api.fail_transport();

    let mut ctx = logged_in(dir.path(), &api, "7");
    let notice = auth::login(&mut ctx, "other@example.org", "pw").unwrap_err();

    assert!(notice.is_connection_error());
    assert_eq!(notice.message, "Please check your internet connection!");
    assert_eq!(ctx.token(), &Token::User("7".into()));
}

#[test]
fn test_register_sends_confirmation() {
    let dir = tempfile::tempdir().unwrap();
    let api = ScriptedApi::new();
    api.reply(200, "3");

    let mut ctx = context_in(dir.path(), &api);
    auth::register(&mut ctx, "new@example.org", "pw", "pw").unwrap();

    let request = api.last_request();
    assert_eq!(request.endpoint, Endpoint::Register);
    assert_eq!(request.field_value("confirmation"), Some("pw"));
    assert!(ctx.is_logged_in());
}

#[test]
fn test_register_mismatch_reported_by_server() {
    let dir = tempfile::tempdir().unwrap();
    let api = ScriptedApi::new();
    api.reply(400, "Passwords do not match");

    let mut ctx = context_in(dir.path(), &api);
    let notice = auth::register(&mut ctx, "new@example.org", "a", "b").unwrap_err();
    assert_eq!(notice.title, "Error!");
    assert_eq!(notice.message, "Passwords do not match");
}

#[test]
fn test_empty_token_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let api = ScriptedApi::new();
    api.reply(200, "  ");

    let mut ctx = context_in(dir.path(), &api);
    assert!(auth::login(&mut ctx, "a", "b").is_err());
    assert!(!ctx.is_logged_in());
}

#[test]
fn test_logout_forgets_persisted_session() {
    let dir = tempfile::tempdir().unwrap();
    let api = ScriptedApi::new();

    let mut ctx = logged_in(dir.path(), &api, "9");
    auth::logout(&mut ctx).unwrap();

    assert_eq!(ctx.token(), &Token::Unauthenticated);
    assert!(!context_in(dir.path(), &api).is_logged_in());
    assert_eq!(api.request_count(), 0);
}
