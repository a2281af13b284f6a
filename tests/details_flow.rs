mod common;

use base64::Engine;
use common::{context_in, logged_in, ScriptedApi};
use textify::flows::details;
use textify::Endpoint;

fn encoded(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

#[test]
fn test_fetch_writes_up_to_four_examples() {
    let dir = tempfile::tempdir().unwrap();
    let api = ScriptedApi::new();
    let mut ctx = logged_in(dir.path(), &api, "4");
    ctx.symbol.select(7);

    let payload: Vec<String> = (1..=5u8).map(|i| encoded(&[i; 3])).collect();
    api.reply(200, &serde_json::to_string(&payload).unwrap());

    assert_eq!(details::fetch_examples(&ctx).unwrap(), 4);

    let request = api.last_request();
    assert_eq!(request.endpoint, Endpoint::Drawings);
    assert_eq!(request.field_value("userId"), Some("4"));
    assert_eq!(request.field_value("label"), Some("7"));

    for slot in 1..=4u8 {
        let path = ctx.config().sample_image_path(slot as usize);
        assert_eq!(std::fs::read(path).unwrap(), vec![slot; 3]);
    }
    assert!(!ctx.config().sample_image_path(5).exists());
}

#[test]
fn test_fetch_sends_sentinel_when_logged_out() {
    let dir = tempfile::tempdir().unwrap();
    let api = ScriptedApi::new();
    let ctx = context_in(dir.path(), &api);

    api.reply(200, "[]");
    assert_eq!(details::fetch_examples(&ctx).unwrap(), 0);
    assert_eq!(api.last_request().field_value("userId"), Some("-1"));
}

#[test]
fn test_fetch_rejects_malformed_payload() {
    let dir = tempfile::tempdir().unwrap();
    let api = ScriptedApi::new();
    let ctx = context_in(dir.path(), &api);

    api.reply(200, "<html>oops</html>");
    let notice = details::fetch_examples(&ctx).unwrap_err();
    assert_eq!(notice.title, "Error!");

    api.reply(200, r#"["%%%"]"#);
    assert!(details::fetch_examples(&ctx).is_err());
}

#[test]
fn test_fetch_surfaces_server_error() {
    let dir = tempfile::tempdir().unwrap();
    let api = ScriptedApi::new();
    let ctx = context_in(dir.path(), &api);

    api.reply(404, "Unknown label");
    assert_eq!(details::fetch_examples(&ctx).unwrap_err().message, "Unknown label");
}

#[test]
fn test_navigation_is_bounded() {
    let dir = tempfile::tempdir().unwrap();
    let api = ScriptedApi::new();
    let mut ctx = context_in(dir.path(), &api);

    ctx.symbol.select(0);
    assert_eq!(details::previous(&mut ctx), Ok(false));
    assert_eq!(ctx.symbol.index(), 0);

    ctx.symbol.select(25);
    assert_eq!(details::next(&mut ctx), Ok(false));
    assert_eq!(ctx.symbol.index(), 25);

    assert_eq!(api.request_count(), 0);
}

#[test]
fn test_navigation_refreshes_examples() {
    let dir = tempfile::tempdir().unwrap();
    let api = ScriptedApi::new();
    let mut ctx = context_in(dir.path(), &api);

    api.reply(200, "[]");
    assert_eq!(details::next(&mut ctx), Ok(true));
    assert_eq!(ctx.symbol.symbol(), "B");
    assert_eq!(api.last_request().field_value("label"), Some("1"));

    api.reply(200, "[]");
    assert_eq!(details::previous(&mut ctx), Ok(true));
    assert_eq!(api.last_request().field_value("label"), Some("0"));
}

#[test]
fn test_navigation_connection_error() {
    let dir = tempfile::tempdir().unwrap();
    let api = ScriptedApi::new();
    let mut ctx = context_in(dir.path(), &api);
    ctx.symbol.select(3);

    api.fail_transport();
    let notice = details::next(&mut ctx).unwrap_err();
    assert!(notice.is_connection_error());
    assert_eq!(ctx.symbol.index(), 3);

    api.fail_transport();
    assert!(details::previous(&mut ctx).unwrap_err().is_connection_error());
    assert_eq!(ctx.symbol.symbol(), "D");
}

#[test]
fn test_navigation_keeps_new_symbol_on_server_error() {
    let dir = tempfile::tempdir().unwrap();
    let api = ScriptedApi::new();
    let mut ctx = context_in(dir.path(), &api);
    ctx.symbol.select(3);

    api.reply(500, "Internal error");
    assert_eq!(details::next(&mut ctx).unwrap_err().message, "Internal error");
    assert_eq!(ctx.symbol.index(), 4);
}
