//! Integration tests for the identity directory.

mod helpers;

use http::StatusCode;
use serde_json::json;

use pawmart_core::config::AppConfig;

use helpers::{TEST_SECRET, TestApp};

#[tokio::test]
async fn test_repeated_sync_keeps_one_record() {
    let app = TestApp::new();
    let body = json!({"email": "a@x.com", "name": "Ana", "photo": "https://img/ana.png"});

    let first = app.request("POST", "/users", Some(body.clone()), None).await;
    let second = app.request("POST", "/users", Some(body), None).await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["success"], true);
    assert_eq!(first.body["result"]["inserted"], true);
    assert_eq!(second.body["result"]["inserted"], false);
    assert_eq!(first.body["result"]["id"], second.body["result"]["id"]);
    assert_eq!(app.count("users"), 1);
}

#[tokio::test]
async fn test_sync_replaces_attributes() {
    let app = TestApp::new();

    let first = app
        .request(
            "POST",
            "/users",
            Some(json!({"email": "a@x.com", "name": "Ana", "photo": "p1"})),
            None,
        )
        .await;
    let second = app
        .request(
            "POST",
            "/users",
            Some(json!({"email": "a@x.com", "name": "Ana B"})),
            None,
        )
        .await;

    let entry = &second.body["result"]["entry"];
    assert_eq!(entry["name"], "Ana B");
    assert!(entry.get("photo").is_none());
    assert_eq!(entry["created_at"], first.body["result"]["entry"]["created_at"]);
}

#[tokio::test]
async fn test_sync_without_email_is_rejected() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/users", Some(json!({"name": "Nobody"})), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.count("users"), 0);
}

#[tokio::test]
async fn test_authenticated_directory_mode() {
    let mut config = AppConfig::with_secret(TEST_SECRET);
    config.directory.require_authentication = true;
    let app = TestApp::with_config(config);
    let alice = app.token_for("a@x.com").await;
    let body = json!({"email": "a@x.com", "name": "Ana"});

    let anonymous = app.request("POST", "/users", Some(body.clone()), None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let other = app
        .request(
            "POST",
            "/users",
            Some(json!({"email": "b@x.com"})),
            Some(&alice),
        )
        .await;
    assert_eq!(other.status, StatusCode::FORBIDDEN);

    let own = app.request("POST", "/users", Some(body), Some(&alice)).await;
    assert_eq!(own.status, StatusCode::OK);
    assert_eq!(app.count("users"), 1);
}
