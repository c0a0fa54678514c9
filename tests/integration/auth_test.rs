//! Integration tests for credential issuing and the authentication guard.

mod helpers;

use chrono::{Duration, Utc};
use http::StatusCode;
use serde_json::json;

use pawmart_auth::{JwtDecoder, JwtEncoder};
use pawmart_core::config::AuthConfig;
use pawmart_core::types::Fields;

use helpers::{TEST_SECRET, TestApp, listing_body};

/// Every bearer-protected route with a body it would accept.
fn protected_routes() -> Vec<(&'static str, String, Option<serde_json::Value>)> {
    let id = uuid::Uuid::now_v7();
    vec![
        ("GET", "/my-listings".to_string(), None),
        ("POST", "/listings".to_string(), Some(listing_body("a@x.com", "Rex"))),
        ("PUT", format!("/listings/{id}"), Some(json!({"name": "Max"}))),
        ("DELETE", format!("/listings/{id}"), None),
        ("GET", "/orders".to_string(), None),
        (
            "POST",
            "/orders".to_string(),
            Some(json!({"listing_id": "l-1", "price": 1, "address": "x", "phone": "0170"})),
        ),
    ]
}

#[tokio::test]
async fn test_get_token_signs_submitted_claims() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/getToken",
            Some(json!({"identity": "a@x.com", "name": "Ana"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let token = response.body["token"].as_str().unwrap();

    let decoder = JwtDecoder::new(&AuthConfig::new(TEST_SECRET)).unwrap();
    let claims = decoder.verify(token).unwrap();
    assert_eq!(claims.identity(), "a@x.com");
    assert_eq!(claims.get("name"), Some(&json!("Ana")));
}

#[tokio::test]
async fn test_get_token_requires_identity() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/getToken", Some(json!({"name": "Ana"})), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_missing_bearer_is_unauthenticated_everywhere() {
    let app = TestApp::new();

    for (method, path, body) in protected_routes() {
        let response = app.request(method, &path, body, None).await;
        assert_eq!(
            response.status,
            StatusCode::UNAUTHORIZED,
            "{method} {path}"
        );
        assert_eq!(response.error_code(), "UNAUTHENTICATED");
    }
}

#[tokio::test]
async fn test_non_bearer_scheme_is_unauthenticated() {
    let app = TestApp::new();

    let response = app
        .request_with_authorization("GET", "/my-listings", None, Some("Basic YTpi"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_invalid_bearer_is_rejected_everywhere() {
    let app = TestApp::new();

    for (method, path, body) in protected_routes() {
        let response = app.request(method, &path, body, Some("not.a.jwt")).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "{method} {path}");
        assert_eq!(response.error_code(), "INVALID_CREDENTIAL");
    }
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = TestApp::new();
    let encoder = JwtEncoder::new(&AuthConfig::new(TEST_SECRET)).unwrap();
    let expired = encoder
        .issue_at("a@x.com", Fields::new(), Utc::now() - Duration::hours(3))
        .unwrap()
        .token;

    let response = app.request("GET", "/my-listings", None, Some(&expired)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), "INVALID_CREDENTIAL");
}

#[tokio::test]
async fn test_token_signed_with_another_secret_is_rejected() {
    let app = TestApp::new();
    let forged = JwtEncoder::new(&AuthConfig::new("attacker-secret"))
        .unwrap()
        .issue_for("a@x.com", Fields::new())
        .unwrap()
        .token;

    let response = app.request("GET", "/orders", None, Some(&forged)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_auth_runs_before_body_validation() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/listings", Some(json!({"garbage": true})), None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.count("listings"), 0);
}

#[tokio::test]
async fn test_root_and_health() {
    let app = TestApp::new();

    let root = app.request("GET", "/", None, None).await;
    assert_eq!(root.status, StatusCode::OK);
    assert_eq!(root.text, "Server is Running");

    let health = app.request("GET", "/health", None, None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["success"], true);
    assert_eq!(health.body["data"]["status"], "ok");
    assert_eq!(health.body["data"]["store"], "memory");
}
