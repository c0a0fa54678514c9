//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use pawmart_api::AppState;
use pawmart_core::config::AppConfig;
use pawmart_database::MemoryDocumentStore;

/// Signing secret used by every test app.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The in-memory store behind the router, for direct inspection
    pub store: Arc<MemoryDocumentStore>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application with default settings
    pub fn new() -> Self {
        Self::with_config(AppConfig::with_secret(TEST_SECRET))
    }

    /// Create a test application with a custom configuration
    pub fn with_config(config: AppConfig) -> Self {
        let store = Arc::new(MemoryDocumentStore::new());
        let state =
            AppState::new(config.clone(), store.clone()).expect("Failed to build app state");

        Self {
            router: pawmart_api::build_app(state),
            store,
            config,
        }
    }

    /// Obtain a token for `identity` through `/getToken`
    pub async fn token_for(&self, identity: &str) -> String {
        let response = self
            .request("POST", "/getToken", Some(json!({ "email": identity })), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "getToken failed: {:?}",
            response.body
        );

        response.body["token"]
            .as_str()
            .expect("No token in response")
            .to_string()
    }

    /// Publish a listing as `owner` and return its id
    pub async fn create_listing(&self, token: &str, owner: &str, name: &str) -> String {
        let response = self
            .request("POST", "/listings", Some(listing_body(owner, name)), Some(token))
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create listing failed: {:?}",
            response.body
        );

        response.body["listingId"]
            .as_str()
            .expect("No listingId in response")
            .to_string()
    }

    /// Number of documents in a collection
    pub fn count(&self, collection: &str) -> usize {
        self.store.len(collection)
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let authorization = token.map(|t| format!("Bearer {t}"));
        self.request_with_authorization(method, path, body, authorization.as_deref())
            .await
    }

    /// Make a request with a raw `Authorization` header value
    pub async fn request_with_authorization(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(value) = authorization {
            req = req.header("Authorization", value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).to_string();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body, text }
    }
}

/// A valid listing body claiming `owner`
pub fn listing_body(owner: &str, name: &str) -> Value {
    json!({
        "owner": owner,
        "name": name,
        "category": "Dogs",
        "price": 0,
        "location": "Dhaka",
        "description": "Vaccinated and friendly",
        "pickup_date": "2026-11-01"
    })
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (`Null` if the body is not JSON)
    pub body: Value,
    /// Raw body text
    pub text: String,
}

impl TestResponse {
    /// The `error` code of a failure body
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}
