//! End-to-end marketplace scenario.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{TestApp, listing_body};

#[tokio::test]
async fn test_owner_lifecycle() {
    let app = TestApp::new();

    let issued = app
        .request("POST", "/getToken", Some(json!({"identity": "a@x.com"})), None)
        .await;
    assert_eq!(issued.status, StatusCode::OK);
    let alice = issued.body["token"].as_str().unwrap().to_string();

    let created = app
        .request(
            "POST",
            "/listings",
            Some(listing_body("a@x.com", "Rex")),
            Some(&alice),
        )
        .await;
    assert!(created.status.is_success());
    let id = created.body["listingId"].as_str().unwrap().to_string();
    let path = format!("/listings/{id}");

    let bob = app.token_for("b@x.com").await;
    let hijack = app
        .request("PUT", &path, Some(json!({"name": "Mine now"})), Some(&bob))
        .await;
    assert_eq!(hijack.status, StatusCode::FORBIDDEN);

    let deleted = app.request("DELETE", &path, None, Some(&alice)).await;
    assert!(deleted.status.is_success());

    let listings = app.request("GET", "/listings", None, None).await;
    assert!(
        listings
            .body
            .as_array()
            .unwrap()
            .iter()
            .all(|l| l["id"] != id.as_str())
    );
}
