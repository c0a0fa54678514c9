//! Integration tests for the listing catalogue and ownership enforcement.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{TestApp, listing_body};

#[tokio::test]
async fn test_create_and_fetch_listing() {
    let app = TestApp::new();
    let token = app.token_for("a@x.com").await;

    let id = app.create_listing(&token, "a@x.com", "Rex").await;

    let response = app.request("GET", &format!("/listings/{id}"), None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["owner"], "a@x.com");
    assert_eq!(response.body["name"], "Rex");
    assert!(response.body["created_at"].is_string());
}

#[tokio::test]
async fn test_create_with_foreign_owner_is_forbidden() {
    let app = TestApp::new();
    let token = app.token_for("a@x.com").await;

    let response = app
        .request(
            "POST",
            "/listings",
            Some(listing_body("b@x.com", "Rex")),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), "FORBIDDEN");
    assert_eq!(app.count("listings"), 0);
}

#[tokio::test]
async fn test_create_accepts_email_as_owner_claim() {
    let app = TestApp::new();
    let token = app.token_for("a@x.com").await;
    let mut body = listing_body("ignored", "Rex");
    body.as_object_mut().unwrap().remove("owner");
    body["email"] = json!("a@x.com");

    let response = app.request("POST", "/listings", Some(body), Some(&token)).await;

    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_owner_field_wins_over_email() {
    let app = TestApp::new();
    let token = app.token_for("a@x.com").await;
    let mut body = listing_body("a@x.com", "Rex");
    body["email"] = json!("someone-else@x.com");

    let response = app.request("POST", "/listings", Some(body), Some(&token)).await;
    assert_eq!(response.status, StatusCode::CREATED);

    let mut body = listing_body("b@x.com", "Rex");
    body["email"] = json!("a@x.com");

    let response = app.request("POST", "/listings", Some(body), Some(&token)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_without_owner_claim_is_rejected() {
    let app = TestApp::new();
    let token = app.token_for("a@x.com").await;
    let mut body = listing_body("a@x.com", "Rex");
    body.as_object_mut().unwrap().remove("owner");

    let response = app.request("POST", "/listings", Some(body), Some(&token)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.count("listings"), 0);
}

#[tokio::test]
async fn test_create_with_invalid_body_is_rejected() {
    let app = TestApp::new();
    let token = app.token_for("a@x.com").await;

    let missing_name = json!({"owner": "a@x.com", "category": "Dogs", "price": 1, "location": "x"});
    let response = app
        .request("POST", "/listings", Some(missing_name), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");

    let mut negative = listing_body("a@x.com", "Rex");
    negative["price"] = json!(-5);
    let response = app.request("POST", "/listings", Some(negative), Some(&token)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_non_owner_cannot_update_or_delete() {
    let app = TestApp::new();
    let alice = app.token_for("a@x.com").await;
    let bob = app.token_for("b@x.com").await;
    let id = app.create_listing(&alice, "a@x.com", "Rex").await;
    let path = format!("/listings/{id}");
    let before = app.request("GET", &path, None, None).await.body;

    let update = app
        .request("PUT", &path, Some(json!({"name": "Stolen"})), Some(&bob))
        .await;
    assert_eq!(update.status, StatusCode::FORBIDDEN);

    let delete = app.request("DELETE", &path, None, Some(&bob)).await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);

    let after = app.request("GET", &path, None, None).await.body;
    assert_eq!(after, before);
}

#[tokio::test]
async fn test_missing_listing_is_not_found_for_anyone() {
    let app = TestApp::new();
    let bob = app.token_for("b@x.com").await;
    let path = format!("/listings/{}", uuid::Uuid::now_v7());

    let update = app
        .request("PUT", &path, Some(json!({"name": "x"})), Some(&bob))
        .await;
    assert_eq!(update.status, StatusCode::NOT_FOUND);

    let delete = app.request("DELETE", &path, None, Some(&bob)).await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);

    let get = app.request("GET", &path, None, None).await;
    assert_eq!(get.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_update_for_missing_listing_is_not_found() {
    let app = TestApp::new();
    let alice = app.token_for("a@x.com").await;
    let path = format!("/listings/{}", uuid::Uuid::now_v7());

    let response = app
        .request("PUT", &path, Some(json!({"price": -5})), Some(&alice))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_invalid_update_from_non_owner_is_forbidden() {
    let app = TestApp::new();
    let alice = app.token_for("a@x.com").await;
    let bob = app.token_for("b@x.com").await;
    let id = app.create_listing(&alice, "a@x.com", "Rex").await;
    let path = format!("/listings/{id}");

    let response = app
        .request("PUT", &path, Some(json!({"price": -5})), Some(&bob))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request("PUT", &path, Some(json!({"price": -5})), Some(&alice))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");

    let after = app.request("GET", &path, None, None).await.body;
    assert_eq!(after["price"], 0.0);
}

#[tokio::test]
async fn test_malformed_id_is_bad_request() {
    let app = TestApp::new();

    let response = app.request("GET", "/listings/not-a-uuid", None, None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_owner_update_only_touches_editable_fields() {
    let app = TestApp::new();
    let alice = app.token_for("a@x.com").await;
    let id = app.create_listing(&alice, "a@x.com", "Rex").await;
    let path = format!("/listings/{id}");
    let before = app.request("GET", &path, None, None).await.body;

    let response = app
        .request(
            "PUT",
            &path,
            Some(json!({
                "price": 15.5,
                "owner": "b@x.com",
                "created_at": "1999-01-01T00:00:00Z"
            })),
            Some(&alice),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);

    let after = app.request("GET", &path, None, None).await.body;
    assert_eq!(after["price"], 15.5);
    assert_eq!(after["owner"], "a@x.com");
    assert_eq!(after["id"], before["id"]);
    assert_eq!(after["created_at"], before["created_at"]);
    assert!(after["updated_at"].is_string());
}

#[tokio::test]
async fn test_owner_can_delete() {
    let app = TestApp::new();
    let alice = app.token_for("a@x.com").await;
    let id = app.create_listing(&alice, "a@x.com", "Rex").await;
    let path = format!("/listings/{id}");

    let response = app.request("DELETE", &path, None, Some(&alice)).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", &path, None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(app.count("listings"), 0);
}

#[tokio::test]
async fn test_recent_listings_are_bounded_and_newest_first() {
    let app = TestApp::new();
    let alice = app.token_for("a@x.com").await;
    for i in 0..8 {
        app.create_listing(&alice, "a@x.com", &format!("pet-{i}")).await;
    }

    let response = app.request("GET", "/listings/recent", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    let names: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["pet-7", "pet-6", "pet-5", "pet-4", "pet-3", "pet-2"]);

    let response = app.request("GET", "/listings/recent?limit=2", None, None).await;
    assert_eq!(response.body.as_array().unwrap().len(), 2);

    let response = app.request("GET", "/listings/recent?limit=500", None, None).await;
    assert_eq!(response.body.as_array().unwrap().len(), 8);

    let response = app.request("GET", "/listings/recent?limit=abc", None, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let all = app.request("GET", "/listings", None, None).await;
    assert_eq!(all.body.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_my_listings_only_returns_own() {
    let app = TestApp::new();
    let alice = app.token_for("a@x.com").await;
    let bob = app.token_for("b@x.com").await;
    app.create_listing(&alice, "a@x.com", "Rex").await;
    app.create_listing(&bob, "b@x.com", "Tom").await;

    let response = app.request("GET", "/my-listings", None, Some(&bob)).await;

    assert_eq!(response.status, StatusCode::OK);
    let mine = response.body.as_array().unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0]["name"], "Tom");
}
