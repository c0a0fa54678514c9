//! Integration tests for orders.

mod helpers;

use http::StatusCode;
use serde_json::{Value, json};

use helpers::TestApp;

fn order_body(listing_id: &str) -> Value {
    json!({
        "listingId": listing_id,
        "listingName": "Rex",
        "quantity": 1,
        "price": 0,
        "address": "12 Lake Road, Dhaka",
        "phone": "+8801700000000",
        "notes": "Weekend pickup"
    })
}

#[tokio::test]
async fn test_place_order_records_buyer() {
    let app = TestApp::new();
    let seller = app.token_for("seller@x.com").await;
    let buyer = app.token_for("buyer@x.com").await;
    let listing_id = app.create_listing(&seller, "seller@x.com", "Rex").await;

    let response = app
        .request("POST", "/orders", Some(order_body(&listing_id)), Some(&buyer))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["owner"], "buyer@x.com");
    assert_eq!(response.body["data"]["listing_id"], listing_id.as_str());
}

#[tokio::test]
async fn test_orders_are_listed_per_buyer() {
    let app = TestApp::new();
    let alice = app.token_for("a@x.com").await;
    let bob = app.token_for("b@x.com").await;

    for _ in 0..2 {
        app.request("POST", "/orders", Some(order_body("l-1")), Some(&alice))
            .await;
    }
    app.request("POST", "/orders", Some(order_body("l-2")), Some(&bob))
        .await;

    let response = app.request("GET", "/orders", None, Some(&alice)).await;
    assert_eq!(response.status, StatusCode::OK);
    let orders = response.body["data"].as_array().unwrap();
    assert_eq!(orders.len(), 2);
    assert!(orders.iter().all(|o| o["owner"] == "a@x.com"));
}

#[tokio::test]
async fn test_foreign_owner_claim_is_forbidden() {
    let app = TestApp::new();
    let alice = app.token_for("a@x.com").await;
    let mut body = order_body("l-1");
    body["email"] = json!("b@x.com");

    let response = app.request("POST", "/orders", Some(body), Some(&alice)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(app.count("orders"), 0);
}

#[tokio::test]
async fn test_invalid_order_is_rejected() {
    let app = TestApp::new();
    let alice = app.token_for("a@x.com").await;
    let mut body = order_body("l-1");
    body["quantity"] = json!(0);

    let response = app.request("POST", "/orders", Some(body), Some(&alice)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}
