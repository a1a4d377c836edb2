//! Integration tests for the storefront JSON API.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::{Value, json};
use tower::ServiceExt;

use auro_integration_tests::{body_json, json_request, memory_storage, request, storefront_app};

async fn login(app: &axum::Router) {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/account/login",
            &json!({"phone": "5551234567", "otp": "1234"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health() {
    let app = storefront_app(memory_storage());
    let response = app.oneshot(request("GET", "/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_demo_login_envelope() {
    let app = storefront_app(memory_storage());

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            &json!({"email": "", "password": "secret"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body.get("data").is_none());

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            &json!({"email": "someone@example.com", "password": "secret"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Login successful");
    assert!(
        body["data"]["token"]
            .as_str()
            .unwrap()
            .starts_with("demo-token-")
    );
}

#[tokio::test]
async fn test_booking_needs_login() {
    let app = storefront_app(memory_storage());
    let response = app
        .oneshot(request(
            "POST",
            "/laundromats/laundromat-1/machines/machine-1/book",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_book_then_cancel() {
    let app = storefront_app(memory_storage());
    login(&app).await;

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/laundromats/laundromat-1/machines/machine-3/book",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let booking = body_json(response).await;
    assert_eq!(booking["status"], "upcoming");
    assert_eq!(booking["machineId"], "machine-3");

    // the machine is now taken
    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/laundromats/laundromat-1/machines/machine-3/book",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let id = booking["id"].as_str().unwrap();
    let response = app
        .clone()
        .oneshot(request("POST", &format!("/bookings/{id}/cancel")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);

    let response = app
        .oneshot(request("GET", "/laundromats/laundromat-1"))
        .await
        .unwrap();
    let laundromat = body_json(response).await;
    let machine = laundromat["machines"]
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["id"] == "machine-3")
        .unwrap();
    assert_eq!(machine["status"], "available");
}

#[tokio::test]
async fn test_cancel_completed_booking_conflicts() {
    let app = storefront_app(memory_storage());
    let response = app
        .oneshot(request("POST", "/bookings/booking-3/cancel"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["success"], false);
}

#[tokio::test]
async fn test_cart_to_order() {
    let app = storefront_app(memory_storage());
    login(&app).await;

    let products = body_json(app.clone().oneshot(request("GET", "/products")).await.unwrap()).await;
    let product_id = products[0]["id"].as_str().unwrap().to_string();

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/cart/items", &json!({"id": product_id})))
            .await
            .unwrap();
        assert!(response.status().is_success());
    }

    let cart = body_json(app.clone().oneshot(request("GET", "/cart")).await.unwrap()).await;
    assert_eq!(cart["itemCount"], 2);

    let response = app.clone().oneshot(request("POST", "/orders")).await.unwrap();
    assert!(response.status().is_success());
    let order: Value = body_json(response).await;
    assert_eq!(order["status"], "order_placed");
    assert_eq!(order["items"][0]["quantity"], 2);

    let cart = body_json(app.oneshot(request("GET", "/cart")).await.unwrap()).await;
    assert_eq!(cart["itemCount"], 0);
}

#[tokio::test]
async fn test_inverted_price_range_rejected() {
    let app = storefront_app(memory_storage());
    let response = app
        .oneshot(request("GET", "/products?minPrice=10&maxPrice=5"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
