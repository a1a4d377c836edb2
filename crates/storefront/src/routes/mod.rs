//! HTTP route handlers for the storefront JSON API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//! POST /api/auth/login         - Demo email/password login
//!
//! # Account
//! GET  /account                - Signed-in user
//! POST /account/login          - Phone + one-time code login
//! POST /account/logout         - Logout
//! PUT  /account/profile        - Update name, email, phone
//! PUT  /account/subscription   - Change tier (premium refreshes supply estimates)
//! PUT  /account/preferences    - Replace health preferences
//!
//! # Laundromats
//! GET  /laundromats            - List, filtered by query string
//! GET  /laundromats/{id}       - Detail
//! POST /laundromats/{id}/select        - Select for detail views
//! GET  /laundromats/{id}/payrange      - Last PayRange status
//! POST /laundromats/{id}/payrange      - Check PayRange status
//! POST /laundromats/{id}/machines/{machine_id}/book          - Book a machine
//! POST /laundromats/{id}/machines/{machine_id}/out-of-order  - Take out of service
//! POST /laundromats/{id}/machines/{machine_id}/reset         - Return to service
//!
//! # Bookings
//! GET  /bookings               - Signed-in user's bookings
//! POST /bookings/{id}/cancel   - Cancel an upcoming booking
//!
//! # Cart
//! GET    /cart                 - Lines, count, total
//! POST   /cart/items           - Add one unit
//! PUT    /cart/items/{id}      - Set quantity (0 removes)
//! DELETE /cart/items/{id}      - Remove line
//! DELETE /cart                 - Clear
//!
//! # Orders
//! GET  /orders                 - Order history
//! POST /orders                 - Place order from cart
//! GET  /orders/{id}            - Detail
//! POST /orders/{id}/cancel     - Cancel
//! POST /orders/{id}/advance    - Move to next delivery stage
//!
//! # Products
//! GET  /products               - Filter and sort
//! GET  /products/search?q=     - Free-text search
//!
//! # Supplies
//! GET  /supplies               - All supplies
//! GET  /supplies/search?q=     - Free-text search
//! GET  /supplies/due           - Due for automatic reorder
//! PUT  /supplies/{id}/level    - Record fill level
//! POST /supplies/{id}/auto-reorder - Toggle automatic reorder
//! POST /supplies/{id}/reorder  - Reorder now
//! ```

pub mod account;
pub mod auth;
pub mod bookings;
pub mod cart;
pub mod laundromats;
pub mod orders;
pub mod products;
pub mod supplies;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde::Deserialize;
use serde::Serialize;

use crate::state::AppState;

/// Outcome of an operation that reports success as a flag.
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionResponse {
    /// 200 on success, 409 with `failure` otherwise.
    #[must_use]
    pub fn from_flag(success: bool, failure: &str) -> Response {
        if success {
            Json(Self {
                success,
                message: None,
            })
            .into_response()
        } else {
            (
                StatusCode::CONFLICT,
                Json(Self {
                    success,
                    message: Some(failure.to_string()),
                }),
            )
                .into_response()
        }
    }
}

/// `?q=` free-text query.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Split a comma-separated query value, dropping blanks.
pub(crate) fn csv(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(account::show))
        .route("/login", post(account::login))
        .route("/logout", post(account::logout))
        .route("/profile", put(account::update_profile))
        .route("/subscription", put(account::update_subscription))
        .route("/preferences", put(account::update_preferences))
}

/// Create the laundromat routes router.
pub fn laundromat_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(laundromats::index))
        .route("/{id}", get(laundromats::show))
        .route("/{id}/select", post(laundromats::select))
        .route(
            "/{id}/payrange",
            get(laundromats::payrange_status).post(laundromats::check_payrange),
        )
        .route("/{id}/machines/{machine_id}/book", post(laundromats::book))
        .route(
            "/{id}/machines/{machine_id}/out-of-order",
            post(laundromats::out_of_order),
        )
        .route(
            "/{id}/machines/{machine_id}/reset",
            post(laundromats::reset),
        )
}

/// Create the booking routes router.
pub fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(bookings::index))
        .route("/{id}/cancel", post(bookings::cancel))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show).delete(cart::clear))
        .route("/items", post(cart::add))
        .route("/items/{id}", put(cart::update).delete(cart::remove))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index).post(orders::place))
        .route("/{id}", get(orders::show))
        .route("/{id}/cancel", post(orders::cancel))
        .route("/{id}/advance", post(orders::advance))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/search", get(products::search))
}

/// Create the supply routes router.
pub fn supply_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(supplies::index))
        .route("/search", get(supplies::search))
        .route("/due", get(supplies::due))
        .route("/{id}/level", put(supplies::update_level))
        .route("/{id}/auto-reorder", post(supplies::toggle_auto_reorder))
        .route("/{id}/reorder", post(supplies::reorder))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .nest("/account", account_routes())
        .nest("/laundromats", laundromat_routes())
        .nest("/bookings", booking_routes())
        .nest("/cart", cart_routes())
        .nest("/orders", order_routes())
        .nest("/products", product_routes())
        .nest("/supplies", supply_routes())
}

/// The full application: health check plus every route, bound to `state`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use auro_core::Latency;

    use super::*;
    use crate::config::StorefrontConfig;
    use crate::storage::MemoryStorage;

    fn test_app() -> Router {
        let config = StorefrontConfig {
            latency: Latency::Instant,
            ..StorefrontConfig::default()
        };
        app(AppState::with_storage(config, Arc::new(MemoryStorage::new())))
    }

    fn put_json(uri: &str, body: &str) -> Request<Body> {
        Request::put(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_csv_drops_blanks() {
        assert_eq!(csv(Some("PayRange, Coin,,")), ["PayRange", "Coin"]);
        assert!(csv(None).is_empty());
    }

    #[tokio::test]
    async fn test_account_needs_login() {
        let response = test_app()
            .oneshot(Request::get("/account").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_unknown_laundromat() {
        let response = test_app()
            .oneshot(
                Request::get("/laundromats/laundromat-99")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_supply_level_bounds() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(put_json("/supplies/supply-1/level", r#"{"level": 101}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .oneshot(put_json("/supplies/supply-1/level", r#"{"level": 40}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["level"], 40);
    }

    #[tokio::test]
    async fn test_cart_quantity_limit() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(
                Request::post("/cart/items")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"id": "product-1"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(put_json(
                "/cart/items/product-1",
                r#"{"quantity": 4294967295}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .oneshot(Request::get("/cart").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["itemCount"], 1);
    }
}
