//! Integration tests for Auro.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p auro-integration-tests
//! ```
//!
//! Everything runs in-process: stores over `MemoryStorage`, routers driven
//! with `tower::ServiceExt::oneshot`, and `Latency::Instant` unless a test
//! pauses the Tokio clock on purpose.
//!
//! # Test Categories
//!
//! - `operator_dispatch` - Rule ordering, lookups, and match modes
//! - `storefront_stores` - Booking, ordering, filtering, and persistence
//! - `storefront_http` - Storefront JSON API
//! - `admin_http` - Operator chat and the side panel

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;

use auro_core::Latency;
use auro_storefront::storage::{MemoryStorage, Storage};

/// A fresh in-memory storage backend.
#[must_use]
pub fn memory_storage() -> Arc<dyn Storage> {
    Arc::new(MemoryStorage::new())
}

/// The storefront app over `storage`, with no simulated delays.
#[must_use]
pub fn storefront_app(storage: Arc<dyn Storage>) -> Router {
    let config = auro_storefront::config::StorefrontConfig {
        latency: Latency::Instant,
        ..Default::default()
    };
    auro_storefront::routes::app(auro_storefront::state::AppState::with_storage(
        config, storage,
    ))
}

/// The admin app with no simulated delays.
#[must_use]
pub fn admin_app() -> Router {
    let config = auro_admin::config::AdminConfig {
        latency: Latency::Instant,
        ..Default::default()
    };
    auro_admin::routes::app(auro_admin::state::AppState::new(config))
}

/// A bodiless request.
///
/// # Panics
///
/// Panics if `uri` is not a valid request target.
#[must_use]
pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

/// A request carrying `body` as JSON.
///
/// # Panics
///
/// Panics if `uri` is not a valid request target.
#[must_use]
pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

/// Collect a response body as text.
///
/// # Panics
///
/// Panics if the body cannot be read or is not UTF-8.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("readable body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// Collect a response body as JSON.
///
/// # Panics
///
/// Panics if the body is not valid JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).expect("JSON body")
}
