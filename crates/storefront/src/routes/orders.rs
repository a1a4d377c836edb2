//! Order route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use tracing::instrument;

use auro_core::OrderId;

use super::ActionResponse;
use crate::error::{Result, add_breadcrumb};
use crate::models::Order;
use crate::state::AppState;
use crate::stores::StoreError;

/// GET /orders
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<Order>> {
    Json(state.orders().orders().await.to_vec())
}

/// Place an order from the cart.
///
/// POST /orders
#[instrument(skip(state))]
pub async fn place(State(state): State<AppState>) -> Result<(StatusCode, Json<Order>)> {
    add_breadcrumb("checkout", "Place order", &[]);
    let user = state.user().current().await;
    let order = state
        .orders()
        .place_order(user.as_ref(), state.cart())
        .await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /orders/{id}
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<OrderId>) -> Result<Json<Order>> {
    state
        .orders()
        .get_order(&id)
        .await
        .map(Json)
        .ok_or_else(|| StoreError::not_found("order", &id).into())
}

/// POST /orders/{id}/cancel
#[instrument(skip(state))]
pub async fn cancel(State(state): State<AppState>, Path(id): Path<OrderId>) -> Response {
    let cancelled = state.orders().cancel_order(&id).await;
    ActionResponse::from_flag(cancelled, "Delivered or cancelled orders cannot be cancelled")
}

/// POST /orders/{id}/advance
#[instrument(skip(state))]
pub async fn advance(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<Order>> {
    Ok(Json(state.orders().advance_order(&id).await?))
}
