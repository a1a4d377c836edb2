//! Cart route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use auro_core::{Price, ProductId};

use crate::error::{Result, add_breadcrumb};
use crate::models::CartItem;
use crate::state::AppState;
use crate::stores::StoreError;

/// Cart contents with derived totals.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub item_count: u32,
    pub total: Price,
}

/// Add-to-cart request: a product id and the retailer offer chosen.
#[derive(Debug, Deserialize)]
pub struct AddRequest {
    pub id: ProductId,
    #[serde(default)]
    pub retailer: Option<String>,
}

/// Quantity change request.
#[derive(Debug, Deserialize)]
pub struct QuantityRequest {
    pub quantity: u32,
}

async fn view(state: &AppState) -> CartView {
    let cart = state.cart();
    CartView {
        items: cart.items().await.to_vec(),
        item_count: cart.item_count().await,
        total: cart.total().await,
    }
}

/// GET /cart
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    Json(view(&state).await)
}

/// Add one unit of a catalog product at the chosen retailer's price, or
/// the cheapest one.
///
/// POST /cart/items
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Json(request): Json<AddRequest>,
) -> Result<Json<CartView>> {
    let product = state
        .products()
        .product(&request.id)
        .await
        .ok_or_else(|| StoreError::not_found("product", &request.id))?;
    let offer = match &request.retailer {
        Some(retailer) => product.prices.iter().find(|p| &p.retailer == retailer),
        None => product.cheapest_offer(),
    }
    .ok_or_else(|| StoreError::Validation(format!("no offer for {}", product.name)))?;

    add_breadcrumb(
        "cart",
        "Add to cart",
        &[("product_id", product.id.as_str()), ("retailer", offer.retailer.as_str())],
    );
    state
        .cart()
        .add_item(CartItem {
            id: product.id.clone(),
            name: product.name.clone(),
            price: offer.price,
            quantity: 1,
            image: Some(product.image.clone()),
            retailer: Some(offer.retailer.clone()),
        })
        .await;
    Ok(Json(view(&state).await))
}

/// PUT /cart/items/{id}
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(request): Json<QuantityRequest>,
) -> Result<Json<CartView>> {
    state.cart().update_quantity(&id, request.quantity).await?;
    Ok(Json(view(&state).await))
}

/// DELETE /cart/items/{id}
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<CartView>> {
    state.cart().remove_item(&id).await?;
    Ok(Json(view(&state).await))
}

/// DELETE /cart
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> StatusCode {
    state.cart().clear().await;
    StatusCode::NO_CONTENT
}
