//! Supply route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    response::Response,
};
use serde::Deserialize;
use tracing::instrument;

use auro_core::SupplyId;

use super::{ActionResponse, SearchQuery};
use crate::error::Result;
use crate::models::Supply;
use crate::state::AppState;

/// Level update request, 0 to 100.
#[derive(Debug, Deserialize)]
pub struct LevelRequest {
    pub level: u8,
}

/// GET /supplies
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<Supply>> {
    Json(state.supplies().supplies().await.to_vec())
}

/// GET /supplies/search?q=
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Supply>> {
    Json(state.supplies().search_supplies(&query.q).await)
}

/// GET /supplies/due
#[instrument(skip(state))]
pub async fn due(State(state): State<AppState>) -> Json<Vec<Supply>> {
    Json(state.supplies().due_for_reorder().await)
}

/// PUT /supplies/{id}/level
#[instrument(skip(state))]
pub async fn update_level(
    State(state): State<AppState>,
    Path(id): Path<SupplyId>,
    Json(request): Json<LevelRequest>,
) -> Result<Json<Supply>> {
    Ok(Json(
        state
            .supplies()
            .update_supply_level(&id, request.level)
            .await?,
    ))
}

/// POST /supplies/{id}/auto-reorder
#[instrument(skip(state))]
pub async fn toggle_auto_reorder(
    State(state): State<AppState>,
    Path(id): Path<SupplyId>,
) -> Result<Json<Supply>> {
    Ok(Json(state.supplies().toggle_auto_reorder(&id).await?))
}

/// POST /supplies/{id}/reorder
#[instrument(skip(state))]
pub async fn reorder(State(state): State<AppState>, Path(id): Path<SupplyId>) -> Response {
    let reordered = state.supplies().reorder_supply(&id).await;
    ActionResponse::from_flag(reordered, "Supply not found")
}
