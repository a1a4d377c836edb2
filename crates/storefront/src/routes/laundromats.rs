//! Laundromat and machine route handlers.

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use auro_core::{LaundromatId, MachineId, MachineKind};

use super::csv;
use crate::error::{AppError, Result, add_breadcrumb};
use crate::models::{Booking, Laundromat, LaundromatFilters, Machine, PayRangeStatus};
use crate::state::AppState;
use crate::stores::StoreError;

/// Listing filters as query parameters. List values are comma-separated.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LaundromatQuery {
    pub payment_systems: Option<String>,
    pub machine_types: Option<String>,
    pub max_distance: Option<f64>,
    pub amenities: Option<String>,
}

impl TryFrom<LaundromatQuery> for LaundromatFilters {
    type Error = AppError;

    fn try_from(query: LaundromatQuery) -> Result<Self> {
        let machine_kinds = csv(query.machine_types.as_deref())
            .iter()
            .map(|kind| MachineKind::from_str(kind).map_err(AppError::BadRequest))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            payment_systems: csv(query.payment_systems.as_deref()),
            machine_kinds,
            max_distance: query.max_distance,
            amenities: csv(query.amenities.as_deref()),
        })
    }
}

/// PayRange status response.
#[derive(Debug, Serialize)]
pub struct PayRangeResponse {
    pub status: Option<PayRangeStatus>,
}

/// GET /laundromats
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<LaundromatQuery>,
) -> Result<Json<Vec<Laundromat>>> {
    let filters = LaundromatFilters::try_from(query)?;
    Ok(Json(state.bookings().filter_laundromats(&filters).await))
}

/// GET /laundromats/{id}
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<LaundromatId>,
) -> Result<Json<Laundromat>> {
    state
        .bookings()
        .laundromat(&id)
        .await
        .map(Json)
        .ok_or_else(|| StoreError::not_found("laundromat", &id).into())
}

/// POST /laundromats/{id}/select
#[instrument(skip(state))]
pub async fn select(
    State(state): State<AppState>,
    Path(id): Path<LaundromatId>,
) -> Result<Json<Option<Laundromat>>> {
    Ok(Json(state.bookings().select_laundromat(Some(id)).await?))
}

/// GET /laundromats/{id}/payrange
#[instrument(skip(state))]
pub async fn payrange_status(
    State(state): State<AppState>,
    Path(id): Path<LaundromatId>,
) -> Json<PayRangeResponse> {
    Json(PayRangeResponse {
        status: state.bookings().payrange_status(&id).await,
    })
}

/// POST /laundromats/{id}/payrange
#[instrument(skip(state))]
pub async fn check_payrange(
    State(state): State<AppState>,
    Path(id): Path<LaundromatId>,
) -> Result<Json<PayRangeResponse>> {
    let status = state.bookings().check_payrange_status(&id).await?;
    Ok(Json(PayRangeResponse {
        status: Some(status),
    }))
}

/// Book a machine for the signed-in user.
///
/// POST /laundromats/{id}/machines/{machine_id}/book
#[instrument(skip(state))]
pub async fn book(
    State(state): State<AppState>,
    Path((id, machine_id)): Path<(LaundromatId, MachineId)>,
) -> Result<(StatusCode, Json<Booking>)> {
    add_breadcrumb(
        "booking",
        "Book machine",
        &[("laundromat_id", id.as_str()), ("machine_id", machine_id.as_str())],
    );
    let user = state.user().current().await;
    let booking = state
        .bookings()
        .book_machine(user.as_ref(), &id, &machine_id)
        .await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// POST /laundromats/{id}/machines/{machine_id}/out-of-order
#[instrument(skip(state))]
pub async fn out_of_order(
    State(state): State<AppState>,
    Path((id, machine_id)): Path<(LaundromatId, MachineId)>,
) -> Result<Json<Machine>> {
    Ok(Json(
        state.bookings().mark_out_of_order(&id, &machine_id).await?,
    ))
}

/// POST /laundromats/{id}/machines/{machine_id}/reset
#[instrument(skip(state))]
pub async fn reset(
    State(state): State<AppState>,
    Path((id, machine_id)): Path<(LaundromatId, MachineId)>,
) -> Result<Json<Machine>> {
    Ok(Json(state.bookings().reset_machine(&id, &machine_id).await?))
}
