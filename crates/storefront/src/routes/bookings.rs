//! Booking route handlers.

use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};
use tracing::instrument;

use auro_core::BookingId;

use super::ActionResponse;
use crate::error::Result;
use crate::models::Booking;
use crate::state::AppState;
use crate::stores::StoreError;

/// The signed-in user's bookings, newest first.
///
/// GET /bookings
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Booking>>> {
    let user = state
        .user()
        .current()
        .await
        .ok_or(StoreError::NotAuthenticated)?;
    Ok(Json(state.bookings().bookings_for(&user.id).await))
}

/// POST /bookings/{id}/cancel
#[instrument(skip(state))]
pub async fn cancel(State(state): State<AppState>, Path(id): Path<BookingId>) -> Response {
    let cancelled = state.bookings().cancel_booking(&id).await;
    ActionResponse::from_flag(cancelled, "Only upcoming bookings can be cancelled")
}
