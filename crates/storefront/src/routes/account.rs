//! Account route handlers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use auro_core::{HealthPreference, SubscriptionTier};

use crate::error::{Result, clear_sentry_user, set_sentry_user};
use crate::models::{User, UserUpdate};
use crate::state::AppState;
use crate::stores::StoreError;

/// Phone login request.
#[derive(Debug, Deserialize)]
pub struct PhoneLoginRequest {
    pub phone: String,
    pub otp: String,
}

/// Subscription change request.
#[derive(Debug, Deserialize)]
pub struct SubscriptionRequest {
    pub tier: SubscriptionTier,
}

/// Health preference replacement request.
#[derive(Debug, Deserialize)]
pub struct PreferencesRequest {
    pub preferences: Vec<HealthPreference>,
}

/// The signed-in user.
///
/// GET /account
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Json<User>> {
    let user = state
        .user()
        .current()
        .await
        .ok_or(StoreError::NotAuthenticated)?;
    Ok(Json(user))
}

/// Sign in with a phone number and one-time code.
///
/// POST /account/login
#[instrument(skip(state, request))]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<PhoneLoginRequest>,
) -> Response {
    if !state.user().login(&request.phone, &request.otp).await {
        return (StatusCode::UNAUTHORIZED, "Invalid phone number or code").into_response();
    }
    match state.user().current().await {
        Some(user) => {
            set_sentry_user(&user.id, Some(user.email.as_str()));
            Json(user).into_response()
        }
        None => StatusCode::UNAUTHORIZED.into_response(),
    }
}

/// POST /account/logout
#[instrument(skip(state))]
pub async fn logout(State(state): State<AppState>) -> StatusCode {
    state.user().logout().await;
    clear_sentry_user();
    StatusCode::NO_CONTENT
}

/// PUT /account/profile
#[instrument(skip(state))]
pub async fn update_profile(
    State(state): State<AppState>,
    Json(update): Json<UserUpdate>,
) -> Result<Json<User>> {
    Ok(Json(state.user().update_user(update).await?))
}

/// Change tier. Premium also refreshes supply estimates.
///
/// PUT /account/subscription
#[instrument(skip(state))]
pub async fn update_subscription(
    State(state): State<AppState>,
    Json(request): Json<SubscriptionRequest>,
) -> Result<Json<User>> {
    let user = state.user().set_subscription(request.tier).await?;
    state.supplies().apply_subscription(user.subscription).await;
    Ok(Json(user))
}

/// PUT /account/preferences
#[instrument(skip(state))]
pub async fn update_preferences(
    State(state): State<AppState>,
    Json(request): Json<PreferencesRequest>,
) -> Result<Json<User>> {
    Ok(Json(
        state
            .user()
            .set_health_preferences(request.preferences)
            .await?,
    ))
}
