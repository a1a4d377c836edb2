//! Demo login endpoint.
//!
//! Responds in the `{success, data, message}` envelope the web client
//! expects, for both success and failure.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, set_sentry_user};
use crate::services::auth::{AuthError, AuthService, LoginSession};
use crate::state::AppState;

/// Login request body. Missing fields count as blank.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response envelope.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<LoginSession>,
    pub message: String,
}

/// Log in with any non-blank email and password.
///
/// POST /api/auth/login
#[instrument(skip(state, request), fields(email = %request.email))]
pub async fn login(State(state): State<AppState>, Json(request): Json<LoginRequest>) -> Response {
    match AuthService::new(state.accounts()).login(&request.email, &request.password) {
        Ok(session) => {
            set_sentry_user(&session.user.id, Some(session.user.email.as_str()));
            Json(LoginResponse {
                success: true,
                data: Some(session),
                message: "Login successful".to_string(),
            })
            .into_response()
        }
        Err(AuthError::MissingCredentials) => (
            StatusCode::BAD_REQUEST,
            Json(LoginResponse {
                success: false,
                data: None,
                message: AuthError::MissingCredentials.to_string(),
            }),
        )
            .into_response(),
        Err(e) => AppError::from(e).into_response(),
    }
}
