//! Side panel route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use auro_core::{SimulatedCall, TicketStatus};

use crate::display::{DisplayRouter, ListQuery, Panel, PanelKind};
use crate::error::Result;
use crate::models::Ticket;
use crate::state::AppState;

/// Request body for a status change.
#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: TicketStatus,
}

/// Request body for a new comment.
#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub content: String,
}

/// Which panel is showing after navigating back.
#[derive(Debug, Serialize)]
pub struct BackResponse {
    pub panel: PanelKind,
}

/// Build the display router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/display", get(show))
        .route("/display/data", get(data))
        .route("/display/back", post(back))
        .route("/display/ticket/status", post(update_status))
        .route("/display/ticket/comments", post(add_comment))
}

/// GET /display
#[instrument(skip(state))]
async fn show(State(state): State<AppState>, Query(query): Query<ListQuery>) -> Result<Html<String>> {
    let display = state.display().lock().await;
    Ok(Html(DisplayRouter::render_filtered(display.panel(), &query)?))
}

/// GET /display/data
#[instrument(skip(state))]
async fn data(State(state): State<AppState>) -> Json<Option<Panel>> {
    Json(state.display().lock().await.panel().cloned())
}

/// POST /display/back
#[instrument(skip(state))]
async fn back(State(state): State<AppState>) -> Result<Json<BackResponse>> {
    let panel = state.display().lock().await.back_to_list(state.catalog())?;
    Ok(Json(BackResponse { panel }))
}

/// POST /display/ticket/status
#[instrument(skip(state))]
async fn update_status(
    State(state): State<AppState>,
    Json(request): Json<StatusRequest>,
) -> Result<Json<Ticket>> {
    state.config().latency.pause(SimulatedCall::TicketUpdate).await;
    let mut display = state.display().lock().await;
    let ticket = display.update_ticket_status(request.status, Utc::now())?;
    Ok(Json(ticket.clone()))
}

/// POST /display/ticket/comments
#[instrument(skip(state, request))]
async fn add_comment(
    State(state): State<AppState>,
    Json(request): Json<CommentRequest>,
) -> Result<(StatusCode, Json<Ticket>)> {
    state.config().latency.pause(SimulatedCall::TicketUpdate).await;
    let mut display = state.display().lock().await;
    let ticket = display.add_ticket_comment(&request.content, Utc::now())?;
    Ok((StatusCode::CREATED, Json(ticket.clone())))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use auro_core::Latency;

    use crate::config::AdminConfig;
    use crate::routes::app;
    use crate::state::AppState;

    fn state() -> AppState {
        AppState::new(AdminConfig {
            latency: Latency::Instant,
            ..AdminConfig::default()
        })
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_empty_display_shows_placeholder() {
        let response = app(state())
            .oneshot(Request::get("/display").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        assert!(body_text(response).await.contains("No Data Selected"));
    }

    #[tokio::test]
    async fn test_ticket_edit_flow() {
        let state = state();
        let app = app(state.clone());

        let response = app
            .clone()
            .oneshot(post_json("/chat/messages", r#"{"content":"find ticket 1003"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        let response = app
            .clone()
            .oneshot(post_json("/display/ticket/status", r#"{"status":"in_progress"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        let ticket: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(ticket["status"], "in_progress");
        assert_eq!(
            ticket["comments"][0]["content"],
            "Status updated from open to in_progress"
        );

        let response = app
            .clone()
            .oneshot(post_json("/display/ticket/comments", r#"{"content":""}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), 400);

        let response = app
            .clone()
            .oneshot(post_json("/display/back", ""))
            .await
            .unwrap();
        assert_eq!(body_text(response).await, r#"{"panel":"tickets"}"#);
    }

    #[tokio::test]
    async fn test_comment_without_ticket_is_not_found() {
        let response = app(state())
            .oneshot(post_json("/display/ticket/comments", r#"{"content":"hello"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), 404);
    }

    #[tokio::test]
    async fn test_bad_filter_is_bad_request() {
        let state = state();
        state.chat().send_message("show users").await.unwrap();

        let response = app(state)
            .oneshot(
                Request::get("/display?status=banned")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), 400);
    }
}
