//! Chat route handlers for the Operator.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::Result;
use crate::models::ChatMessage;
use crate::operator::{OperatorAction, Reply};
use crate::state::AppState;

/// Request body for sending a message.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
}

/// The transcript as the chat pane shows it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptView {
    pub messages: Vec<ChatMessage>,
    pub is_processing: bool,
}

async fn transcript_view(state: &AppState) -> TranscriptView {
    let transcript = state.chat().transcript().await;
    TranscriptView {
        messages: transcript.messages().to_vec(),
        is_processing: transcript.is_processing(),
    }
}

/// Build the chat router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/chat/messages",
            get(list_messages).post(send_message).delete(clear_messages),
        )
        .route("/chat/actions", post(acknowledge_action))
}

/// GET /chat/messages
#[instrument(skip(state))]
async fn list_messages(State(state): State<AppState>) -> Json<TranscriptView> {
    Json(transcript_view(&state).await)
}

/// Send a message and return the Operator's reply once it is ready.
///
/// POST /chat/messages
#[instrument(skip(state, request))]
async fn send_message(
    State(state): State<AppState>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<Reply>> {
    Ok(Json(state.chat().send_message(&request.content).await?))
}

/// DELETE /chat/messages
#[instrument(skip(state))]
async fn clear_messages(State(state): State<AppState>) -> Json<TranscriptView> {
    state.chat().clear().await;
    Json(transcript_view(&state).await)
}

/// POST /chat/actions
#[instrument(skip(state))]
async fn acknowledge_action(
    State(state): State<AppState>,
    Json(action): Json<OperatorAction>,
) -> (StatusCode, Json<ChatMessage>) {
    let message = state.chat().acknowledge(&action).await;
    (StatusCode::CREATED, Json(message))
}
