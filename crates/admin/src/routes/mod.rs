//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                   - Health check
//!
//! # Chat
//! GET    /chat/messages            - Transcript and processing flag
//! POST   /chat/messages            - Send a message, wait for the Operator's reply
//! DELETE /chat/messages            - Reset the transcript and clear the panel
//! POST   /chat/actions             - Acknowledge an administrative action
//!
//! # Side panel
//! GET    /display                  - Panel HTML (list filters as query parameters)
//! GET    /display/data             - Panel payload as JSON (null when empty)
//! POST   /display/back             - Return from a detail panel to its list
//! POST   /display/ticket/status    - Change the displayed ticket's status
//! POST   /display/ticket/comments  - Comment on the displayed ticket
//! ```

use axum::{Router, routing::get};

use crate::state::AppState;

pub mod chat;
pub mod display;

/// Every admin route, without state.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(chat::router())
        .merge(display::router())
}

/// The admin application with state applied.
pub fn app(state: AppState) -> Router {
    routes().with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
