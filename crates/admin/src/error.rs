//! Unified error handling for admin.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::display::DisplayError;
use crate::services::ChatError;

/// Application-level error type for the admin panel.
#[derive(Debug, Error)]
pub enum AppError {
    /// A chat message was refused.
    #[error("{0}")]
    Chat(#[from] ChatError),

    /// The side panel could not be read, edited, or rendered.
    #[error("{0}")]
    Display(#[from] DisplayError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Chat(ChatError::EmptyMessage)
            | Self::Display(DisplayError::EmptyComment | DisplayError::InvalidFilter(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Display(DisplayError::NoPanel) => StatusCode::NOT_FOUND,
            Self::Display(DisplayError::WrongPanel { .. }) => StatusCode::CONFLICT,
            Self::Display(DisplayError::Render(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log server errors with Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Admin request error"
            );
        }

        // Don't expose internal error details to clients
        let message = if status.is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, message).into_response()
    }
}

/// Result type alias for admin route handlers.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::PanelKind;

    #[test]
    fn test_app_error_display() {
        let err = AppError::from(DisplayError::NoPanel);
        assert_eq!(err.to_string(), "No data selected");

        let err = AppError::from(DisplayError::InvalidFilter("level=LOUD".to_string()));
        assert_eq!(err.to_string(), "Invalid filter: level=LOUD");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(ChatError::EmptyMessage.into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(DisplayError::NoPanel.into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(
                DisplayError::WrongPanel {
                    expected: PanelKind::TicketDetail,
                    actual: PanelKind::Users,
                }
                .into()
            ),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(DisplayError::EmptyComment.into()),
            StatusCode::BAD_REQUEST
        );
    }
}
