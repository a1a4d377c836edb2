//! Application state shared across handlers.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::config::AdminConfig;
use crate::display::DisplayState;
use crate::mock::MockCatalog;
use crate::operator::Dispatcher;
use crate::services::{ChatService, ChatTranscript};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and holds the one chat
/// transcript and side panel the dashboard shows.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    dispatcher: Dispatcher,
    transcript: Mutex<ChatTranscript>,
    display: Mutex<DisplayState>,
}

impl AppState {
    /// Create application state over the catalog seeded as of now.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        let catalog = Arc::new(MockCatalog::seed(Utc::now()));
        Self::with_dispatcher(config, Dispatcher::new(catalog))
    }

    /// Create application state around an existing dispatcher.
    #[must_use]
    pub fn with_dispatcher(config: AdminConfig, dispatcher: Dispatcher) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                dispatcher,
                transcript: Mutex::new(ChatTranscript::new()),
                display: Mutex::new(DisplayState::new()),
            }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.inner.dispatcher
    }

    #[must_use]
    pub fn catalog(&self) -> &MockCatalog {
        self.inner.dispatcher.catalog()
    }

    /// The side panel.
    #[must_use]
    pub fn display(&self) -> &Mutex<DisplayState> {
        &self.inner.display
    }

    /// A chat service over this state's transcript and panel.
    #[must_use]
    pub fn chat(&self) -> ChatService<'_> {
        ChatService::new(
            &self.inner.dispatcher,
            &self.inner.transcript,
            &self.inner.display,
            self.inner.config.latency,
        )
    }
}
