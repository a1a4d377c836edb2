//! Chat service for conversations with the Operator.
//!
//! This service handles the complete flow of:
//! 1. Appending the administrator's message
//! 2. Waiting out the simulated reply delay
//! 3. Dispatching the text to the Operator
//! 4. Appending the reply and showing any panel it carries

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{info, instrument};

use auro_core::{ChatMessageId, ChatRole, Latency, SimulatedCall};

use crate::display::DisplayState;
use crate::models::ChatMessage;
use crate::operator::{Dispatcher, OperatorAction, Reply, replies};

/// Errors that can occur in the chat service.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// Blank messages are not sent.
    #[error("Message cannot be empty")]
    EmptyMessage,
}

/// The conversation so far.
#[derive(Debug, Clone)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    /// Sends still waiting on a reply.
    pending: usize,
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatTranscript {
    /// A transcript holding only the Operator's welcome.
    #[must_use]
    pub fn new() -> Self {
        Self {
            messages: vec![welcome()],
            pending: 0,
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether a reply is still being prepared.
    #[must_use]
    pub const fn is_processing(&self) -> bool {
        self.pending > 0
    }

    fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    fn reset(&mut self) {
        self.messages = vec![welcome()];
    }
}

fn welcome() -> ChatMessage {
    ChatMessage {
        id: ChatMessageId::new("welcome-message"),
        role: ChatRole::Assistant,
        content: replies::WELCOME.to_string(),
        timestamp: Utc::now(),
    }
}

/// Chat service for Operator conversations.
///
/// Locks are taken one at a time and never held across the reply delay, so
/// overlapping sends interleave.
pub struct ChatService<'a> {
    dispatcher: &'a Dispatcher,
    transcript: &'a Mutex<ChatTranscript>,
    display: &'a Mutex<DisplayState>,
    latency: Latency,
}

impl<'a> ChatService<'a> {
    /// Create a new chat service.
    #[must_use]
    pub const fn new(
        dispatcher: &'a Dispatcher,
        transcript: &'a Mutex<ChatTranscript>,
        display: &'a Mutex<DisplayState>,
        latency: Latency,
    ) -> Self {
        Self {
            dispatcher,
            transcript,
            display,
            latency,
        }
    }

    /// Send a message and wait for the Operator's reply.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::EmptyMessage` if `content` is blank.
    #[instrument(skip(self))]
    pub async fn send_message(&self, content: &str) -> Result<Reply, ChatError> {
        if content.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        {
            let mut transcript = self.transcript.lock().await;
            transcript.push(ChatMessage::user(content, Utc::now()));
            transcript.pending += 1;
        }

        self.latency.pause(SimulatedCall::OperatorReply).await;
        let reply = self.dispatcher.dispatch(content);

        {
            let mut transcript = self.transcript.lock().await;
            transcript.push(ChatMessage::assistant(reply.text.clone(), Utc::now()));
            transcript.pending = transcript.pending.saturating_sub(1);
        }

        if let Some(panel) = &reply.panel {
            self.display.lock().await.show(panel.clone());
        }

        info!(intent = ?reply.intent, has_panel = reply.panel.is_some(), "Operator replied");
        Ok(reply)
    }

    /// Append the Operator's acknowledgement of an administrative action.
    pub async fn acknowledge(&self, action: &OperatorAction) -> ChatMessage {
        let message = ChatMessage::assistant(action.reply(), Utc::now());
        self.transcript.lock().await.push(message.clone());
        info!(?action, "Action acknowledged");
        message
    }

    /// Restore the welcome message and clear the panel.
    pub async fn clear(&self) {
        self.transcript.lock().await.reset();
        self.display.lock().await.clear();
    }

    /// A copy of the transcript.
    pub async fn transcript(&self) -> ChatTranscript {
        self.transcript.lock().await.clone()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::display::{Panel, PanelKind};
    use crate::mock::MockCatalog;

    struct Fixture {
        dispatcher: Dispatcher,
        transcript: Mutex<ChatTranscript>,
        display: Mutex<DisplayState>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                dispatcher: Dispatcher::new(Arc::new(MockCatalog::seed(Utc::now()))),
                transcript: Mutex::new(ChatTranscript::new()),
                display: Mutex::new(DisplayState::new()),
            }
        }

        fn service(&self, latency: Latency) -> ChatService<'_> {
            ChatService::new(&self.dispatcher, &self.transcript, &self.display, latency)
        }
    }

    #[tokio::test]
    async fn test_send_appends_both_sides_and_shows_panel() {
        let fixture = Fixture::new();
        let chat = fixture.service(Latency::Instant);

        let reply = chat.send_message("show tickets").await.unwrap();
        assert_eq!(reply.panel.as_ref().map(Panel::kind), Some(PanelKind::Tickets));

        let transcript = chat.transcript().await;
        let roles: Vec<ChatRole> = transcript.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, [ChatRole::Assistant, ChatRole::User, ChatRole::Assistant]);
        assert!(!transcript.is_processing());
        assert_eq!(
            fixture.display.lock().await.panel().map(Panel::kind),
            Some(PanelKind::Tickets)
        );
    }

    #[tokio::test]
    async fn test_text_only_reply_keeps_panel() {
        let fixture = Fixture::new();
        let chat = fixture.service(Latency::Instant);

        chat.send_message("system status").await.unwrap();
        chat.send_message("help").await.unwrap();
        assert_eq!(
            fixture.display.lock().await.panel().map(Panel::kind),
            Some(PanelKind::System)
        );
    }

    #[tokio::test]
    async fn test_blank_message_rejected() {
        let fixture = Fixture::new();
        let chat = fixture.service(Latency::Instant);

        assert!(matches!(
            chat.send_message("  \n").await,
            Err(ChatError::EmptyMessage)
        ));
        assert_eq!(chat.transcript().await.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_clear_restores_welcome() {
        let fixture = Fixture::new();
        let chat = fixture.service(Latency::Instant);

        chat.send_message("show users").await.unwrap();
        chat.clear().await;

        let transcript = chat.transcript().await;
        assert_eq!(transcript.messages().len(), 1);
        assert_eq!(transcript.messages()[0].id.as_str(), "welcome-message");
        assert!(fixture.display.lock().await.panel().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_processing_while_reply_pending() {
        let fixture = Fixture::new();
        let chat = fixture.service(Latency::Simulated);

        let send = chat.send_message("logs");
        tokio::pin!(send);
        tokio::select! {
            _ = &mut send => panic!("reply arrived before the delay"),
            () = tokio::time::sleep(Duration::from_millis(1000)) => {}
        }
        assert!(fixture.transcript.lock().await.is_processing());

        send.await.unwrap();
        assert!(!fixture.transcript.lock().await.is_processing());
    }

    #[tokio::test]
    async fn test_acknowledge_action() {
        let fixture = Fixture::new();
        let chat = fixture.service(Latency::Instant);

        let message = chat
            .acknowledge(&OperatorAction::ResolveTicket {
                ticket_id: "TICKET-1001".into(),
            })
            .await;
        assert_eq!(message.role, ChatRole::Assistant);
        assert!(message.content.starts_with("I've marked ticket TICKET-1001 as resolved."));
        assert_eq!(chat.transcript().await.messages().len(), 2);
    }
}
