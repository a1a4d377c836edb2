//! Operator chat transcript entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use auro_core::{ChatMessageId, ChatRole};

/// A message in the Operator chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message ID.
    pub id: ChatMessageId,
    /// Role of the message sender.
    pub role: ChatRole,
    /// Message text.
    pub content: String,
    /// When the message was added to the transcript.
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// A message typed by the administrator.
    #[must_use]
    pub fn user(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: ChatMessageId::new(format!("user-{}", uuid::Uuid::new_v4())),
            role: ChatRole::User,
            content: content.into(),
            timestamp,
        }
    }

    /// A reply from the Operator.
    #[must_use]
    pub fn assistant(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: ChatMessageId::new(format!("assistant-{}", uuid::Uuid::new_v4())),
            role: ChatRole::Assistant,
            content: content.into(),
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_serialization() {
        let message = ChatMessage::user("Show tickets", Utc::now());

        let json = serde_json::to_string(&message).expect("serialize");
        assert!(json.contains("\"role\":\"user\""));
        assert!(json.contains("\"content\":\"Show tickets\""));
        assert!(message.id.as_str().starts_with("user-"));
    }

    #[test]
    fn test_ids_are_unique() {
        let now = Utc::now();
        assert_ne!(
            ChatMessage::assistant("a", now).id,
            ChatMessage::assistant("a", now).id
        );
    }
}
