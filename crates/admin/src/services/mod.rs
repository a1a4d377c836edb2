//! Business logic services for admin.
//!
//! # Services
//!
//! - `chat` - Operator conversations and the transcript they build

pub mod chat;

pub use chat::{ChatError, ChatService, ChatTranscript};
