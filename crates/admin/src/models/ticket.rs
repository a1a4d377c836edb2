//! Support tickets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use auro_core::{CommentId, LocationId, TicketId, TicketPriority, TicketStatus, UserId};

/// A comment on a ticket. Comments are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketComment {
    pub id: CommentId,
    pub user_id: String,
    pub user_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A customer support case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub subject: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub user_id: UserId,
    pub user_name: String,
    /// Display name of the location the ticket concerns.
    pub location: String,
    pub location_id: LocationId,
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub comments: Vec<TicketComment>,
}

impl Ticket {
    /// Case-insensitive match against id, subject, customer, and location.
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        [
            self.id.as_str(),
            &self.subject,
            &self.user_name,
            &self.location,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
    }
}
