//! System log lines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use auro_core::{LogId, LogLevel};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: LogId,
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub source: String,
    pub message: String,
}

impl LogEntry {
    /// Case-insensitive match against id, message, and source.
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        [self.id.as_str(), &self.message, &self.source]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}
