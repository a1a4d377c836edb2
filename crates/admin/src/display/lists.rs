//! Filters for the list panels.
//!
//! Every filter is optional; `all` or a blank value means "no filter".

use std::str::FromStr;

use serde::Deserialize;

use auro_core::{AccountStatus, LogLevel, SubscriptionTier, TicketPriority, TicketStatus};

use super::DisplayError;
use crate::models::{Location, LogEntry, Ticket, UserAccount};

/// Filter values as they arrive from the query string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub subscription: Option<String>,
    pub level: Option<String>,
    pub source: Option<String>,
    pub search: Option<String>,
}

impl ListQuery {
    fn search(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Tickets matching status, priority, and search.
    ///
    /// # Errors
    ///
    /// Returns `DisplayError::InvalidFilter` for an unknown status or priority.
    pub fn tickets<'a>(&self, tickets: &'a [Ticket]) -> Result<Vec<&'a Ticket>, DisplayError> {
        let status = choice::<TicketStatus>(self.status.as_deref())?;
        let priority = choice::<TicketPriority>(self.priority.as_deref())?;
        let search = self.search();

        Ok(tickets
            .iter()
            .filter(|t| status.is_none_or(|s| t.status == s))
            .filter(|t| priority.is_none_or(|p| t.priority == p))
            .filter(|t| search.is_none_or(|q| t.matches_search(q)))
            .collect())
    }

    /// Users matching status, subscription, and search.
    ///
    /// # Errors
    ///
    /// Returns `DisplayError::InvalidFilter` for an unknown status or tier.
    pub fn users<'a>(
        &self,
        users: &'a [UserAccount],
    ) -> Result<Vec<&'a UserAccount>, DisplayError> {
        let status = choice::<AccountStatus>(self.status.as_deref())?;
        let subscription = choice::<SubscriptionTier>(self.subscription.as_deref())?;
        let search = self.search();

        Ok(users
            .iter()
            .filter(|u| status.is_none_or(|s| u.status == s))
            .filter(|u| subscription.is_none_or(|s| u.subscription == s))
            .filter(|u| search.is_none_or(|q| u.matches_search(q)))
            .collect())
    }

    /// Log lines matching level, source, and search.
    ///
    /// # Errors
    ///
    /// Returns `DisplayError::InvalidFilter` for an unknown level.
    pub fn logs<'a>(&self, logs: &'a [LogEntry]) -> Result<Vec<&'a LogEntry>, DisplayError> {
        let level = choice::<LogLevel>(self.level.as_deref())?;
        let source = selected(self.source.as_deref());
        let search = self.search();

        Ok(logs
            .iter()
            .filter(|l| level.is_none_or(|v| l.level == v))
            .filter(|l| source.is_none_or(|s| l.source == s))
            .filter(|l| search.is_none_or(|q| l.matches_search(q)))
            .collect())
    }

    /// Locations matching search.
    #[must_use]
    pub fn locations<'a>(&self, locations: &'a [Location]) -> Vec<&'a Location> {
        let search = self.search();
        locations
            .iter()
            .filter(|l| search.is_none_or(|q| l.matches_search(q)))
            .collect()
    }
}

/// Distinct log sources in first-seen order.
#[must_use]
pub fn log_sources(logs: &[LogEntry]) -> Vec<&str> {
    let mut sources: Vec<&str> = Vec::new();
    for log in logs {
        if !sources.contains(&log.source.as_str()) {
            sources.push(&log.source);
        }
    }
    sources
}

fn selected(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

fn choice<T: FromStr<Err = String>>(value: Option<&str>) -> Result<Option<T>, DisplayError> {
    selected(value)
        .map(T::from_str)
        .transpose()
        .map_err(DisplayError::InvalidFilter)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::mock::MockCatalog;

    #[test]
    fn test_ticket_filters_combine() {
        let catalog = MockCatalog::seed(Utc::now());
        let query = ListQuery {
            status: Some("open".to_string()),
            priority: Some("all".to_string()),
            search: Some("westside".to_string()),
            ..ListQuery::default()
        };

        let ids: Vec<&str> = query
            .tickets(&catalog.tickets)
            .unwrap()
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, ["TICKET-1006"]);
    }

    #[test]
    fn test_unknown_status_rejected() {
        let catalog = MockCatalog::seed(Utc::now());
        let query = ListQuery {
            status: Some("closed".to_string()),
            ..ListQuery::default()
        };
        assert!(matches!(
            query.tickets(&catalog.tickets),
            Err(DisplayError::InvalidFilter(_))
        ));
    }

    #[test]
    fn test_user_search_covers_phone() {
        let catalog = MockCatalog::seed(Utc::now());
        let query = ListQuery {
            search: Some("345-6789".to_string()),
            subscription: Some("premium".to_string()),
            ..ListQuery::default()
        };
        let users = query.users(&catalog.users).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Emily Rodriguez");
    }

    #[test]
    fn test_log_filters_and_sources() {
        let catalog = MockCatalog::seed(Utc::now());
        let query = ListQuery {
            level: Some("ERROR".to_string()),
            ..ListQuery::default()
        };
        assert_eq!(query.logs(&catalog.logs).unwrap().len(), 1);

        let sources = log_sources(&catalog.logs);
        assert_eq!(sources[0], "machine-connectivity");
        assert_eq!(sources.len(), 5);
    }

    #[test]
    fn test_location_search_by_address() {
        let catalog = MockCatalog::seed(Utc::now());
        let query = ListQuery {
            search: Some("queens".to_string()),
            ..ListQuery::default()
        };
        let found = query.locations(&catalog.locations);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.as_str(), "LOC-004");
    }
}
