//! The side panel: what the Operator last showed and how it renders.
//!
//! # Modules
//!
//! - [`lists`] - Filters the list panels offer
//! - [`state`] - The panel currently on screen and its local edits
//! - [`views`] - One askama view per panel kind

pub mod lists;
pub mod state;
pub mod views;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Location, LogEntry, PerformanceMetrics, SystemStatus, Ticket, UserAccount};

pub use lists::ListQuery;
pub use state::DisplayState;
pub use views::DisplayRouter;

/// Payload for the side panel, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum Panel {
    Tickets(Vec<Ticket>),
    TicketDetail(Ticket),
    Users(Vec<UserAccount>),
    UserDetail(UserAccount),
    Locations(Vec<Location>),
    LocationDetail(Location),
    System(SystemStatus),
    Performance(PerformanceMetrics),
    Logs(Vec<LogEntry>),
}

impl Panel {
    #[must_use]
    pub const fn kind(&self) -> PanelKind {
        match self {
            Self::Tickets(_) => PanelKind::Tickets,
            Self::TicketDetail(_) => PanelKind::TicketDetail,
            Self::Users(_) => PanelKind::Users,
            Self::UserDetail(_) => PanelKind::UserDetail,
            Self::Locations(_) => PanelKind::Locations,
            Self::LocationDetail(_) => PanelKind::LocationDetail,
            Self::System(_) => PanelKind::System,
            Self::Performance(_) => PanelKind::Performance,
            Self::Logs(_) => PanelKind::Logs,
        }
    }
}

/// Which view a panel renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelKind {
    Tickets,
    TicketDetail,
    Users,
    UserDetail,
    Locations,
    LocationDetail,
    System,
    Performance,
    Logs,
}

impl PanelKind {
    /// The wire name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tickets => "tickets",
            Self::TicketDetail => "ticket-detail",
            Self::Users => "users",
            Self::UserDetail => "user-detail",
            Self::Locations => "locations",
            Self::LocationDetail => "location-detail",
            Self::System => "system",
            Self::Performance => "performance",
            Self::Logs => "logs",
        }
    }

    /// The list a detail kind returns to.
    #[must_use]
    pub const fn list(self) -> Option<Self> {
        match self {
            Self::TicketDetail => Some(Self::Tickets),
            Self::UserDetail => Some(Self::Users),
            Self::LocationDetail => Some(Self::Locations),
            _ => None,
        }
    }
}

impl std::fmt::Display for PanelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from reading or editing the side panel.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// Nothing is on screen.
    #[error("No data selected")]
    NoPanel,

    /// The panel on screen does not support the operation.
    #[error("Expected the {expected} panel, but {actual} is displayed")]
    WrongPanel {
        expected: PanelKind,
        actual: PanelKind,
    },

    #[error("Comment cannot be empty")]
    EmptyComment,

    /// A list filter value was not recognised.
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::mock::MockCatalog;

    #[test]
    fn test_panel_wire_format() {
        let catalog = MockCatalog::seed(Utc::now());
        let panel = Panel::TicketDetail(catalog.tickets[0].clone());

        let json = serde_json::to_value(&panel).unwrap();
        assert_eq!(json["type"], "ticket-detail");
        assert_eq!(json["data"]["id"], "TICKET-1001");
        assert_eq!(json["type"], panel.kind().as_str());
    }

    #[test]
    fn test_detail_kinds_have_lists() {
        assert_eq!(PanelKind::UserDetail.list(), Some(PanelKind::Users));
        assert_eq!(PanelKind::Logs.list(), None);
    }
}
