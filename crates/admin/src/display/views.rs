//! Askama views for each panel kind.

use askama::Template;

use auro_core::TicketStatus;

use super::lists::log_sources;
use super::{DisplayError, ListQuery, Panel};
use crate::filters;
use crate::models::{
    Location, LogEntry, PerformanceMetrics, SystemStatus, Ticket, UserAccount,
};

// =============================================================================
// Templates
// =============================================================================

/// Placeholder shown before the Operator has displayed anything.
#[derive(Template)]
#[template(path = "display/empty.html")]
struct EmptyView;

#[derive(Template)]
#[template(path = "display/tickets.html")]
struct TicketsView<'a> {
    tickets: Vec<&'a Ticket>,
    total: usize,
    search: &'a str,
}

#[derive(Template)]
#[template(path = "display/ticket_detail.html")]
struct TicketDetailView<'a> {
    ticket: &'a Ticket,
    statuses: [TicketStatus; 3],
}

#[derive(Template)]
#[template(path = "display/users.html")]
struct UsersView<'a> {
    users: Vec<&'a UserAccount>,
    total: usize,
    search: &'a str,
}

#[derive(Template)]
#[template(path = "display/user_detail.html")]
struct UserDetailView<'a> {
    user: &'a UserAccount,
}

#[derive(Template)]
#[template(path = "display/locations.html")]
struct LocationsView<'a> {
    locations: Vec<&'a Location>,
    total: usize,
    search: &'a str,
}

#[derive(Template)]
#[template(path = "display/location_detail.html")]
struct LocationDetailView<'a> {
    location: &'a Location,
}

#[derive(Template)]
#[template(path = "display/system.html")]
struct SystemView<'a> {
    status: &'a SystemStatus,
}

#[derive(Template)]
#[template(path = "display/performance.html")]
struct PerformanceView<'a> {
    metrics: &'a PerformanceMetrics,
}

#[derive(Template)]
#[template(path = "display/logs.html")]
struct LogsView<'a> {
    logs: Vec<&'a LogEntry>,
    total: usize,
    sources: Vec<&'a str>,
    search: &'a str,
}

// =============================================================================
// Router
// =============================================================================

/// Picks the view for a panel.
pub struct DisplayRouter;

impl DisplayRouter {
    /// Render `panel` unfiltered, or the placeholder when there is none.
    ///
    /// # Errors
    ///
    /// Returns `DisplayError::Render` if a template fails.
    pub fn render(panel: Option<&Panel>) -> Result<String, DisplayError> {
        Self::render_filtered(panel, &ListQuery::default())
    }

    /// Render `panel`, narrowing list panels by `query`.
    ///
    /// # Errors
    ///
    /// Returns `DisplayError::InvalidFilter` for unknown filter values, or
    /// `DisplayError::Render` if a template fails.
    pub fn render_filtered(panel: Option<&Panel>, query: &ListQuery) -> Result<String, DisplayError> {
        let search = query.search.as_deref().unwrap_or_default();

        let html = match panel {
            None => EmptyView.render()?,
            Some(Panel::Tickets(tickets)) => TicketsView {
                tickets: query.tickets(tickets)?,
                total: tickets.len(),
                search,
            }
            .render()?,
            Some(Panel::TicketDetail(ticket)) => TicketDetailView {
                ticket,
                statuses: [
                    TicketStatus::Open,
                    TicketStatus::InProgress,
                    TicketStatus::Resolved,
                ],
            }
            .render()?,
            Some(Panel::Users(users)) => UsersView {
                users: query.users(users)?,
                total: users.len(),
                search,
            }
            .render()?,
            Some(Panel::UserDetail(user)) => UserDetailView { user }.render()?,
            Some(Panel::Locations(locations)) => LocationsView {
                locations: query.locations(locations),
                total: locations.len(),
                search,
            }
            .render()?,
            Some(Panel::LocationDetail(location)) => LocationDetailView { location }.render()?,
            Some(Panel::System(status)) => SystemView { status }.render()?,
            Some(Panel::Performance(metrics)) => PerformanceView { metrics }.render()?,
            Some(Panel::Logs(logs)) => LogsView {
                logs: query.logs(logs)?,
                total: logs.len(),
                sources: log_sources(logs),
                search,
            }
            .render()?,
        };
        Ok(html)
    }
}
