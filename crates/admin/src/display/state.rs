//! The panel currently on screen.
//!
//! Edits made from the ticket detail view change only the displayed copy;
//! the catalog keeps its original records.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use auro_core::{CommentId, TicketStatus};

use super::{DisplayError, Panel, PanelKind};
use crate::mock::MockCatalog;
use crate::models::{Ticket, TicketComment};

const ADMIN_USER_ID: &str = "ADMIN-001";
const ADMIN_USER_NAME: &str = "Admin User";

#[derive(Debug, Clone, Default)]
pub struct DisplayState {
    panel: Option<Panel>,
}

impl DisplayState {
    #[must_use]
    pub const fn new() -> Self {
        Self { panel: None }
    }

    #[must_use]
    pub const fn panel(&self) -> Option<&Panel> {
        self.panel.as_ref()
    }

    pub fn show(&mut self, panel: Panel) {
        debug!(kind = %panel.kind(), "Showing panel");
        self.panel = Some(panel);
    }

    pub fn clear(&mut self) {
        self.panel = None;
    }

    /// Replace a detail panel with the full list it came from.
    ///
    /// List panels are left as they are.
    ///
    /// # Errors
    ///
    /// Returns `DisplayError::NoPanel` if nothing is displayed.
    pub fn back_to_list(&mut self, catalog: &MockCatalog) -> Result<PanelKind, DisplayError> {
        let kind = self.panel.as_ref().ok_or(DisplayError::NoPanel)?.kind();
        let Some(list) = kind.list() else {
            return Ok(kind);
        };

        self.panel = Some(match list {
            PanelKind::Users => Panel::Users(catalog.users.clone()),
            PanelKind::Locations => Panel::Locations(catalog.locations.clone()),
            _ => Panel::Tickets(catalog.tickets.clone()),
        });
        Ok(list)
    }

    fn ticket_mut(&mut self) -> Result<&mut Ticket, DisplayError> {
        match self.panel.as_mut() {
            Some(Panel::TicketDetail(ticket)) => Ok(ticket),
            Some(other) => Err(DisplayError::WrongPanel {
                expected: PanelKind::TicketDetail,
                actual: other.kind(),
            }),
            None => Err(DisplayError::NoPanel),
        }
    }

    /// Change the displayed ticket's status and note the change as a comment.
    ///
    /// Setting the status it already has changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error unless a ticket detail panel is displayed.
    pub fn update_ticket_status(
        &mut self,
        status: TicketStatus,
        now: DateTime<Utc>,
    ) -> Result<&Ticket, DisplayError> {
        let ticket = self.ticket_mut()?;
        if ticket.status == status {
            return Ok(ticket);
        }

        info!(ticket_id = %ticket.id, from = %ticket.status, to = %status, "Ticket status updated");
        let note = format!("Status updated from {} to {status}", ticket.status);
        ticket.status = status;
        push_admin_comment(ticket, note, now);
        Ok(ticket)
    }

    /// Append an administrator comment to the displayed ticket.
    ///
    /// # Errors
    ///
    /// Returns `DisplayError::EmptyComment` for blank content, or an error
    /// unless a ticket detail panel is displayed.
    pub fn add_ticket_comment(
        &mut self,
        content: &str,
        now: DateTime<Utc>,
    ) -> Result<&Ticket, DisplayError> {
        if content.trim().is_empty() {
            return Err(DisplayError::EmptyComment);
        }
        let ticket = self.ticket_mut()?;
        push_admin_comment(ticket, content.to_string(), now);
        Ok(ticket)
    }
}

fn push_admin_comment(ticket: &mut Ticket, content: String, now: DateTime<Utc>) {
    ticket.updated_at = now;
    ticket.comments.push(TicketComment {
        id: CommentId::new(format!("COMMENT-{}", uuid::Uuid::new_v4().simple())),
        user_id: ADMIN_USER_ID.to_string(),
        user_name: ADMIN_USER_NAME.to_string(),
        content,
        created_at: now,
    });
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn showing_ticket() -> (MockCatalog, DisplayState) {
        let catalog = MockCatalog::seed(Utc::now());
        let mut state = DisplayState::new();
        state.show(Panel::TicketDetail(catalog.tickets[0].clone()));
        (catalog, state)
    }

    #[test]
    fn test_status_change_appends_comment() {
        let (_, mut state) = showing_ticket();
        let now = Utc::now();

        let ticket = state.update_ticket_status(TicketStatus::Resolved, now).unwrap();
        assert_eq!(ticket.status, TicketStatus::Resolved);
        assert_eq!(ticket.updated_at, now);
        let note = ticket.comments.last().unwrap();
        assert_eq!(note.user_name, "Admin User");
        assert_eq!(note.content, "Status updated from open to resolved");
    }

    #[test]
    fn test_same_status_is_noop() {
        let (_, mut state) = showing_ticket();
        let ticket = state
            .update_ticket_status(TicketStatus::Open, Utc::now())
            .unwrap();
        assert!(ticket.comments.is_empty());
    }

    #[test]
    fn test_blank_comment_rejected() {
        let (_, mut state) = showing_ticket();
        assert!(matches!(
            state.add_ticket_comment("   ", Utc::now()),
            Err(DisplayError::EmptyComment)
        ));

        let ticket = state.add_ticket_comment("Called the customer", Utc::now()).unwrap();
        assert_eq!(ticket.comments.len(), 1);
    }

    #[test]
    fn test_edits_need_ticket_detail() {
        let mut state = DisplayState::new();
        assert!(matches!(
            state.update_ticket_status(TicketStatus::Resolved, Utc::now()),
            Err(DisplayError::NoPanel)
        ));

        let catalog = MockCatalog::seed(Utc::now());
        state.show(Panel::Logs(catalog.logs.clone()));
        assert!(matches!(
            state.add_ticket_comment("hi", Utc::now()),
            Err(DisplayError::WrongPanel { actual: PanelKind::Logs, .. })
        ));
    }

    #[test]
    fn test_back_to_list_restores_catalog() {
        let (catalog, mut state) = showing_ticket();
        state.add_ticket_comment("local only", Utc::now()).unwrap();

        assert_eq!(state.back_to_list(&catalog).unwrap(), PanelKind::Tickets);
        assert_eq!(state.panel(), Some(&Panel::Tickets(catalog.tickets.clone())));
        // already a list
        assert_eq!(state.back_to_list(&catalog).unwrap(), PanelKind::Tickets);
    }
}
