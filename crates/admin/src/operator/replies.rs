//! What the Operator says.

use chrono::NaiveDate;
use serde::Deserialize;

use auro_core::{AccountStatus, LocationId, TicketId, UserId};

use crate::models::{Location, Ticket, UserAccount};

pub const WELCOME: &str =
    "Hello, I'm Operator, your administrative assistant. How can I help you today?";

pub const TICKETS: &str = "Here are the current support tickets in the system. I've displayed them in the side panel for you to review. You can click on any ticket to see more details.";

pub const USERS: &str = "Here's a list of all users in the system. I've displayed them in the side panel for you to review. You can click on any user to see their detailed profile.";

pub const LOCATIONS: &str = "Here are all the laundromat locations in our system. I've displayed them in the side panel for you to review. You can click on any location to see more details.";

pub const SYSTEM_STATUS: &str = "Here's the current system status. Overall, the system is operational with a partial outage in Machine Connectivity. Details are displayed in the side panel.";

pub const PERFORMANCE: &str = "Here are the current performance metrics for the platform. I've displayed key user, booking, and revenue metrics in the side panel for your review.";

pub const HELP: &str = "I can help you with various administrative tasks. Here are some commands you can try:\n\n\
- Show tickets / Find ticket [ID]\n\
- Show users / Find user [name or email]\n\
- Show locations / Find location [name]\n\
- System status\n\
- Performance metrics\n\
- Show logs\n\n\
You can also ask me to perform actions like resolving tickets or updating user information.";

pub const LOGS: &str = "Here are the recent system logs. I've displayed them in the side panel, sorted by timestamp with the most recent logs first.";

pub const FALLBACK: &str = "I'm not sure I understand what you're looking for. You can ask me to show tickets, users, locations, system status, or performance metrics. Type 'help' to see all available commands.";

#[must_use]
pub fn ticket_found(ticket: &Ticket) -> String {
    format!(
        "I've found ticket {} regarding \"{}\" from {}. The details are displayed in the side panel.",
        ticket.id, ticket.subject, ticket.user_name
    )
}

#[must_use]
pub fn ticket_not_found(key: &str) -> String {
    format!(
        "I couldn't find a ticket matching the ID {key}. Would you like to see all open tickets instead?"
    )
}

#[must_use]
pub fn user_found(user: &UserAccount) -> String {
    format!(
        "I found user {} ({}). Their profile details are displayed in the side panel.",
        user.name, user.email
    )
}

#[must_use]
pub fn user_not_found(query: &str) -> String {
    format!(
        "I couldn't find a user matching \"{query}\". Would you like to see a list of all users instead?"
    )
}

#[must_use]
pub fn location_found(location: &Location) -> String {
    format!(
        "I found the location \"{}\" at {}. The details are displayed in the side panel.",
        location.name, location.address
    )
}

#[must_use]
pub fn location_not_found(name: &str) -> String {
    format!(
        "I couldn't find a location matching \"{name}\". Would you like to see all locations instead?"
    )
}

/// An administrative action the Operator acknowledges with a canned reply.
///
/// Nothing is changed; the reply only confirms the request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum OperatorAction {
    ResolveTicket {
        ticket_id: TicketId,
    },
    AssignTicket {
        ticket_id: TicketId,
        assignee: String,
    },
    UpdateUserStatus {
        user_id: UserId,
        status: AccountStatus,
    },
    ScheduleMaintenance {
        location_id: LocationId,
        date: NaiveDate,
    },
}

impl OperatorAction {
    #[must_use]
    pub fn reply(&self) -> String {
        match self {
            Self::ResolveTicket { ticket_id } => format!(
                "I've marked ticket {ticket_id} as resolved. The ticket status has been updated in the system."
            ),
            Self::AssignTicket { ticket_id, assignee } => format!(
                "I've assigned ticket {ticket_id} to {assignee}. They will be notified of this assignment."
            ),
            Self::UpdateUserStatus { user_id, status } => format!(
                "I've updated the status of user {user_id} to {status}. The changes have been saved to the database."
            ),
            Self::ScheduleMaintenance { location_id, date } => format!(
                "I've scheduled maintenance for location {location_id} on {date}. All relevant parties will be notified."
            ),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_action_reply_from_json() {
        let action: OperatorAction = serde_json::from_str(
            r#"{"action":"assign_ticket","ticketId":"TICKET-1003","assignee":"Tech Support"}"#,
        )
        .unwrap();
        assert_eq!(
            action.reply(),
            "I've assigned ticket TICKET-1003 to Tech Support. They will be notified of this assignment."
        );

        let action: OperatorAction = serde_json::from_str(
            r#"{"action":"schedule_maintenance","locationId":"LOC-004","date":"2026-11-02"}"#,
        )
        .unwrap();
        assert!(action.reply().contains("LOC-004 on 2026-11-02"));
    }

    #[test]
    fn test_help_lists_commands() {
        assert!(HELP.contains("- Show logs\n\n"));
        assert!(HELP.starts_with("I can help"));
    }
}
