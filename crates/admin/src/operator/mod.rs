//! Operator: keyword-matched answers to administrator questions.
//!
//! Input is lowercased and run against an ordered rule table; the first rule
//! that fires decides the reply. Lookup rules search the [`MockCatalog`] and
//! answer "not found" without a panel when nothing matches. Input no rule
//! claims gets a fixed fallback.
//!
//! Dispatching reads the catalog and nothing else, so the same input always
//! produces the same reply.

pub mod replies;
pub mod rules;

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::display::Panel;
use crate::mock::MockCatalog;
use rules::{Hit, RULES};

pub use replies::OperatorAction;

/// What a rule recognises, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intent {
    TicketList,
    TicketLookup,
    UserList,
    UserLookup,
    LocationList,
    LocationLookup,
    SystemStatus,
    Performance,
    Help,
    Logs,
}

impl Intent {
    /// Every intent, highest priority first.
    pub const ALL: [Self; 10] = [
        Self::TicketList,
        Self::TicketLookup,
        Self::UserList,
        Self::UserLookup,
        Self::LocationList,
        Self::LocationLookup,
        Self::SystemStatus,
        Self::Performance,
        Self::Help,
        Self::Logs,
    ];
}

/// Rules that search a collection by a key taken from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup {
    Ticket,
    User,
    Location,
}

/// How a lookup key is compared with candidate records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// The whole field must equal the key, ignoring case.
    Exact,
    /// The field must contain the key, ignoring case.
    #[default]
    Partial,
}

impl MatchMode {
    fn accepts(self, field: &str, key: &str) -> bool {
        match self {
            Self::Exact => field.eq_ignore_ascii_case(key),
            Self::Partial => field.to_lowercase().contains(&key.to_lowercase()),
        }
    }
}

/// The Operator's answer to one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    /// The rule that answered, or `None` for the fallback.
    pub intent: Option<Intent>,
    pub text: String,
    pub panel: Option<Panel>,
}

impl Reply {
    fn text(intent: Option<Intent>, text: impl Into<String>) -> Self {
        Self {
            intent,
            text: text.into(),
            panel: None,
        }
    }

    fn with_panel(intent: Intent, text: impl Into<String>, panel: Panel) -> Self {
        Self {
            intent: Some(intent),
            text: text.into(),
            panel: Some(panel),
        }
    }
}

/// Matches free text against the rule table.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    catalog: Arc<MockCatalog>,
    ticket_mode: MatchMode,
    user_mode: MatchMode,
    location_mode: MatchMode,
}

impl Dispatcher {
    /// A dispatcher over `catalog` with every lookup in partial mode.
    #[must_use]
    pub fn new(catalog: Arc<MockCatalog>) -> Self {
        Self {
            catalog,
            ticket_mode: MatchMode::Partial,
            user_mode: MatchMode::Partial,
            location_mode: MatchMode::Partial,
        }
    }

    /// Change how one lookup compares its key.
    #[must_use]
    pub fn with_match_mode(mut self, lookup: Lookup, mode: MatchMode) -> Self {
        match lookup {
            Lookup::Ticket => self.ticket_mode = mode,
            Lookup::User => self.user_mode = mode,
            Lookup::Location => self.location_mode = mode,
        }
        self
    }

    #[must_use]
    pub const fn match_mode(&self, lookup: Lookup) -> MatchMode {
        match lookup {
            Lookup::Ticket => self.ticket_mode,
            Lookup::User => self.user_mode,
            Lookup::Location => self.location_mode,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &MockCatalog {
        &self.catalog
    }

    /// Answer `input`.
    #[must_use]
    #[instrument(skip(self))]
    pub fn dispatch(&self, input: &str) -> Reply {
        let normalized = input.to_lowercase();

        for rule in RULES.iter() {
            let Some(hit) = rule.fire(&normalized) else {
                continue;
            };
            if let Some(reply) = self.respond(rule.intent, hit, &normalized) {
                debug!(intent = ?rule.intent, "Rule matched");
                return reply;
            }
        }

        debug!("No rule matched");
        Reply::text(None, replies::FALLBACK)
    }

    /// The reply for a fired rule, or `None` to keep looking.
    fn respond(&self, intent: Intent, hit: Hit<'_>, input: &str) -> Option<Reply> {
        let catalog = &*self.catalog;
        let reply = match (intent, hit) {
            (Intent::TicketList, _) => Reply::with_panel(
                intent,
                replies::TICKETS,
                Panel::Tickets(catalog.tickets.clone()),
            ),
            (Intent::TicketLookup, Hit::Capture(key)) => self.find_ticket(key),
            (Intent::UserList, _) => {
                Reply::with_panel(intent, replies::USERS, Panel::Users(catalog.users.clone()))
            }
            (Intent::UserLookup, _) => self.find_user(rules::user_query(input)?),
            (Intent::LocationList, _) => Reply::with_panel(
                intent,
                replies::LOCATIONS,
                Panel::Locations(catalog.locations.clone()),
            ),
            (Intent::LocationLookup, Hit::Capture(name)) => self.find_location(name.trim()),
            (Intent::SystemStatus, _) => Reply::with_panel(
                intent,
                replies::SYSTEM_STATUS,
                Panel::System(catalog.system_status.clone()),
            ),
            (Intent::Performance, _) => Reply::with_panel(
                intent,
                replies::PERFORMANCE,
                Panel::Performance(catalog.performance.clone()),
            ),
            (Intent::Help, _) => Reply::text(Some(intent), replies::HELP),
            (Intent::Logs, _) => {
                Reply::with_panel(intent, replies::LOGS, Panel::Logs(catalog.logs.clone()))
            }
            (Intent::TicketLookup | Intent::LocationLookup, Hit::Keyword) => return None,
        };
        Some(reply)
    }

    fn find_ticket(&self, key: &str) -> Reply {
        let full_id = format!("TICKET-{key}");
        let mode = self.ticket_mode;
        let found = self.catalog.tickets.iter().find(|t| {
            t.id.as_str().eq_ignore_ascii_case(&full_id) || mode.accepts(t.id.as_str(), key)
        });

        match found {
            Some(ticket) => Reply::with_panel(
                Intent::TicketLookup,
                replies::ticket_found(ticket),
                Panel::TicketDetail(ticket.clone()),
            ),
            None => Reply::text(Some(Intent::TicketLookup), replies::ticket_not_found(key)),
        }
    }

    fn find_user(&self, query: &str) -> Reply {
        let mode = self.user_mode;
        let found = self
            .catalog
            .users
            .iter()
            .find(|u| mode.accepts(&u.name, query) || mode.accepts(&u.email, query));

        match found {
            Some(user) => Reply::with_panel(
                Intent::UserLookup,
                replies::user_found(user),
                Panel::UserDetail(user.clone()),
            ),
            None => Reply::text(Some(Intent::UserLookup), replies::user_not_found(query)),
        }
    }

    fn find_location(&self, name: &str) -> Reply {
        let mode = self.location_mode;
        let found = self
            .catalog
            .locations
            .iter()
            .find(|l| mode.accepts(&l.name, name));

        match found {
            Some(location) => Reply::with_panel(
                Intent::LocationLookup,
                replies::location_found(location),
                Panel::LocationDetail(location.clone()),
            ),
            None => Reply::text(Some(Intent::LocationLookup), replies::location_not_found(name)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::display::PanelKind;

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(Arc::new(MockCatalog::seed(Utc::now())))
    }

    #[test]
    fn test_table() {
        let d = dispatcher();
        let cases = [
            ("Show tickets", Some(Intent::TicketList), Some(PanelKind::Tickets)),
            ("find ticket 1002", Some(Intent::TicketLookup), Some(PanelKind::TicketDetail)),
            ("list all users", Some(Intent::UserList), Some(PanelKind::Users)),
            ("find user sarah", Some(Intent::UserLookup), Some(PanelKind::UserDetail)),
            ("which laundromats do we run?", Some(Intent::LocationList), Some(PanelKind::Locations)),
            ("location named eastside", Some(Intent::LocationLookup), Some(PanelKind::LocationDetail)),
            ("How is system health?", Some(Intent::SystemStatus), Some(PanelKind::System)),
            ("weekly stats", Some(Intent::Performance), Some(PanelKind::Performance)),
            ("what can you do", Some(Intent::Help), None),
            ("error logs", Some(Intent::Logs), Some(PanelKind::Logs)),
            ("order pizza", None, None),
        ];

        for (input, intent, kind) in cases {
            let reply = d.dispatch(input);
            assert_eq!(reply.intent, intent, "{input}");
            assert_eq!(reply.panel.as_ref().map(Panel::kind), kind, "{input}");
        }
    }

    #[test]
    fn test_earlier_rule_wins() {
        let d = dispatcher();
        // a list phrase beats the id that follows it
        assert_eq!(d.dispatch("show ticket 1003").intent, Some(Intent::TicketList));
        // "status" is checked before "logs"
        assert_eq!(d.dispatch("status logs").intent, Some(Intent::SystemStatus));
        // "help" is checked after "health"
        assert_eq!(d.dispatch("help with health").intent, Some(Intent::SystemStatus));
    }

    #[test]
    fn test_missing_ticket_has_no_panel() {
        let reply = dispatcher().dispatch("ticket-7");
        assert_eq!(reply.panel, None);
        assert_eq!(
            reply.text,
            "I couldn't find a ticket matching the ID 7. Would you like to see all open tickets instead?"
        );
    }

    #[test]
    fn test_user_lookup_without_query_falls_through() {
        let reply = dispatcher().dispatch("find user");
        assert_eq!(reply.intent, None);
        assert_eq!(reply.text, replies::FALLBACK);

        let reply = dispatcher().dispatch("find user status");
        assert_eq!(reply.intent, Some(Intent::UserLookup));
        assert!(reply.text.contains("\"status\""));
    }

    #[test]
    fn test_exact_ticket_mode() {
        let partial = dispatcher();
        assert!(partial.dispatch("ticket 100").panel.is_some());

        let exact = dispatcher().with_match_mode(Lookup::Ticket, MatchMode::Exact);
        assert_eq!(exact.match_mode(Lookup::Ticket), MatchMode::Exact);
        assert!(exact.dispatch("ticket 100").panel.is_none());
        assert!(exact.dispatch("ticket 1004").panel.is_some());
        assert!(exact.dispatch("ticket ticket-1004").panel.is_some());
    }

    #[test]
    fn test_exact_user_and_location_modes() {
        let exact = dispatcher()
            .with_match_mode(Lookup::User, MatchMode::Exact)
            .with_match_mode(Lookup::Location, MatchMode::Exact);

        assert!(exact.dispatch("find user sarah").panel.is_none());
        assert!(exact.dispatch("find user named sarah johnson").panel.is_some());
        assert!(exact.dispatch("location called eastside").panel.is_none());
        assert!(exact.dispatch("location called eastside suds").panel.is_some());
    }

    #[test]
    fn test_location_not_found() {
        let reply = dispatcher().dispatch("location named uptown");
        assert_eq!(reply.intent, Some(Intent::LocationLookup));
        assert_eq!(reply.panel, None);
        assert!(reply.text.contains("\"uptown\""));
    }
}
