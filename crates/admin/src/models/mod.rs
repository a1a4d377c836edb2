//! Domain models for the admin dashboard.
//!
//! These are the records the Operator answers questions about. They
//! serialize in camelCase so the `/display/data` payloads read the same as
//! the panel views.

pub mod account;
pub mod chat;
pub mod location;
pub mod log;
pub mod performance;
pub mod system;
pub mod ticket;

pub use account::UserAccount;
pub use chat::ChatMessage;
pub use location::{Location, MachineCounts, Revenue};
pub use log::LogEntry;
pub use performance::{
    BookingMetrics, DailyCount, HourlyCount, LocationRevenue, PerformanceMetrics, RevenueMetrics,
    SystemMetrics, UserMetrics,
};
pub use system::{ComponentStatus, Incident, IncidentStatus, Maintenance, SystemStatus};
pub use ticket::{Ticket, TicketComment};
