//! Mock collections standing in for the platform's back office.
//!
//! Timestamps are computed relative to a caller-supplied `now` so tests can
//! pin them. Logs are ordered newest first.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use auro_core::{
    AccountStatus, CommentId, HealthPreference, LocationId, LogId, LogLevel, ServiceStatus,
    SubscriptionTier, TicketId, TicketPriority, TicketStatus, UserId,
};

use crate::models::{
    BookingMetrics, ComponentStatus, DailyCount, HourlyCount, Incident, IncidentStatus, Location,
    LocationRevenue, LogEntry, Maintenance, MachineCounts, PerformanceMetrics, Revenue,
    RevenueMetrics, SystemMetrics, SystemStatus, Ticket, TicketComment, UserAccount, UserMetrics,
};

/// Every collection the Operator can show.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    pub tickets: Vec<Ticket>,
    pub users: Vec<UserAccount>,
    pub locations: Vec<Location>,
    pub system_status: SystemStatus,
    pub performance: PerformanceMetrics,
    pub logs: Vec<LogEntry>,
}

impl MockCatalog {
    /// Build the demo back office as of `now`.
    #[must_use]
    pub fn seed(now: DateTime<Utc>) -> Self {
        Self {
            tickets: tickets(now),
            users: users(now),
            locations: locations(now),
            system_status: system_status(now),
            performance: performance(now),
            logs: logs(now),
        }
    }

    #[must_use]
    pub fn ticket(&self, id: &TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| &t.id == id)
    }
}

fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

fn comment(id: u32, user_id: &str, user_name: &str, content: &str, at: DateTime<Utc>) -> TicketComment {
    TicketComment {
        id: CommentId::new(format!("COMMENT-{id:03}")),
        user_id: user_id.to_string(),
        user_name: user_name.to_string(),
        content: content.to_string(),
        created_at: at,
    }
}

/// Six tickets, `TICKET-1001` through `TICKET-1006`.
#[allow(clippy::too_many_lines)]
fn tickets(now: DateTime<Utc>) -> Vec<Ticket> {
    struct Row {
        number: u32,
        subject: &'static str,
        description: &'static str,
        status: TicketStatus,
        priority: TicketPriority,
        user: (&'static str, &'static str),
        location: (&'static str, &'static str),
        assigned_to: Option<&'static str>,
        opened: Duration,
        touched: Duration,
    }

    let rows = [
        Row {
            number: 1001,
            subject: "Washer not starting after payment",
            description: "Paid through the app for washer #3 but the machine never started. Charged $3.50.",
            status: TicketStatus::Open,
            priority: TicketPriority::High,
            user: ("USER-001", "Sarah Johnson"),
            location: ("LOC-001", "Downtown Laundry Hub"),
            assigned_to: None,
            opened: Duration::hours(3),
            touched: Duration::hours(3),
        },
        Row {
            number: 1002,
            subject: "Refund request for damaged clothes",
            description: "Dryer #5 ran far too hot and shrank a wool sweater. Requesting a refund.",
            status: TicketStatus::InProgress,
            priority: TicketPriority::Medium,
            user: ("USER-002", "Michael Chen"),
            location: ("LOC-002", "Westside Wash & Dry"),
            assigned_to: Some("Support Team"),
            opened: Duration::days(1),
            touched: Duration::hours(6),
        },
        Row {
            number: 1003,
            subject: "Cannot update payment method",
            description: "The app shows an error whenever I try to add a new card.",
            status: TicketStatus::Open,
            priority: TicketPriority::Medium,
            user: ("USER-003", "Emily Rodriguez"),
            location: ("LOC-003", "Eastside Suds"),
            assigned_to: None,
            opened: Duration::days(2),
            touched: Duration::days(2),
        },
        Row {
            number: 1004,
            subject: "Booking disappeared from app",
            description: "Booked a dryer for 6 PM and the booking vanished from my list.",
            status: TicketStatus::Resolved,
            priority: TicketPriority::Low,
            user: ("USER-004", "David Kim"),
            location: ("LOC-001", "Downtown Laundry Hub"),
            assigned_to: Some("Tech Support"),
            opened: Duration::days(4),
            touched: Duration::days(3),
        },
        Row {
            number: 1005,
            subject: "PayRange reader offline",
            description: "The PayRange reader on every dryer shows offline. Coins still work.",
            status: TicketStatus::InProgress,
            priority: TicketPriority::High,
            user: ("USER-005", "Jessica Patel"),
            location: ("LOC-004", "Northgate Laundromat"),
            assigned_to: Some("Field Technician"),
            opened: Duration::hours(20),
            touched: Duration::hours(2),
        },
        Row {
            number: 1006,
            subject: "Premium subscription charged twice",
            description: "My card was billed twice for this month's premium plan.",
            status: TicketStatus::Open,
            priority: TicketPriority::Low,
            user: ("USER-002", "Michael Chen"),
            location: ("LOC-002", "Westside Wash & Dry"),
            assigned_to: None,
            opened: Duration::minutes(45),
            touched: Duration::minutes(45),
        },
    ];

    rows.into_iter()
        .map(|row| {
            let created_at = now - row.opened;
            let comments = match row.number {
                1002 => vec![comment(
                    1,
                    "SUPPORT-001",
                    "Support Team",
                    "We've asked the location manager to inspect dryer #5.",
                    now - Duration::hours(6),
                )],
                1004 => vec![
                    comment(
                        2,
                        "SUPPORT-002",
                        "Tech Support",
                        "Found the booking; a sync error hid it. Restored.",
                        now - Duration::days(3) - Duration::hours(4),
                    ),
                    comment(
                        3,
                        row.user.0,
                        row.user.1,
                        "It shows up again, thanks!",
                        now - Duration::days(3),
                    ),
                ],
                1005 => vec![comment(
                    4,
                    "TECH-001",
                    "Field Technician",
                    "On site. The reader hub lost power; replacing the adapter.",
                    now - Duration::hours(2),
                )],
                _ => Vec::new(),
            };

            Ticket {
                id: TicketId::new(format!("TICKET-{}", row.number)),
                subject: row.subject.to_string(),
                description: row.description.to_string(),
                status: row.status,
                priority: row.priority,
                user_id: UserId::new(row.user.0),
                user_name: row.user.1.to_string(),
                location: row.location.1.to_string(),
                location_id: LocationId::new(row.location.0),
                assigned_to: row.assigned_to.map(String::from),
                created_at,
                updated_at: now - row.touched,
                comments,
            }
        })
        .collect()
}

/// Five accounts, `USER-001` through `USER-005`.
fn users(now: DateTime<Utc>) -> Vec<UserAccount> {
    use HealthPreference::{EcoFriendly, FragranceFree, Hypoallergenic, Natural, Standard};

    let account = |n: u32,
                   name: &str,
                   email: &str,
                   phone: &str,
                   status: AccountStatus,
                   subscription: SubscriptionTier,
                   (joined, active): (i64, i64),
                   (bookings, orders, tickets): (u32, u32, u32),
                   preferences: Vec<HealthPreference>| UserAccount {
        id: UserId::new(format!("USER-{n:03}")),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        status,
        subscription,
        join_date: now - Duration::days(joined),
        last_active: now - Duration::hours(active),
        bookings,
        orders,
        tickets,
        health_preferences: preferences,
    };

    vec![
        account(
            1,
            "Sarah Johnson",
            "sarah.johnson@example.com",
            "(555) 123-4567",
            AccountStatus::Active,
            SubscriptionTier::Premium,
            (420, 2),
            (48, 12, 1),
            vec![EcoFriendly, FragranceFree],
        ),
        account(
            2,
            "Michael Chen",
            "michael.chen@example.com",
            "(555) 234-5678",
            AccountStatus::Active,
            SubscriptionTier::Free,
            (210, 5),
            (19, 3, 2),
            vec![Standard],
        ),
        account(
            3,
            "Emily Rodriguez",
            "emily.rodriguez@example.com",
            "(555) 345-6789",
            AccountStatus::Active,
            SubscriptionTier::Premium,
            (365, 30),
            (62, 20, 1),
            vec![Hypoallergenic],
        ),
        account(
            4,
            "David Kim",
            "david.kim@example.com",
            "(555) 456-7890",
            AccountStatus::Inactive,
            SubscriptionTier::Free,
            (540, 24 * 45),
            (8, 0, 1),
            vec![Standard],
        ),
        account(
            5,
            "Jessica Patel",
            "jessica.patel@example.com",
            "(555) 567-8901",
            AccountStatus::Active,
            SubscriptionTier::Free,
            (60, 1),
            (11, 4, 1),
            vec![Natural, EcoFriendly],
        ),
    ]
}

/// Four locations, `LOC-001` through `LOC-004`.
fn locations(now: DateTime<Utc>) -> Vec<Location> {
    let location = |n: u32,
                    name: &str,
                    address: &str,
                    status: ServiceStatus,
                    hours: &str,
                    machines: MachineCounts,
                    (open_tickets, utilization): (u32, u8),
                    daily_cents: i64,
                    maintained_days_ago: i64,
                    payment_systems: &[&str]| Location {
        id: LocationId::new(format!("LOC-{n:03}")),
        name: name.to_string(),
        address: address.to_string(),
        status,
        hours: hours.to_string(),
        machines,
        open_tickets,
        utilization,
        revenue: Revenue {
            daily: money(daily_cents),
            weekly: money(daily_cents * 7),
            monthly: money(daily_cents * 30),
        },
        last_maintenance: now - Duration::days(maintained_days_ago),
        payment_systems: strings(payment_systems),
    };

    vec![
        location(
            1,
            "Downtown Laundry Hub",
            "123 Main St, Brooklyn, NY 11201",
            ServiceStatus::Operational,
            "6:00 AM - 11:00 PM",
            MachineCounts { total: 24, operational: 23, out_of_order: 1, washers: 14, dryers: 10 },
            (2, 78),
            85_050,
            12,
            &["PayRange", "Card", "Coins"],
        ),
        location(
            2,
            "Westside Wash & Dry",
            "456 Oak Ave, Brooklyn, NY 11215",
            ServiceStatus::Operational,
            "7:00 AM - 10:00 PM",
            MachineCounts { total: 18, operational: 18, out_of_order: 0, washers: 10, dryers: 8 },
            (2, 64),
            61_275,
            30,
            &["Card", "Coins"],
        ),
        location(
            3,
            "Eastside Suds",
            "789 Pine St, Brooklyn, NY 11238",
            ServiceStatus::Operational,
            "24 hours",
            MachineCounts { total: 30, operational: 28, out_of_order: 2, washers: 16, dryers: 14 },
            (1, 82),
            104_000,
            5,
            &["PayRange", "Card"],
        ),
        location(
            4,
            "Northgate Laundromat",
            "321 Elm St, Queens, NY 11375",
            ServiceStatus::PartialOutage,
            "6:00 AM - 10:00 PM",
            MachineCounts { total: 16, operational: 10, out_of_order: 6, washers: 8, dryers: 8 },
            (3, 41),
            32_540,
            60,
            &["PayRange", "Coins"],
        ),
    ]
}

fn system_status(now: DateTime<Utc>) -> SystemStatus {
    let component = |name: &str, status, uptime, last_incident: Option<Duration>| ComponentStatus {
        name: name.to_string(),
        status,
        uptime,
        last_incident: last_incident.map(|ago| now - ago),
    };

    SystemStatus {
        overall: ServiceStatus::Operational,
        components: vec![
            component("API Gateway", ServiceStatus::Operational, 99.98, Some(Duration::days(21))),
            component("Booking Service", ServiceStatus::Operational, 99.95, Some(Duration::days(9))),
            component("Payment Processing", ServiceStatus::Operational, 99.99, None),
            component(
                "Machine Connectivity",
                ServiceStatus::PartialOutage,
                97.42,
                Some(Duration::hours(20)),
            ),
            component("Notification Service", ServiceStatus::Operational, 99.9, Some(Duration::days(14))),
        ],
        recent_incidents: vec![
            Incident {
                id: "INC-042".to_string(),
                component: "Machine Connectivity".to_string(),
                status: IncidentStatus::Investigating,
                description: "PayRange readers at Northgate Laundromat are not reporting machine status."
                    .to_string(),
                start_time: now - Duration::hours(20),
                end_time: None,
                affected_locations: strings(&["LOC-004"]),
            },
            Incident {
                id: "INC-041".to_string(),
                component: "Booking Service".to_string(),
                status: IncidentStatus::Resolved,
                description: "Bookings created during a deploy were hidden from the app.".to_string(),
                start_time: now - Duration::days(9),
                end_time: Some(now - Duration::days(9) + Duration::hours(2)),
                affected_locations: strings(&["LOC-001", "LOC-003"]),
            },
        ],
        maintenance_schedule: vec![Maintenance {
            id: "MAINT-015".to_string(),
            component: "Payment Processing".to_string(),
            description: "Payment provider certificate rotation.".to_string(),
            scheduled_start: now + Duration::days(3),
            scheduled_end: now + Duration::days(3) + Duration::hours(1),
            expected_impact: "Card payments may retry for up to 5 minutes.".to_string(),
        }],
    }
}

fn performance(now: DateTime<Utc>) -> PerformanceMetrics {
    let today = now.date_naive();
    let daily_active_users = [412, 398, 455, 470, 430, 512, 538]
        .into_iter()
        .enumerate()
        .map(|(i, count)| DailyCount {
            date: today - Duration::days(6 - i64::try_from(i).unwrap_or(6)),
            count,
        })
        .collect();
    let peak_booking_hours = [
        ("8 AM", 96),
        ("10 AM", 142),
        ("12 PM", 131),
        ("4 PM", 158),
        ("6 PM", 204),
        ("8 PM", 177),
    ]
    .into_iter()
    .map(|(hour, count)| HourlyCount { hour: hour.to_string(), count })
    .collect();
    let revenue_by_location = [
        ("Downtown Laundry Hub", 2_551_500),
        ("Westside Wash & Dry", 1_838_250),
        ("Eastside Suds", 3_120_000),
        ("Northgate Laundromat", 976_200),
    ]
    .into_iter()
    .map(|(name, cents)| LocationRevenue { name: name.to_string(), revenue: money(cents) })
    .collect();

    PerformanceMetrics {
        user_metrics: UserMetrics {
            total_users: 2_847,
            active_users: 1_923,
            premium_users: 612,
            new_users_last_30_days: 184,
            daily_active_users,
        },
        booking_metrics: BookingMetrics {
            total_bookings_last_30_days: 5_412,
            average_bookings_per_day: 180,
            booking_completion_rate: 94.2,
            machine_utilization: 68.5,
            peak_booking_hours,
        },
        revenue_metrics: RevenueMetrics {
            total_revenue_last_30_days: money(8_485_950),
            average_transaction_value: money(1_568),
            revenue_growth: 8.3,
            revenue_by_location,
        },
        system_metrics: SystemMetrics {
            api_response_time: 142,
            app_crash_rate: 0.4,
            server_uptime: 99.97,
            error_rate: 0.12,
        },
    }
}

/// Eight log lines, `LOG-001` (newest) through `LOG-008`.
fn logs(now: DateTime<Utc>) -> Vec<LogEntry> {
    [
        (Duration::minutes(4), LogLevel::Error, "machine-connectivity", "Reader PR-4412 at LOC-004 missed 3 heartbeats"),
        (Duration::minutes(18), LogLevel::Info, "booking-service", "Booking BK-88213 created for USER-001 at LOC-001"),
        (Duration::minutes(35), LogLevel::Warning, "payment-service", "Card authorization retried for USER-002"),
        (Duration::hours(1), LogLevel::Info, "auth-service", "USER-005 signed in from a new device"),
        (Duration::hours(2), LogLevel::Critical, "machine-connectivity", "LOC-004 reader hub unreachable; machines set offline"),
        (Duration::hours(5), LogLevel::Info, "booking-service", "Nightly booking cleanup removed 37 expired holds"),
        (Duration::hours(9), LogLevel::Warning, "api-gateway", "p95 latency above 400 ms for 5 minutes"),
        (Duration::days(1), LogLevel::Info, "payment-service", "Settlement batch completed: 1,204 transactions"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (ago, level, source, message))| LogEntry {
        id: LogId::new(format!("LOG-{:03}", i + 1)),
        timestamp: now - ago,
        level,
        source: source.to_string(),
        message: message.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_prefixes() {
        let catalog = MockCatalog::seed(Utc::now());
        assert_eq!(catalog.tickets[0].id.as_str(), "TICKET-1001");
        assert_eq!(catalog.users[0].id.as_str(), "USER-001");
        assert_eq!(catalog.locations[0].id.as_str(), "LOC-001");
        assert_eq!(catalog.logs[0].id.as_str(), "LOG-001");
        assert!(catalog.tickets.iter().all(|t| !t.id.as_str().contains('7')));
    }

    #[test]
    fn test_logs_newest_first() {
        let catalog = MockCatalog::seed(Utc::now());
        assert!(catalog.logs.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[test]
    fn test_tickets_reference_known_locations() {
        let catalog = MockCatalog::seed(Utc::now());
        for ticket in &catalog.tickets {
            let location = catalog
                .locations
                .iter()
                .find(|l| l.id == ticket.location_id)
                .expect("location exists");
            assert_eq!(location.name, ticket.location);
        }
    }
}
