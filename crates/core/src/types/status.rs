//! Status and classification enums for Auro entities.
//!
//! Serde names match the strings stored in durable storage and shown in the
//! admin panels, so the JSON collections stay readable.

use serde::{Deserialize, Serialize};

/// Implements `Display` and `FromStr` from a fixed table of wire names.
macro_rules! wire_names {
    ($ty:ident, $label:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// The wire name of this value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$variant),)+
                    _ => Err(format!(concat!("invalid ", $label, ": {}"), s)),
                }
            }
        }
    };
}

/// Kind of laundromat machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MachineKind {
    Washer,
    Dryer,
}

wire_names!(MachineKind, "machine kind", { Washer => "washer", Dryer => "dryer" });

/// Machine availability.
///
/// Allowed transitions: `Available -> InUse -> Available`, and any state to
/// `OutOfOrder`, which stays put until a technician resets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MachineStatus {
    Available,
    InUse,
    OutOfOrder,
}

wire_names!(MachineStatus, "machine status", {
    Available => "available",
    InUse => "in_use",
    OutOfOrder => "out_of_order",
});

/// Machine load capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capacity {
    Small,
    Medium,
    Large,
}

wire_names!(Capacity, "capacity", { Small => "small", Medium => "medium", Large => "large" });

/// Lifecycle of a machine booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Upcoming,
    Active,
    Completed,
    Cancelled,
}

wire_names!(BookingStatus, "booking status", {
    Upcoming => "upcoming",
    Active => "active",
    Completed => "completed",
    Cancelled => "cancelled",
});

/// Supply order fulfillment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    OrderPlaced,
    Confirmed,
    Shipped,
    OutForDelivery,
    Delivered,
    Cancelled,
}

wire_names!(OrderStatus, "order status", {
    OrderPlaced => "order_placed",
    Confirmed => "confirmed",
    Shipped => "shipped",
    OutForDelivery => "out_for_delivery",
    Delivered => "delivered",
    Cancelled => "cancelled",
});

impl OrderStatus {
    /// Whether an order in this status may still be cancelled.
    #[must_use]
    pub const fn is_cancellable(self) -> bool {
        !matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// The fulfillment stage that follows this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::OrderPlaced => Some(Self::Confirmed),
            Self::Confirmed => Some(Self::Shipped),
            Self::Shipped => Some(Self::OutForDelivery),
            Self::OutForDelivery => Some(Self::Delivered),
            Self::Delivered | Self::Cancelled => None,
        }
    }
}

/// User subscription tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Premium,
}

wire_names!(SubscriptionTier, "subscription tier", { Free => "free", Premium => "premium" });

/// Health preference tag shared by user profiles and products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HealthPreference {
    EcoFriendly,
    Hypoallergenic,
    FragranceFree,
    Natural,
    Standard,
}

wire_names!(HealthPreference, "health preference", {
    EcoFriendly => "eco-friendly",
    Hypoallergenic => "hypoallergenic",
    FragranceFree => "fragrance-free",
    Natural => "natural",
    Standard => "standard",
});

/// Support ticket status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
}

wire_names!(TicketStatus, "ticket status", {
    Open => "open",
    InProgress => "in_progress",
    Resolved => "resolved",
});

/// Support ticket priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
}

wire_names!(TicketPriority, "ticket priority", { Low => "low", Medium => "medium", High => "high" });

/// Account status as seen by administrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Active,
    Inactive,
}

wire_names!(AccountStatus, "account status", { Active => "active", Inactive => "inactive" });

/// Health of a location or a platform component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Operational,
    PartialOutage,
    MajorOutage,
}

wire_names!(ServiceStatus, "service status", {
    Operational => "operational",
    PartialOutage => "partial_outage",
    MajorOutage => "major_outage",
});

/// Severity of a system log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    Critical,
}

wire_names!(LogLevel, "log level", {
    Info => "INFO",
    Warning => "WARNING",
    Error => "ERROR",
    Critical => "CRITICAL",
});

/// Author of a chat transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

wire_names!(ChatRole, "chat role", { User => "user", Assistant => "assistant" });

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_matches_wire_names() {
        let json = serde_json::to_string(&MachineStatus::OutOfOrder).unwrap();
        assert_eq!(json, "\"out_of_order\"");
        let json = serde_json::to_string(&HealthPreference::FragranceFree).unwrap();
        assert_eq!(json, "\"fragrance-free\"");
        let json = serde_json::to_string(&LogLevel::Warning).unwrap();
        assert_eq!(json, "\"WARNING\"");
    }

    #[test]
    fn test_from_str_round_trips_display() {
        for status in [TicketStatus::Open, TicketStatus::InProgress, TicketStatus::Resolved] {
            assert_eq!(status.to_string().parse::<TicketStatus>().unwrap(), status);
        }
        assert!("closed".parse::<TicketStatus>().is_err());
    }

    #[test]
    fn test_order_cancellable() {
        assert!(OrderStatus::OrderPlaced.is_cancellable());
        assert!(OrderStatus::Shipped.is_cancellable());
        assert!(!OrderStatus::Delivered.is_cancellable());
        assert!(!OrderStatus::Cancelled.is_cancellable());
    }

    #[test]
    fn test_order_stage_progression() {
        let mut stage = OrderStatus::OrderPlaced;
        let mut seen = vec![stage];
        while let Some(next) = stage.next() {
            stage = next;
            seen.push(stage);
        }
        assert_eq!(seen.last(), Some(&OrderStatus::Delivered));
        assert_eq!(seen.len(), 5);
        assert_eq!(OrderStatus::Cancelled.next(), None);
    }
}
