//! Simulated network latency.
//!
//! The demo has no real backend. Every operation that stands in for a
//! network call waits a fixed duration first; [`Latency::Instant`] skips the
//! wait so tests and the CLI run immediately.

use std::time::Duration;

/// A simulated network call and its fixed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulatedCall {
    BookMachine,
    CancelBooking,
    PayRangeStatus,
    PlaceOrder,
    CancelOrder,
    ReorderSupply,
    Login,
    OperatorReply,
    TicketUpdate,
}

impl SimulatedCall {
    /// How long this call takes when latency is simulated.
    #[must_use]
    pub const fn duration(self) -> Duration {
        let millis = match self {
            Self::CancelBooking | Self::TicketUpdate => 1000,
            Self::BookMachine
            | Self::CancelOrder
            | Self::ReorderSupply
            | Self::Login
            | Self::OperatorReply => 1500,
            Self::PayRangeStatus | Self::PlaceOrder => 2000,
        };
        Duration::from_millis(millis)
    }

    /// Short name used in log fields.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BookMachine => "book_machine",
            Self::CancelBooking => "cancel_booking",
            Self::PayRangeStatus => "payrange_status",
            Self::PlaceOrder => "place_order",
            Self::CancelOrder => "cancel_order",
            Self::ReorderSupply => "reorder_supply",
            Self::Login => "login",
            Self::OperatorReply => "operator_reply",
            Self::TicketUpdate => "ticket_update",
        }
    }
}

/// Whether simulated calls actually wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Latency {
    /// Sleep for the call's fixed duration.
    #[default]
    Simulated,
    /// Resolve immediately.
    Instant,
}

impl Latency {
    /// Build from a boolean switch, as read from configuration.
    #[must_use]
    pub const fn from_enabled(enabled: bool) -> Self {
        if enabled { Self::Simulated } else { Self::Instant }
    }

    /// Wait as long as `call` would take.
    pub async fn pause(self, call: SimulatedCall) {
        if self == Self::Simulated {
            tokio::time::sleep(call.duration()).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durations() {
        assert_eq!(SimulatedCall::CancelBooking.duration(), Duration::from_millis(1000));
        assert_eq!(SimulatedCall::BookMachine.duration(), Duration::from_millis(1500));
        assert_eq!(SimulatedCall::PlaceOrder.duration(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_waits_full_duration() {
        let start = tokio::time::Instant::now();
        Latency::Simulated.pause(SimulatedCall::PayRangeStatus).await;
        assert!(start.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_instant_does_not_wait() {
        let start = tokio::time::Instant::now();
        Latency::Instant.pause(SimulatedCall::PlaceOrder).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
