//! Machine bookings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use auro_core::{BookingId, BookingStatus, LaundromatId, MachineId, MachineKind, UserId};

/// A reservation of one machine by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub user_id: UserId,
    pub laundromat_id: LaundromatId,
    pub laundromat_name: String,
    pub machine_id: MachineId,
    pub machine_type: MachineKind,
    pub machine_number: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: BookingStatus,
}

impl Booking {
    /// Only upcoming bookings may be cancelled.
    #[must_use]
    pub fn is_cancellable(&self) -> bool {
        self.status == BookingStatus::Upcoming
    }
}
