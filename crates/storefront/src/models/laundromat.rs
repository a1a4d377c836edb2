//! Laundromats and their machines.

use serde::{Deserialize, Serialize};

use auro_core::{Capacity, LaundromatId, MachineId, MachineKind, MachineStatus, Price};

/// Minutes a freshly booked machine reports as remaining.
pub const BOOKED_CYCLE_MINUTES: u32 = 30;

/// A single washer or dryer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Machine {
    pub id: MachineId,
    #[serde(rename = "type")]
    pub kind: MachineKind,
    /// Label on the machine, e.g. `W1` or `D3`.
    pub number: String,
    pub status: MachineStatus,
    /// Minutes left in the current cycle. Present exactly when in use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_remaining: Option<u32>,
    pub price: Price,
    pub capacity: Capacity,
}

impl Machine {
    /// Copy of this machine running a cycle of `minutes`.
    #[must_use]
    pub fn started(&self, minutes: u32) -> Self {
        Self {
            status: MachineStatus::InUse,
            time_remaining: Some(minutes),
            ..self.clone()
        }
    }

    /// Copy of this machine back in service with no cycle running.
    #[must_use]
    pub fn released(&self) -> Self {
        Self {
            status: MachineStatus::Available,
            time_remaining: None,
            ..self.clone()
        }
    }

    /// Copy of this machine taken out of service.
    #[must_use]
    pub fn out_of_order(&self) -> Self {
        Self {
            status: MachineStatus::OutOfOrder,
            time_remaining: None,
            ..self.clone()
        }
    }
}

/// Latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A laundromat location with its machines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Laundromat {
    pub id: LaundromatId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    /// Distance from the user in miles.
    pub distance: f64,
    pub rating: f64,
    pub hours: String,
    pub machines: Vec<Machine>,
    pub amenities: Vec<String>,
    #[serde(rename = "payment_systems")]
    pub payment_systems: Vec<String>,
    pub image: String,
    pub coordinates: Coordinates,
}

impl Laundromat {
    /// Look up a machine by id.
    #[must_use]
    pub fn machine(&self, id: &MachineId) -> Option<&Machine> {
        self.machines.iter().find(|m| &m.id == id)
    }

    /// Copy of this laundromat with `update` applied to one machine.
    #[must_use]
    pub fn with_machine(&self, id: &MachineId, update: impl Fn(&Machine) -> Machine) -> Self {
        Self {
            machines: self
                .machines
                .iter()
                .map(|m| if &m.id == id { update(m) } else { m.clone() })
                .collect(),
            ..self.clone()
        }
    }

    /// Number of machines of `kind` currently available.
    #[must_use]
    pub fn available_count(&self, kind: MachineKind) -> usize {
        self.machines
            .iter()
            .filter(|m| m.kind == kind && m.status == MachineStatus::Available)
            .count()
    }

    /// Whether this laundromat passes every active filter.
    #[must_use]
    pub fn matches(&self, filters: &LaundromatFilters) -> bool {
        let payment_ok = filters.payment_systems.is_empty()
            || filters
                .payment_systems
                .iter()
                .any(|p| self.payment_systems.contains(p));
        let kind_ok = filters.machine_kinds.is_empty()
            || self
                .machines
                .iter()
                .any(|m| filters.machine_kinds.contains(&m.kind));
        let distance_ok = filters.max_distance.is_none_or(|max| self.distance <= max);
        let amenities_ok = filters
            .amenities
            .iter()
            .all(|a| self.amenities.contains(a));

        payment_ok && kind_ok && distance_ok && amenities_ok
    }
}

/// Laundromat search filters. Empty lists and `None` disable a filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LaundromatFilters {
    /// Accept laundromats supporting any of these payment systems.
    pub payment_systems: Vec<String>,
    /// Accept laundromats with at least one machine of any of these kinds.
    pub machine_kinds: Vec<MachineKind>,
    /// Maximum distance in miles, inclusive.
    pub max_distance: Option<f64>,
    /// Require every one of these amenities.
    pub amenities: Vec<String>,
}

/// Result of a PayRange availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayRangeStatus {
    Available,
    Busy,
    #[serde(rename = "Status Check Unavailable - Demo")]
    Unavailable,
}

impl PayRangeStatus {
    /// Every possible outcome, in display order.
    pub const ALL: [Self; 3] = [Self::Available, Self::Busy, Self::Unavailable];
}
