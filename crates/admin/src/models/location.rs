//! Laundromat locations operated on the platform.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use auro_core::{LocationId, ServiceStatus};

/// Machine counts at a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineCounts {
    pub total: u32,
    pub operational: u32,
    pub out_of_order: u32,
    pub washers: u32,
    pub dryers: u32,
}

/// Takings over rolling windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revenue {
    pub daily: Decimal,
    pub weekly: Decimal,
    pub monthly: Decimal,
}

/// A laundromat location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub address: String,
    pub status: ServiceStatus,
    pub hours: String,
    pub machines: MachineCounts,
    pub open_tickets: u32,
    /// Percentage of machine time in use.
    pub utilization: u8,
    pub revenue: Revenue,
    pub last_maintenance: DateTime<Utc>,
    pub payment_systems: Vec<String>,
}

impl Location {
    /// Case-insensitive match against id, name, and address.
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        [self.id.as_str(), &self.name, &self.address]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}
