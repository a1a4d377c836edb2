//! Platform health: component status, incidents, and planned maintenance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use auro_core::ServiceStatus;

/// One platform component and its availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStatus {
    pub name: String,
    pub status: ServiceStatus,
    /// Percentage uptime over the last 30 days.
    pub uptime: f64,
    pub last_incident: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentStatus {
    Investigating,
    Resolved,
}

impl std::fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Investigating => "investigating",
            Self::Resolved => "resolved",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: String,
    pub component: String,
    pub status: IncidentStatus,
    pub description: String,
    pub start_time: DateTime<Utc>,
    /// Unset while the incident is ongoing.
    pub end_time: Option<DateTime<Utc>>,
    pub affected_locations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maintenance {
    pub id: String,
    pub component: String,
    pub description: String,
    pub scheduled_start: DateTime<Utc>,
    pub scheduled_end: DateTime<Utc>,
    pub expected_impact: String,
}

/// Snapshot of platform health.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatus {
    pub overall: ServiceStatus,
    pub components: Vec<ComponentStatus>,
    pub recent_incidents: Vec<Incident>,
    pub maintenance_schedule: Vec<Maintenance>,
}
