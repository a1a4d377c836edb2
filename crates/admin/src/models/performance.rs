//! Platform performance metrics.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyCount {
    /// Hour label such as `6 PM`.
    pub hour: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRevenue {
    pub name: String,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMetrics {
    pub total_users: u32,
    pub active_users: u32,
    pub premium_users: u32,
    pub new_users_last_30_days: u32,
    pub daily_active_users: Vec<DailyCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingMetrics {
    pub total_bookings_last_30_days: u32,
    pub average_bookings_per_day: u32,
    /// Percentage of bookings that ran to completion.
    pub booking_completion_rate: f64,
    /// Percentage of machine time in use across all locations.
    pub machine_utilization: f64,
    pub peak_booking_hours: Vec<HourlyCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueMetrics {
    pub total_revenue_last_30_days: Decimal,
    pub average_transaction_value: Decimal,
    /// Month-over-month growth, in percent.
    pub revenue_growth: f64,
    pub revenue_by_location: Vec<LocationRevenue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemMetrics {
    /// Milliseconds.
    pub api_response_time: u32,
    pub app_crash_rate: f64,
    pub server_uptime: f64,
    pub error_rate: f64,
}

/// Everything the performance panel shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub user_metrics: UserMetrics,
    pub booking_metrics: BookingMetrics,
    pub revenue_metrics: RevenueMetrics,
    pub system_metrics: SystemMetrics,
}

impl BookingMetrics {
    /// Idle share of machine time, the complement of utilization.
    #[must_use]
    pub fn machine_idle(&self) -> f64 {
        100.0 - self.machine_utilization
    }
}
