//! Customer accounts as administrators see them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use auro_core::{AccountStatus, HealthPreference, SubscriptionTier, UserId};

/// A customer account with activity counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: AccountStatus,
    pub subscription: SubscriptionTier,
    pub join_date: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
    pub bookings: u32,
    pub orders: u32,
    pub tickets: u32,
    pub health_preferences: Vec<HealthPreference>,
}

impl UserAccount {
    /// Case-insensitive match against id, name, email, and phone.
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        [self.id.as_str(), &self.name, &self.email, &self.phone]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}
