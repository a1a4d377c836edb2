//! Signed-in user profile.

use serde::{Deserialize, Serialize};

use auro_core::{Email, HealthPreference, SubscriptionTier, UserId};

/// The user signed in to the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub subscription: SubscriptionTier,
    pub health_preferences: Vec<HealthPreference>,
    pub is_authenticated: bool,
}

impl User {
    /// Whether the user pays for the premium tier.
    #[must_use]
    pub fn is_premium(&self) -> bool {
        self.subscription == SubscriptionTier::Premium
    }
}

/// Partial profile update. `None` fields are left as they are.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}
