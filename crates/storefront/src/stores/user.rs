//! The signed-in user.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::instrument;

use auro_core::{Email, HealthPreference, Latency, SimulatedCall, SubscriptionTier, UserId};

use super::{StoreError, StoreResult};
use crate::models::{User, UserUpdate};
use crate::storage::{self, Storage, USER_KEY};

/// Minimum phone number length accepted by the demo login.
pub const MIN_PHONE_LEN: usize = 10;
/// Minimum one-time-code length accepted by the demo login.
pub const MIN_OTP_LEN: usize = 4;

/// Holds at most one signed-in user, mirrored under `auro_user`.
pub struct UserStore {
    storage: Arc<dyn Storage>,
    latency: Latency,
    user: RwLock<Option<User>>,
}

impl UserStore {
    /// Restore the stored user, if any.
    #[must_use]
    pub fn load(storage: Arc<dyn Storage>, latency: Latency) -> Self {
        let user = storage::load_json::<User>(storage.as_ref(), USER_KEY);
        Self {
            storage,
            latency,
            user: RwLock::new(user),
        }
    }

    /// The signed-in user.
    pub async fn current(&self) -> Option<User> {
        self.user.read().await.clone()
    }

    /// Whether someone is signed in.
    pub async fn is_authenticated(&self) -> bool {
        self.user
            .read()
            .await
            .as_ref()
            .is_some_and(|u| u.is_authenticated)
    }

    /// Sign in with a phone number and one-time code.
    ///
    /// Any phone of at least ten characters and code of at least four is
    /// accepted and yields a fresh demo profile.
    #[instrument(skip(self, otp), fields(otp_len = otp.len()))]
    pub async fn login(&self, phone: &str, otp: &str) -> bool {
        self.latency.pause(SimulatedCall::Login).await;

        if phone.len() < MIN_PHONE_LEN || otp.len() < MIN_OTP_LEN {
            tracing::info!("Login rejected");
            return false;
        }

        let Ok(email) = Email::parse("demo@example.com") else {
            return false;
        };
        let user = User {
            id: UserId::new(format!("user-{}", Utc::now().timestamp_millis())),
            name: "Demo User".to_string(),
            email,
            phone: phone.to_string(),
            subscription: SubscriptionTier::Free,
            health_preferences: vec![HealthPreference::Standard],
            is_authenticated: true,
        };

        tracing::info!(user_id = %user.id, "User logged in");
        self.replace(Some(user)).await;
        true
    }

    /// Sign out and forget the stored profile.
    #[instrument(skip(self))]
    pub async fn logout(&self) {
        self.replace(None).await;
        tracing::info!("User logged out");
    }

    /// Apply a partial profile update.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` when nobody is signed in, `Validation` for a
    /// malformed email or blank name.
    #[instrument(skip(self))]
    pub async fn update_user(&self, update: UserUpdate) -> StoreResult<User> {
        let email = update
            .email
            .as_deref()
            .map(Email::parse)
            .transpose()
            .map_err(|e| StoreError::Validation(e.to_string()))?;
        if update.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(StoreError::Validation("name cannot be blank".to_string()));
        }

        self.modify(|user| User {
            name: update.name.clone().unwrap_or_else(|| user.name.clone()),
            email: email.clone().unwrap_or_else(|| user.email.clone()),
            phone: update.phone.clone().unwrap_or_else(|| user.phone.clone()),
            ..user.clone()
        })
        .await
    }

    /// Change the subscription tier.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` when nobody is signed in.
    #[instrument(skip(self))]
    pub async fn set_subscription(&self, tier: SubscriptionTier) -> StoreResult<User> {
        self.modify(|user| User {
            subscription: tier,
            ..user.clone()
        })
        .await
    }

    /// Replace the health preference tags.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` when nobody is signed in.
    #[instrument(skip(self))]
    pub async fn set_health_preferences(
        &self,
        preferences: Vec<HealthPreference>,
    ) -> StoreResult<User> {
        self.modify(|user| User {
            health_preferences: preferences.clone(),
            ..user.clone()
        })
        .await
    }

    async fn modify(&self, f: impl Fn(&User) -> User) -> StoreResult<User> {
        let mut slot = self.user.write().await;
        let current = slot.as_ref().ok_or(StoreError::NotAuthenticated)?;
        let next = f(current);
        storage::mirror_json(self.storage.as_ref(), USER_KEY, &next);
        *slot = Some(next.clone());
        Ok(next)
    }

    async fn replace(&self, user: Option<User>) {
        let mut slot = self.user.write().await;
        match &user {
            Some(u) => storage::mirror_json(self.storage.as_ref(), USER_KEY, u),
            None => storage::forget(self.storage.as_ref(), USER_KEY),
        }
        *slot = user;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn store() -> (Arc<MemoryStorage>, UserStore) {
        let storage = Arc::new(MemoryStorage::new());
        let store = UserStore::load(storage.clone(), Latency::Instant);
        (storage, store)
    }

    #[tokio::test]
    async fn test_login_requires_plausible_credentials() {
        let (_, store) = store();
        assert!(!store.login("555-0100", "1234").await);
        assert!(!store.login("555-555-0100", "12").await);
        assert!(store.current().await.is_none());

        assert!(store.login("555-555-0100", "1234").await);
        let user = store.current().await.unwrap();
        assert_eq!(user.name, "Demo User");
        assert_eq!(user.subscription, SubscriptionTier::Free);
        assert_eq!(user.health_preferences, vec![HealthPreference::Standard]);
        assert!(store.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_login_persists_and_logout_removes() {
        let (storage, store) = store();
        store.login("555-555-0100", "1234").await;
        assert!(storage.get(USER_KEY).unwrap().is_some());

        let reloaded = UserStore::load(storage.clone(), Latency::Instant);
        assert_eq!(reloaded.current().await, store.current().await);

        store.logout().await;
        assert!(storage.get(USER_KEY).unwrap().is_none());
        assert!(store.current().await.is_none());
    }

    #[tokio::test]
    async fn test_updates_require_user() {
        let (_, store) = store();
        assert_eq!(
            store.set_subscription(SubscriptionTier::Premium).await,
            Err(StoreError::NotAuthenticated)
        );
    }

    #[tokio::test]
    async fn test_update_user_validates_email() {
        let (_, store) = store();
        store.login("555-555-0100", "1234").await;

        let bad = UserUpdate {
            email: Some("not-an-email".to_string()),
            ..UserUpdate::default()
        };
        assert!(matches!(
            store.update_user(bad).await,
            Err(StoreError::Validation(_))
        ));

        let good = UserUpdate {
            name: Some("Ada".to_string()),
            ..UserUpdate::default()
        };
        let user = store.update_user(good).await.unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.email.as_str(), "demo@example.com");
    }

    #[tokio::test]
    async fn test_preferences_and_subscription() {
        let (_, store) = store();
        store.login("555-555-0100", "1234").await;

        store
            .set_health_preferences(vec![HealthPreference::EcoFriendly])
            .await
            .unwrap();
        let user = store.set_subscription(SubscriptionTier::Premium).await.unwrap();
        assert!(user.is_premium());
        assert_eq!(user.health_preferences, vec![HealthPreference::EcoFriendly]);
    }
}
