//! Household supply levels.

use std::sync::Arc;

use chrono::Utc;
use tracing::instrument;

use auro_core::{Latency, SimulatedCall, SubscriptionTier, SupplyId};

use super::{SnapshotCell, StoreError, StoreResult, search_terms};
use crate::models::Supply;
use crate::storage::{SUPPLIES_KEY, Storage};

/// Supplies, mirrored under `auro_supplies`.
pub struct SupplyStore {
    latency: Latency,
    supplies: SnapshotCell<Supply>,
}

impl SupplyStore {
    #[must_use]
    pub fn load(
        storage: Arc<dyn Storage>,
        latency: Latency,
        seed: impl FnOnce() -> Vec<Supply>,
    ) -> Self {
        Self {
            latency,
            supplies: SnapshotCell::load(storage, SUPPLIES_KEY, seed),
        }
    }

    pub async fn supplies(&self) -> Arc<Vec<Supply>> {
        self.supplies.get().await
    }

    pub async fn supply(&self, id: &SupplyId) -> Option<Supply> {
        self.supplies.get().await.iter().find(|s| &s.id == id).cloned()
    }

    /// Record a new fill level.
    ///
    /// # Errors
    ///
    /// `Validation` above 100, `NotFound` for an unknown supply.
    #[instrument(skip(self))]
    pub async fn update_supply_level(&self, id: &SupplyId, level: u8) -> StoreResult<Supply> {
        if level > 100 {
            return Err(StoreError::Validation(format!(
                "level must be between 0 and 100, got {level}"
            )));
        }
        self.modify(id, |s| Supply {
            level,
            last_updated: Utc::now(),
            ..s.clone()
        })
        .await
    }

    /// Flip automatic reordering on or off.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown supply.
    #[instrument(skip(self))]
    pub async fn toggle_auto_reorder(&self, id: &SupplyId) -> StoreResult<Supply> {
        self.modify(id, |s| Supply {
            auto_reorder_enabled: !s.auto_reorder_enabled,
            ..s.clone()
        })
        .await
    }

    /// Reorder a supply, refilling it to 100% once the simulated order
    /// completes. Returns `false` for an unknown supply.
    #[instrument(skip(self))]
    pub async fn reorder_supply(&self, id: &SupplyId) -> bool {
        if self.supply(id).await.is_none() {
            tracing::info!("Supply not found");
            return false;
        }

        self.latency.pause(SimulatedCall::ReorderSupply).await;

        let refilled = self
            .modify(id, |s| Supply {
                level: 100,
                last_updated: Utc::now(),
                ..s.clone()
            })
            .await;
        match refilled {
            Ok(_) => {
                tracing::info!("Supply reordered");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Supply vanished during reorder");
                false
            }
        }
    }

    /// Free-text search over name and category. Blank returns everything.
    pub async fn search_supplies(&self, query: &str) -> Vec<Supply> {
        let terms = search_terms(query);
        self.supplies
            .get()
            .await
            .iter()
            .filter(|s| s.matches_terms(&terms))
            .cloned()
            .collect()
    }

    /// Refresh derived fields for a subscription tier. Premium users get
    /// every estimate recomputed from the current level; free users keep
    /// what is stored.
    #[instrument(skip(self))]
    pub async fn apply_subscription(&self, tier: SubscriptionTier) -> Arc<Vec<Supply>> {
        if tier != SubscriptionTier::Premium {
            return self.supplies.get().await;
        }
        self.supplies
            .update(|supplies| {
                supplies
                    .iter()
                    .map(|s| Supply {
                        estimated_days_remaining: Some(s.projected_days_remaining()),
                        ..s.clone()
                    })
                    .collect()
            })
            .await
    }

    /// Supplies at or below their auto-reorder threshold with reordering on.
    pub async fn due_for_reorder(&self) -> Vec<Supply> {
        self.supplies
            .get()
            .await
            .iter()
            .filter(|s| s.needs_reorder())
            .cloned()
            .collect()
    }

    async fn modify(&self, id: &SupplyId, f: impl Fn(&Supply) -> Supply) -> StoreResult<Supply> {
        let mut supplies = self.supplies.lock().await;
        let updated = f(supplies
            .iter()
            .find(|s| &s.id == id)
            .ok_or_else(|| StoreError::not_found("supply", id))?);

        let next = supplies
            .iter()
            .map(|s| if &s.id == id { updated.clone() } else { s.clone() })
            .collect();
        self.supplies.commit(&mut supplies, next);
        Ok(updated)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::storage::MemoryStorage;

    fn store() -> SupplyStore {
        SupplyStore::load(Arc::new(MemoryStorage::new()), Latency::Instant, || {
            seed::supplies(Utc::now())
        })
    }

    #[tokio::test]
    async fn test_level_bounds_and_stamp() {
        let store = store();
        let id = SupplyId::new("supply-2");
        let before = store.supply(&id).await.unwrap().last_updated;

        assert!(matches!(
            store.update_supply_level(&id, 101).await,
            Err(StoreError::Validation(_))
        ));
        let updated = store.update_supply_level(&id, 0).await.unwrap();
        assert_eq!(updated.level, 0);
        assert!(updated.last_updated > before);

        assert!(
            store
                .update_supply_level(&SupplyId::new("supply-9"), 50)
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_reorder_refills() {
        let store = store();
        assert!(store.reorder_supply(&SupplyId::new("supply-3")).await);
        assert_eq!(store.supply(&SupplyId::new("supply-3")).await.unwrap().level, 100);
        assert!(!store.reorder_supply(&SupplyId::new("supply-9")).await);
    }

    #[tokio::test]
    async fn test_premium_recomputes_estimates() {
        let store = store();
        let free = store.apply_subscription(SubscriptionTier::Free).await;
        assert_eq!(free.first().unwrap().estimated_days_remaining, Some(7));

        let premium = store.apply_subscription(SubscriptionTier::Premium).await;
        let days: Vec<_> = premium
            .iter()
            .map(|s| s.estimated_days_remaining.unwrap())
            .collect();
        assert_eq!(days, [11, 18, 5, 24, 14]);
    }

    #[tokio::test]
    async fn test_due_for_reorder_and_toggle() {
        let store = store();
        let due: Vec<_> = store
            .due_for_reorder()
            .await
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert!(due.is_empty());

        store
            .update_supply_level(&SupplyId::new("supply-1"), 20)
            .await
            .unwrap();
        assert_eq!(store.due_for_reorder().await.len(), 1);

        let toggled = store
            .toggle_auto_reorder(&SupplyId::new("supply-1"))
            .await
            .unwrap();
        assert!(!toggled.auto_reorder_enabled);
        assert!(store.due_for_reorder().await.is_empty());
    }

    #[tokio::test]
    async fn test_search_supplies() {
        let store = store();
        assert_eq!(store.search_supplies("cleaning").await.len(), 4);
        assert_eq!(store.search_supplies("dryer").await.len(), 1);
        assert_eq!(store.search_supplies("").await.len(), 5);
    }
}
