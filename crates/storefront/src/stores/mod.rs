//! State stores for the consumer side.
//!
//! Each store owns one slice of state, seeded from storage or from the seed
//! datasets, and changes only through its named operations. Mutations build
//! a fresh snapshot instead of editing the current one, then mirror it to
//! durable storage.

pub mod booking;
pub mod cart;
pub mod orders;
pub mod products;
pub mod supplies;
pub mod user;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::sync::{RwLock, RwLockWriteGuard};

pub use booking::BookingStore;
pub use cart::CartStore;
pub use orders::OrderStore;
pub use products::ProductStore;
pub use supplies::SupplyStore;
pub use user::UserStore;

use crate::storage::{self, Storage};

/// Errors from state-store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Referenced entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Entity is in a state that forbids the operation.
    #[error("{0}")]
    IllegalState(String),

    /// Input failed validation.
    #[error("{0}")]
    Validation(String),

    /// Operation needs a signed-in user.
    #[error("user must be logged in")]
    NotAuthenticated,

    /// Checkout with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,
}

impl StoreError {
    pub(crate) fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Split a free-text query into lowercase search terms.
pub(crate) fn search_terms(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// A collection held as an immutable snapshot and mirrored under one key.
pub(crate) struct SnapshotCell<T> {
    key: &'static str,
    storage: Arc<dyn Storage>,
    current: RwLock<Arc<Vec<T>>>,
}

impl<T: Serialize + DeserializeOwned> SnapshotCell<T> {
    /// Load from storage, falling back to `seed`, and mirror the result.
    pub(crate) fn load(
        storage: Arc<dyn Storage>,
        key: &'static str,
        seed: impl FnOnce() -> Vec<T>,
    ) -> Self {
        let initial = storage::load_json(storage.as_ref(), key).unwrap_or_else(|| {
            tracing::debug!(key, "Seeding store");
            seed()
        });
        storage::mirror_json(storage.as_ref(), key, &initial);

        Self {
            key,
            storage,
            current: RwLock::new(Arc::new(initial)),
        }
    }

    /// The current snapshot.
    pub(crate) async fn get(&self) -> Arc<Vec<T>> {
        Arc::clone(&*self.current.read().await)
    }

    /// Exclusive access for multi-step updates. Call [`Self::commit`] to
    /// install the new snapshot.
    pub(crate) async fn lock(&self) -> RwLockWriteGuard<'_, Arc<Vec<T>>> {
        self.current.write().await
    }

    /// Install `next` through a held guard and mirror it.
    pub(crate) fn commit(
        &self,
        guard: &mut RwLockWriteGuard<'_, Arc<Vec<T>>>,
        next: Vec<T>,
    ) -> Arc<Vec<T>> {
        storage::mirror_json(self.storage.as_ref(), self.key, &next);
        **guard = Arc::new(next);
        Arc::clone(&**guard)
    }

    /// Replace the snapshot with `f(current)`.
    pub(crate) async fn update(&self, f: impl FnOnce(&[T]) -> Vec<T>) -> Arc<Vec<T>> {
        let mut guard = self.lock().await;
        let next = f(&guard);
        self.commit(&mut guard, next)
    }
}
