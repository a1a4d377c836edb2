//! Application state shared across handlers.

use std::sync::Arc;

use chrono::Utc;

use crate::config::StorefrontConfig;
use crate::seed;
use crate::services::auth::DirectoryAccount;
use crate::storage::{self, Storage, StorageError};
use crate::stores::{BookingStore, CartStore, OrderStore, ProductStore, SupplyStore, UserStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// state stores and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    storage: Arc<dyn Storage>,
    user: UserStore,
    bookings: BookingStore,
    cart: CartStore,
    orders: OrderStore,
    products: ProductStore,
    supplies: SupplyStore,
    accounts: Vec<DirectoryAccount>,
}

impl AppState {
    /// Create application state backed by the storage `config` names.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn new(config: StorefrontConfig) -> Result<Self, StorageError> {
        let storage = storage::open(config.data_dir.as_deref())?;
        Ok(Self::with_storage(config, storage))
    }

    /// Create application state over an existing storage backend, loading
    /// every store from it or from the seed data.
    #[must_use]
    pub fn with_storage(config: StorefrontConfig, storage: Arc<dyn Storage>) -> Self {
        let latency = config.latency;
        let now = Utc::now();

        Self {
            inner: Arc::new(AppStateInner {
                user: UserStore::load(Arc::clone(&storage), latency),
                bookings: BookingStore::load(
                    Arc::clone(&storage),
                    latency,
                    seed::laundromats,
                    || seed::bookings(now),
                ),
                cart: CartStore::load(Arc::clone(&storage)),
                orders: OrderStore::load(Arc::clone(&storage), latency, || seed::orders(now)),
                products: ProductStore::load(Arc::clone(&storage), seed::products),
                supplies: SupplyStore::load(Arc::clone(&storage), latency, || {
                    seed::supplies(now)
                }),
                accounts: seed::directory_accounts(),
                storage,
                config,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get the durable storage backend.
    #[must_use]
    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.inner.storage
    }

    #[must_use]
    pub fn user(&self) -> &UserStore {
        &self.inner.user
    }

    #[must_use]
    pub fn bookings(&self) -> &BookingStore {
        &self.inner.bookings
    }

    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    #[must_use]
    pub fn orders(&self) -> &OrderStore {
        &self.inner.orders
    }

    #[must_use]
    pub fn products(&self) -> &ProductStore {
        &self.inner.products
    }

    #[must_use]
    pub fn supplies(&self) -> &SupplyStore {
        &self.inner.supplies
    }

    /// Accounts the login endpoint can return.
    #[must_use]
    pub fn accounts(&self) -> &[DirectoryAccount] {
        &self.inner.accounts
    }
}
