//! The product catalog.

use std::sync::Arc;

use auro_core::{Price, ProductId};

use super::{SnapshotCell, search_terms};
use crate::models::{Product, ProductFilters};
use crate::storage::{PRODUCTS_KEY, Storage};

/// Catalog entries, mirrored under `auro_products`. Read-only at runtime.
pub struct ProductStore {
    products: SnapshotCell<Product>,
}

impl ProductStore {
    #[must_use]
    pub fn load(storage: Arc<dyn Storage>, seed: impl FnOnce() -> Vec<Product>) -> Self {
        Self {
            products: SnapshotCell::load(storage, PRODUCTS_KEY, seed),
        }
    }

    /// Every product in catalog order.
    pub async fn products(&self) -> Arc<Vec<Product>> {
        self.products.get().await
    }

    pub async fn product(&self, id: &ProductId) -> Option<Product> {
        self.products.get().await.iter().find(|p| &p.id == id).cloned()
    }

    /// Products passing `filters`, sorted as requested. Ties keep catalog
    /// order.
    pub async fn filter_products(&self, filters: &ProductFilters) -> Vec<Product> {
        let mut matching: Vec<Product> = self
            .products
            .get()
            .await
            .iter()
            .filter(|p| filters.accepts(p))
            .cloned()
            .collect();
        matching.sort_by(|a, b| filters.compare(a, b));
        matching
    }

    /// Free-text search. Every term must appear somewhere in the product;
    /// a blank query returns the whole catalog.
    pub async fn search_products(&self, query: &str) -> Vec<Product> {
        let terms = search_terms(query);
        self.products
            .get()
            .await
            .iter()
            .filter(|p| p.matches_terms(&terms))
            .cloned()
            .collect()
    }

    /// Cheapest retailer price for a product.
    pub async fn lowest_price(&self, id: &ProductId) -> Option<Price> {
        self.product(id).await?.lowest_price()
    }
}
