//! The shopping cart.

use std::sync::Arc;

use tracing::instrument;

use auro_core::{Price, ProductId};

use super::{SnapshotCell, StoreError, StoreResult};
use crate::models::CartItem;
use crate::storage::{CART_KEY, Storage};

/// Largest quantity a single cart line may hold.
pub const MAX_LINE_QUANTITY: u32 = 99;

/// Cart lines, mirrored under `auro_cart`.
pub struct CartStore {
    items: SnapshotCell<CartItem>,
}

impl CartStore {
    /// Restore the stored cart, or start empty.
    #[must_use]
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        Self {
            items: SnapshotCell::load(storage, CART_KEY, Vec::new),
        }
    }

    /// Current cart lines.
    pub async fn items(&self) -> Arc<Vec<CartItem>> {
        self.items.get().await
    }

    /// Add one unit of a product. An existing line is bumped by one, up to
    /// `MAX_LINE_QUANTITY`; a new line starts at quantity one.
    #[instrument(skip(self, item), fields(product_id = %item.id))]
    pub async fn add_item(&self, item: CartItem) -> Arc<Vec<CartItem>> {
        self.items
            .update(|items| {
                if items.iter().any(|i| i.id == item.id) {
                    items
                        .iter()
                        .map(|i| {
                            if i.id == item.id {
                                CartItem {
                                    quantity: i.quantity.saturating_add(1).min(MAX_LINE_QUANTITY),
                                    ..i.clone()
                                }
                            } else {
                                i.clone()
                            }
                        })
                        .collect()
                } else {
                    items
                        .iter()
                        .cloned()
                        .chain(std::iter::once(CartItem {
                            quantity: 1,
                            ..item.clone()
                        }))
                        .collect()
                }
            })
            .await
    }

    /// Drop a line.
    ///
    /// # Errors
    ///
    /// `NotFound` when the product is not in the cart.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: &ProductId) -> StoreResult<Arc<Vec<CartItem>>> {
        self.ensure_present(id).await?;
        Ok(self
            .items
            .update(|items| items.iter().filter(|i| &i.id != id).cloned().collect())
            .await)
    }

    /// Set a line's quantity. Zero removes the line.
    ///
    /// # Errors
    ///
    /// `Validation` above `MAX_LINE_QUANTITY`, `NotFound` when the product
    /// is not in the cart.
    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        id: &ProductId,
        quantity: u32,
    ) -> StoreResult<Arc<Vec<CartItem>>> {
        if quantity > MAX_LINE_QUANTITY {
            return Err(StoreError::Validation(format!(
                "quantity must be at most {MAX_LINE_QUANTITY}, got {quantity}"
            )));
        }
        if quantity == 0 {
            return self.remove_item(id).await;
        }
        self.ensure_present(id).await?;
        Ok(self
            .items
            .update(|items| {
                items
                    .iter()
                    .map(|i| {
                        if &i.id == id {
                            CartItem {
                                quantity,
                                ..i.clone()
                            }
                        } else {
                            i.clone()
                        }
                    })
                    .collect()
            })
            .await)
    }

    /// Empty the cart.
    #[instrument(skip(self))]
    pub async fn clear(&self) {
        self.items.update(|_| Vec::new()).await;
    }

    /// Total units across all lines.
    pub async fn item_count(&self) -> u32 {
        self.items
            .get()
            .await
            .iter()
            .fold(0u32, |count, i| count.saturating_add(i.quantity))
    }

    /// Sum of every line total.
    pub async fn total(&self) -> Price {
        self.items.get().await.iter().map(CartItem::line_total).sum()
    }

    async fn ensure_present(&self, id: &ProductId) -> StoreResult<()> {
        if self.items.get().await.iter().any(|i| &i.id == id) {
            Ok(())
        } else {
            Err(StoreError::not_found("cart item", id))
        }
    }
}
