//! Supply orders.

use std::sync::Arc;

use chrono::{Duration, Utc};
use rand::Rng;
use tracing::instrument;

use auro_core::{Latency, OrderId, OrderStatus, Price, SimulatedCall};

use super::{CartStore, SnapshotCell, StoreError, StoreResult};
use crate::models::{CartItem, Order, OrderItem, TrackingEvent, User};
use crate::storage::{ORDERS_KEY, Storage};

/// Days from placement to the estimated delivery date.
pub const DELIVERY_DAYS: i64 = 5;

/// Placed orders, newest first, mirrored under `auro_orders`.
pub struct OrderStore {
    latency: Latency,
    orders: SnapshotCell<Order>,
}

impl OrderStore {
    #[must_use]
    pub fn load(
        storage: Arc<dyn Storage>,
        latency: Latency,
        seed: impl FnOnce() -> Vec<Order>,
    ) -> Self {
        Self {
            latency,
            orders: SnapshotCell::load(storage, ORDERS_KEY, seed),
        }
    }

    /// All orders.
    pub async fn orders(&self) -> Arc<Vec<Order>> {
        self.orders.get().await
    }

    /// Look up one order.
    pub async fn get_order(&self, id: &OrderId) -> Option<Order> {
        self.orders.get().await.iter().find(|o| &o.id == id).cloned()
    }

    /// Turn the cart into an order and empty the cart.
    ///
    /// The cart is read before the simulated delay, so lines added while the
    /// order is in flight stay in the cart for next time.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a user, `EmptyCart` with nothing to buy.
    #[instrument(skip(self, user, cart), fields(user_id = user.map(|u| u.id.as_str())))]
    pub async fn place_order(&self, user: Option<&User>, cart: &CartStore) -> StoreResult<Order> {
        let user = user.ok_or(StoreError::NotAuthenticated)?;
        let lines = cart.items().await;
        if lines.is_empty() {
            return Err(StoreError::EmptyCart);
        }

        self.latency.pause(SimulatedCall::PlaceOrder).await;

        let now = Utc::now();
        let order = Order {
            id: OrderId::new(format!("order-{}", uuid::Uuid::new_v4())),
            user_id: user.id.clone(),
            date: now,
            items: lines.iter().map(OrderItem::from).collect(),
            total: lines.iter().map(CartItem::line_total).sum::<Price>(),
            status: OrderStatus::OrderPlaced,
            tracking_number: Some(tracking_number()),
            estimated_delivery: Some(now + Duration::days(DELIVERY_DAYS)),
            tracking_events: TrackingEvent::for_stage(OrderStatus::OrderPlaced, now)
                .into_iter()
                .collect(),
        };

        self.orders
            .update(|orders| {
                std::iter::once(order.clone())
                    .chain(orders.iter().cloned())
                    .collect()
            })
            .await;

        for line in lines.iter() {
            if let Err(e) = cart.remove_item(&line.id).await {
                tracing::debug!(error = %e, "Cart line already gone");
            }
        }

        tracing::info!(order_id = %order.id, total = %order.total, "Order placed");
        Ok(order)
    }

    /// Cancel an order that has not been delivered.
    ///
    /// Returns `false` when the order does not exist or is already delivered
    /// or cancelled.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: &OrderId) -> bool {
        if !self
            .get_order(id)
            .await
            .is_some_and(|o| o.status.is_cancellable())
        {
            tracing::info!("Order cannot be cancelled");
            return false;
        }

        self.latency.pause(SimulatedCall::CancelOrder).await;

        let mut orders = self.orders.lock().await;
        // Re-check: the order may have moved on during the delay.
        if !orders
            .iter()
            .any(|o| &o.id == id && o.status.is_cancellable())
        {
            return false;
        }
        let next = orders
            .iter()
            .map(|o| {
                if &o.id == id {
                    Order {
                        status: OrderStatus::Cancelled,
                        ..o.clone()
                    }
                } else {
                    o.clone()
                }
            })
            .collect();
        self.orders.commit(&mut orders, next);

        tracing::info!("Order cancelled");
        true
    }

    /// Move an order to its next delivery stage and record the event.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown order, `IllegalState` once delivered or
    /// cancelled.
    #[instrument(skip(self))]
    pub async fn advance_order(&self, id: &OrderId) -> StoreResult<Order> {
        let mut orders = self.orders.lock().await;
        let order = orders
            .iter()
            .find(|o| &o.id == id)
            .ok_or_else(|| StoreError::not_found("order", id))?;
        let stage = order.status.next().ok_or_else(|| {
            StoreError::IllegalState(format!("order is already {}", order.status))
        })?;

        let advanced = Order {
            status: stage,
            tracking_events: order
                .tracking_events
                .iter()
                .cloned()
                .chain(TrackingEvent::for_stage(stage, Utc::now()))
                .collect(),
            ..order.clone()
        };

        let next = orders
            .iter()
            .map(|o| if &o.id == id { advanced.clone() } else { o.clone() })
            .collect();
        self.orders.commit(&mut orders, next);

        tracing::info!(status = %stage, "Order advanced");
        Ok(advanced)
    }
}

fn tracking_number() -> String {
    format!("TRK{}", rand::rng().random_range(100_000_000..1_000_000_000_u32))
}
