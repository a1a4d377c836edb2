//! Supply orders and their tracking history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use auro_core::{OrderId, OrderStatus, Price, ProductId, UserId};

use super::CartItem;

/// A line on a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<&CartItem> for OrderItem {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
            image: item.image.clone(),
        }
    }
}

/// One step in an order's delivery history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEvent {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub location: String,
    pub description: String,
}

impl TrackingEvent {
    /// The event recorded when an order reaches `stage`, if that stage is
    /// tracked.
    #[must_use]
    pub fn for_stage(stage: OrderStatus, timestamp: DateTime<Utc>) -> Option<Self> {
        let (status, location, description) = match stage {
            OrderStatus::OrderPlaced => (
                "Order Placed",
                "Online",
                "Your order has been placed successfully.",
            ),
            OrderStatus::Confirmed => (
                "Order Confirmed",
                "Warehouse",
                "Your order has been confirmed and is being processed.",
            ),
            OrderStatus::Shipped => (
                "Shipped",
                "Distribution Center",
                "Your order has been shipped and is on its way.",
            ),
            OrderStatus::OutForDelivery => (
                "Out for Delivery",
                "Local Delivery Center",
                "Your order is out for delivery and will arrive soon.",
            ),
            OrderStatus::Delivered => (
                "Delivered",
                "Your Address",
                "Your order has been delivered successfully.",
            ),
            OrderStatus::Cancelled => return None,
        };

        Some(Self {
            status: status.to_string(),
            timestamp,
            location: location.to_string(),
            description: description.to_string(),
        })
    }
}

/// A placed supply order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub date: DateTime<Utc>,
    pub items: Vec<OrderItem>,
    pub total: Price,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<DateTime<Utc>>,
    /// Append-only, oldest first.
    #[serde(default)]
    pub tracking_events: Vec<TrackingEvent>,
}

impl Order {
    /// Total number of units across all lines.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_tracking_event_text() {
        let now = Utc::now();
        let event = TrackingEvent::for_stage(OrderStatus::OutForDelivery, now).unwrap();
        assert_eq!(event.status, "Out for Delivery");
        assert_eq!(event.location, "Local Delivery Center");
        assert!(TrackingEvent::for_stage(OrderStatus::Cancelled, now).is_none());
    }
}
