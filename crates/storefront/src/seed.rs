//! Seed datasets used when durable storage holds nothing usable.
//!
//! Timestamps are computed relative to a caller-supplied `now` so tests can
//! pin them.

use chrono::{DateTime, Duration, Utc};

use auro_core::{
    BookingId, BookingStatus, Capacity, Email, HealthPreference, LaundromatId, MachineId,
    MachineKind, MachineStatus, OrderId, OrderStatus, Price, ProductId, SubscriptionTier, SupplyId,
    UserId,
};

use crate::models::{
    Booking, Coordinates, Laundromat, Machine, Order, OrderItem, Product, RetailerPrice, Supply,
    TrackingEvent,
};
use crate::services::auth::DirectoryAccount;

fn machine(
    id: u32,
    kind: MachineKind,
    number: &str,
    status: MachineStatus,
    time_remaining: Option<u32>,
    cents: i64,
    capacity: Capacity,
) -> Machine {
    Machine {
        id: MachineId::new(format!("machine-{id}")),
        kind,
        number: number.to_string(),
        status,
        time_remaining,
        price: Price::from_cents(cents),
        capacity,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// The five demo laundromats, machines `machine-1` through `machine-37`.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn laundromats() -> Vec<Laundromat> {
    use Capacity::{Large, Medium, Small};
    use MachineKind::{Dryer, Washer};
    use MachineStatus::{Available, InUse, OutOfOrder};

    vec![
        Laundromat {
            id: LaundromatId::new("laundromat-1"),
            name: "Clean & Fresh Laundry".to_string(),
            address: "123 Main St".to_string(),
            city: "Brooklyn".to_string(),
            state: "NY".to_string(),
            zip_code: "11201".to_string(),
            distance: 0.5,
            rating: 4.5,
            hours: "6:00 AM - 10:00 PM".to_string(),
            machines: vec![
                machine(1, Washer, "W1", Available, None, 250, Medium),
                machine(2, Washer, "W2", InUse, Some(15), 250, Medium),
                machine(3, Washer, "W3", Available, None, 300, Large),
                machine(4, Washer, "W4", Available, None, 200, Small),
                machine(5, Dryer, "D1", Available, None, 175, Large),
                machine(6, Dryer, "D2", Available, None, 175, Large),
                machine(7, Dryer, "D3", InUse, Some(25), 175, Large),
            ],
            amenities: strings(&["WiFi", "Seating", "Vending Machines", "Restroom", "Folding Tables"]),
            payment_systems: strings(&["PayRange", "Coin"]),
            image: "/bright-laundromat.png".to_string(),
            coordinates: Coordinates { lat: 37.7749, lng: -122.4194 },
        },
        Laundromat {
            id: LaundromatId::new("laundromat-2"),
            name: "Spin Cycle Laundromat".to_string(),
            address: "456 Market St".to_string(),
            city: "Brooklyn".to_string(),
            state: "NY".to_string(),
            zip_code: "11215".to_string(),
            distance: 1.2,
            rating: 4.2,
            hours: "24 hours".to_string(),
            machines: vec![
                machine(8, Washer, "W1", Available, None, 300, Large),
                machine(9, Washer, "W2", Available, None, 225, Small),
                machine(10, Washer, "W3", InUse, Some(18), 300, Large),
                machine(11, Washer, "W4", Available, None, 225, Small),
                machine(12, Dryer, "D1", OutOfOrder, None, 200, Medium),
                machine(13, Dryer, "D2", Available, None, 200, Medium),
                machine(14, Dryer, "D3", Available, None, 200, Medium),
            ],
            amenities: strings(&["WiFi", "Folding Tables", "Attendant", "Air Conditioning", "TV"]),
            payment_systems: strings(&["Coin", "Credit Card"]),
            image: "/bright-laundromat.png".to_string(),
            coordinates: Coordinates { lat: 37.7899, lng: -122.4014 },
        },
        Laundromat {
            id: LaundromatId::new("laundromat-3"),
            name: "Bubble Wash".to_string(),
            address: "789 Howard St".to_string(),
            city: "Brooklyn".to_string(),
            state: "NY".to_string(),
            zip_code: "11231".to_string(),
            distance: 0.8,
            rating: 4.8,
            hours: "7:00 AM - 11:00 PM".to_string(),
            machines: vec![
                machine(15, Washer, "W1", Available, None, 275, Medium),
                machine(16, Washer, "W2", InUse, Some(25), 350, Large),
                machine(17, Washer, "W3", Available, None, 275, Medium),
                machine(18, Washer, "W4", Available, None, 350, Large),
                machine(19, Washer, "W5", InUse, Some(12), 275, Medium),
                machine(20, Dryer, "D1", Available, None, 200, Large),
                machine(21, Dryer, "D2", Available, None, 200, Large),
                machine(22, Dryer, "D3", Available, None, 200, Large),
            ],
            amenities: strings(&[
                "WiFi",
                "Seating",
                "Detergent Vending",
                "Snack Machines",
                "Charging Stations",
            ]),
            payment_systems: strings(&["PayRange", "Credit Card"]),
            image: "/modern-wash-day.png".to_string(),
            coordinates: Coordinates { lat: 37.7829, lng: -122.4074 },
        },
        Laundromat {
            id: LaundromatId::new("laundromat-4"),
            name: "Laundry Express".to_string(),
            address: "321 Pine St".to_string(),
            city: "Brooklyn".to_string(),
            state: "NY".to_string(),
            zip_code: "11222".to_string(),
            distance: 1.5,
            rating: 3.9,
            hours: "6:00 AM - 10:00 PM".to_string(),
            machines: vec![
                machine(23, Washer, "W1", Available, None, 225, Medium),
                machine(24, Washer, "W2", Available, None, 225, Medium),
                machine(25, Washer, "W3", OutOfOrder, None, 225, Medium),
                machine(26, Dryer, "D1", Available, None, 150, Medium),
                machine(27, Dryer, "D2", Available, None, 150, Medium),
                machine(28, Dryer, "D3", InUse, Some(35), 150, Medium),
            ],
            amenities: strings(&["WiFi", "Vending Machines", "Folding Tables"]),
            payment_systems: strings(&["Coin", "Credit Card"]),
            image: "/sunny-wash-day.png".to_string(),
            coordinates: Coordinates { lat: 37.7929, lng: -122.4094 },
        },
        Laundromat {
            id: LaundromatId::new("laundromat-5"),
            name: "Wash & Fold Center".to_string(),
            address: "555 Mission St".to_string(),
            city: "Brooklyn".to_string(),
            state: "NY".to_string(),
            zip_code: "11205".to_string(),
            distance: 1.8,
            rating: 4.7,
            hours: "5:00 AM - 12:00 AM".to_string(),
            machines: vec![
                machine(29, Washer, "W1", Available, None, 300, Large),
                machine(30, Washer, "W2", Available, None, 300, Large),
                machine(31, Washer, "W3", InUse, Some(22), 300, Large),
                machine(32, Washer, "W4", Available, None, 250, Medium),
                machine(33, Washer, "W5", Available, None, 250, Medium),
                machine(34, Dryer, "D1", Available, None, 225, Large),
                machine(35, Dryer, "D2", Available, None, 225, Large),
                machine(36, Dryer, "D3", Available, None, 225, Large),
                machine(37, Dryer, "D4", InUse, Some(15), 225, Large),
            ],
            amenities: strings(&[
                "WiFi",
                "Seating",
                "Attendant",
                "Folding Service",
                "Dry Cleaning",
                "Restroom",
                "Coffee Machine",
            ]),
            payment_systems: strings(&["PayRange", "Coin", "Credit Card"]),
            image: "/modern-laundromat-interior.png".to_string(),
            coordinates: Coordinates { lat: 37.7879, lng: -122.3984 },
        },
    ]
}

/// Three bookings for `user-1`: one upcoming, one active, one completed.
#[must_use]
pub fn bookings(now: DateTime<Utc>) -> Vec<Booking> {
    let booking = |id: &str,
                   laundromat: (&str, &str),
                   machine: (&str, MachineKind, &str),
                   window: (Duration, Duration),
                   status: BookingStatus| Booking {
        id: BookingId::new(id),
        user_id: UserId::new("user-1"),
        laundromat_id: LaundromatId::new(laundromat.0),
        laundromat_name: laundromat.1.to_string(),
        machine_id: MachineId::new(machine.0),
        machine_type: machine.1,
        machine_number: machine.2.to_string(),
        start_time: now + window.0,
        end_time: now + window.1,
        status,
    };

    vec![
        booking(
            "booking-1",
            ("laundromat-1", "Clean & Fresh Laundry"),
            ("machine-1", MachineKind::Washer, "W1"),
            (Duration::hours(2), Duration::hours(3)),
            BookingStatus::Upcoming,
        ),
        booking(
            "booking-2",
            ("laundromat-3", "Bubble Wash"),
            ("machine-20", MachineKind::Dryer, "D1"),
            (-Duration::hours(1), Duration::minutes(30)),
            BookingStatus::Active,
        ),
        booking(
            "booking-3",
            ("laundromat-2", "Spin Cycle Laundromat"),
            ("machine-8", MachineKind::Washer, "W1"),
            (-Duration::days(3), -Duration::days(3) + Duration::hours(1)),
            BookingStatus::Completed,
        ),
    ]
}

fn order_item(id: &str, name: &str, cents: i64, quantity: u32) -> OrderItem {
    OrderItem {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Price::from_cents(cents),
        quantity,
        image: Some("/placeholder.svg?height=100&width=100".to_string()),
    }
}

fn history(stages: &[(OrderStatus, DateTime<Utc>)]) -> Vec<TrackingEvent> {
    stages
        .iter()
        .filter_map(|(stage, at)| TrackingEvent::for_stage(*stage, *at))
        .collect()
}

/// A delivered order and one in transit.
#[must_use]
pub fn orders(now: DateTime<Utc>) -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new("order-1"),
            user_id: UserId::new("user-1"),
            date: now - Duration::days(7),
            items: vec![
                order_item("product-1", "Eco-Clean Detergent", 1299, 2),
                order_item("product-4", "Natural Wool Dryer Balls", 1499, 1),
            ],
            total: Price::from_cents(4097),
            status: OrderStatus::Delivered,
            tracking_number: Some("TRK123456789".to_string()),
            estimated_delivery: Some(now - Duration::days(2)),
            tracking_events: history(&[
                (OrderStatus::OrderPlaced, now - Duration::days(7)),
                (OrderStatus::Confirmed, now - Duration::hours(156)),
                (OrderStatus::Shipped, now - Duration::days(5)),
                (OrderStatus::OutForDelivery, now - Duration::days(3)),
                (OrderStatus::Delivered, now - Duration::hours(60)),
            ]),
        },
        Order {
            id: OrderId::new("order-2"),
            user_id: UserId::new("user-1"),
            date: now - Duration::days(2),
            items: vec![order_item("product-2", "Fresh Breeze Softener", 799, 1)],
            total: Price::from_cents(799),
            status: OrderStatus::Shipped,
            tracking_number: Some("TRK987654321".to_string()),
            estimated_delivery: Some(now + Duration::days(2)),
            tracking_events: history(&[
                (OrderStatus::OrderPlaced, now - Duration::days(2)),
                (OrderStatus::Confirmed, now - Duration::hours(36)),
                (OrderStatus::Shipped, now - Duration::days(1)),
            ]),
        },
    ]
}

fn offer(retailer: &str, cents: i64, original_cents: Option<i64>, discount: Option<u32>) -> RetailerPrice {
    RetailerPrice {
        retailer: retailer.to_string(),
        price: Price::from_cents(cents),
        original_price: original_cents.map(Price::from_cents),
        discount,
    }
}

/// Six catalog products with retailer prices.
#[must_use]
pub fn products() -> Vec<Product> {
    use HealthPreference::{EcoFriendly, FragranceFree, Hypoallergenic, Natural, Standard};

    let product = |id: &str,
                   name: &str,
                   description: &str,
                   category: &str,
                   rating: f64,
                   health_tags: Vec<HealthPreference>,
                   prices: Vec<RetailerPrice>| Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        image: "/placeholder.svg?height=200&width=200".to_string(),
        rating,
        health_tags,
        prices,
        best_value: false,
    };

    vec![
        Product {
            best_value: true,
            ..product(
                "product-1",
                "Eco-Clean Detergent",
                "Plant-based, biodegradable laundry detergent",
                "Detergent",
                4.7,
                vec![EcoFriendly, Hypoallergenic],
                vec![
                    offer("GreenMart", 1299, Some(1599), Some(19)),
                    offer("EcoStore", 1349, None, None),
                    offer("SuperValue", 1499, None, None),
                ],
            )
        },
        product(
            "product-2",
            "Fresh Breeze Softener",
            "Long-lasting fabric softener with fresh scent",
            "Fabric Softener",
            4.2,
            vec![Standard],
            vec![
                offer("SuperValue", 899, None, None),
                offer("QuickMart", 799, Some(999), Some(20)),
                offer("HomeGoods", 949, None, None),
            ],
        ),
        product(
            "product-3",
            "Stain-Away Spray",
            "Powerful stain remover for all fabric types",
            "Stain Remover",
            4.5,
            vec![Standard],
            vec![
                offer("CleanSupply", 699, None, None),
                offer("SuperValue", 649, Some(799), Some(19)),
                offer("HomeGoods", 749, None, None),
            ],
        ),
        product(
            "product-4",
            "Natural Wool Dryer Balls",
            "Reusable wool dryer balls, reduces drying time",
            "Dryer Accessories",
            4.8,
            vec![EcoFriendly, Natural],
            vec![
                offer("EcoStore", 1599, None, None),
                offer("GreenMart", 1499, Some(1999), Some(25)),
                offer("HomeGoods", 1799, None, None),
            ],
        ),
        product(
            "product-5",
            "Sensitive Skin Detergent",
            "Fragrance-free detergent for sensitive skin",
            "Detergent",
            4.6,
            vec![Hypoallergenic, FragranceFree],
            vec![
                offer("HealthMart", 1199, None, None),
                offer("SuperValue", 1299, None, None),
                offer("QuickMart", 1099, Some(1399), Some(21)),
            ],
        ),
        product(
            "product-6",
            "Color Protect Sheets",
            "Dryer sheets that prevent color fading",
            "Dryer Accessories",
            4.3,
            vec![Standard],
            vec![
                offer("HomeGoods", 599, Some(799), Some(25)),
                offer("SuperValue", 649, None, None),
                offer("QuickMart", 699, None, None),
            ],
        ),
    ]
}

/// Five household supplies at varied levels.
#[must_use]
pub fn supplies(now: DateTime<Utc>) -> Vec<Supply> {
    let supply = |id: &str,
                  name: &str,
                  category: &str,
                  level: u8,
                  days_ago: i64,
                  days_remaining: u32,
                  (threshold, enabled): (u8, bool),
                  image: &str| Supply {
        id: SupplyId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        level,
        last_updated: now - Duration::days(days_ago),
        estimated_days_remaining: Some(days_remaining),
        auto_reorder_threshold: Some(threshold),
        auto_reorder_enabled: enabled,
        image: image.to_string(),
    };

    vec![
        supply(
            "supply-1",
            "Laundry Detergent",
            "Cleaning",
            35,
            3,
            7,
            (20, true),
            "/placeholder.svg?height=200&width=200&query=laundry+detergent+bottle",
        ),
        supply(
            "supply-2",
            "Fabric Softener",
            "Cleaning",
            60,
            5,
            14,
            (15, false),
            "/placeholder.svg?height=200&width=200&query=fabric+softener+bottle",
        ),
        supply(
            "supply-3",
            "Stain Remover",
            "Cleaning",
            15,
            1,
            3,
            (10, true),
            "/fabric-stain-remover-close-up.png",
        ),
        supply(
            "supply-4",
            "Dryer Sheets",
            "Drying",
            80,
            10,
            21,
            (20, false),
            "/placeholder.svg?height=200&width=200&query=dryer+sheets+box",
        ),
        supply(
            "supply-5",
            "Bleach",
            "Cleaning",
            45,
            7,
            12,
            (15, true),
            "/placeholder.svg?height=200&width=200&query=bleach+bottle",
        ),
    ]
}

/// Accounts known to the login endpoint. The first is the fallback.
#[must_use]
pub fn directory_accounts() -> Vec<DirectoryAccount> {
    use HealthPreference::{EcoFriendly, FragranceFree, Hypoallergenic, Natural, Standard};
    use SubscriptionTier::{Free, Premium};

    [
        ("USER-001", "Sarah Johnson", "sarah.johnson@example.com", Premium, vec![EcoFriendly, Hypoallergenic]),
        ("USER-002", "Michael Chen", "michael.chen@example.com", Free, vec![Standard]),
        ("USER-003", "Emily Rodriguez", "emily.rodriguez@example.com", Premium, vec![Natural, FragranceFree]),
        ("USER-004", "David Kim", "david.kim@example.com", Free, vec![Standard]),
        ("USER-005", "Jessica Taylor", "jessica.taylor@example.com", Premium, vec![EcoFriendly]),
    ]
    .into_iter()
    .filter_map(|(id, name, email, subscription, preferences)| {
        Some(DirectoryAccount {
            id: UserId::new(id),
            name: name.to_string(),
            email: Email::parse(email).ok()?,
            subscription,
            preferences,
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_machine_ids_are_unique() {
        let ids: Vec<_> = laundromats()
            .into_iter()
            .flat_map(|l| l.machines)
            .map(|m| m.id)
            .collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), 37);
        assert_eq!(unique.len(), 37);
    }

    #[test]
    fn test_in_use_machines_have_time_remaining() {
        for machine in laundromats().into_iter().flat_map(|l| l.machines) {
            assert_eq!(
                machine.status == MachineStatus::InUse,
                machine.time_remaining.is_some(),
                "{}",
                machine.id
            );
        }
    }

    #[test]
    fn test_seed_order_totals_match_items() {
        for order in orders(Utc::now()) {
            let sum: Price = order.items.iter().map(|i| i.price.times(i.quantity)).sum();
            assert_eq!(sum, order.total, "{}", order.id);
        }
    }

    #[test]
    fn test_directory_accounts_parse() {
        assert_eq!(directory_accounts().len(), 5);
    }
}
