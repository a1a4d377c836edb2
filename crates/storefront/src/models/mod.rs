//! Domain models for the storefront.
//!
//! Every model serializes to the camelCase JSON kept in durable storage.

pub mod booking;
pub mod cart;
pub mod laundromat;
pub mod order;
pub mod product;
pub mod supply;
pub mod user;

pub use booking::Booking;
pub use cart::CartItem;
pub use laundromat::{Coordinates, Laundromat, LaundromatFilters, Machine, PayRangeStatus};
pub use order::{Order, OrderItem, TrackingEvent};
pub use product::{Product, ProductFilters, ProductSort, RetailerPrice, SortOrder};
pub use supply::Supply;
pub use user::{User, UserUpdate};
