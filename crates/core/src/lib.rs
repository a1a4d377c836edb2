//! Auro Core - Shared types library.
//!
//! This crate provides common types used across all Auro components:
//! - `storefront` - Consumer features: laundromats, bookings, cart, orders, supplies
//! - `admin` - The Operator chat dashboard and its side panel
//! - `cli` - Command-line tools for seeding storage and querying the Operator
//!
//! # Architecture
//!
//! The core crate contains only types and small helpers - no storage, no HTTP.
//! The one runtime dependency is the simulated-latency timer in [`latency`].
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses
//! - [`latency`] - Fixed delays standing in for network round trips

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod latency;
pub mod types;

pub use latency::{Latency, SimulatedCall};
pub use types::*;
