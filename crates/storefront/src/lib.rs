//! Auro Storefront library.
//!
//! The consumer side of Auro: durable storage, the state stores for users,
//! laundromats and bookings, cart, orders, products, and supplies, the demo
//! login, the voice bridge, and the JSON API over all of it.
//!
//! # Modules
//!
//! - [`storage`] - Key-value storage the stores mirror into
//! - [`stores`] - One store per slice of state, mutated only through named operations
//! - [`seed`] - Datasets used when storage holds nothing usable
//! - [`voice`] - Speech recognition and synthesis driving navigation
//! - [`routes`] - axum handlers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod locks;
pub mod models;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
pub mod storage;
pub mod stores;
pub mod voice;
