//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `auth` - The demo email/password login endpoint
//!
//! The state stores in [`crate::stores`] cover everything else.

pub mod auth;
