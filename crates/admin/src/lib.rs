//! Auro Admin library.
//!
//! The operator dashboard: a rule-based assistant (the Operator) that answers
//! typed requests from a fixed mock catalog, and a side panel showing the
//! tickets, users, locations, system status, performance, or logs it picked.
//!
//! # Modules
//!
//! - [`operator`] - Ordered keyword rules mapping text to a reply and panel
//! - [`display`] - The panel on screen, list filters, and its views
//! - [`services`] - The chat transcript and send flow
//! - [`mock`] - The fixed dashboard dataset
//! - [`routes`] - axum handlers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod display;
pub mod error;
pub mod filters;
pub mod mock;
pub mod models;
pub mod operator;
pub mod routes;
pub mod services;
pub mod state;
