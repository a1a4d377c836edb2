//! Storefront storage directory management.
//!
//! # Keys
//!
//! Every key the storefront mirrors (`auro_laundromats`, `auro_bookings`,
//! `auro_cart`, `auro_orders`, `auro_products`, `auro_supplies`, `auro_user`)
//! lives as `<dir>/<key>.json`.

use std::path::Path;

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

use auro_storefront::seed;
use auro_storefront::storage::{
    ALL_KEYS, BOOKINGS_KEY, CART_KEY, FileStorage, LAUNDROMATS_KEY, ORDERS_KEY, PRODUCTS_KEY,
    SUPPLIES_KEY, Storage, StorageError,
};

/// Errors from the storage commands.
#[derive(Debug, Error)]
pub enum StorageCommandError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// What one key holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyReport {
    pub key: &'static str,
    /// Size in bytes, or `None` when the key is absent.
    pub bytes: Option<usize>,
    /// Entry count when the value is a JSON array.
    pub entries: Option<usize>,
}

/// Open a file store rooted at `dir`, creating it if needed.
///
/// # Errors
///
/// Returns `StorageError` if the directory cannot be created.
pub fn open(dir: &Path) -> Result<FileStorage, StorageError> {
    FileStorage::open(dir)
}

fn write_seed<T: Serialize>(
    storage: &dyn Storage,
    key: &'static str,
    value: &T,
    force: bool,
    written: &mut Vec<&'static str>,
) -> Result<(), StorageCommandError> {
    if !force && storage.get(key)?.is_some() {
        tracing::info!(key, "Already stored, skipping");
        return Ok(());
    }
    storage.set(key, &serde_json::to_string(value)?)?;
    written.push(key);
    Ok(())
}

/// Write every storefront seed collection. The signed-in user is never seeded.
///
/// Keys that already hold data are kept unless `force` is set.
///
/// # Errors
///
/// Returns an error if the backend cannot be read or written.
pub fn seed(storage: &dyn Storage, force: bool) -> Result<Vec<&'static str>, StorageCommandError> {
    let now = Utc::now();
    let mut written = Vec::new();

    write_seed(storage, LAUNDROMATS_KEY, &seed::laundromats(), force, &mut written)?;
    write_seed(storage, BOOKINGS_KEY, &seed::bookings(now), force, &mut written)?;
    write_seed(storage, CART_KEY, &Vec::<()>::new(), force, &mut written)?;
    write_seed(storage, ORDERS_KEY, &seed::orders(now), force, &mut written)?;
    write_seed(storage, PRODUCTS_KEY, &seed::products(), force, &mut written)?;
    write_seed(storage, SUPPLIES_KEY, &seed::supplies(now), force, &mut written)?;

    tracing::info!(written = written.len(), "Seed complete");
    Ok(written)
}

/// Remove every storefront key.
///
/// # Errors
///
/// Returns `StorageError` if the backend cannot be written.
pub fn reset(storage: &dyn Storage) -> Result<(), StorageError> {
    for key in ALL_KEYS {
        storage.remove(key)?;
    }
    tracing::info!(keys = ALL_KEYS.len(), "Storage reset");
    Ok(())
}

/// Report what each storefront key holds and log it.
///
/// # Errors
///
/// Returns `StorageError` if the backend cannot be read.
pub fn inspect(storage: &dyn Storage) -> Result<Vec<KeyReport>, StorageError> {
    let mut reports = Vec::with_capacity(ALL_KEYS.len());
    for key in ALL_KEYS {
        let raw = storage.get(key)?;
        let entries = raw
            .as_deref()
            .and_then(|raw| serde_json::from_str::<Vec<serde_json::Value>>(raw).ok())
            .map(|values| values.len());
        let report = KeyReport {
            key,
            bytes: raw.as_ref().map(String::len),
            entries,
        };

        match (report.bytes, report.entries) {
            (None, _) => tracing::info!("{key}: (absent)"),
            (Some(bytes), Some(entries)) => tracing::info!("{key}: {entries} entries, {bytes} bytes"),
            (Some(bytes), None) => tracing::info!("{key}: {bytes} bytes"),
        }
        reports.push(report);
    }
    Ok(reports)
}
