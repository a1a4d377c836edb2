//! Durable key-value storage for store snapshots.
//!
//! Each state store mirrors its collection to one fixed key as a JSON blob.
//! Reads fall back to seed data when the key is absent or the stored JSON is
//! malformed; writes are best-effort and never fail the calling operation.

pub mod file;
pub mod memory;

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Storage key for the laundromat collection (machines included).
pub const LAUNDROMATS_KEY: &str = "auro_laundromats";
/// Storage key for bookings.
pub const BOOKINGS_KEY: &str = "auro_bookings";
/// Storage key for the cart.
pub const CART_KEY: &str = "auro_cart";
/// Storage key for supply orders.
pub const ORDERS_KEY: &str = "auro_orders";
/// Storage key for the product catalog.
pub const PRODUCTS_KEY: &str = "auro_products";
/// Storage key for household supplies.
pub const SUPPLIES_KEY: &str = "auro_supplies";
/// Storage key for the signed-in user.
pub const USER_KEY: &str = "auro_user";

/// Every key the storefront writes.
pub const ALL_KEYS: [&str; 7] = [
    LAUNDROMATS_KEY,
    BOOKINGS_KEY,
    CART_KEY,
    ORDERS_KEY,
    PRODUCTS_KEY,
    SUPPLIES_KEY,
    USER_KEY,
];

/// Errors from a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

/// A string-keyed blob store.
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Open the storage backend for an optional data directory.
///
/// `None` gives a fresh in-memory store.
///
/// # Errors
///
/// Returns `StorageError` if the directory cannot be created.
pub fn open(data_dir: Option<&Path>) -> Result<Arc<dyn Storage>, StorageError> {
    match data_dir {
        Some(dir) => Ok(Arc::new(FileStorage::open(dir)?)),
        None => Ok(Arc::new(MemoryStorage::new())),
    }
}

/// Load and parse the JSON stored under `key`.
///
/// Returns `None` when nothing is stored, the backend fails, or the JSON does
/// not parse; callers then fall back to their seed data.
pub fn load_json<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Option<T> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read stored state");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "Stored state is malformed, using seed data");
            None
        }
    }
}

/// Write `value` as JSON under `key` when it differs from what is stored.
///
/// Failures are logged and swallowed.
pub fn mirror_json<T: Serialize + ?Sized>(storage: &dyn Storage, key: &str, value: &T) {
    if let Err(e) = try_mirror_json(storage, key, value) {
        tracing::warn!(key, error = %e, "Failed to persist state");
    }
}

fn try_mirror_json<T: Serialize + ?Sized>(
    storage: &dyn Storage,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let serialized = serde_json::to_string(value)?;
    if storage.get(key)?.as_deref() == Some(serialized.as_str()) {
        return Ok(());
    }
    storage.set(key, &serialized)?;
    tracing::debug!(key, bytes = serialized.len(), "State persisted");
    Ok(())
}

/// Remove `key`, logging failures.
pub fn forget(storage: &dyn Storage, key: &str) {
    if let Err(e) = storage.remove(key) {
        tracing::warn!(key, error = %e, "Failed to remove stored state");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Storage whose writes always fail.
    struct ReadOnly;

    impl Storage for ReadOnly {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::InvalidKey(key.to_string()))
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn test_load_json_missing_and_malformed() {
        let storage = MemoryStorage::new();
        assert_eq!(load_json::<Vec<u32>>(&storage, CART_KEY), None);

        storage.set(CART_KEY, "{not json").unwrap();
        assert_eq!(load_json::<Vec<u32>>(&storage, CART_KEY), None);

        storage.set(CART_KEY, "[1,2,3]").unwrap();
        assert_eq!(load_json::<Vec<u32>>(&storage, CART_KEY), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_mirror_json_writes_serialized_form() {
        let storage = MemoryStorage::new();
        mirror_json(&storage, ORDERS_KEY, &vec!["order-1"]);
        assert_eq!(
            storage.get(ORDERS_KEY).unwrap().as_deref(),
            Some(r#"["order-1"]"#)
        );
    }

    #[test]
    fn test_mirror_json_swallows_write_failures() {
        mirror_json(&ReadOnly, ORDERS_KEY, &vec![1]);
    }
}
