//! Key-value persistence for player progress
//!
//! Everything the game remembers between sessions is a small JSON value under
//! a string key:
//! - completed words, keyed by category name (`"food"`, `"sports"`, ...)
//! - lives count and the date of the last daily refill
//! - lifetime correct/wrong counters
//! - premium entitlement and tutorial flags
//!
//! Callers treat storage failures as non-fatal: they log and fall back to
//! defaults, so a broken disk never stops a round.

mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Result alias for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage keys shared by the game components
pub mod keys {
    pub const LIVES_COUNT: &str = "lives_count";
    pub const LIVES_REFILL_DATE: &str = "lives_refill_date";
    pub const CORRECT_ANSWERS: &str = "correct_answers";
    pub const WRONG_ANSWERS: &str = "wrong_answers";
    pub const PREMIUM_UNLOCKED: &str = "premium_unlocked";
    pub const TUTORIAL_SEEN: &str = "tutorial_seen";
}

/// A string-keyed store of JSON values
///
/// `set` must be durable when it returns: a value is either fully written or
/// not written at all.
pub trait KeyValueStore {
    /// Read the value under a key, `None` if it was never written
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: Value) -> Result<()>;

    /// Remove a key; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Typed access on top of [`KeyValueStore`]
pub trait StoreExt: KeyValueStore {
    /// Read and deserialize a value
    ///
    /// # Errors
    /// Returns the backend's error, or `StorageError::Json` if the stored value
    /// has the wrong shape.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        self.get(key)?
            .map(|value| {
                serde_json::from_value(value).map_err(|e| StorageError::Json {
                    key: key.to_string(),
                    message: e.to_string(),
                })
            })
            .transpose()
    }

    /// Serialize and write a value
    ///
    /// # Errors
    /// Returns the backend's error, or `StorageError::Json` if serialization fails.
    fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value).map_err(|e| StorageError::Json {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.set(key, value)
    }

    /// Read a value, using `missing` when the key was never written and
    /// `failed` (after logging) when the read itself fails
    fn load_or<T: DeserializeOwned>(&self, key: &str, missing: T, failed: T) -> T {
        match self.load(key) {
            Ok(Some(value)) => value,
            Ok(None) => missing,
            Err(e) => {
                tracing::warn!("Failed to read '{key}', using defaults: {e}");
                failed
            }
        }
    }

    /// Write a value, logging failures; returns whether the write succeeded
    fn save_logged<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> bool {
        match self.save(key, value) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to persist '{key}': {e}");
                false
            }
        }
    }
}

impl<S: KeyValueStore + ?Sized> StoreExt for S {}

#[cfg(test)]
pub(crate) mod testing {
    use super::{KeyValueStore, Result, StorageError};
    use serde_json::Value;

    /// A store whose every operation fails, for exercising fallback paths
    #[derive(Debug, Default)]
    pub struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<Value>> {
            Err(StorageError::Unavailable("broken store".to_string()))
        }

        fn set(&mut self, _key: &str, _value: Value) -> Result<()> {
            Err(StorageError::Unavailable("broken store".to_string()))
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Err(StorageError::Unavailable("broken store".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::BrokenStore;
    use super::*;

    #[test]
    fn typed_round_trip() {
        let mut store = MemoryStore::new();
        store.save("words", &vec!["garden", "kettle"]).unwrap();
        let words: Option<Vec<String>> = store.load("words").unwrap();
        assert_eq!(words, Some(vec!["garden".to_string(), "kettle".to_string()]));
    }

    #[test]
    fn load_missing_is_none() {
        let store = MemoryStore::new();
        let value: Option<u32> = store.load(keys::LIVES_COUNT).unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn load_wrong_shape_is_json_error() {
        let mut store = MemoryStore::new();
        store.save(keys::LIVES_COUNT, "four").unwrap();
        let result: Result<Option<u32>> = store.load(keys::LIVES_COUNT);
        assert!(matches!(result, Err(StorageError::Json { .. })));
    }

    #[test]
    fn load_or_distinguishes_missing_and_failed() {
        let empty = MemoryStore::new();
        assert_eq!(empty.load_or(keys::LIVES_COUNT, 4u8, 0u8), 4);

        let broken = BrokenStore;
        assert_eq!(broken.load_or(keys::LIVES_COUNT, 4u8, 0u8), 0);
    }

    #[test]
    fn save_logged_reports_failure() {
        let mut broken = BrokenStore;
        assert!(!broken.save_logged(keys::CORRECT_ANSWERS, &1u32));

        let mut store = MemoryStore::new();
        assert!(store.save_logged(keys::CORRECT_ANSWERS, &1u32));
    }

    #[test]
    fn boxed_store_delegates() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.save(keys::TUTORIAL_SEEN, &true).unwrap();
        assert_eq!(store.load::<bool>(keys::TUTORIAL_SEEN).unwrap(), Some(true));
    }
}
