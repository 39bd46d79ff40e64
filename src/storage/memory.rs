//! In-memory store for tests and throwaway sessions.

use rustc_hash::FxHashMap;
use serde_json::Value;

use super::{KeyValueStore, Result};

/// Volatile key-value store backed by a hash map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, Value>,
}

impl MemoryStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_get_remove() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());

        store.set("food", json!(["banana"])).unwrap();
        assert_eq!(store.get("food").unwrap(), Some(json!(["banana"])));
        assert_eq!(store.len(), 1);

        store.set("food", json!(["banana", "cherry"])).unwrap();
        assert_eq!(store.get("food").unwrap(), Some(json!(["banana", "cherry"])));

        store.remove("food").unwrap();
        assert_eq!(store.get("food").unwrap(), None);
        store.remove("food").unwrap();
    }
}
