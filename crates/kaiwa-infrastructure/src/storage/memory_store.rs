//! In-memory key-value storage for tests and embedding.

use super::KeyValueStorage;
use kaiwa_core::error::Result;
use std::collections::HashMap;
use std::sync::Mutex;

/// A `HashMap`-backed store with no durability.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStorage {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with `value` under `key`.
    ///
    /// Handy for tests that need existing (or deliberately malformed)
    /// stored data.
    pub fn seeded(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage
            .entries
            .lock()
            .expect("storage mutex poisoned")
            .insert(key.into(), value.into());
        storage
    }
}

impl KeyValueStorage for MemoryKeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .entries
            .lock()
            .expect("storage mutex poisoned")
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .expect("storage mutex poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let storage = MemoryKeyValueStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_seeded() {
        let storage = MemoryKeyValueStorage::seeded("k", "v");
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }
}
