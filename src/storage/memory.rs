//! In-memory storage backend.
//!
//! Used by `--memory` sessions and by tests that need an isolated store.

use std::sync::Mutex;

use rustc_hash::FxHashMap;

use super::{Result, Storage, StorageError};

/// Storage that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<FxHashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    ///
    /// # Errors
    /// Returns `StorageError::LockPoisoned` if a writer panicked.
    pub fn len(&self) -> Result<usize> {
        Ok(self
            .entries
            .lock()
            .map_err(|_| StorageError::LockPoisoned)?
            .len())
    }

    /// # Errors
    /// Returns `StorageError::LockPoisoned` if a writer panicked.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().map_err(|_| StorageError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::LockPoisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_missing_key() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("gameState").unwrap(), None);
        assert!(storage.is_empty().unwrap());
    }

    #[test]
    fn set_then_get() {
        let storage = MemoryStorage::new();
        storage.set("dailyWord", "PLANET").unwrap();
        assert_eq!(storage.get("dailyWord").unwrap().as_deref(), Some("PLANET"));

        storage.set("dailyWord", "GARDEN").unwrap();
        assert_eq!(storage.get("dailyWord").unwrap().as_deref(), Some("GARDEN"));
        assert_eq!(storage.len().unwrap(), 1);
    }
}
