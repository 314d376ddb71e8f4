//! JSON file storage backend.
//!
//! All keys live in a single JSON object. Writes go to a `.tmp` sibling and
//! are moved into place with `rename()`, so a crash never leaves a
//! half-written store behind.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, warn};

use super::{Result, Storage, StorageError};

type Entries = BTreeMap<String, String>;

/// Storage persisted to a JSON file on disk
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    // Serializes read-modify-write cycles on the file
    lock: Mutex<()>,
}

impl FileStorage {
    /// Open (or lazily create) the store at `path`
    ///
    /// # Errors
    /// Returns an I/O error if the parent directory cannot be created.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        debug!(path = %path.display(), "opened file storage");
        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_entries(&self) -> Result<Entries> {
        match fs::read_to_string(&self.path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_entries(&self, entries: &Entries) -> Result<()> {
        let tmp_path = self.path.with_extension("tmp");
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().map_err(|_| StorageError::LockPoisoned)?;
        Ok(self.load_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock().map_err(|_| StorageError::LockPoisoned)?;
        let mut entries = match self.load_entries() {
            Ok(entries) => entries,
            Err(StorageError::Json(e)) => {
                warn!(path = %self.path.display(), error = %e, "replacing unreadable store");
                Entries::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("store.json")).unwrap();
        assert_eq!(storage.get("gameState").unwrap(), None);
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let storage = FileStorage::open(&path).unwrap();
        storage.set("dailyWord", "{\"word\":\"PLANET\"}").unwrap();
        storage.set("gameState", "{}").unwrap();
        drop(storage);

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(
            reopened.get("dailyWord").unwrap().as_deref(),
            Some("{\"word\":\"PLANET\"}")
        );
        assert_eq!(reopened.get("gameState").unwrap().as_deref(), Some("{}"));
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn corrupt_file_errors_on_read_and_is_replaced_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();

        let storage = FileStorage::open(&path).unwrap();
        assert!(matches!(storage.get("dailyWord"), Err(StorageError::Json(_))));

        storage.set("dailyWord", "GARDEN").unwrap();
        assert_eq!(storage.get("dailyWord").unwrap().as_deref(), Some("GARDEN"));
    }
}
