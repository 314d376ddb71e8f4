//! Runtime configuration
//!
//! Where the store and the log file live, and how logging is set up. The
//! CLI resolves flags and environment variables into a [`Settings`].

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::storage::{FileStorage, MemoryStorage, Storage};

/// Directory name under the home directory
pub const DATA_DIR_NAME: &str = ".daily_wordle";

/// Default store file name inside the data directory
pub const STORE_FILE_NAME: &str = "store.json";

/// Log file name, written next to the store
pub const LOG_FILE_NAME: &str = "daily_wordle.log";

/// Environment variable overriding the store path
pub const STORE_ENV: &str = "DAILY_WORDLE_STORE";

/// Resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Store file, or `None` for an in-memory session
    pub store_path: Option<PathBuf>,
    /// Custom candidate list, or `None` for the embedded one
    pub words_path: Option<PathBuf>,
}

impl Settings {
    /// Resolve settings from CLI values
    ///
    /// `memory` wins over any store path; without an explicit path the
    /// store goes to `~/.daily_wordle/store.json`.
    #[must_use]
    pub fn resolve(store: Option<PathBuf>, memory: bool, words: Option<PathBuf>) -> Self {
        let store_path = if memory {
            None
        } else {
            store.or_else(default_store_path)
        };
        Self {
            store_path,
            words_path: words,
        }
    }

    /// Log file location: beside the store, else the data directory
    #[must_use]
    pub fn log_path(&self) -> Option<PathBuf> {
        match &self.store_path {
            Some(store) => Some(
                store
                    .parent()
                    .unwrap_or_else(|| Path::new("."))
                    .join(LOG_FILE_NAME),
            ),
            None => data_dir().map(|dir| dir.join(LOG_FILE_NAME)),
        }
    }

    /// Open the configured backend
    ///
    /// A store that cannot be opened is logged and replaced by an in-memory
    /// one, so the game is still playable without saving.
    #[must_use]
    pub fn open_storage(&self) -> Arc<dyn Storage> {
        let Some(path) = &self.store_path else {
            return Arc::new(MemoryStorage::new());
        };
        match FileStorage::open(path) {
            Ok(storage) => Arc::new(storage),
            Err(e) => {
                warn!(store = %path.display(), error = %e, "store unavailable; playing in memory");
                Arc::new(MemoryStorage::new())
            }
        }
    }
}

/// `~/.daily_wordle`, if a home directory exists
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DATA_DIR_NAME))
}

#[must_use]
pub fn default_store_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join(STORE_FILE_NAME))
}

/// Install the global tracing subscriber writing to `log_path`
///
/// Filter comes from `RUST_LOG`, defaulting to `info`. Logs go to a file so
/// they never interfere with the TUI.
///
/// # Errors
/// Returns an error if the log file cannot be created.
pub fn init_logging(log_path: &Path) -> Result<()> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let log_file = File::create(log_path)
        .with_context(|| format!("creating log file {}", log_path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't fail if already initialized

    tracing::info!(log = %log_path.display(), "logging initialized");
    Ok(())
}
