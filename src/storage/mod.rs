//! Key-value persistence backends
//!
//! The engine and the daily word provider only need `get`/`set` on string
//! keys. Each owner writes its own keys; the backend just has to make a
//! single `set` atomic.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::core::{Word, WordError};

/// Errors surfaced by storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Reasons a stored record is rejected during rehydration
///
/// Rejected records are treated as absent by their owners.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("malformed record: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid word: {0}")]
    Word(#[from] WordError),

    #[error("timestamp out of range: {0}")]
    Timestamp(i64),

    #[error("inconsistent record: {0}")]
    Inconsistent(String),
}

/// Decode an epoch-millis timestamp from a stored record
pub(crate) fn datetime_from_millis(millis: i64) -> std::result::Result<DateTime<Utc>, RecordError> {
    DateTime::from_timestamp_millis(millis).ok_or(RecordError::Timestamp(millis))
}

/// Decode a stored word, which must already be six uppercase ASCII letters
pub(crate) fn stored_word(text: &str) -> std::result::Result<Word, RecordError> {
    if !text.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(RecordError::Inconsistent(format!("word {text:?} is not uppercase")));
    }
    Ok(Word::new(text)?)
}

/// String key-value store shared by the engine and the word provider
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
