//! Daily secret selection
//!
//! The provider caches its pick under [`DAILY_WORD_KEY`] together with the
//! next local midnight, so every call during the same calendar day (across
//! restarts) returns the same word. The last pick is also kept in memory so
//! the same holds when the backend cannot be read or written.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::clock::{Clock, next_midnight};
use super::random::RandomIndex;
use crate::core::Word;
use crate::storage::{RecordError, Storage, datetime_from_millis, stored_word};

/// Storage key of the cached daily word
pub const DAILY_WORD_KEY: &str = "dailyWord";

/// Storage key of the expiry in the legacy two-key layout
pub const LEGACY_DATE_KEY: &str = "dailyWordDate";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no valid candidate words")]
    NoCandidates,
}

/// Persisted form of the daily pick
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DailyWordRecord {
    word: String,
    expires_at: i64,
}

#[derive(Debug, Clone, Copy)]
struct CachedWord {
    word: Word,
    expires_at: DateTime<Utc>,
}

/// Serves one secret per calendar day
pub struct DailyWordProvider {
    storage: Arc<dyn Storage>,
    clock: Arc<dyn Clock>,
    random: Box<dyn RandomIndex>,
    candidates: Vec<Word>,
    last_pick: Mutex<Option<CachedWord>>,
}

impl DailyWordProvider {
    /// Create a provider drawing from `candidates`
    ///
    /// # Errors
    /// Returns `ProviderError::NoCandidates` if the list is empty.
    pub fn new(
        storage: Arc<dyn Storage>,
        clock: Arc<dyn Clock>,
        random: Box<dyn RandomIndex>,
        candidates: Vec<Word>,
    ) -> Result<Self, ProviderError> {
        if candidates.is_empty() {
            return Err(ProviderError::NoCandidates);
        }
        Ok(Self {
            storage,
            clock,
            random,
            candidates,
            last_pick: Mutex::new(None),
        })
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Today's word
    ///
    /// Returns the cached word while it is unexpired; otherwise picks a new
    /// one, caches it until the next local midnight and returns it. A failed
    /// cache write is logged and the word is still returned; later calls fall
    /// back to the in-memory pick until it expires.
    pub fn get_word(&self) -> Word {
        let now = self.clock.now();

        if let Some(cached) = self.load_cached()
            && now < cached.expires_at
        {
            debug!(word = %cached.word, expires_at = %cached.expires_at, "serving cached daily word");
            self.remember(cached);
            return cached.word;
        }

        if let Some(cached) = self.recall()
            && now < cached.expires_at
        {
            debug!(word = %cached.word, "serving in-memory daily word");
            return cached.word;
        }

        let word = self.candidates[self.random.index(self.candidates.len()) % self.candidates.len()];
        let expires_at = next_midnight(now, &Local);
        info!(%word, %expires_at, "selected new daily word");
        self.remember(CachedWord { word, expires_at });

        let record = DailyWordRecord {
            word: word.text().to_string(),
            expires_at: expires_at.timestamp_millis(),
        };
        match serde_json::to_string(&record) {
            Ok(json) => {
                if let Err(e) = self.storage.set(DAILY_WORD_KEY, &json) {
                    warn!(error = %e, "could not cache daily word; continuing in memory");
                }
            }
            Err(e) => warn!(error = %e, "could not encode daily word record"),
        }

        word
    }

    fn remember(&self, cached: CachedWord) {
        if let Ok(mut last) = self.last_pick.lock() {
            *last = Some(cached);
        }
    }

    fn recall(&self) -> Option<CachedWord> {
        self.last_pick.lock().ok().and_then(|last| *last)
    }

    fn load_cached(&self) -> Option<CachedWord> {
        let raw = match self.storage.get(DAILY_WORD_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "could not read cached daily word");
                return None;
            }
        };

        let parsed = parse_record(&raw).or_else(|canonical_err| {
            // Legacy layout: bare word plus a separate expiry key
            self.parse_legacy(&raw).map_err(|_| canonical_err)
        });

        match parsed {
            Ok(cached) => Some(cached),
            Err(e) => {
                warn!(error = %e, "ignoring corrupt daily word record");
                None
            }
        }
    }

    fn parse_legacy(&self, raw: &str) -> Result<CachedWord, RecordError> {
        let word = stored_word(raw.trim())?;
        let date = self
            .storage
            .get(LEGACY_DATE_KEY)
            .ok()
            .flatten()
            .ok_or_else(|| RecordError::Inconsistent("legacy word without date".to_string()))?;
        let millis = date
            .trim()
            .parse::<i64>()
            .map_err(|e| RecordError::Inconsistent(format!("legacy date: {e}")))?;
        Ok(CachedWord {
            word,
            expires_at: datetime_from_millis(millis)?,
        })
    }
}

fn parse_record(raw: &str) -> Result<CachedWord, RecordError> {
    let record: DailyWordRecord = serde_json::from_str(raw)?;
    Ok(CachedWord {
        word: stored_word(&record.word)?,
        expires_at: datetime_from_millis(record.expires_at)?,
    })
}
