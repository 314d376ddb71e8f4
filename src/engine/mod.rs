//! Game-state engine
//!
//! Owns the live [`GameState`], validates input events, applies the
//! `active -> won | lost` state machine and writes the persisted projection
//! after every accepted mutation.
//!
//! Invalid input never errors: it leaves the state untouched and records a
//! transient [`Rejection`] for the presentation layer.

mod record;

pub use record::GAME_STATE_KEY;

use std::sync::Arc;

use chrono::TimeDelta;
use tracing::{debug, info, warn};

use crate::core::{GameState, GameStatus, Rejection, WORD_LENGTH, Word};
use crate::daily::{Clock, DailyWordProvider};
use crate::storage::Storage;
use record::GameRecord;

/// Age in hours after which a saved game is replaced by the day's puzzle
pub const STALE_AFTER_HOURS: i64 = 24;

/// Caller-owned engine for one player session
///
/// Mutating operations take `&mut self`, so each event runs to completion
/// (transition plus persistence) before the next one can start.
pub struct GameEngine {
    state: GameState,
    provider: DailyWordProvider,
    storage: Arc<dyn Storage>,
    clock: Arc<dyn Clock>,
    persistent: bool,
}

impl GameEngine {
    /// Build an engine, restoring the saved game when there is a valid one
    ///
    /// A missing or corrupt record starts a fresh game with the provider's
    /// daily word.
    pub fn new(
        provider: DailyWordProvider,
        storage: Arc<dyn Storage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let restored = load_state(storage.as_ref());
        let fresh = restored.is_none();
        let state =
            restored.unwrap_or_else(|| GameState::new(provider.get_word(), clock.now()));

        let mut engine = Self {
            state,
            provider,
            storage,
            clock,
            persistent: true,
        };

        if fresh {
            info!("starting fresh game");
            engine.persist();
        } else {
            info!(
                guesses = engine.state.guesses.len(),
                status = %engine.state.status,
                "restored saved game"
            );
        }
        engine
    }

    /// Current state, borrowed
    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Whether writes still reach the storage backend
    ///
    /// Turns false after the first failed write; the session then continues
    /// in memory only.
    #[inline]
    #[must_use]
    pub const fn is_persistent(&self) -> bool {
        self.persistent
    }

    /// Append a letter to the active row
    pub fn add_letter(&mut self, letter: char) -> &GameState {
        if self.state.status.is_terminal() {
            return self.reject(Rejection::GameOver);
        }
        if !letter.is_ascii_alphabetic() {
            return self.reject(Rejection::InvalidCharacter(letter));
        }
        if self.state.current_entry.len() >= WORD_LENGTH {
            return self.reject(Rejection::EntryFull);
        }

        self.state.current_entry.push(letter.to_ascii_uppercase());
        self.commit();
        &self.state
    }

    /// Remove the last letter of the active row
    pub fn delete_letter(&mut self) -> &GameState {
        if self.state.status.is_terminal() {
            return self.reject(Rejection::GameOver);
        }
        if self.state.current_entry.pop().is_none() {
            return self.reject(Rejection::NothingToDelete);
        }

        self.commit();
        &self.state
    }

    /// Commit the active row as a guess
    pub fn submit_guess(&mut self) -> &GameState {
        if self.state.status.is_terminal() {
            return self.reject(Rejection::GameOver);
        }
        let guess = match Word::new(&self.state.current_entry) {
            Ok(guess) => guess,
            Err(e) => {
                debug!(entry = %self.state.current_entry, error = %e, "guess not submittable");
                return self.reject(Rejection::NotEnoughLetters);
            }
        };

        self.state.guesses.push(guess);
        self.state.current_entry.clear();
        self.state.status = GameStatus::from_guesses(&self.state.secret, &self.state.guesses);

        match self.state.status {
            GameStatus::Won => info!(attempts = self.state.guesses.len(), "puzzle solved"),
            GameStatus::Lost => info!(secret = %self.state.secret, "out of attempts"),
            GameStatus::Active => debug!(%guess, remaining = self.state.attempts_remaining(), "guess recorded"),
        }

        self.commit();
        &self.state
    }

    /// Start over with the provider's current word
    pub fn reset_game(&mut self) -> &GameState {
        self.start_new_game();
        info!("game reset");
        &self.state
    }

    /// Replace a stale game with the day's puzzle
    ///
    /// No-op unless the state is more than [`STALE_AFTER_HOURS`] old.
    pub fn initialize_daily_word(&mut self) -> &GameState {
        let age = self.clock.now() - self.state.last_updated;
        if age > TimeDelta::hours(STALE_AFTER_HOURS) {
            info!(age_hours = age.num_hours(), "saved game is stale, loading daily word");
            self.start_new_game();
        }
        &self.state
    }

    fn start_new_game(&mut self) {
        self.state = GameState::new(self.provider.get_word(), self.clock.now());
        self.persist();
    }

    fn reject(&mut self, rejection: Rejection) -> &GameState {
        debug!(%rejection, "input ignored");
        self.state.last_rejection = Some(rejection);
        &self.state
    }

    /// Finish an accepted mutation
    fn commit(&mut self) {
        self.state.last_rejection = None;
        self.state.last_updated = self.clock.now();
        self.persist();
    }

    fn persist(&mut self) {
        if !self.persistent {
            return;
        }

        let result = serde_json::to_string(&GameRecord::from_state(&self.state))
            .map_err(crate::storage::StorageError::from)
            .and_then(|json| self.storage.set(GAME_STATE_KEY, &json));

        if let Err(e) = result {
            warn!(error = %e, "could not save game; continuing without persistence");
            self.persistent = false;
        }
    }
}

fn load_state(storage: &dyn Storage) -> Option<GameState> {
    let raw = match storage.get(GAME_STATE_KEY) {
        Ok(raw) => raw?,
        Err(e) => {
            warn!(error = %e, "could not read saved game");
            return None;
        }
    };

    match serde_json::from_str::<GameRecord>(&raw)
        .map_err(Into::into)
        .and_then(GameRecord::into_state)
    {
        Ok(state) => Some(state),
        Err(e) => {
            warn!(error = %e, "discarding corrupt saved game");
            None
        }
    }
}
