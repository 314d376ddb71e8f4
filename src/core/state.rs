//! Game-state snapshot
//!
//! `GameState` is what the engine hands to the presentation layer after every
//! operation. Fields are only mutated by the engine; everything else reads
//! through the accessors.

use super::evaluation::{Evaluation, LetterState};
use super::word::Word;
use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Lifecycle of a single game
///
/// Transitions only go `Active -> Won` or `Active -> Lost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Active,
    Won,
    Lost,
}

impl GameStatus {
    /// Status implied by a guess history
    #[must_use]
    pub fn from_guesses(secret: &Word, guesses: &[Word]) -> Self {
        if guesses.contains(secret) {
            Self::Won
        } else if guesses.len() >= MAX_ATTEMPTS {
            Self::Lost
        } else {
            Self::Active
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Why the last input event was ignored
///
/// Transient: never persisted and cleared by the next accepted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    GameOver,
    EntryFull,
    InvalidCharacter(char),
    NotEnoughLetters,
    NothingToDelete,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "The game is over"),
            Self::EntryFull => write!(f, "Row is full"),
            Self::InvalidCharacter(c) => write!(f, "'{}' is not a letter", c.escape_default()),
            Self::NotEnoughLetters => write!(f, "Not enough letters"),
            Self::NothingToDelete => write!(f, "Nothing to delete"),
        }
    }
}

/// Immutable view of the current game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) secret: Word,
    pub(crate) guesses: Vec<Word>,
    pub(crate) current_entry: String,
    pub(crate) status: GameStatus,
    pub(crate) last_updated: DateTime<Utc>,
    pub(crate) last_rejection: Option<Rejection>,
}

impl GameState {
    /// Fresh game for `secret`
    #[must_use]
    pub fn new(secret: Word, now: DateTime<Utc>) -> Self {
        Self {
            secret,
            guesses: Vec::new(),
            current_entry: String::new(),
            status: GameStatus::Active,
            last_updated: now,
            last_rejection: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Committed guesses, oldest first
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Letters typed into the active row
    #[inline]
    #[must_use]
    pub fn current_entry(&self) -> &str {
        &self.current_entry
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    #[inline]
    #[must_use]
    pub const fn last_rejection(&self) -> Option<Rejection> {
        self.last_rejection
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.guesses.len()
    }

    /// Evaluation of every committed guess, in guess order
    ///
    /// Recomputed on each call from the guesses and the secret.
    #[must_use]
    pub fn evaluations(&self) -> Vec<Evaluation> {
        self.guesses
            .iter()
            .map(|guess| Evaluation::calculate(guess, &self.secret))
            .collect()
    }

    /// Best state seen so far for each guessed letter
    ///
    /// Letters never guessed are absent from the map.
    #[must_use]
    pub fn letter_states(&self) -> FxHashMap<char, LetterState> {
        let mut states: FxHashMap<char, LetterState> = FxHashMap::default();
        for (guess, evaluation) in self.guesses.iter().zip(self.evaluations()) {
            for (&letter, &state) in guess.chars().iter().zip(evaluation.states()) {
                states
                    .entry(char::from(letter))
                    .and_modify(|best| *best = (*best).max(state))
                    .or_insert(state);
            }
        }
        states
    }
}
