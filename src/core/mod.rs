//! Core domain types for the daily puzzle
//!
//! Words, per-letter evaluation and the game-state snapshot. Everything here
//! is pure: no clocks, no storage, no randomness.

mod evaluation;
mod state;
mod word;

pub use evaluation::{Evaluation, LetterState};
pub use state::{GameState, GameStatus, MAX_ATTEMPTS, Rejection};
pub use word::{WORD_LENGTH, Word, WordError};
