//! Formatting utilities for terminal output

use crate::core::{GameState, GameStatus, WORD_LENGTH};

/// Placeholder shown for an empty tile
pub const EMPTY_TILE: char = '_';

/// Letters of the active row padded to full width, e.g. "P L A _ _ _"
#[must_use]
pub fn pending_row(entry: &str) -> String {
    entry
        .chars()
        .chain(std::iter::repeat(EMPTY_TILE))
        .take(WORD_LENGTH)
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// One-line summary of where the game stands
#[must_use]
pub fn status_message(state: &GameState) -> String {
    match state.status() {
        GameStatus::Won => format!(
            "Solved in {}/{}!",
            state.guesses().len(),
            crate::core::MAX_ATTEMPTS
        ),
        GameStatus::Lost => format!("Out of attempts. The word was {}.", state.secret()),
        GameStatus::Active => match state.last_rejection() {
            Some(rejection) => rejection.to_string(),
            None => format!("{} attempts remaining", state.attempts_remaining()),
        },
    }
}
