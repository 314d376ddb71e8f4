//! Persisted projection of the game state

use serde::{Deserialize, Serialize};

use crate::core::{GameState, GameStatus, MAX_ATTEMPTS, WORD_LENGTH};
use crate::storage::{RecordError, datetime_from_millis, stored_word};

/// Storage key of the persisted game
pub const GAME_STATE_KEY: &str = "gameState";

/// JSON layout stored under [`GAME_STATE_KEY`]
///
/// `currentGuess` is written on every save; older records without it load
/// with an empty entry.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GameRecord {
    solution: String,
    guesses: Vec<String>,
    #[serde(default)]
    current_guess: String,
    game_status: GameStatus,
    last_updated: i64,
}

impl GameRecord {
    pub(crate) fn from_state(state: &GameState) -> Self {
        Self {
            solution: state.secret().text().to_string(),
            guesses: state
                .guesses()
                .iter()
                .map(|guess| guess.text().to_string())
                .collect(),
            current_guess: state.current_entry().to_string(),
            game_status: state.status(),
            last_updated: state.last_updated().timestamp_millis(),
        }
    }

    /// Validate the record and rebuild the live state from it
    pub(crate) fn into_state(self) -> Result<GameState, RecordError> {
        let secret = stored_word(&self.solution)?;
        let guesses = self
            .guesses
            .iter()
            .map(|guess| stored_word(guess))
            .collect::<Result<Vec<_>, _>>()?;

        if guesses.len() > MAX_ATTEMPTS {
            return Err(RecordError::Inconsistent(format!(
                "{} guesses exceed the limit of {MAX_ATTEMPTS}",
                guesses.len()
            )));
        }

        // A winning guess ends the game, so it can only be the last one
        if let Some(position) = guesses.iter().position(|guess| *guess == secret)
            && position + 1 != guesses.len()
        {
            return Err(RecordError::Inconsistent(
                "guesses continue after the solution".to_string(),
            ));
        }

        let derived = GameStatus::from_guesses(&secret, &guesses);
        if derived != self.game_status {
            return Err(RecordError::Inconsistent(format!(
                "status {} does not match guesses ({derived})",
                self.game_status
            )));
        }

        if self.current_guess.len() > WORD_LENGTH
            || !self.current_guess.bytes().all(|b| b.is_ascii_uppercase())
        {
            return Err(RecordError::Inconsistent(format!(
                "malformed current guess {:?}",
                self.current_guess
            )));
        }
        if derived.is_terminal() && !self.current_guess.is_empty() {
            return Err(RecordError::Inconsistent(
                "finished game has a pending entry".to_string(),
            ));
        }

        let mut state = GameState::new(secret, datetime_from_millis(self.last_updated)?);
        state.guesses = guesses;
        state.current_entry = self.current_guess;
        state.status = derived;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use chrono::{DateTime, Utc};

    fn parse(json: &str) -> Result<GameState, RecordError> {
        serde_json::from_str::<GameRecord>(json)?.into_state()
    }

    #[test]
    fn valid_record_restores_state() {
        let state = parse(
            r#"{"solution":"PLANET","guesses":["GARDEN","PLANES"],"currentGuess":"PLA",
                "gameStatus":"active","lastUpdated":1717243200000}"#,
        )
        .unwrap();

        assert_eq!(state.secret().text(), "PLANET");
        assert_eq!(state.guesses().len(), 2);
        assert_eq!(state.current_entry(), "PLA");
        assert_eq!(state.status(), GameStatus::Active);
        assert_eq!(
            state.last_updated(),
            DateTime::from_timestamp_millis(1_717_243_200_000).unwrap()
        );
    }

    #[test]
    fn missing_current_guess_is_empty() {
        let state = parse(
            r#"{"solution":"PLANET","guesses":["PLANET"],"gameStatus":"won","lastUpdated":0}"#,
        )
        .unwrap();
        assert_eq!(state.current_entry(), "");
        assert_eq!(state.status(), GameStatus::Won);
    }

    #[test]
    fn round_trip_through_json() {
        let mut state = GameState::new(Word::new("PLANET").unwrap(), Utc::now());
        state.guesses.push(Word::new("GARDEN").unwrap());
        state.current_entry = "SIL".to_string();

        let json = serde_json::to_string(&GameRecord::from_state(&state)).unwrap();
        let restored = parse(&json).unwrap();

        assert_eq!(restored.guesses(), state.guesses());
        assert_eq!(restored.current_entry(), "SIL");
        assert_eq!(
            restored.last_updated().timestamp_millis(),
            state.last_updated().timestamp_millis()
        );
    }

    #[test]
    fn rejects_bad_solution() {
        let err = parse(
            r#"{"solution":"ZUSTAND","guesses":[],"gameStatus":"active","lastUpdated":0}"#,
        )
        .unwrap_err();
        assert!(matches!(err, RecordError::Word(_)));
    }

    #[test]
    fn rejects_lowercase_words() {
        let solution = parse(
            r#"{"solution":"planet","guesses":[],"gameStatus":"active","lastUpdated":0}"#,
        );
        assert!(matches!(solution, Err(RecordError::Inconsistent(_))));

        let guess = parse(
            r#"{"solution":"PLANET","guesses":["Garden"],"gameStatus":"active","lastUpdated":0}"#,
        );
        assert!(matches!(guess, Err(RecordError::Inconsistent(_))));
    }

    #[test]
    fn rejects_status_mismatch() {
        let err = parse(
            r#"{"solution":"PLANET","guesses":["GARDEN"],"gameStatus":"won","lastUpdated":0}"#,
        )
        .unwrap_err();
        assert!(matches!(err, RecordError::Inconsistent(_)));
    }

    #[test]
    fn rejects_guesses_after_win() {
        let err = parse(
            r#"{"solution":"PLANET","guesses":["PLANET","GARDEN"],"gameStatus":"won","lastUpdated":0}"#,
        )
        .unwrap_err();
        assert!(matches!(err, RecordError::Inconsistent(_)));
    }

    #[test]
    fn rejects_overlong_entry_and_pending_entry_after_loss() {
        let overlong = parse(
            r#"{"solution":"PLANET","guesses":[],"currentGuess":"PLANETS","gameStatus":"active","lastUpdated":0}"#,
        );
        assert!(overlong.is_err());

        let pending = parse(
            r#"{"solution":"PLANET","guesses":["GARDEN","GARDEN","GARDEN","GARDEN","GARDEN","GARDEN"],
                "currentGuess":"PL","gameStatus":"lost","lastUpdated":0}"#,
        );
        assert!(pending.is_err());
    }

    #[test]
    fn rejects_wrong_shape() {
        assert!(matches!(parse("[1,2,3]"), Err(RecordError::Malformed(_))));
        assert!(matches!(
            parse(r#"{"solution":"PLANET","guesses":[],"gameStatus":"paused","lastUpdated":0}"#),
            Err(RecordError::Malformed(_))
        ));
    }
}
