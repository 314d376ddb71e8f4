//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: each line is a whole guess.

use crate::core::GameStatus;
use crate::engine::GameEngine;
use crate::output::{print_board, print_status};
use anyhow::Result;
use std::io::{self, BufRead, Write};

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Quit,
    NewGame,
    Guess(String),
}

impl LineCommand {
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" => None,
            "quit" | "q" | "exit" => Some(Self::Quit),
            "new" | "reset" => Some(Self::NewGame),
            _ => Some(Self::Guess(trimmed.to_string())),
        }
    }
}

/// Replace the active row with `text` and submit it
///
/// Goes through the same per-key operations as the TUI, so invalid letters
/// and over-long input are rejected by the engine.
pub fn enter_guess(engine: &mut GameEngine, text: &str) {
    while !engine.state().current_entry().is_empty() {
        engine.delete_letter();
    }
    for letter in text.chars() {
        engine.add_letter(letter);
        if engine.state().last_rejection().is_some() {
            return;
        }
    }
    engine.submit_guess();
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(engine: &mut GameEngine) -> Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║        Daily Word - Simple Mode      ║");
    println!("╚══════════════════════════════════════╝\n");
    println!("Type a six-letter guess and press Enter.");
    println!("Commands: 'new' to start over, 'quit' to exit\n");

    engine.initialize_daily_word();
    print_board(engine.state());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if engine.state().status() != GameStatus::Active {
            println!("Type 'new' to play again or 'quit' to exit.");
        }
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };

        match LineCommand::parse(&line) {
            None => {}
            Some(LineCommand::Quit) => break,
            Some(LineCommand::NewGame) => {
                engine.reset_game();
                print_board(engine.state());
            }
            Some(LineCommand::Guess(text)) => {
                let before = engine.state().guesses().len();
                enter_guess(engine, &text);
                if engine.state().guesses().len() > before {
                    print_board(engine.state());
                } else {
                    print_status(engine.state());
                }
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rejection, Word};
    use crate::daily::{DailyWordProvider, FixedIndex, ManualClock};
    use crate::storage::MemoryStorage;
    use chrono::Utc;
    use std::sync::Arc;

    fn engine() -> GameEngine {
        let storage = Arc::new(MemoryStorage::new());
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let provider = DailyWordProvider::new(
            storage.clone(),
            clock.clone(),
            Box::new(FixedIndex(0)),
            vec![Word::new("PLANET").unwrap()],
        )
        .unwrap();
        GameEngine::new(provider, storage, clock)
    }

    #[test]
    fn parse_commands() {
        assert_eq!(LineCommand::parse("  "), None);
        assert_eq!(LineCommand::parse("Q"), Some(LineCommand::Quit));
        assert_eq!(LineCommand::parse("new"), Some(LineCommand::NewGame));
        assert_eq!(
            LineCommand::parse(" garden "),
            Some(LineCommand::Guess("garden".to_string()))
        );
    }

    #[test]
    fn enter_guess_submits_word() {
        let mut engine = engine();
        enter_guess(&mut engine, "garden");
        assert_eq!(engine.state().guesses(), &[Word::new("GARDEN").unwrap()]);
    }

    #[test]
    fn enter_guess_replaces_pending_letters() {
        let mut engine = engine();
        engine.add_letter('X');
        enter_guess(&mut engine, "planet");
        assert_eq!(engine.state().status(), GameStatus::Won);
    }

    #[test]
    fn enter_guess_stops_on_rejected_letter() {
        let mut engine = engine();
        enter_guess(&mut engine, "plan3t");
        assert!(engine.state().guesses().is_empty());
        assert_eq!(
            engine.state().last_rejection(),
            Some(Rejection::InvalidCharacter('3'))
        );

        enter_guess(&mut engine, "planets");
        assert!(engine.state().guesses().is_empty());
        assert_eq!(engine.state().last_rejection(), Some(Rejection::EntryFull));
    }
}
