//! Board printing for the line-oriented commands

use super::formatters::{pending_row, status_message};
use crate::core::{GameState, GameStatus, LetterState, MAX_ATTEMPTS};
use colored::{ColoredString, Colorize};

fn tile(letter: char, state: LetterState) -> ColoredString {
    let text = format!(" {letter} ");
    match state {
        LetterState::Correct => text.black().on_green().bold(),
        LetterState::Present => text.black().on_yellow().bold(),
        LetterState::Absent => text.white().on_bright_black(),
    }
}

/// Print every committed row, the active row and the remaining blanks
pub fn print_board(state: &GameState) {
    println!("\n{}", "─".repeat(30).cyan());

    for (guess, evaluation) in state.guesses().iter().zip(state.evaluations()) {
        let row: Vec<String> = guess
            .text()
            .chars()
            .zip(evaluation.states())
            .map(|(letter, &letter_state)| tile(letter, letter_state).to_string())
            .collect();
        println!("  {}", row.join(" "));
    }

    let mut drawn = state.guesses().len();
    if state.status() == GameStatus::Active {
        println!("  {}", pending_row(state.current_entry()).bright_white().bold());
        drawn += 1;
    }
    for _ in drawn..MAX_ATTEMPTS {
        println!("  {}", pending_row("").bright_black());
    }

    println!("{}", "─".repeat(30).cyan());
    print_status(state);
}

/// Print the status line in a colour matching the outcome
pub fn print_status(state: &GameState) {
    let message = status_message(state);
    let styled = match state.status() {
        GameStatus::Won => message.green().bold(),
        GameStatus::Lost => message.red().bold(),
        GameStatus::Active if state.last_rejection().is_some() => message.yellow(),
        GameStatus::Active => message.normal(),
    };
    println!("{styled}\n");
}
