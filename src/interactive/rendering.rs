//! TUI rendering with ratatui
//!
//! Draws the guess grid, the on-screen keyboard and the status line from an
//! engine snapshot.

use super::app::App;
use crate::core::{GameState, GameStatus, LetterState, MAX_ATTEMPTS, WORD_LENGTH};
use crate::output::formatters::status_message;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use rustc_hash::FxHashMap;

/// Keyboard rows, top to bottom
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let state = app.engine.state();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                          // Header
            Constraint::Length(MAX_ATTEMPTS as u16 * 2 + 2), // Grid
            Constraint::Length(5),                          // Keyboard
            Constraint::Length(3),                          // Status bar
            Constraint::Min(0),
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, state, chunks[1]);
    render_keyboard(f, state, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("DAILY WORD")
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Magenta)),
        );
    f.render_widget(header, area);
}

/// Background colour for a tile or key
const fn state_color(state: LetterState) -> Color {
    match state {
        LetterState::Correct => Color::Green,
        LetterState::Present => Color::Yellow,
        LetterState::Absent => Color::DarkGray,
    }
}

fn tile(letter: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {letter} "), style)
}

/// Styled rows of the grid: committed guesses, then the active row, then blanks
#[must_use]
pub fn grid_lines(state: &GameState) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);

    for (guess, evaluation) in state.guesses().iter().zip(state.evaluations()) {
        let spans: Vec<Span> = guess
            .text()
            .chars()
            .zip(evaluation.states())
            .flat_map(|(letter, &letter_state)| {
                let style = Style::default()
                    .fg(Color::Black)
                    .bg(state_color(letter_state))
                    .add_modifier(Modifier::BOLD);
                [tile(letter, style), Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let mut drawn = state.guesses().len();
    if state.status() == GameStatus::Active && drawn < MAX_ATTEMPTS {
        let entry: Vec<char> = state.current_entry().chars().collect();
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|i| {
                let (letter, style) = match entry.get(i) {
                    Some(&letter) => (
                        letter,
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                    // Cursor tile
                    None if i == entry.len() => ('_', Style::default().fg(Color::Magenta)),
                    None => ('·', Style::default().fg(Color::DarkGray)),
                };
                [tile(letter, style), Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
        drawn += 1;
    }

    for _ in drawn..MAX_ATTEMPTS {
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|_| [tile('·', Style::default().fg(Color::DarkGray)), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

fn render_grid(f: &mut Frame, state: &GameState, area: Rect) {
    let grid = Paragraph::new(grid_lines(state))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Guesses "));
    f.render_widget(grid, area);
}

/// Style for an on-screen key given what is known about its letter
#[must_use]
pub fn key_style(letter: char, known: &FxHashMap<char, LetterState>) -> Style {
    match known.get(&letter) {
        Some(&state) => Style::default()
            .fg(Color::Black)
            .bg(state_color(state))
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::White),
    }
}

fn render_keyboard(f: &mut Frame, state: &GameState, area: Rect) {
    let known = state.letter_states();
    let mut lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|letter| [tile(letter, key_style(letter, &known)), Span::raw(" ")])
                .collect();
            Line::from(spans)
        })
        .collect();

    if let Some(last) = lines.last_mut() {
        last.spans.insert(0, Span::styled("ENTER ", Style::default().fg(Color::Cyan)));
        last.spans.push(Span::styled(" ⌫", Style::default().fg(Color::Cyan)));
    }

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Keyboard "));
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let state = app.engine.state();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let color = match state.status() {
        GameStatus::Won => Color::Green,
        GameStatus::Lost => Color::Red,
        GameStatus::Active if state.last_rejection().is_some() => Color::Yellow,
        GameStatus::Active => Color::White,
    };
    let mut message = status_message(state);
    if !app.engine.is_persistent() {
        message.push_str(" (not saved)");
    }
    let status = Paragraph::new(message)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[0]);

    let help_text = if state.status().is_terminal() {
        "n: New Game | q/Esc: Quit"
    } else {
        "Enter: Submit | ⌫: Delete | Ctrl-R: Reset | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use chrono::Utc;

    fn row_text(line: &Line) -> String {
        line.spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect::<String>()
            .split_whitespace()
            .collect()
    }

    #[test]
    fn grid_has_a_row_per_attempt() {
        let state = GameState::new(Word::new("PLANET").unwrap(), Utc::now());
        let lines = grid_lines(&state);
        assert_eq!(lines.len(), MAX_ATTEMPTS * 2);
    }

    #[test]
    fn grid_shows_guesses_and_entry() {
        let mut state = GameState::new(Word::new("PLANET").unwrap(), Utc::now());
        state.guesses.push(Word::new("PLANES").unwrap());
        state.current_entry = "GA".to_string();

        let lines = grid_lines(&state);
        assert_eq!(row_text(&lines[0]), "PLANES");
        assert_eq!(row_text(&lines[2]), "GA_···");

        let last_tile = &lines[0].spans[10];
        assert_eq!(last_tile.style.bg, Some(Color::DarkGray));
        let first_tile = &lines[0].spans[0];
        assert_eq!(first_tile.style.bg, Some(Color::Green));
    }

    #[test]
    fn keys_coloured_by_best_state() {
        let mut known = FxHashMap::default();
        known.insert('P', LetterState::Correct);
        known.insert('S', LetterState::Absent);

        assert_eq!(key_style('P', &known).bg, Some(Color::Green));
        assert_eq!(key_style('S', &known).bg, Some(Color::DarkGray));
        assert_eq!(key_style('Q', &known).bg, None);
    }
}
