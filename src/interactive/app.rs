//! TUI application state and logic

use crate::engine::GameEngine;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};

/// Application state
///
/// The engine owns the game; the app only translates key presses into
/// engine events and remembers whether to quit.
pub struct App {
    pub engine: GameEngine,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub const fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            should_quit: false,
        }
    }

    /// Route one key press to the engine
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let finished = self.engine.state().status().is_terminal();
        debug!(code = ?key.code, finished, "key press");

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.engine.reset_game();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            // Once the game is over, letters double as menu keys
            KeyCode::Char('q') if finished => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if finished => {
                self.engine.reset_game();
            }
            KeyCode::Char(c) => {
                self.engine.add_letter(c);
            }
            KeyCode::Backspace => {
                self.engine.delete_letter();
            }
            KeyCode::Enter => {
                self.engine.submit_guess();
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.engine.initialize_daily_word();
    info!("TUI started");

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    info!("TUI closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameStatus, Word};
    use crate::daily::{DailyWordProvider, FixedIndex, ManualClock};
    use crate::storage::MemoryStorage;
    use chrono::Utc;
    use std::sync::Arc;

    fn new_app() -> App {
        let storage = Arc::new(MemoryStorage::new());
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let provider = DailyWordProvider::new(
            storage.clone(),
            clock.clone(),
            Box::new(FixedIndex(0)),
            vec![Word::new("PLANET").unwrap()],
        )
        .unwrap();
        App::new(GameEngine::new(provider, storage, clock))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn keys_drive_the_engine() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.engine.state().current_entry(), "G");

        press(&mut app, KeyCode::Backspace);
        type_word(&mut app, "garden");
        assert_eq!(app.engine.state().guesses().len(), 1);
    }

    #[test]
    fn release_events_ignored() {
        let mut app = new_app();
        let mut key = KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert_eq!(app.engine.state().current_entry(), "");
    }

    #[test]
    fn q_is_a_letter_while_playing() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.engine.state().current_entry(), "Q");
    }

    #[test]
    fn menu_keys_after_game_over() {
        let mut app = new_app();
        type_word(&mut app, "planet");
        assert_eq!(app.engine.state().status(), GameStatus::Won);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.engine.state().status(), GameStatus::Active);
        assert!(app.engine.state().guesses().is_empty());

        type_word(&mut app, "planet");
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut app = new_app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = new_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
