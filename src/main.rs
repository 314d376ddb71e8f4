//! Daily Word - CLI
//!
//! Play the daily six-letter puzzle in a TUI or a plain line-based mode.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use daily_wordle::{
    commands::run_simple,
    config::{STORE_ENV, Settings, init_logging},
    core::Word,
    daily::{DailyWordProvider, SystemClock, ThreadRandom},
    engine::GameEngine,
    output::print_board,
    wordlists::{ANSWERS, loader::load_from_file, loader::words_from_slice},
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "daily_wordle",
    about = "Daily six-letter word puzzle",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Store file for the saved game and daily word
    #[arg(long, global = true, env = STORE_ENV)]
    store: Option<PathBuf>,

    /// Keep everything in memory (nothing is saved)
    #[arg(long, global = true)]
    memory: bool,

    /// Candidate word list file (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Print the current board
    Show,

    /// Abandon the current game and start a new one
    Reset,
}

/// Load the candidate list based on the -w flag
fn load_candidates(words_path: Option<&PathBuf>) -> Result<Vec<Word>> {
    match words_path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("reading word list {}", path.display())),
        None => Ok(words_from_slice(ANSWERS)),
    }
}

fn build_engine(settings: &Settings) -> Result<GameEngine> {
    let candidates = load_candidates(settings.words_path.as_ref())?;
    let storage = settings.open_storage();
    let clock = Arc::new(SystemClock);

    let provider = DailyWordProvider::new(
        storage.clone(),
        clock.clone(),
        Box::new(ThreadRandom),
        candidates,
    )?;

    Ok(GameEngine::new(provider, storage, clock))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::resolve(cli.store, cli.memory, cli.words);

    // Run without a log file if it cannot be created
    if let Some(log_path) = settings.log_path()
        && let Err(e) = init_logging(&log_path)
    {
        eprintln!("warning: logging disabled: {e:#}");
    }
    info!(?settings, "starting");

    let mut engine = build_engine(&settings)?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(engine),
        Commands::Simple => run_simple(&mut engine),
        Commands::Show => {
            engine.initialize_daily_word();
            print_board(engine.state());
            Ok(())
        }
        Commands::Reset => {
            engine.reset_game();
            print_board(engine.state());
            Ok(())
        }
    }
}

fn run_play_command(engine: GameEngine) -> Result<()> {
    use daily_wordle::interactive::{App, run_tui};

    run_tui(App::new(engine))
}
