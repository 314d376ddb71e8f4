//! Daily Word
//!
//! A daily six-letter word puzzle: six attempts, per-letter feedback, and a
//! game-state engine that survives restarts.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use daily_wordle::core::{GameStatus, Word};
//! use daily_wordle::daily::{DailyWordProvider, FixedIndex, SystemClock};
//! use daily_wordle::engine::GameEngine;
//! use daily_wordle::storage::MemoryStorage;
//!
//! let storage = Arc::new(MemoryStorage::new());
//! let clock = Arc::new(SystemClock);
//! let provider = DailyWordProvider::new(
//!     storage.clone(),
//!     clock.clone(),
//!     Box::new(FixedIndex(0)),
//!     vec![Word::new("planet").unwrap()],
//! )
//! .unwrap();
//!
//! let mut engine = GameEngine::new(provider, storage, clock);
//! for letter in "planet".chars() {
//!     engine.add_letter(letter);
//! }
//! assert_eq!(engine.submit_guess().status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Daily word selection
pub mod daily;

// Game-state engine
pub mod engine;

// Key-value persistence
pub mod storage;

// Word lists
pub mod wordlists;

// Paths and logging setup
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
