//! Candidate words for the daily puzzle
//!
//! Provides the embedded list compiled into the binary plus loaders for
//! custom lists.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT};
