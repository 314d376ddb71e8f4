//! Terminal output formatting
//!
//! Display utilities for the line-oriented commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_status};
