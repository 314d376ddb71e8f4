//! Command implementations

pub mod simple;

pub use simple::{LineCommand, enter_guess, run_simple};
