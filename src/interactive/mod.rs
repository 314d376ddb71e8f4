//! Interactive TUI interface
//!
//! Terminal front end: renders engine snapshots and forwards key presses.

mod app;
pub mod rendering;

pub use app::{App, run_tui};
