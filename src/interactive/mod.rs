//! Interactive TUI
//!
//! Terminal front end with a clickable on-screen keyboard.

mod app;
mod confetti;
pub mod rendering;

pub use app::{App, Statistics, run_tui};
pub use confetti::Confetti;
