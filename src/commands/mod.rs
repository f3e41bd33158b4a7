//! Command implementations

pub mod simple;
pub mod simulate;

pub use simple::{play_lines, run_simple};
pub use simulate::{RoundRecord, SimulationConfig, SimulationResult, play_round, run_simulation};
