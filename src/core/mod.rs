//! Core domain types for the game
//!
//! Letters, the target word and the round state machine. Everything here is
//! pure and synchronous; front ends hold a `Game` and call into it.

mod game;
mod letter;
mod word;

pub use game::{Game, GuessResult, Outcome};
pub use letter::{ALPHABET, Letter};
pub use word::{TargetWord, WordError};
