//! Assembly: Endgame
//!
//! A hangman-style word game. Every wrong guess costs one programming
//! language; lose them all and only Assembly is left.
//!
//! # Quick Start
//!
//! ```rust
//! use assembly_endgame::core::{Game, Letter, Outcome, TargetWord};
//!
//! let mut game = Game::new(TargetWord::new("go").unwrap());
//! game.guess(Letter::from_char('g').unwrap());
//! game.guess(Letter::from_char('o').unwrap());
//! assert_eq!(game.outcome(), Outcome::Won);
//! ```

// Core domain types
pub mod core;

// Penalty list
pub mod languages;

// Pure view derivations
pub mod view;

// Word corpus and supplier
pub mod wordlists;

// Automatic players
pub mod player;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Log file setup
pub mod logging;
