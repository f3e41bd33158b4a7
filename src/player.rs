//! Automatic players
//!
//! Defines the Player trait and concrete implementations used by `simulate`.

use crate::core::{ALPHABET, Game, Letter};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Letters ordered by frequency in English text
const ENGLISH_FREQUENCY: &[u8; 26] = b"ETAOINSHRDLCUMWFGYPBVKJXQZ";

/// A policy for choosing the next letter
pub trait Player {
    /// Pick a letter not yet guessed this round
    ///
    /// Returns `None` once every letter has been tried.
    fn next_letter<R: Rng>(&self, game: &Game, rng: &mut R) -> Option<Letter>;
}

/// Enum wrapper for all player types
///
/// Allows runtime selection of player while maintaining static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum PlayerType {
    /// Most common English letters first
    Frequency(FrequencyPlayer),
    /// Uniformly random unguessed letter
    Random(RandomPlayer),
}

impl Player for PlayerType {
    fn next_letter<R: Rng>(&self, game: &Game, rng: &mut R) -> Option<Letter> {
        match self {
            Self::Frequency(p) => p.next_letter(game, rng),
            Self::Random(p) => p.next_letter(game, rng),
        }
    }
}

impl PlayerType {
    /// Create player from name string
    ///
    /// Supported names: "frequency", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomPlayer),
            _ => Self::Frequency(FrequencyPlayer),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Random(_) => "random",
        }
    }
}

/// Guesses letters in English frequency order
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyPlayer;

impl Player for FrequencyPlayer {
    fn next_letter<R: Rng>(&self, game: &Game, _rng: &mut R) -> Option<Letter> {
        ENGLISH_FREQUENCY
            .iter()
            .filter_map(|&b| Letter::from_byte(b))
            .find(|&letter| !game.has_guessed(letter))
    }
}

/// Guesses a random unguessed letter
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPlayer;

impl Player for RandomPlayer {
    fn next_letter<R: Rng>(&self, game: &Game, rng: &mut R) -> Option<Letter> {
        let remaining: Vec<Letter> = ALPHABET
            .iter()
            .copied()
            .filter(|&letter| !game.has_guessed(letter))
            .collect();
        remaining.choose(rng).copied()
    }
}
