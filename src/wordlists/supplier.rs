//! Word supplier
//!
//! Hands out a target word at the start of every round.

use crate::core::TargetWord;
use rand::prelude::IndexedRandom;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use std::fmt;

/// Source of target words
pub trait WordSupplier {
    /// Draw the word for a new round
    fn random_word(&mut self) -> TargetWord;
}

/// Error type for supplier construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupplierError {
    EmptyWordList,
}

impl fmt::Display for SupplierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Word list contains no usable words"),
        }
    }
}

impl std::error::Error for SupplierError {}

/// Uniform random choice from a fixed corpus
pub struct RandomWords<R: Rng> {
    words: Vec<TargetWord>,
    rng: R,
}

impl RandomWords<ThreadRng> {
    /// Supplier backed by the thread-local RNG
    ///
    /// # Errors
    /// Returns `SupplierError::EmptyWordList` if `words` is empty.
    pub fn new(words: Vec<TargetWord>) -> Result<Self, SupplierError> {
        Self::with_rng(words, rand::rng())
    }
}

impl RandomWords<StdRng> {
    /// Reproducible supplier: the same seed yields the same word sequence
    ///
    /// # Errors
    /// Returns `SupplierError::EmptyWordList` if `words` is empty.
    pub fn seeded(words: Vec<TargetWord>, seed: u64) -> Result<Self, SupplierError> {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomWords<R> {
    /// # Errors
    /// Returns `SupplierError::EmptyWordList` if `words` is empty.
    pub fn with_rng(words: Vec<TargetWord>, rng: R) -> Result<Self, SupplierError> {
        if words.is_empty() {
            return Err(SupplierError::EmptyWordList);
        }
        Ok(Self { words, rng })
    }
}

impl<R: Rng> WordSupplier for RandomWords<R> {
    fn random_word(&mut self) -> TargetWord {
        match self.words.choose(&mut self.rng) {
            Some(word) => word.clone(),
            // Construction guarantees a non-empty list
            None => unreachable!("word list is never empty"),
        }
    }
}

/// Boxed supplier so the front ends do not care which RNG is behind it
pub type DynSupplier = Box<dyn WordSupplier>;

/// Build a supplier, seeded when a seed is given
///
/// # Errors
/// Returns `SupplierError::EmptyWordList` if `words` is empty.
pub fn build_supplier(
    words: Vec<TargetWord>,
    seed: Option<u64>,
) -> Result<DynSupplier, SupplierError> {
    Ok(match seed {
        Some(seed) => Box::new(RandomWords::seeded(words, seed)?),
        None => Box::new(RandomWords::new(words)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn corpus() -> Vec<TargetWord> {
        words_from_slice(&["react", "closure", "heap", "stack", "queue", "tuple"])
    }

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(
            RandomWords::new(Vec::new()).err(),
            Some(SupplierError::EmptyWordList)
        );
        assert!(build_supplier(Vec::new(), Some(1)).is_err());
    }

    #[test]
    fn words_come_from_corpus() {
        let words = corpus();
        let mut supplier = RandomWords::new(words.clone()).unwrap();
        for _ in 0..50 {
            let word = supplier.random_word();
            assert!(words.contains(&word));
            assert!(!word.is_empty());
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RandomWords::seeded(corpus(), 42).unwrap();
        let mut b = RandomWords::seeded(corpus(), 42).unwrap();

        let seq_a: Vec<TargetWord> = (0..20).map(|_| a.random_word()).collect();
        let seq_b: Vec<TargetWord> = (0..20).map(|_| b.random_word()).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn single_word_corpus() {
        let mut supplier = build_supplier(words_from_slice(&["go"]), None).unwrap();
        assert_eq!(supplier.random_word().text(), "GO");
        assert_eq!(supplier.random_word().text(), "GO");
    }
}
