//! Target words
//!
//! The embedded programming-themed corpus, a loader for custom lists and the
//! supplier that draws a word for each round.

mod embedded;
pub mod loader;
mod supplier;

pub use embedded::{WORDS, WORDS_COUNT};
pub use supplier::{DynSupplier, RandomWords, SupplierError, WordSupplier, build_supplier};
