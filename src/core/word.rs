//! Target word representation
//!
//! A `TargetWord` stores the hidden word upper-cased along with its set of
//! distinct letters for constant-time membership checks.

use super::Letter;
use rustc_hash::FxHashSet;
use std::fmt;

/// The hidden word for one round
///
/// Always non-empty and made only of ASCII letters. Comparison is
/// case-insensitive because the text is normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetWord {
    text: String,
    letters: Vec<Letter>,
    distinct: FxHashSet<Letter>,
}

/// Error type for invalid target words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl TargetWord {
    /// Create a new target word from a string
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    /// Returns `WordError` if the word:
    /// - is empty
    /// - contains non-ASCII characters
    /// - contains anything other than letters
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::core::TargetWord;
    ///
    /// let word = TargetWord::new("react").unwrap();
    /// assert_eq!(word.text(), "REACT");
    ///
    /// assert!(TargetWord::new("").is_err());
    /// assert!(TargetWord::new("node.js").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = text.into().trim().to_ascii_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let letters: Vec<Letter> = text
            .bytes()
            .map(Letter::from_byte)
            .collect::<Option<_>>()
            .ok_or(WordError::InvalidCharacters)?;

        let distinct = letters.iter().copied().collect();

        Ok(Self {
            text,
            letters,
            distinct,
        })
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letters in word order, duplicates included
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; kept for the `len` convention
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.distinct.contains(&letter)
    }

    /// Distinct letters of the word, in no particular order
    pub fn distinct_letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.distinct.iter().copied()
    }
}

impl fmt::Display for TargetWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
