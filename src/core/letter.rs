//! Single guessable letter

use std::fmt;

/// An uppercase ASCII letter `A..=Z`
///
/// Stored as the raw byte so it can double as a keyboard index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// The 26 letters in keyboard order
pub const ALPHABET: [Letter; 26] = {
    let mut letters = [Letter(b'A'); 26];
    let mut i = 0;
    while i < 26 {
        letters[i] = Letter(b'A' + i as u8);
        i += 1;
    }
    letters
};

impl Letter {
    /// Parse a letter from any character
    ///
    /// Lowercase input is upper-cased. Returns `None` for anything that is
    /// not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::core::Letter;
    ///
    /// assert_eq!(Letter::from_char('r'), Letter::from_char('R'));
    /// assert!(Letter::from_char('7').is_none());
    /// assert!(Letter::from_char('é').is_none());
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self((c as u8).to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Parse a letter from a raw byte
    #[must_use]
    pub const fn from_byte(b: u8) -> Option<Self> {
        if b.is_ascii_alphabetic() {
            Some(Self(b.to_ascii_uppercase()))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Position in the alphabet (A = 0)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
