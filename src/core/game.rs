//! Round state machine
//!
//! A `Game` owns exactly two pieces of state, the target word and the ordered
//! guessed letters. Everything else (outcome, wrong-guess count, reveals) is
//! recomputed from those two on every call.

use super::{Letter, TargetWord};
use crate::languages::ALLOWED_MISTAKES;

/// Outcome of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// What a single guess did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Letter appended, present in the word
    Correct,
    /// Letter appended, absent from the word
    Wrong,
    /// Already guessed this round; nothing changed
    AlreadyGuessed,
    /// Round is over; nothing changed
    GameOver,
    /// Input was not a letter; nothing changed
    Ignored,
}

/// One round of the game
#[derive(Debug, Clone)]
pub struct Game {
    word: TargetWord,
    guessed: Vec<Letter>,
    allowed_mistakes: usize,
}

impl Game {
    /// Start a round with the standard mistake allowance
    #[must_use]
    pub fn new(word: TargetWord) -> Self {
        Self::with_allowed_mistakes(word, ALLOWED_MISTAKES)
    }

    /// Start a round that is lost after `allowed_mistakes` wrong guesses
    #[must_use]
    pub fn with_allowed_mistakes(word: TargetWord, allowed_mistakes: usize) -> Self {
        Self {
            word,
            guessed: Vec::new(),
            allowed_mistakes,
        }
    }

    /// Guess a letter
    ///
    /// Duplicate guesses and guesses after the round has ended are no-ops.
    pub fn guess(&mut self, letter: Letter) -> GuessResult {
        if self.is_over() {
            return GuessResult::GameOver;
        }
        if self.guessed.contains(&letter) {
            return GuessResult::AlreadyGuessed;
        }

        self.guessed.push(letter);

        if self.word.contains(letter) {
            GuessResult::Correct
        } else {
            GuessResult::Wrong
        }
    }

    /// Guess from raw keyboard input; non-letters are ignored
    pub fn guess_char(&mut self, c: char) -> GuessResult {
        Letter::from_char(c).map_or(GuessResult::Ignored, |letter| self.guess(letter))
    }

    /// Replace the word and clear all guesses
    ///
    /// Allowed from any state.
    pub fn start_new_round(&mut self, word: TargetWord) {
        self.word = word;
        self.guessed.clear();
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &TargetWord {
        &self.word
    }

    /// Guessed letters in the order they were made
    #[inline]
    #[must_use]
    pub fn guessed(&self) -> &[Letter] {
        &self.guessed
    }

    #[inline]
    #[must_use]
    pub fn has_guessed(&self, letter: Letter) -> bool {
        self.guessed.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub const fn allowed_mistakes(&self) -> usize {
        self.allowed_mistakes
    }

    #[must_use]
    pub fn wrong_guess_count(&self) -> usize {
        self.guessed
            .iter()
            .filter(|&&letter| !self.word.contains(letter))
            .count()
    }

    #[must_use]
    pub fn mistakes_remaining(&self) -> usize {
        self.allowed_mistakes
            .saturating_sub(self.wrong_guess_count())
    }

    /// Every distinct letter of the word has been guessed
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.word
            .distinct_letters()
            .all(|letter| self.guessed.contains(&letter))
    }

    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.wrong_guess_count() >= self.allowed_mistakes
    }

    /// Current outcome
    ///
    /// Won is checked before Lost, so a guess that satisfies both reads as a win.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.is_won() {
            Outcome::Won
        } else if self.is_lost() {
            Outcome::Lost
        } else {
            Outcome::InProgress
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    #[must_use]
    pub fn last_guess(&self) -> Option<Letter> {
        self.guessed.last().copied()
    }

    #[must_use]
    pub fn last_guess_was_wrong(&self) -> bool {
        self.last_guess()
            .is_some_and(|letter| !self.word.contains(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(word: &str, allowed: usize) -> Game {
        Game::with_allowed_mistakes(TargetWord::new(word).unwrap(), allowed)
    }

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn new_round_is_in_progress() {
        let g = Game::new(TargetWord::new("react").unwrap());
        assert_eq!(g.outcome(), Outcome::InProgress);
        assert!(g.guessed().is_empty());
        assert_eq!(g.wrong_guess_count(), 0);
        assert_eq!(g.allowed_mistakes(), ALLOWED_MISTAKES);
        assert!(g.last_guess().is_none());
        assert!(!g.last_guess_was_wrong());
    }

    #[test]
    fn react_won_without_mistakes() {
        let mut g = game("REACT", 7);
        for (i, c) in "REACT".chars().enumerate() {
            assert_eq!(g.guess(letter(c)), GuessResult::Correct);
            if i < 4 {
                assert_eq!(g.outcome(), Outcome::InProgress);
            }
        }
        assert_eq!(g.outcome(), Outcome::Won);
        assert_eq!(g.wrong_guess_count(), 0);
    }

    #[test]
    fn react_lost_after_two_mistakes() {
        let mut g = game("REACT", 2);

        assert_eq!(g.guess(letter('Z')), GuessResult::Wrong);
        assert_eq!(g.wrong_guess_count(), 1);
        assert_eq!(g.outcome(), Outcome::InProgress);

        assert_eq!(g.guess(letter('Q')), GuessResult::Wrong);
        assert_eq!(g.wrong_guess_count(), 2);
        assert_eq!(g.outcome(), Outcome::Lost);

        assert_eq!(g.guess(letter('X')), GuessResult::GameOver);
        assert_eq!(g.wrong_guess_count(), 2);
        assert_eq!(g.guessed(), &[letter('Z'), letter('Q')]);
    }

    #[test]
    fn go_won_in_two() {
        let mut g = game("GO", ALLOWED_MISTAKES);
        g.guess(letter('G'));
        g.guess(letter('O'));
        assert_eq!(g.outcome(), Outcome::Won);
        assert_eq!(g.wrong_guess_count(), 0);
        assert_eq!(g.guessed().len(), 2);
    }

    #[test]
    fn repeated_letters_need_one_guess() {
        let mut g = game("null", ALLOWED_MISTAKES);
        for c in ['N', 'U', 'L'] {
            g.guess(letter(c));
        }
        assert!(g.is_won());
    }

    #[test]
    fn duplicate_guess_is_noop() {
        let mut g = game("react", ALLOWED_MISTAKES);
        assert_eq!(g.guess(letter('Z')), GuessResult::Wrong);
        assert_eq!(g.guess(letter('Z')), GuessResult::AlreadyGuessed);
        assert_eq!(g.guess_char('z'), GuessResult::AlreadyGuessed);
        assert_eq!(g.guessed().len(), 1);
        assert_eq!(g.wrong_guess_count(), 1);

        assert_eq!(g.guess(letter('R')), GuessResult::Correct);
        assert_eq!(g.guess(letter('R')), GuessResult::AlreadyGuessed);
        assert_eq!(g.guessed().len(), 2);
        // Last *applied* guess is still R
        assert_eq!(g.last_guess(), Some(letter('R')));
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut g = game("react", ALLOWED_MISTAKES);
        assert_eq!(g.guess_char('3'), GuessResult::Ignored);
        assert_eq!(g.guess_char(' '), GuessResult::Ignored);
        assert!(g.guessed().is_empty());
    }

    #[test]
    fn guess_char_is_case_insensitive() {
        let mut g = game("Go", ALLOWED_MISTAKES);
        assert_eq!(g.guess_char('g'), GuessResult::Correct);
        assert_eq!(g.guess_char('O'), GuessResult::Correct);
        assert!(g.is_won());
    }

    #[test]
    fn terminal_state_freezes_everything() {
        let mut g = game("GO", ALLOWED_MISTAKES);
        g.guess(letter('G'));
        g.guess(letter('O'));
        let guessed_before = g.guessed().to_vec();

        for c in 'A'..='Z' {
            assert_eq!(g.guess_char(c), GuessResult::GameOver);
        }
        assert_eq!(g.guessed(), guessed_before.as_slice());
        assert_eq!(g.wrong_guess_count(), 0);
        assert_eq!(g.outcome(), Outcome::Won);
    }

    #[test]
    fn wrong_count_is_monotonic() {
        let mut g = game("typescript", ALLOWED_MISTAKES);
        let mut previous = 0;
        for c in "QTZYXWPVJKEBS".chars() {
            g.guess_char(c);
            let now = g.wrong_guess_count();
            assert!(now >= previous);
            previous = now;
        }
    }

    #[test]
    fn won_and_lost_never_both_reported() {
        let words = ["react", "go", "assembly", "null"];
        let sequences = ["ZQXWVKJ", "ETAOINSHRDLU", "QZXGO", "ABCDEFGHIJKLMNOPQRSTUVWXYZ"];

        for word in words {
            for seq in sequences {
                let mut g = game(word, 3);
                for c in seq.chars() {
                    g.guess_char(c);
                    let outcome = g.outcome();
                    assert_eq!(outcome == Outcome::Won, g.is_won());
                    if outcome == Outcome::Lost {
                        assert!(!g.is_won());
                    }
                }
            }
        }
    }

    #[test]
    fn win_takes_priority_over_loss() {
        // Zero allowed mistakes makes is_lost() true from the start
        let g = game("go", 0);
        assert!(g.is_lost());
        assert_eq!(g.outcome(), Outcome::Lost);

        let mut g = game("a", 1);
        g.guess(letter('A'));
        assert!(g.is_won());
        assert!(!g.is_lost());
        assert_eq!(g.outcome(), Outcome::Won);

        // Both conditions true at once: the win is reported
        g = Game::with_allowed_mistakes(TargetWord::new("a").unwrap(), 0);
        assert!(g.is_lost());
        g.guessed.push(letter('A'));
        assert!(g.is_won() && g.is_lost());
        assert_eq!(g.outcome(), Outcome::Won);
    }

    #[test]
    fn last_guess_was_wrong_tracks_latest() {
        let mut g = game("react", ALLOWED_MISTAKES);
        g.guess(letter('Z'));
        assert!(g.last_guess_was_wrong());
        g.guess(letter('R'));
        assert!(!g.last_guess_was_wrong());
        g.guess(letter('Q'));
        assert!(g.last_guess_was_wrong());
    }

    #[test]
    fn mistakes_remaining_counts_down() {
        let mut g = game("react", 3);
        assert_eq!(g.mistakes_remaining(), 3);
        g.guess(letter('Z'));
        assert_eq!(g.mistakes_remaining(), 2);
        g.guess(letter('R'));
        assert_eq!(g.mistakes_remaining(), 2);
    }

    #[test]
    fn start_new_round_resets() {
        let mut g = game("react", 2);
        g.guess(letter('Z'));
        g.guess(letter('Q'));
        assert_eq!(g.outcome(), Outcome::Lost);

        g.start_new_round(TargetWord::new("go").unwrap());
        assert!(g.guessed().is_empty());
        assert_eq!(g.word().text(), "GO");
        assert_eq!(g.outcome(), Outcome::InProgress);
        assert_eq!(g.allowed_mistakes(), 2);
        assert_eq!(g.guess(letter('Z')), GuessResult::Wrong);
    }
}
