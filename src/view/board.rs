//! Board derivations: word slots, keyboard keys and language chips

use crate::core::{ALPHABET, Game, Letter, Outcome};
use crate::languages::{LANGUAGES, Language};

/// One position of the hidden word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Not guessed yet
    Hidden,
    /// Guessed by the player
    Revealed(Letter),
    /// Never guessed; shown only after the round is lost
    Missed(Letter),
}

/// Per-position reveal state of the target word
#[must_use]
pub fn slots(game: &Game) -> Vec<Slot> {
    let lost = game.outcome() == Outcome::Lost;

    game.word()
        .letters()
        .iter()
        .map(|&letter| {
            if game.has_guessed(letter) {
                Slot::Revealed(letter)
            } else if lost {
                Slot::Missed(letter)
            } else {
                Slot::Hidden
            }
        })
        .collect()
}

/// Colour class of a keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStatus {
    Unused,
    Correct,
    Wrong,
}

#[must_use]
pub fn key_status(game: &Game, letter: Letter) -> KeyStatus {
    if !game.has_guessed(letter) {
        KeyStatus::Unused
    } else if game.word().contains(letter) {
        KeyStatus::Correct
    } else {
        KeyStatus::Wrong
    }
}

/// A virtual keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub letter: Letter,
    pub status: KeyStatus,
    /// Every key is disabled once the round is over
    pub disabled: bool,
}

/// All 26 keys in alphabet order
#[must_use]
pub fn keyboard(game: &Game) -> Vec<Key> {
    let disabled = game.is_over();
    ALPHABET
        .iter()
        .map(|&letter| Key {
            letter,
            status: key_status(game, letter),
            disabled,
        })
        .collect()
}

/// A language chip in the status strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chip {
    pub language: &'static Language,
    pub lost: bool,
}

/// Chip `i` is lost once `i` wrong guesses have been made
#[must_use]
pub fn language_chips(game: &Game) -> Vec<Chip> {
    let wrong = game.wrong_guess_count();
    LANGUAGES
        .iter()
        .enumerate()
        .map(|(i, language)| Chip {
            language,
            lost: i < wrong,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TargetWord;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    fn play(word: &str, allowed: usize, guesses: &str) -> Game {
        let mut game = Game::with_allowed_mistakes(TargetWord::new(word).unwrap(), allowed);
        for c in guesses.chars() {
            game.guess_char(c);
        }
        game
    }

    #[test]
    fn slots_start_hidden() {
        let game = play("react", 8, "");
        assert_eq!(game.word().len(), 5);
        assert!(slots(&game).iter().all(|&s| s == Slot::Hidden));
    }

    #[test]
    fn slots_reveal_every_position_of_guessed_letter() {
        let game = play("null", 8, "L");
        assert_eq!(
            slots(&game),
            vec![
                Slot::Hidden,
                Slot::Hidden,
                Slot::Revealed(letter('L')),
                Slot::Revealed(letter('L')),
            ]
        );
    }

    #[test]
    fn slots_show_missed_letters_on_loss() {
        let game = play("react", 2, "RZQ");
        assert_eq!(game.outcome(), Outcome::Lost);
        assert_eq!(
            slots(&game),
            vec![
                Slot::Revealed(letter('R')),
                Slot::Missed(letter('E')),
                Slot::Missed(letter('A')),
                Slot::Missed(letter('C')),
                Slot::Missed(letter('T')),
            ]
        );
    }

    #[test]
    fn key_statuses() {
        let game = play("react", 8, "RZ");
        assert_eq!(key_status(&game, letter('R')), KeyStatus::Correct);
        assert_eq!(key_status(&game, letter('Z')), KeyStatus::Wrong);
        assert_eq!(key_status(&game, letter('E')), KeyStatus::Unused);
        assert_eq!(key_status(&game, letter('Q')), KeyStatus::Unused);
    }

    #[test]
    fn keyboard_disabled_only_when_over() {
        let game = play("go", 8, "G");
        let keys = keyboard(&game);
        assert_eq!(keys.len(), 26);
        assert!(keys.iter().all(|k| !k.disabled));

        let game = play("go", 8, "GO");
        assert!(keyboard(&game).iter().all(|k| k.disabled));

        let game = play("go", 1, "Z");
        assert!(keyboard(&game).iter().all(|k| k.disabled));
    }

    #[test]
    fn chips_lost_in_order() {
        let game = play("react", 8, "ZQX");
        let chips = language_chips(&game);
        assert_eq!(chips.len(), LANGUAGES.len());
        assert!(chips[..3].iter().all(|c| c.lost));
        assert!(chips[3..].iter().all(|c| !c.lost));
        assert_eq!(chips[0].language.name, "HTML");
    }

    #[test]
    fn correct_guesses_cost_no_chips() {
        let game = play("react", 8, "REA");
        assert!(language_chips(&game).iter().all(|c| !c.lost));
    }
}
