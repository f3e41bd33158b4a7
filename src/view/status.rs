//! Status banner selection and wording

use crate::core::{Game, Outcome};
use crate::languages::{Language, lost_by_mistake};

/// What the status banner shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The last guess was wrong and cost this language
    Farewell(&'static Language),
    Won,
    Lost,
    Empty,
}

/// Pick the banner for the current state
///
/// Priority: farewell for a fresh mistake mid-round, then win, then loss.
#[must_use]
pub fn status(game: &Game) -> Status {
    let outcome = game.outcome();

    if outcome == Outcome::InProgress
        && game.last_guess_was_wrong()
        && let Some(language) = lost_by_mistake(game.wrong_guess_count())
    {
        return Status::Farewell(language);
    }

    match outcome {
        Outcome::Won => Status::Won,
        Outcome::Lost => Status::Lost,
        Outcome::InProgress => Status::Empty,
    }
}

/// Headline and body text for a banner
///
/// Farewell variants are picked by index so the caller controls randomness.
#[must_use]
pub fn status_text(status: Status, farewell_variant: usize) -> Option<(String, String)> {
    match status {
        Status::Farewell(language) => Some((
            String::new(),
            farewell_text(language.name, farewell_variant),
        )),
        Status::Won => Some(("You win!".to_string(), "Well Done 🎉".to_string())),
        Status::Lost => Some((
            "Game over!".to_string(),
            "You lose! Better start learning Assembly 😭".to_string(),
        )),
        Status::Empty => None,
    }
}

/// Number of farewell phrasings
pub const FAREWELL_VARIANTS: usize = 12;

/// A goodbye line for a lost language; `variant` wraps around
#[must_use]
pub fn farewell_text(language: &str, variant: usize) -> String {
    match variant % FAREWELL_VARIANTS {
        0 => format!("Farewell, {language}"),
        1 => format!("Adios, {language}"),
        2 => format!("R.I.P., {language}"),
        3 => format!("We'll miss you, {language}"),
        4 => format!("Oh no, not {language}!"),
        5 => format!("{language} bites the dust"),
        6 => format!("Gone but not forgotten, {language}"),
        7 => format!("The end of {language} as we know it"),
        8 => format!("Off into the sunset, {language}"),
        9 => format!("{language}, it's been real"),
        10 => format!("{language}, your watch has ended"),
        _ => format!("{language} has left the building"),
    }
}

/// Presentation flags for the status banner
///
/// Front ends map these to colours; the game knows nothing about them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatusTags {
    pub won: bool,
    pub lost: bool,
    pub farewell: bool,
}

impl StatusTags {
    #[must_use]
    pub fn from_game(game: &Game) -> Self {
        let status = status(game);
        Self {
            won: status == Status::Won,
            lost: status == Status::Lost,
            farewell: matches!(status, Status::Farewell(_)),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        !(self.won || self.lost || self.farewell)
    }
}
