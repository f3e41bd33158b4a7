//! Formatting utilities for terminal output

use crate::core::Game;
use crate::view::{self, KeyStatus, Slot};
use colored::{ColoredString, Colorize};

/// Keys per printed keyboard row
const KEYS_PER_ROW: usize = 9;

/// Language chips as one coloured line
#[must_use]
pub fn chip_strip(game: &Game) -> String {
    view::language_chips(game)
        .iter()
        .map(|chip| {
            let coloured = if chip.lost {
                format!(" 💀{} ", chip.language.name)
                    .on_bright_black()
                    .black()
                    .strikethrough()
            } else {
                let (r, g, b) = chip.language.background;
                let (fr, fg, fb) = chip.language.foreground;
                format!(" {} ", chip.language.name)
                    .on_truecolor(r, g, b)
                    .truecolor(fr, fg, fb)
            };
            coloured.to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Coloured word line; missed letters are red
#[must_use]
pub fn word_line(game: &Game) -> String {
    view::slots(game)
        .iter()
        .map(|slot| match slot {
            Slot::Hidden => "_".normal(),
            Slot::Revealed(letter) => letter.to_string().bright_white().bold(),
            Slot::Missed(letter) => letter.to_string().red().bold(),
        })
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn key_label(letter: char, status: KeyStatus, disabled: bool) -> ColoredString {
    let label = format!(" {letter} ");
    let coloured = match status {
        KeyStatus::Unused => label.on_truecolor(0xFF, 0xC1, 0x07).black(),
        KeyStatus::Correct => label.on_truecolor(0x10, 0xA9, 0x5B).black(),
        KeyStatus::Wrong => label.on_truecolor(0xEC, 0x5D, 0x49).black(),
    };
    if disabled { coloured.dimmed() } else { coloured }
}

/// Virtual keyboard rows
#[must_use]
pub fn keyboard_rows(game: &Game) -> Vec<String> {
    view::keyboard(game)
        .chunks(KEYS_PER_ROW)
        .map(|row| {
            row.iter()
                .map(|key| key_label(key.letter.as_char(), key.status, key.disabled).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
