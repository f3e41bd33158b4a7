//! Simple interactive CLI mode
//!
//! Text-based game without the TUI

use crate::core::{Game, GuessResult};
use crate::output::print_board;
use crate::view::FAREWELL_VARIANTS;
use crate::wordlists::WordSupplier;
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// the board.
pub fn run_simple(supplier: &mut dyn WordSupplier) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(supplier, &mut stdin.lock(), &mut stdout.lock()).context("Simple mode I/O failed")
}

/// Play from any line source; returns when input ends or the player quits
///
/// # Errors
///
/// Returns an I/O error if reading or writing fails.
pub fn play_lines<R: BufRead, W: Write>(
    supplier: &mut dyn WordSupplier,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                      Assembly: Endgame                       ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the word to keep the programming world safe from Assembly!"
    )?;
    writeln!(out, "Type letters and press Enter. Commands: 'new', 'quit'\n")?;

    let mut game = Game::new(supplier.random_word());
    let mut farewell_variant = 0;
    tracing::info!(word_len = game.word().len(), "Starting first round");

    loop {
        print_board(out, &game, farewell_variant)?;

        let prompt = if game.is_over() {
            "Play again? ('new' or 'quit')"
        } else {
            "Your guess"
        };
        let Some(line) = read_line(input, out, prompt)? else {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" => {
                if game.is_over() {
                    game.start_new_round(supplier.random_word());
                    farewell_variant = 0;
                    tracing::info!(word_len = game.word().len(), "Starting new round");
                    writeln!(out, "\n🔄 New game started!")?;
                } else {
                    writeln!(out, "Finish this round first!")?;
                }
            }
            guesses => {
                // Every character is a guess; no-ops are silently skipped
                for c in guesses.chars() {
                    if game.guess_char(c) == GuessResult::Wrong {
                        farewell_variant = rand::rng().random_range(0..FAREWELL_VARIANTS);
                    }
                }
                if game.is_over() {
                    tracing::info!(
                        outcome = ?game.outcome(),
                        word = game.word().text(),
                        "Round finished"
                    );
                }
            }
        }
    }
}

/// Read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
