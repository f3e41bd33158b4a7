//! Display functions for the line-based front end and command results

use super::formatters::{chip_strip, create_progress_bar, keyboard_rows, word_line};
use crate::commands::SimulationResult;
use crate::core::Game;
use crate::view::{self, Status};
use colored::Colorize;
use std::io::{self, Write};

/// Print the whole board: chips, word, keyboard and status
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn print_board<W: Write>(out: &mut W, game: &Game, farewell_variant: usize) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(out, "{}\n", chip_strip(game))?;
    writeln!(out, "   {}\n", word_line(game))?;
    for row in keyboard_rows(game) {
        writeln!(out, "   {row}")?;
    }
    writeln!(out, "{}", "─".repeat(60).cyan())?;

    let status = view::status(game);
    if let Some((headline, body)) = view::status_text(status, farewell_variant) {
        match status {
            Status::Won => {
                writeln!(out, "{}", headline.bright_green().bold())?;
                writeln!(out, "{}", body.green())?;
            }
            Status::Lost => {
                writeln!(out, "{}", headline.bright_red().bold())?;
                writeln!(out, "{}", body.red())?;
            }
            Status::Farewell(_) => {
                writeln!(out, "{}", body.magenta().italic())?;
            }
            Status::Empty => {}
        }
    }

    writeln!(
        out,
        "Mistakes left: {}",
        game.mistakes_remaining().to_string().bright_yellow()
    )?;
    Ok(())
}

/// Print the result of a simulation
pub fn print_simulation_result(player: &str, result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Player:           {player}");
    println!("   Rounds played:    {}", result.total_rounds);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate()).bright_yellow().bold()
    );
    println!(
        "   Won / lost:       {} / {}",
        result.won.to_string().green(),
        result.lost.to_string().red()
    );
    println!(
        "   Avg wrong:        {:.2}",
        result.average_wrong_guesses()
    );
    println!("   Avg guesses:      {:.2}", result.average_guesses());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    println!("\n📈 {}", "Wrong guesses per round:".bright_cyan().bold());
    let mut buckets: Vec<(&usize, &usize)> = result.wrong_distribution.iter().collect();
    buckets.sort_unstable();
    for (wrong, &count) in buckets {
        let pct = count as f64 / result.total_rounds.max(1) as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {wrong}: {} {count:5} ({pct:5.1}%)", bar.green());
    }

    if !result.hardest_words.is_empty() {
        println!("\n💀 {}", "Most often lost:".bright_cyan().bold());
        for (word, count) in &result.hardest_words {
            println!("   {:<12} {count}", word.bright_white());
        }
    }
}
