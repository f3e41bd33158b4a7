//! Assembly: Endgame - CLI
//!
//! Hangman-style word game with TUI and CLI modes.

use anyhow::{Context, Result};
use assembly_endgame::{
    commands::{SimulationConfig, run_simple, run_simulation},
    core::TargetWord,
    logging,
    output::print_simulation_result,
    player::PlayerType,
    wordlists::{WORDS, build_supplier, loader::words_from_slice},
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "assembly_endgame",
    about = "Guess the word before every programming language is lost to Assembly",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Seed for reproducible word selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log file (level via RUST_LOG)
    #[arg(long, global = true, default_value = logging::DEFAULT_LOG_FILE)]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Play many rounds with an automatic player
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Player: frequency (default) or random
        #[arg(short, long, default_value = "frequency")]
        player: String,
    },
}

/// Load target words based on the -w flag
fn load_words(wordlist: &str) -> Result<Vec<TargetWord>> {
    use assembly_endgame::wordlists::loader::load_from_file;

    match wordlist {
        "builtin" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("Failed to read word list {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_file)?;

    let words = load_words(&cli.wordlist)?;
    tracing::info!(words = words.len(), wordlist = %cli.wordlist, "Loaded word list");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(words, cli.seed),
        Commands::Simple => run_simple_command(words, cli.seed),
        Commands::Simulate { count, player } => {
            run_simulate_command(&words, count, &player, cli.seed)
        }
    }
}

fn run_play_command(words: Vec<TargetWord>, seed: Option<u64>) -> Result<()> {
    use assembly_endgame::interactive::{App, run_tui};

    let supplier = build_supplier(words, seed)?;
    run_tui(App::new(supplier))
}

fn run_simple_command(words: Vec<TargetWord>, seed: Option<u64>) -> Result<()> {
    let mut supplier = build_supplier(words, seed)?;
    run_simple(supplier.as_mut())
}

fn run_simulate_command(
    words: &[TargetWord],
    count: usize,
    player_name: &str,
    seed: Option<u64>,
) -> Result<()> {
    let player = PlayerType::from_name(player_name);
    println!(
        "Simulating {count} rounds with the {} player...",
        player.name()
    );

    let config = SimulationConfig::new(count, seed.unwrap_or_else(rand::random));
    let result = run_simulation(&player, words, &config)?;
    print_simulation_result(player.name(), &result);
    Ok(())
}
