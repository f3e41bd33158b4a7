//! Simulation command
//!
//! Plays many rounds with an automatic player and aggregates the outcomes.

use crate::core::{Game, Outcome, TargetWord};
use crate::player::Player;
use crate::wordlists::SupplierError;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
pub struct SimulationConfig {
    pub rounds: usize,
    /// Round `i` is seeded with `seed + i`, so runs are reproducible
    pub seed: u64,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(rounds: usize, seed: u64) -> Self {
        Self {
            rounds,
            seed,
            show_progress: true,
        }
    }
}

/// Result of a single simulated round
#[derive(Debug, Clone)]
pub struct RoundRecord {
    pub word: String,
    pub outcome: Outcome,
    pub wrong_guesses: usize,
    pub total_guesses: usize,
}

/// Aggregated simulation statistics
#[derive(Debug)]
pub struct SimulationResult {
    pub total_rounds: usize,
    pub won: usize,
    pub lost: usize,
    pub total_wrong_guesses: usize,
    pub total_guesses: usize,
    /// Wrong guesses per round → number of rounds
    pub wrong_distribution: FxHashMap<usize, usize>,
    pub hardest_words: Vec<(String, usize)>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_rounds == 0 {
            0.0
        } else {
            self.won as f64 / self.total_rounds as f64 * 100.0
        }
    }

    #[must_use]
    pub fn average_wrong_guesses(&self) -> f64 {
        if self.total_rounds == 0 {
            0.0
        } else {
            self.total_wrong_guesses as f64 / self.total_rounds as f64
        }
    }

    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.total_rounds == 0 {
            0.0
        } else {
            self.total_guesses as f64 / self.total_rounds as f64
        }
    }
}

/// Play one round to completion
///
/// Stops early if the player runs out of letters, which can only happen
/// with an unusually large mistake allowance.
pub fn play_round<P: Player>(player: &P, word: TargetWord, rng: &mut StdRng) -> RoundRecord {
    let mut game = Game::new(word);

    while !game.is_over() {
        let Some(letter) = player.next_letter(&game, rng) else {
            break;
        };
        game.guess(letter);
    }

    RoundRecord {
        word: game.word().text().to_string(),
        outcome: game.outcome(),
        wrong_guesses: game.wrong_guess_count(),
        total_guesses: game.guessed().len(),
    }
}

/// Run `config.rounds` rounds in parallel over random words from `words`
///
/// # Errors
///
/// Returns `SupplierError::EmptyWordList` if `words` is empty.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_simulation<P: Player + Sync>(
    player: &P,
    words: &[TargetWord],
    config: &SimulationConfig,
) -> Result<SimulationResult, SupplierError> {
    if words.is_empty() {
        return Err(SupplierError::EmptyWordList);
    }

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.rounds as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let records: Vec<RoundRecord> = (0..config.rounds)
        .into_par_iter()
        .filter_map(|i| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            let word = words.choose(&mut rng)?.clone();
            let record = play_round(player, word, &mut rng);
            pb.inc(1);
            Some(record)
        })
        .collect();

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let result = aggregate(&records, duration);

    tracing::info!(
        rounds = result.total_rounds,
        won = result.won,
        elapsed_ms = duration.as_millis() as u64,
        "Simulation finished"
    );

    Ok(result)
}

fn aggregate(records: &[RoundRecord], duration: Duration) -> SimulationResult {
    let mut wrong_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut lost_words: FxHashMap<&str, usize> = FxHashMap::default();
    let mut won = 0;
    let mut total_wrong_guesses = 0;
    let mut total_guesses = 0;

    for record in records {
        *wrong_distribution.entry(record.wrong_guesses).or_insert(0) += 1;
        total_wrong_guesses += record.wrong_guesses;
        total_guesses += record.total_guesses;
        match record.outcome {
            Outcome::Won => won += 1,
            _ => *lost_words.entry(record.word.as_str()).or_insert(0) += 1,
        }
    }

    let mut hardest_words: Vec<(String, usize)> = lost_words
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    hardest_words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hardest_words.truncate(5);

    let total_rounds = records.len();

    SimulationResult {
        total_rounds,
        won,
        lost: total_rounds - won,
        total_wrong_guesses,
        total_guesses,
        wrong_distribution,
        hardest_words,
        duration,
        rounds_per_second: total_rounds as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::ALLOWED_MISTAKES;
    use crate::player::{FrequencyPlayer, PlayerType, RandomPlayer};
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    fn quiet(rounds: usize, seed: u64) -> SimulationConfig {
        SimulationConfig {
            show_progress: false,
            ..SimulationConfig::new(rounds, seed)
        }
    }

    #[test]
    fn play_round_reaches_terminal_state() {
        let mut rng = StdRng::seed_from_u64(1);
        let record = play_round(
            &FrequencyPlayer,
            TargetWord::new("react").unwrap(),
            &mut rng,
        );
        assert!(record.outcome.is_terminal());
        assert!(record.wrong_guesses <= ALLOWED_MISTAKES);
        assert!(record.total_guesses >= record.wrong_guesses);
    }

    #[test]
    fn lost_rounds_use_every_mistake() {
        let mut rng = StdRng::seed_from_u64(2);
        // Q is guessed near the end of the frequency order
        let record = play_round(&FrequencyPlayer, TargetWord::new("q").unwrap(), &mut rng);
        assert_eq!(record.outcome, Outcome::Lost);
        assert_eq!(record.wrong_guesses, ALLOWED_MISTAKES);
    }

    #[test]
    fn simulation_counts_add_up() {
        let words = words_from_slice(WORDS);
        let player = PlayerType::from_name("random");
        let result = run_simulation(&player, &words, &quiet(200, 9)).unwrap();

        assert_eq!(result.total_rounds, 200);
        assert_eq!(result.won + result.lost, 200);
        let distribution_sum: usize = result.wrong_distribution.values().sum();
        assert_eq!(distribution_sum, 200);
        assert!(
            result
                .wrong_distribution
                .keys()
                .all(|&wrong| wrong <= ALLOWED_MISTAKES)
        );
        assert!(result.hardest_words.len() <= 5);
    }

    #[test]
    fn simulation_is_reproducible() {
        let words = words_from_slice(WORDS);
        let a = run_simulation(&RandomPlayer, &words, &quiet(100, 77)).unwrap();
        let b = run_simulation(&RandomPlayer, &words, &quiet(100, 77)).unwrap();

        assert_eq!(a.won, b.won);
        assert_eq!(a.total_wrong_guesses, b.total_wrong_guesses);
        assert_eq!(a.hardest_words, b.hardest_words);
    }

    #[test]
    fn empty_word_list_is_an_error() {
        let result = run_simulation(&FrequencyPlayer, &[], &quiet(10, 0));
        assert_eq!(result.err(), Some(SupplierError::EmptyWordList));
    }

    #[test]
    fn zero_rounds() {
        let words = words_from_slice(&["go"]);
        let result = run_simulation(&FrequencyPlayer, &words, &quiet(0, 0)).unwrap();
        assert_eq!(result.total_rounds, 0);
        assert!((result.win_rate() - 0.0).abs() < f64::EPSILON);
        assert!((result.average_wrong_guesses() - 0.0).abs() < f64::EPSILON);
        assert!((result.average_guesses() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn guesses_are_aggregated() {
        // The frequency player ignores the rng, so every round replays the same
        let words = words_from_slice(&["go"]);
        let result = run_simulation(&FrequencyPlayer, &words, &quiet(3, 5)).unwrap();

        let mut rng = StdRng::seed_from_u64(0);
        let single = play_round(&FrequencyPlayer, TargetWord::new("go").unwrap(), &mut rng);
        assert_eq!(result.total_guesses, 3 * single.total_guesses);
        assert!(result.total_guesses >= result.total_wrong_guesses);
        assert!(
            (result.average_guesses() - single.total_guesses as f64).abs() < f64::EPSILON
        );
    }
}
