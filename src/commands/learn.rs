//! Learn command
//!
//! Drives the learning loop, then backward-inducts the grown tree and
//! summarizes how the Guesser's win rate evolved over the run.

use crate::core::Word;
use crate::game::{GameStatistics, Player};
use crate::learning::run_learning_algorithm;
use crate::tree::GameTree;
use std::time::Instant;

/// Number of windows the win-rate trajectory is bucketed into
const TRAJECTORY_WINDOWS: usize = 10;

/// Outcome of a learning run
#[derive(Debug)]
pub struct LearnResult {
    pub statistics: GameStatistics,
    /// Guesser win rate per consecutive window of games, in run order
    pub window_win_rates: Vec<f64>,
    pub tree_size: usize,
    pub root_win_probability: Option<f64>,
}

/// Build an exploration schedule of `num_games` probabilities
///
/// Constant at `probability`, or decaying linearly from `probability` to
/// zero across the run when `decay` is set (later games exploit the tree
/// more).
#[must_use]
pub fn exploration_schedule(num_games: usize, probability: f64, decay: bool) -> Vec<f64> {
    if decay && num_games > 1 {
        (0..num_games)
            .map(|i| probability * (num_games - 1 - i) as f64 / (num_games - 1) as f64)
            .collect()
    } else {
        vec![probability; num_games]
    }
}

/// Run the learning loop and summarize the result
///
/// Returns the summary together with the learned, backward-inducted tree.
#[must_use]
pub fn run_learn(
    word_set: &[Word],
    max_guesses: usize,
    exploration_probabilities: &[f64],
) -> (LearnResult, GameTree) {
    let start = Instant::now();
    let (mut tree, results) =
        run_learning_algorithm(word_set, max_guesses, exploration_probabilities);
    let duration = start.elapsed();

    tree.update_guesser_win_probability();

    let window = (results.len() / TRAJECTORY_WINDOWS).max(1);
    let window_win_rates = results
        .chunks(window)
        .map(|chunk| {
            let wins = chunk.iter().filter(|r| r.winner == Player::Guesser).count();
            wins as f64 / chunk.len() as f64
        })
        .collect();

    let result = LearnResult {
        statistics: GameStatistics::from_results(&results, duration),
        window_win_rates,
        tree_size: tree.size(),
        root_win_probability: tree.win_probability(),
    };

    (result, tree)
}
