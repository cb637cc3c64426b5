//! Game simulation
//!
//! Plays single games to completion and batches of independent games in
//! parallel, aggregating statistics.

use crate::core::{Status, Word};
use crate::game::state::{AdversarialWordle, Player};
use crate::players::{Adversary, Guesser};
use crate::tree::Move;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Outcome of a single completed game
#[derive(Debug, Clone)]
pub struct GameResult {
    pub winner: Player,
    pub guesses: Vec<Word>,
    pub statuses: Vec<Status>,
}

impl GameResult {
    /// The full realized move sequence, alternating guesses and statuses
    #[must_use]
    pub fn move_sequence(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(self.guesses.len() + self.statuses.len());
        for (guess, status) in self.guesses.iter().zip(&self.statuses) {
            moves.push(Move::Guess(guess.clone()));
            moves.push(Move::Status(*status));
        }
        moves
    }
}

/// Aggregate statistics over a batch of games
#[derive(Debug)]
pub struct GameStatistics {
    pub total_games: usize,
    pub guesser_wins: usize,
    pub adversary_wins: usize,
    pub average_guesses: f64,
    /// Number of games keyed by how many guesses they took
    pub guess_distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl GameStatistics {
    /// Aggregate a batch of game results
    #[must_use]
    pub fn from_results(results: &[GameResult], duration: Duration) -> Self {
        let total_games = results.len();
        let guesser_wins = results
            .iter()
            .filter(|r| r.winner == Player::Guesser)
            .count();

        let total_guesses: usize = results.iter().map(|r| r.guesses.len()).sum();
        let average_guesses = if total_games > 0 {
            total_guesses as f64 / total_games as f64
        } else {
            0.0
        };

        let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
        for result in results {
            *guess_distribution.entry(result.guesses.len()).or_insert(0) += 1;
        }

        Self {
            total_games,
            guesser_wins,
            adversary_wins: total_games - guesser_wins,
            average_guesses,
            guess_distribution,
            duration,
            games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
        }
    }

    /// Fraction of games the Guesser won
    #[must_use]
    pub fn guesser_win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.guesser_wins as f64 / self.total_games as f64
        }
    }
}

/// Play one full game between the given players
///
/// Moves alternate from the Guesser until the engine reports a winner.
pub fn run_game<G: Guesser, A: Adversary>(
    guesser: &mut G,
    adversary: &mut A,
    word_set: &[Word],
    max_guesses: usize,
) -> GameResult {
    let mut game = AdversarialWordle::new(word_set, max_guesses);

    let winner = loop {
        let guess = guesser.make_move(&game);
        game.record_guess(guess);

        let status = adversary.make_move(&game);
        game.record_status(status);

        if let Some(winner) = game.get_winner() {
            break winner;
        }
    };

    GameResult {
        winner,
        guesses: game.guesses().to_vec(),
        statuses: game.statuses().to_vec(),
    }
}

/// Play `num_games` independent games and aggregate statistics
///
/// Games run in parallel: each game gets fresh players from the factories
/// and its own game state. Anything the factories capture (such as a shared
/// game tree) is only read, never mutated, during the batch.
pub fn run_games<G, A>(
    num_games: usize,
    word_set: &[Word],
    max_guesses: usize,
    make_guesser: impl Fn() -> G + Sync,
    make_adversary: impl Fn() -> A + Sync,
) -> GameStatistics
where
    G: Guesser,
    A: Adversary,
{
    let pb = ProgressBar::new(num_games as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let results: Vec<GameResult> = (0..num_games)
        .into_par_iter()
        .map(|_| {
            let mut guesser = make_guesser();
            let mut adversary = make_adversary();
            let result = run_game(&mut guesser, &mut adversary, word_set, max_guesses);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();

    GameStatistics::from_results(&results, start.elapsed())
}
