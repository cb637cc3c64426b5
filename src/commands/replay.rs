//! Replay command
//!
//! Builds a game tree from a log of past games and plays new games guided
//! by it: a random-tree Guesser against either an unguided Adversary or a
//! random-tree Adversary sharing the same tree.

use crate::core::Word;
use crate::game::{GameStatistics, run_games};
use crate::players::{RandomAdversary, RandomTreeAdversary, RandomTreeGuesser};
use crate::tree::load_game_tree;
use anyhow::Result;
use std::path::Path;

/// Replay a game log as tree guidance for `num_games` new games
///
/// With `tree_adversary` both players share the same loaded tree, each with
/// its own cursor; the tree itself is only read.
///
/// # Errors
/// Returns an error if the game log cannot be read or contains malformed
/// records.
pub fn run_replay<P: AsRef<Path>>(
    games_file: P,
    word_set: &[Word],
    max_guesses: usize,
    num_games: usize,
    tree_adversary: bool,
) -> Result<GameStatistics> {
    let tree = load_game_tree(games_file)?;

    let stats = if tree_adversary {
        run_games(
            num_games,
            word_set,
            max_guesses,
            || RandomTreeGuesser::new(Some(&tree)),
            || RandomTreeAdversary::new(Some(&tree)),
        )
    } else {
        run_games(
            num_games,
            word_set,
            max_guesses,
            || RandomTreeGuesser::new(Some(&tree)),
            || RandomAdversary,
        )
    };

    Ok(stats)
}
