//! Reinforcement-style tree learning
//!
//! Plays a schedule of games with an exploring Guesser against a random
//! Adversary, growing one shared game tree with every realized move
//! sequence and labeling the reached leaf with the game's outcome.

use crate::core::Word;
use crate::game::{GameResult, Player, run_game};
use crate::players::{ExploringGuesser, RandomAdversary};
use crate::tree::GameTree;

/// Play one game per exploration probability, growing a shared tree
///
/// A single Root-only tree is created up front. Each scheduled game binds a
/// fresh [`ExploringGuesser`] to that tree with the game's exploration
/// probability and plays it against a fresh [`RandomAdversary`]; afterwards
/// the full move sequence is inserted into the tree and the leaf reached is
/// labeled 1.0 if the Guesser won, 0.0 otherwise. Ancestor probabilities
/// are left stale; run
/// [`update_guesser_win_probability`](GameTree::update_guesser_win_probability)
/// separately to refresh them.
///
/// Returns the mutated tree together with the per-game results, in schedule
/// order.
///
/// # Panics
/// Panics if any exploration probability is outside `[0, 1]` (contract
/// violation, surfaced by the guesser constructor).
#[must_use]
pub fn run_learning_algorithm(
    word_set: &[Word],
    max_guesses: usize,
    exploration_probabilities: &[f64],
) -> (GameTree, Vec<GameResult>) {
    let mut tree = GameTree::root();
    let mut results = Vec::with_capacity(exploration_probabilities.len());

    for &probability in exploration_probabilities {
        let result = {
            let mut guesser = ExploringGuesser::new(&tree, probability);
            let mut adversary = RandomAdversary;
            run_game(&mut guesser, &mut adversary, word_set, max_guesses)
        };

        let outcome = if result.winner == Player::Guesser {
            1.0
        } else {
            0.0
        };
        tree.insert_move_sequence(&result.move_sequence())
            .set_win_probability(outcome);

        results.push(result);
    }

    (tree, results)
}
