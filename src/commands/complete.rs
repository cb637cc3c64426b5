//! Complete-tree command
//!
//! Generates the complete game tree to a bounded depth, backward-inducts
//! win probabilities, and pits a greedy tree player against a random
//! opponent.

use crate::core::Word;
use crate::game::{AdversarialWordle, GameStatistics, run_games};
use crate::players::{GreedyTreeAdversary, GreedyTreeGuesser, RandomAdversary, RandomGuesser};
use crate::tree::{GameTree, Move, generate_complete_tree};

/// Generate a complete depth-bounded tree and play games with it
///
/// With `greedy_guesser` the Guesser plays greedily from the tree against a
/// random Adversary; otherwise a random Guesser faces a greedy tree
/// Adversary. Returns the statistics together with the generated tree.
///
/// A depth of `2 * max_guesses` covers entire games.
#[must_use]
pub fn run_complete(
    word_set: &[Word],
    max_guesses: usize,
    depth: usize,
    num_games: usize,
    greedy_guesser: bool,
) -> (GameStatistics, GameTree) {
    let initial_state = AdversarialWordle::new(word_set, max_guesses);
    let mut tree = generate_complete_tree(Move::Root, &initial_state, depth);
    tree.update_guesser_win_probability();

    let stats = if greedy_guesser {
        run_games(
            num_games,
            word_set,
            max_guesses,
            || GreedyTreeGuesser::new(Some(&tree)),
            || RandomAdversary,
        )
    } else {
        run_games(
            num_games,
            word_set,
            max_guesses,
            || RandomGuesser,
            || GreedyTreeAdversary::new(Some(&tree)),
        )
    };

    (stats, tree)
}
