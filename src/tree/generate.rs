//! Exhaustive game-tree generation
//!
//! Builds a complete tree of bounded depth by enumerating every legal move
//! from a live game state.

use super::{GameTree, Move};
use crate::game::{AdversarialWordle, Player};
use rustc_hash::FxHashSet;

/// Generate the complete game tree of depth `depth` from `game_state`
///
/// The returned tree contains every move sequence of length `<= depth`
/// reachable from `game_state`, one child per distinct legal move:
/// - on the Guesser's turn, every remaining candidate answer is a legal
///   guess;
/// - on the Adversary's turn, every distinct status the last guess can
///   receive against some remaining candidate is legal.
///
/// When the depth is exhausted or the state already has a winner, a single
/// node is returned; decided leaves are labeled 1.0 (Guesser won) or 0.0 so
/// a backward-induction pass can propagate them. Sibling branches explore
/// independent clones of the game state.
///
/// `root_move` must describe how `game_state` was reached: the sentinel for
/// an initial state, the last guess when the Adversary is to move, the last
/// status when the Guesser is.
///
/// # Examples
/// ```
/// use adversarial_wordle::core::Word;
/// use adversarial_wordle::game::AdversarialWordle;
/// use adversarial_wordle::tree::{Move, generate_complete_tree};
///
/// let words: Vec<Word> = ["hello", "words", "world"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let game = AdversarialWordle::new(&words, 3);
///
/// let tree0 = generate_complete_tree(Move::Root, &game, 0);
/// assert_eq!(tree0.size(), 1);
///
/// let tree1 = generate_complete_tree(Move::Root, &game, 1);
/// assert_eq!(tree1.size(), 4); // root plus one child per candidate word
/// ```
#[must_use]
pub fn generate_complete_tree(
    root_move: Move,
    game_state: &AdversarialWordle,
    depth: usize,
) -> GameTree {
    let winner = game_state.get_winner();

    if depth == 0 || winner.is_some() {
        let mut leaf = GameTree::new(root_move);
        match winner {
            Some(Player::Guesser) => leaf.set_win_probability(1.0),
            Some(Player::Adversary) => leaf.set_win_probability(0.0),
            None => {} // horizon reached, outcome unknown
        }
        return leaf;
    }

    let mut tree = GameTree::new(root_move);

    if game_state.is_guesser_turn() {
        for word in game_state.get_possible_answers().to_vec() {
            let mut branch = game_state.clone();
            branch.record_guess(word.clone());
            tree.add_subtree(generate_complete_tree(Move::Guess(word), &branch, depth - 1));
        }
    } else {
        let mut seen = FxHashSet::default();
        for answer in game_state.get_possible_answers() {
            let status = game_state.get_status_for_answer(answer);
            if seen.insert(status) {
                let mut branch = game_state.clone();
                branch.record_status(status);
                tree.add_subtree(generate_complete_tree(
                    Move::Status(status),
                    &branch,
                    depth - 1,
                ));
            }
        }
    }

    tree
}
