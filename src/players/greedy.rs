//! Greedy tree-guided players
//!
//! Follow a game tree and pick the child with the best win probability for
//! their own side: the Guesser maximizes, the Adversary minimizes. Falls
//! back to unguided random play once the tree runs out.
//!
//! Probabilities are meaningful after a backward-induction pass; any node
//! still unset counts as 0.0.

use super::cursor::{TreeCursor, choose_max_probability, choose_min_probability};
use super::random::{random_guess, random_status};
use super::{Adversary, Guesser};
use crate::core::{Status, Word};
use crate::game::AdversarialWordle;
use crate::tree::{GameTree, Move};

/// A Guesser that always takes the child with the highest win probability
pub struct GreedyTreeGuesser<'t> {
    cursor: TreeCursor<'t>,
}

impl<'t> GreedyTreeGuesser<'t> {
    /// Create a player guided by `tree` (pass `None` for unguided play)
    #[must_use]
    pub fn new(tree: Option<&'t GameTree>) -> Self {
        debug_assert!(
            tree.is_none_or(|t| t.game_move() == &Move::Root),
            "tree-guided players start from a tree's root"
        );
        Self {
            cursor: TreeCursor::new(tree),
        }
    }
}

impl Guesser for GreedyTreeGuesser<'_> {
    fn make_move(&mut self, game: &AdversarialWordle) -> Word {
        if let Some(status) = game.statuses().last() {
            self.cursor.follow(&Move::Status(*status));
        }

        self.cursor
            .descend_for_guess(choose_max_probability)
            .unwrap_or_else(|| {
                self.cursor.clear();
                random_guess(game)
            })
    }
}

/// An Adversary that always takes the child with the lowest win probability
///
/// The Adversary opposes the Guesser's objective, so it minimizes the same
/// scalar the greedy Guesser maximizes.
pub struct GreedyTreeAdversary<'t> {
    cursor: TreeCursor<'t>,
}

impl<'t> GreedyTreeAdversary<'t> {
    /// Create a player guided by `tree` (pass `None` for unguided play)
    #[must_use]
    pub fn new(tree: Option<&'t GameTree>) -> Self {
        debug_assert!(
            tree.is_none_or(|t| t.game_move() == &Move::Root),
            "tree-guided players start from a tree's root"
        );
        Self {
            cursor: TreeCursor::new(tree),
        }
    }
}

impl Adversary for GreedyTreeAdversary<'_> {
    fn make_move(&mut self, game: &AdversarialWordle) -> Status {
        if let Some(guess) = game.guesses().last() {
            self.cursor.follow(&Move::Guess(guess.clone()));
        }

        self.cursor
            .descend_for_status(choose_min_probability)
            .unwrap_or_else(|| {
                self.cursor.clear();
                random_status(game)
            })
    }
}
