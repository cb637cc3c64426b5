//! Exploration player
//!
//! The Guesser the learning loop trains with: usually greedy over its tree,
//! but with a configured probability it abandons guidance for the rest of
//! the game and plays unguided random moves, feeding unseen lines back into
//! the tree.

use super::cursor::{TreeCursor, choose_max_probability};
use super::random::random_guess;
use super::Guesser;
use crate::core::Word;
use crate::game::AdversarialWordle;
use crate::tree::{GameTree, Move};
use rand::Rng;

/// A Guesser that sometimes plays greedily and sometimes plays randomly
pub struct ExploringGuesser<'t> {
    cursor: TreeCursor<'t>,
    exploration_probability: f64,
}

impl<'t> ExploringGuesser<'t> {
    /// Create a player guided by `tree` that explores with the given
    /// probability
    ///
    /// # Panics
    /// Panics if `exploration_probability` is outside `[0, 1]` (contract
    /// violation).
    #[must_use]
    pub fn new(tree: &'t GameTree, exploration_probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&exploration_probability),
            "exploration probability {exploration_probability} is outside [0, 1]"
        );
        debug_assert!(
            tree.game_move() == &Move::Root,
            "tree-guided players start from a tree's root"
        );

        Self {
            cursor: TreeCursor::new(Some(tree)),
            exploration_probability,
        }
    }
}

impl Guesser for ExploringGuesser<'_> {
    fn make_move(&mut self, game: &AdversarialWordle) -> Word {
        if let Some(status) = game.statuses().last() {
            self.cursor.follow(&Move::Status(*status));
        }

        if rand::rng().random_bool(self.exploration_probability) {
            self.cursor.clear();
            return random_guess(game);
        }

        self.cursor
            .descend_for_guess(choose_max_probability)
            .unwrap_or_else(|| {
                self.cursor.clear();
                random_guess(game)
            })
    }
}
