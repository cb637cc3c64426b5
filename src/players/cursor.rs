//! Tree descent cursor
//!
//! The state machine shared by every tree-guided player: a non-owning
//! pointer into a game tree that follows the game move by move and goes
//! absent once the tree has nothing left to say about the current line.

use crate::core::{Status, Word};
use crate::tree::{GameTree, Move};

/// A player's current position inside a shared game tree
///
/// Holds a reference only; the tree itself is never mutated through a
/// cursor.
#[derive(Debug, Clone, Copy)]
pub(super) struct TreeCursor<'t> {
    node: Option<&'t GameTree>,
}

impl<'t> TreeCursor<'t> {
    pub(super) fn new(tree: Option<&'t GameTree>) -> Self {
        Self { node: tree }
    }

    /// The current node, if guidance is still available
    pub(super) fn node(&self) -> Option<&'t GameTree> {
        self.node
    }

    /// Follow the opponent's last move down the tree
    ///
    /// Advances to the matching child if there is one. A childless node
    /// means the tree is exhausted for this line and the cursor clears. A
    /// node whose children simply do not include the move leaves the
    /// cursor in place.
    pub(super) fn follow(&mut self, mv: &Move) {
        if let Some(node) = self.node {
            if node.get_subtrees().is_empty() {
                self.node = None;
            } else if let Some(child) = node.find_subtree_by_move(mv) {
                self.node = Some(child);
            }
        }
    }

    /// Advance to a chosen child of the current node
    pub(super) fn advance(&mut self, child: &'t GameTree) {
        self.node = Some(child);
    }

    /// Drop tree guidance for the rest of the game
    pub(super) fn clear(&mut self) {
        self.node = None;
    }

    /// Choose among the current node's children and advance into the choice
    ///
    /// Returns the chosen child's move, or `None` when the cursor is absent,
    /// the node is childless, or the policy declines.
    pub(super) fn descend_with(
        &mut self,
        pick: impl FnOnce(&'t [GameTree]) -> Option<&'t GameTree>,
    ) -> Option<&'t Move> {
        let node = self.node?;
        let child = pick(node.get_subtrees())?;
        self.advance(child);
        Some(child.game_move())
    }

    /// [`descend_with`](Self::descend_with), expecting a Guess child
    ///
    /// By the alternation invariant every child of a Guesser-turn node is a
    /// guess; a tree violating that yields `None` and the caller falls back
    /// to unguided play.
    pub(super) fn descend_for_guess(
        &mut self,
        pick: impl FnOnce(&'t [GameTree]) -> Option<&'t GameTree>,
    ) -> Option<Word> {
        match self.descend_with(pick)? {
            Move::Guess(word) => Some(word.clone()),
            _ => None,
        }
    }

    /// [`descend_with`](Self::descend_with), expecting a Status child
    pub(super) fn descend_for_status(
        &mut self,
        pick: impl FnOnce(&'t [GameTree]) -> Option<&'t GameTree>,
    ) -> Option<Status> {
        match self.descend_with(pick)? {
            Move::Status(status) => Some(*status),
            _ => None,
        }
    }
}

/// Uniform random child selection
pub(super) fn choose_uniform(subtrees: &[GameTree]) -> Option<&GameTree> {
    use rand::prelude::IndexedRandom;
    subtrees.choose(&mut rand::rng())
}

/// Child with the highest win probability; ties go to the first encountered
///
/// Unset probabilities order as 0.0.
pub(super) fn choose_max_probability(subtrees: &[GameTree]) -> Option<&GameTree> {
    let mut iter = subtrees.iter();
    let mut best = iter.next()?;
    for subtree in iter {
        if subtree.win_probability().unwrap_or(0.0) > best.win_probability().unwrap_or(0.0) {
            best = subtree;
        }
    }
    Some(best)
}

/// Child with the lowest win probability; ties go to the first encountered
pub(super) fn choose_min_probability(subtrees: &[GameTree]) -> Option<&GameTree> {
    let mut iter = subtrees.iter();
    let mut best = iter.next()?;
    for subtree in iter {
        if subtree.win_probability().unwrap_or(0.0) < best.win_probability().unwrap_or(0.0) {
            best = subtree;
        }
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Status, Word};

    fn guess(word: &str) -> Move {
        Move::Guess(Word::new(word).unwrap())
    }

    fn status(symbols: &str) -> Move {
        Move::Status(Status::from_symbols(symbols).unwrap())
    }

    #[test]
    fn follow_advances_into_matching_child() {
        let mut tree = GameTree::root();
        tree.insert_move_sequence(&[guess("reach"), status("?NYN?")]);

        let mut cursor = TreeCursor::new(Some(&tree));
        cursor.follow(&guess("reach"));
        assert_eq!(cursor.node().unwrap().game_move(), &guess("reach"));
    }

    #[test]
    fn follow_clears_on_childless_node() {
        let tree = GameTree::root();
        let mut cursor = TreeCursor::new(Some(&tree));

        cursor.follow(&guess("reach"));
        assert!(cursor.node().is_none());
    }

    #[test]
    fn follow_stays_put_when_no_child_matches() {
        let mut tree = GameTree::root();
        tree.insert_move_sequence(&[guess("reach")]);

        let mut cursor = TreeCursor::new(Some(&tree));
        cursor.follow(&guess("sepal"));
        assert_eq!(cursor.node().unwrap().game_move(), &Move::Root);
    }

    #[test]
    fn absent_cursor_ignores_follow() {
        let mut cursor = TreeCursor::new(None);
        cursor.follow(&guess("reach"));
        assert!(cursor.node().is_none());
    }

    #[test]
    fn descend_for_guess_returns_child_word() {
        let mut tree = GameTree::root();
        tree.insert_move_sequence(&[guess("reach")]);

        let mut cursor = TreeCursor::new(Some(&tree));
        let word = cursor.descend_for_guess(choose_uniform).unwrap();
        assert_eq!(word.text(), "reach");
        assert_eq!(cursor.node().unwrap().game_move(), &guess("reach"));
    }

    #[test]
    fn descend_declines_on_childless_node() {
        let tree = GameTree::root();
        let mut cursor = TreeCursor::new(Some(&tree));
        assert!(cursor.descend_for_guess(choose_uniform).is_none());
    }

    fn child_with_probability(word: &str, probability: f64) -> GameTree {
        let mut subtree = GameTree::new(guess(word));
        subtree.set_win_probability(probability);
        subtree
    }

    #[test]
    fn max_probability_selection() {
        let subtrees = vec![
            child_with_probability("sepal", 0.2),
            child_with_probability("tiger", 0.8),
            child_with_probability("hello", 0.5),
        ];
        let best = choose_max_probability(&subtrees).unwrap();
        assert_eq!(best.game_move(), &guess("tiger"));
    }

    #[test]
    fn min_probability_selection() {
        let subtrees = vec![
            child_with_probability("sepal", 0.2),
            child_with_probability("tiger", 0.8),
            child_with_probability("hello", 0.1),
        ];
        let best = choose_min_probability(&subtrees).unwrap();
        assert_eq!(best.game_move(), &guess("hello"));
    }

    #[test]
    fn probability_ties_break_to_first_encountered() {
        let subtrees = vec![
            child_with_probability("sepal", 0.5),
            child_with_probability("tiger", 0.5),
        ];
        assert_eq!(
            choose_max_probability(&subtrees).unwrap().game_move(),
            &guess("sepal")
        );
        assert_eq!(
            choose_min_probability(&subtrees).unwrap().game_move(),
            &guess("sepal")
        );
    }

    #[test]
    fn unset_probability_orders_as_zero() {
        let subtrees = vec![
            GameTree::new(guess("sepal")),
            child_with_probability("tiger", 0.1),
        ];
        assert_eq!(
            choose_max_probability(&subtrees).unwrap().game_move(),
            &guess("tiger")
        );
        assert_eq!(
            choose_min_probability(&subtrees).unwrap().game_move(),
            &guess("sepal")
        );
    }
}
