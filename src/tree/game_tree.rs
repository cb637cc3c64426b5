//! The Adversarial Wordle decision tree
//!
//! Each node stores one move. A node's children are keyed by their own move,
//! kept in insertion order with O(1) lookup. Turn parity is derived from the
//! move itself: the Guesser moves after the root or after a status, the
//! Adversary moves after a guess.

use crate::core::{Status, Word};
use crate::game::Player;
use rustc_hash::FxHashMap;
use std::fmt;

/// A move in an Adversarial Wordle game
///
/// `Root` is a sentinel marking the top of a tree; it never appears as a
/// descendant's move.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Move {
    /// Start-of-game sentinel
    Root,
    /// A word proposed by the Guesser
    Guess(Word),
    /// Feedback revealed by the Adversary
    Status(Status),
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, "*"),
            Self::Guess(word) => write!(f, "{word}"),
            Self::Status(status) => write!(f, "{status}"),
        }
    }
}

/// A decision tree of Adversarial Wordle moves
///
/// Ownership is strictly hierarchical: every node exclusively owns its
/// children, so dropping a subtree discards it wholesale.
///
/// # Invariants
/// - `children[k].game_move() == k` for every child key `k`
/// - `Move::Root` occurs only at a tree's true root
/// - moves strictly alternate Guess/Status along every root-to-leaf path
#[derive(Debug, Clone)]
pub struct GameTree {
    mv: Move,
    children: Vec<GameTree>,
    child_index: FxHashMap<Move, usize>,
    win_probability: Option<f64>,
}

impl GameTree {
    /// Create a node for the given move, with no children
    #[must_use]
    pub fn new(mv: Move) -> Self {
        Self {
            mv,
            children: Vec::new(),
            child_index: FxHashMap::default(),
            win_probability: None,
        }
    }

    /// Create an empty tree root
    #[must_use]
    pub fn root() -> Self {
        Self::new(Move::Root)
    }

    /// The move this node represents
    #[inline]
    #[must_use]
    pub const fn game_move(&self) -> &Move {
        &self.mv
    }

    /// Whether the NEXT move from this node is the Guesser's
    ///
    /// The Guesser moves at the start of the game and after every status.
    #[inline]
    #[must_use]
    pub const fn is_guesser_turn(&self) -> bool {
        matches!(self.mv, Move::Root | Move::Status(_))
    }

    /// The estimated probability that the Guesser wins from this node
    ///
    /// `None` until set by leaf labeling or a backward-induction pass;
    /// distinguishable from a computed 0.0.
    #[inline]
    #[must_use]
    pub const fn win_probability(&self) -> Option<f64> {
        self.win_probability
    }

    /// Set this node's Guesser win probability
    ///
    /// # Panics
    /// Panics if `probability` is outside `[0, 1]` (contract violation).
    pub fn set_win_probability(&mut self, probability: f64) {
        assert!(
            (0.0..=1.0).contains(&probability),
            "win probability {probability} is outside [0, 1]"
        );
        self.win_probability = Some(probability);
    }

    /// The subtrees of this node, in insertion order
    ///
    /// The order is stable across repeated calls absent mutation; callers
    /// must not read anything more into it.
    #[inline]
    #[must_use]
    pub fn get_subtrees(&self) -> &[GameTree] {
        &self.children
    }

    /// Find the child corresponding to the given move
    ///
    /// O(1); returns `None` when absent (a normal condition, not an error).
    #[must_use]
    pub fn find_subtree_by_move(&self, mv: &Move) -> Option<&GameTree> {
        self.child_index.get(mv).map(|&i| &self.children[i])
    }

    /// Add a subtree, keyed by its own move
    ///
    /// Overwrites any existing child with the same move.
    pub fn add_subtree(&mut self, subtree: GameTree) {
        debug_assert!(
            !matches!(subtree.mv, Move::Root),
            "the root sentinel cannot appear below a tree's top node"
        );

        if let Some(&i) = self.child_index.get(&subtree.mv) {
            self.children[i] = subtree;
        } else {
            self.child_index
                .insert(subtree.mv.clone(), self.children.len());
            self.children.push(subtree);
        }
    }

    /// Number of nodes in this tree, counting this one
    #[must_use]
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(GameTree::size).sum::<usize>()
    }

    /// Insert a move sequence as a chain of descendants below this node
    ///
    /// `moves[0]` becomes (or is found as) a child of this node, `moves[1]`
    /// a child of that node, and so on. Existing nodes are reused, so
    /// repeated prefixes never create duplicates. Returns the node the last
    /// move landed on (this node itself for an empty sequence), so callers
    /// can label the reached leaf.
    ///
    /// The sequence must alternate guesses and statuses consistently with
    /// this node's turn: a Guess first when the Guesser is to move, a Status
    /// first otherwise. Violations are contract errors, checked in debug
    /// builds.
    pub fn insert_move_sequence(&mut self, moves: &[Move]) -> &mut GameTree {
        let Some((first, rest)) = moves.split_first() else {
            return self;
        };

        debug_assert!(
            match first {
                Move::Guess(_) => self.is_guesser_turn(),
                Move::Status(_) => !self.is_guesser_turn(),
                Move::Root => false,
            },
            "move {first} is illegal after {} (wrong turn parity)",
            self.mv
        );

        let index = match self.child_index.get(first) {
            Some(&i) => i,
            None => {
                self.add_subtree(GameTree::new(first.clone()));
                self.children.len() - 1
            }
        };

        self.children[index].insert_move_sequence(rest)
    }

    /// Recalculate Guesser win probabilities by backward induction
    ///
    /// Post-order: every child is updated first. A leaf keeps its current
    /// value (it must have been labeled externally). An internal node takes
    /// the MAXIMUM of its children on the Guesser's turn (the Guesser picks
    /// its best branch) and the arithmetic MEAN on the Adversary's turn (the
    /// Adversary's choice is modeled as uniform, not minimizing). Children
    /// with no value yet count as 0.0.
    pub fn update_guesser_win_probability(&mut self) {
        if self.children.is_empty() {
            return;
        }

        for child in &mut self.children {
            child.update_guesser_win_probability();
        }

        let value = if self.is_guesser_turn() {
            self.children
                .iter()
                .map(|c| c.win_probability.unwrap_or(0.0))
                .fold(0.0, f64::max)
        } else {
            let sum: f64 = self
                .children
                .iter()
                .map(|c| c.win_probability.unwrap_or(0.0))
                .sum();
            sum / self.children.len() as f64
        };

        self.win_probability = Some(value);
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let turn = if self.is_guesser_turn() {
            Player::Guesser
        } else {
            Player::Adversary
        };
        writeln!(f, "{}{} -> {turn}'s move", "  ".repeat(depth), self.mv)?;
        for child in &self.children {
            child.fmt_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for GameTree {
    /// Indented multi-line rendering, one node per line, annotated with
    /// whose turn follows. For debugging and tests only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guess(word: &str) -> Move {
        Move::Guess(Word::new(word).unwrap())
    }

    fn status(symbols: &str) -> Move {
        Move::Status(Status::from_symbols(symbols).unwrap())
    }

    /// A small fixture: three lone guesses, plus a "reach" line two plies
    /// deep.
    fn sample_tree() -> GameTree {
        let mut tree = GameTree::root();

        tree.add_subtree(GameTree::new(guess("sepal")));
        tree.add_subtree(GameTree::new(guess("tiger")));
        tree.add_subtree(GameTree::new(guess("hello")));

        let mut reach = GameTree::new(guess("reach"));
        let mut after_status = GameTree::new(status("?NYN?"));
        after_status.add_subtree(GameTree::new(guess("brawl")));
        after_status.add_subtree(GameTree::new(guess("quart")));
        reach.add_subtree(after_status);
        tree.add_subtree(reach);

        tree
    }

    #[test]
    fn empty_root() {
        let tree = GameTree::root();
        assert_eq!(tree.game_move(), &Move::Root);
        assert_eq!(tree.size(), 1);
        assert!(tree.is_guesser_turn());
        assert!(tree.win_probability().is_none());
    }

    #[test]
    fn turn_parity_derived_from_move() {
        assert!(GameTree::root().is_guesser_turn());
        assert!(GameTree::new(status("NNNNN")).is_guesser_turn());
        assert!(!GameTree::new(guess("hello")).is_guesser_turn());
    }

    #[test]
    fn add_subtree_keys_by_move() {
        let tree = sample_tree();

        assert_eq!(tree.get_subtrees().len(), 4);
        assert!(tree.find_subtree_by_move(&guess("sepal")).is_some());
        assert!(tree.find_subtree_by_move(&guess("reach")).is_some());
        assert!(tree.find_subtree_by_move(&guess("wrong")).is_none());

        let reach = tree.find_subtree_by_move(&guess("reach")).unwrap();
        assert_eq!(reach.game_move(), &guess("reach"));
    }

    #[test]
    fn add_subtree_overwrites_same_key() {
        let mut tree = GameTree::root();
        tree.add_subtree(GameTree::new(guess("hello")));

        let mut replacement = GameTree::new(guess("hello"));
        replacement.add_subtree(GameTree::new(status("NNNNN")));
        tree.add_subtree(replacement);

        assert_eq!(tree.get_subtrees().len(), 1);
        assert_eq!(tree.size(), 3);
    }

    #[test]
    fn subtree_order_is_insertion_order() {
        let tree = sample_tree();
        let moves: Vec<&Move> = tree.get_subtrees().iter().map(GameTree::game_move).collect();
        assert_eq!(
            moves,
            vec![
                &guess("sepal"),
                &guess("tiger"),
                &guess("hello"),
                &guess("reach")
            ]
        );
    }

    #[test]
    fn insert_three_single_move_sequences() {
        let mut tree = GameTree::root();
        tree.insert_move_sequence(&[guess("sepal")]);
        tree.insert_move_sequence(&[guess("tiger")]);
        tree.insert_move_sequence(&[guess("hello")]);

        assert_eq!(tree.get_subtrees().len(), 3);
        assert_eq!(tree.size(), 4);
    }

    #[test]
    fn insert_empty_sequence_is_noop() {
        let mut tree = sample_tree();
        let before = tree.size();
        tree.insert_move_sequence(&[]);
        assert_eq!(tree.size(), before);
    }

    #[test]
    fn insert_walks_every_step() {
        let mut tree = GameTree::root();
        let sequence = [
            guess("reach"),
            status("?NYN?"),
            guess("brawl"),
            status("YYYYY"),
        ];
        tree.insert_move_sequence(&sequence);

        // Stepwise lookup succeeds at every prefix
        let mut node = &tree;
        for mv in &sequence {
            node = node.find_subtree_by_move(mv).unwrap();
            assert_eq!(node.game_move(), mv);
        }

        assert_eq!(tree.size(), 5);
    }

    #[test]
    fn reinserting_same_sequence_keeps_size() {
        let mut tree = GameTree::root();
        let sequence = [guess("reach"), status("?NYN?"), guess("brawl")];

        tree.insert_move_sequence(&sequence);
        let size = tree.size();
        tree.insert_move_sequence(&sequence);

        assert_eq!(tree.size(), size);
    }

    #[test]
    fn shared_prefixes_are_not_duplicated() {
        let mut tree = GameTree::root();
        tree.insert_move_sequence(&[guess("reach"), status("?NYN?"), guess("brawl")]);
        tree.insert_move_sequence(&[guess("reach"), status("?NYN?"), guess("quart")]);

        // root + reach + status + brawl + quart
        assert_eq!(tree.size(), 5);
        let reach = tree.find_subtree_by_move(&guess("reach")).unwrap();
        assert_eq!(reach.get_subtrees().len(), 1);
    }

    #[test]
    fn insert_returns_reached_leaf() {
        let mut tree = GameTree::root();
        let leaf = tree.insert_move_sequence(&[guess("reach"), status("YYYYY")]);
        assert_eq!(leaf.game_move(), &status("YYYYY"));

        leaf.set_win_probability(1.0);
        let found = tree
            .find_subtree_by_move(&guess("reach"))
            .unwrap()
            .find_subtree_by_move(&status("YYYYY"))
            .unwrap();
        assert_eq!(found.win_probability(), Some(1.0));
    }

    #[test]
    #[should_panic(expected = "outside [0, 1]")]
    fn win_probability_out_of_range_panics() {
        let mut tree = GameTree::root();
        tree.set_win_probability(1.5);
    }

    #[test]
    fn unset_probability_distinct_from_zero() {
        let mut tree = GameTree::root();
        assert_eq!(tree.win_probability(), None);
        tree.set_win_probability(0.0);
        assert_eq!(tree.win_probability(), Some(0.0));
    }

    #[test]
    fn backward_induction_leaf_unchanged() {
        let mut leaf = GameTree::new(guess("hello"));
        leaf.set_win_probability(0.25);
        leaf.update_guesser_win_probability();
        assert_eq!(leaf.win_probability(), Some(0.25));

        let mut unset = GameTree::new(guess("hello"));
        unset.update_guesser_win_probability();
        assert_eq!(unset.win_probability(), None);
    }

    #[test]
    fn backward_induction_three_levels() {
        // Root (Guesser's turn: max)
        // ├── hello (Adversary's turn: mean of 1.0 and 0.0 = 0.5)
        // │   ├── YYYYY = 1.0
        // │   └── NNNNN = 0.0
        // └── world (Adversary's turn: mean of 0.0 = 0.0)
        //     └── N?NNN = 0.0
        let mut tree = GameTree::root();
        tree.insert_move_sequence(&[guess("hello"), status("YYYYY")])
            .set_win_probability(1.0);
        tree.insert_move_sequence(&[guess("hello"), status("NNNNN")])
            .set_win_probability(0.0);
        tree.insert_move_sequence(&[guess("world"), status("N?NNN")])
            .set_win_probability(0.0);

        tree.update_guesser_win_probability();

        let hello = tree.find_subtree_by_move(&guess("hello")).unwrap();
        let world = tree.find_subtree_by_move(&guess("world")).unwrap();
        assert_eq!(hello.win_probability(), Some(0.5));
        assert_eq!(world.win_probability(), Some(0.0));
        // Guesser picks the best branch
        assert_eq!(tree.win_probability(), Some(0.5));
    }

    #[test]
    fn display_is_indented_with_turns() {
        let mut tree = GameTree::root();
        tree.insert_move_sequence(&[guess("reach"), status("?NYN?")]);

        let rendered = tree.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "* -> Guesser's move");
        assert_eq!(lines[1], "  reach -> Adversary's move");
        assert_eq!(lines[2], "    ?NYN? -> Guesser's move");
    }
}
