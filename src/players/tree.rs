//! Random tree-guided players
//!
//! Descend a game tree as the game is played, choosing uniformly among the
//! current node's children, and degrade to unguided random play once the
//! tree runs out.

use super::cursor::{TreeCursor, choose_uniform};
use super::random::{random_guess, random_status};
use super::{Adversary, Guesser};
use crate::core::{Status, Word};
use crate::game::AdversarialWordle;
use crate::tree::{GameTree, Move};

/// A Guesser that follows a game tree, choosing uniformly among subtrees
///
/// On each turn it first follows the Adversary's last status down the tree,
/// then picks uniformly among the current node's children. Without a tree
/// (or once it is exhausted) it behaves like
/// [`RandomGuesser`](super::RandomGuesser).
pub struct RandomTreeGuesser<'t> {
    cursor: TreeCursor<'t>,
}

impl<'t> RandomTreeGuesser<'t> {
    /// Create a player guided by `tree` (pass `None` for unguided play)
    ///
    /// The tree, if given, must be a true root.
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

impl Guesser for RandomTreeGuesser<'_> {
    fn make_move(&mut self, game: &AdversarialWordle) -> Word {
        if let Some(status) = game.statuses().last() {
            self.cursor.follow(&Move::Status(*status));
        }

        self.cursor
            .descend_for_guess(choose_uniform)
            .unwrap_or_else(|| {
                self.cursor.clear();
                random_guess(game)
            })
    }
}

/// An Adversary that follows a game tree, choosing uniformly among subtrees
///
/// The mirror of [`RandomTreeGuesser`]: follows the Guesser's last guess,
/// then picks a status child uniformly, falling back to
/// [`RandomAdversary`](super::RandomAdversary) behavior.
pub struct RandomTreeAdversary<'t> {
    cursor: TreeCursor<'t>,
}

impl<'t> RandomTreeAdversary<'t> {
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

impl Adversary for RandomTreeAdversary<'_> {
    fn make_move(&mut self, game: &AdversarialWordle) -> Status {
        if let Some(guess) = game.guesses().last() {
            self.cursor.follow(&Move::Guess(guess.clone()));
        }

        self.cursor
            .descend_for_status(choose_uniform)
            .unwrap_or_else(|| {
                self.cursor.clear();
                random_status(game)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_set(words: &[&str]) -> Vec<Word> {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn guess(word: &str) -> Move {
        Move::Guess(Word::new(word).unwrap())
    }

    fn status(symbols: &str) -> Move {
        Move::Status(Status::from_symbols(symbols).unwrap())
    }

    #[test]
    fn first_move_comes_from_tree_root() {
        let mut tree = GameTree::root();
        tree.insert_move_sequence(&[guess("hello")]);

        let game = AdversarialWordle::new(&word_set(&["world", "words", "hello"]), 3);
        let mut guesser = RandomTreeGuesser::new(Some(&tree));

        // The only child is "hello", so the tree dictates it
        assert_eq!(guesser.make_move(&game).text(), "hello");
    }

    #[test]
    fn second_move_advances_into_matched_status_child() {
        // Tree: reach -> ?NYNN -> {brawl, quart}
        // ?NYNN is REACH's status against both BRAWL and QUART
        let mut tree = GameTree::root();
        tree.insert_move_sequence(&[guess("reach"), status("?NYNN"), guess("brawl")]);
        tree.insert_move_sequence(&[guess("reach"), status("?NYNN"), guess("quart")]);

        let words = word_set(&["reach", "brawl", "quart", "hello"]);

        for _ in 0..10 {
            let mut guesser = RandomTreeGuesser::new(Some(&tree));
            let mut game = AdversarialWordle::new(&words, 4);

            let first = guesser.make_move(&game);
            assert_eq!(first.text(), "reach");
            game.record_guess(first);
            game.record_status(Status::from_symbols("?NYNN").unwrap());

            // The guesser must follow into the matched child and choose one
            // of its guesses rather than falling back to random
            let second = guesser.make_move(&game);
            assert!(second.text() == "brawl" || second.text() == "quart");
        }
    }

    #[test]
    fn falls_back_to_random_without_tree() {
        let game = AdversarialWordle::new(&word_set(&["hello", "world"]), 3);
        let mut guesser = RandomTreeGuesser::new(None);

        let word = guesser.make_move(&game);
        assert!(game.get_possible_answers().contains(&word));
    }

    #[test]
    fn falls_back_once_tree_is_exhausted() {
        // One-ply tree: after the first move there is no more guidance
        let mut tree = GameTree::root();
        tree.insert_move_sequence(&[guess("hello")]);

        let words = word_set(&["hello", "world", "words"]);
        let mut game = AdversarialWordle::new(&words, 3);
        let mut guesser = RandomTreeGuesser::new(Some(&tree));

        game.record_guess(guesser.make_move(&game));
        let fallback_status = game.get_status_for_answer(&Word::new("world").unwrap());
        game.record_status(fallback_status);

        let second = guesser.make_move(&game);
        assert!(game.get_possible_answers().contains(&second));
    }

    #[test]
    fn tree_adversary_follows_guess_and_answers_from_tree() {
        let mut tree = GameTree::root();
        tree.insert_move_sequence(&[guess("reach"), status("?NYNN")]);

        // ?NYNN is REACH's status when QUART is the answer, so it is legal
        let words = word_set(&["reach", "quart", "hello"]);
        let mut game = AdversarialWordle::new(&words, 3);
        game.record_guess(Word::new("reach").unwrap());

        let mut adversary = RandomTreeAdversary::new(Some(&tree));
        let answer = adversary.make_move(&game);
        assert_eq!(answer, Status::from_symbols("?NYNN").unwrap());
    }

    #[test]
    fn tree_adversary_falls_back_without_tree() {
        let words = word_set(&["hello", "world", "words"]);
        let mut game = AdversarialWordle::new(&words, 3);
        game.record_guess(Word::new("hello").unwrap());

        let mut adversary = RandomTreeAdversary::new(None);
        let status = adversary.make_move(&game);

        // Legal status: recording it must keep at least one candidate
        game.record_status(status);
        assert!(!game.get_possible_answers().is_empty());
    }
}
