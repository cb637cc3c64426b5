//! Players
//!
//! Move-selection strategies for both sides of the game. Tree-guided
//! players hold a non-owning cursor into a shared game tree and fall back
//! to unguided random play when guidance runs out.

mod cursor;
pub mod exploring;
pub mod greedy;
pub mod random;
pub mod tree;

pub use exploring::ExploringGuesser;
pub use greedy::{GreedyTreeAdversary, GreedyTreeGuesser};
pub use random::{RandomAdversary, RandomGuesser};
pub use tree::{RandomTreeAdversary, RandomTreeGuesser};

use crate::core::{Status, Word};
use crate::game::AdversarialWordle;

/// A player choosing words
pub trait Guesser {
    /// Return a guess for the current game
    ///
    /// Called only on the Guesser's turn. May mutate internal player state
    /// (such as a tree cursor) but never the game or a shared tree.
    fn make_move(&mut self, game: &AdversarialWordle) -> Word;
}

/// A player choosing statuses
pub trait Adversary {
    /// Return a status for the most recent guess
    ///
    /// Called only on the Adversary's turn. The returned status must be
    /// consistent with at least one remaining candidate answer.
    fn make_move(&mut self, game: &AdversarialWordle) -> Status;
}
