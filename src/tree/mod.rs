//! Game trees
//!
//! The recursive decision tree at the center of the crate: incremental
//! construction from observed games, exhaustive bounded-depth generation,
//! and backward induction of Guesser win probabilities.

pub mod game_tree;
pub mod generate;
pub mod loader;

pub use game_tree::{GameTree, Move};
pub use generate::generate_complete_tree;
pub use loader::load_game_tree;
