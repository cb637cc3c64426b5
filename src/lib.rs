//! Adversarial Wordle
//!
//! A decision-tree model for the two-player word-guessing game where the
//! Adversary reveals feedback adversarially instead of committing to a
//! secret word. Game trees are built from logged games or by exhaustive
//! enumeration, win probabilities propagate by backward induction, and a
//! family of tree-guided players consumes them.
//!
//! # Quick Start
//!
//! ```rust
//! use adversarial_wordle::core::Word;
//! use adversarial_wordle::tree::{GameTree, Move};
//!
//! let mut tree = GameTree::root();
//! tree.insert_move_sequence(&[Move::Guess(Word::new("crane").unwrap())]);
//! assert_eq!(tree.size(), 2);
//! ```

// Core domain types
pub mod core;

// Game state and simulation
pub mod game;

// Game trees: construction, generation, induction
pub mod tree;

// Move-selection strategies
pub mod players;

// The learning loop
pub mod learning;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
