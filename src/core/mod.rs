//! Core domain types for Adversarial Wordle
//!
//! Words, per-letter feedback symbols, and status calculation.

pub mod status;
pub mod word;

pub use status::{Feedback, Status, StatusParseError};
pub use word::{Word, WordError};

/// Length of every word and status in the game
pub const WORD_LEN: usize = 5;
