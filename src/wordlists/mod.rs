//! Word sets for Adversarial Wordle
//!
//! Small embedded word sets for complete-tree generation and learning runs,
//! plus loading of custom lists from files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS_25, WORDS_100};
