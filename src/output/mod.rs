//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_game_statistics, print_learning_result, print_tree_overview};
