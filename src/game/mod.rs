//! Game state and simulation
//!
//! The Adversarial Wordle engine: turn tracking, candidate filtering,
//! winner detection, and the game/statistics runner.

pub mod runner;
pub mod state;

pub use runner::{GameResult, GameStatistics, run_game, run_games};
pub use state::{AdversarialWordle, Player};
