//! Command implementations
//!
//! One driver per CLI subcommand: random baselines, replaying logged games
//! through a tree, complete-tree play, and the learning loop.

pub mod complete;
pub mod learn;
pub mod random;
pub mod replay;

pub use complete::run_complete;
pub use learn::{LearnResult, exploration_schedule, run_learn};
pub use random::run_random;
pub use replay::run_replay;
