//! Random baseline command
//!
//! Plays unguided random Guesser vs unguided random Adversary, the
//! reference point every tree-guided strategy is measured against.

use crate::core::Word;
use crate::game::{GameStatistics, run_games};
use crate::players::{RandomAdversary, RandomGuesser};

/// Play `num_games` random-vs-random games
#[must_use]
pub fn run_random(num_games: usize, word_set: &[Word], max_guesses: usize) -> GameStatistics {
    run_games(
        num_games,
        word_set,
        max_guesses,
        || RandomGuesser,
        || RandomAdversary,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{WORDS_25, loader::words_from_slice};

    #[test]
    fn random_baseline_plays_all_games() {
        let words = words_from_slice(WORDS_25);
        let stats = run_random(25, &words, 3);

        assert_eq!(stats.total_games, 25);
        assert_eq!(stats.guesser_wins + stats.adversary_wins, 25);
    }
}
