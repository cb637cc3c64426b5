//! Unguided random players
//!
//! The baseline strategies, also the fallback for every tree-guided player
//! once its tree is exhausted.

use super::{Adversary, Guesser};
use crate::core::{Status, Word};
use crate::game::AdversarialWordle;
use rand::prelude::IndexedRandom;

/// A Guesser that guesses uniformly among the remaining candidate answers
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGuesser;

impl Guesser for RandomGuesser {
    fn make_move(&mut self, game: &AdversarialWordle) -> Word {
        random_guess(game)
    }
}

/// An Adversary that answers with the status of a uniformly sampled candidate
///
/// When more than one candidate remains, the just-made guess is excluded
/// from the sampling pool so the Adversary never hands over an all-correct
/// status it could avoid.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAdversary;

impl Adversary for RandomAdversary {
    fn make_move(&mut self, game: &AdversarialWordle) -> Status {
        random_status(game)
    }
}

/// Uniform random guess from the current candidate set
pub(super) fn random_guess(game: &AdversarialWordle) -> Word {
    game.get_possible_answers()
        .choose(&mut rand::rng())
        .cloned()
        .expect("at least one candidate answer always remains")
}

/// Status for a uniformly sampled candidate, avoiding the guess itself
/// while an alternative exists
pub(super) fn random_status(game: &AdversarialWordle) -> Status {
    let last_guess = game
        .guesses()
        .last()
        .expect("the Adversary moves after a guess");

    let mut pool: Vec<&Word> = game.get_possible_answers().iter().collect();
    if pool.len() > 1 {
        pool.retain(|answer| *answer != last_guess);
    }

    let answer = pool
        .choose(&mut rand::rng())
        .expect("at least one candidate answer always remains");
    game.get_status_for_answer(answer)
}
