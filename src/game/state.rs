//! Adversarial Wordle game state
//!
//! Unlike standard Wordle there is no fixed secret word: the Adversary may
//! reveal any status that stays consistent with at least one remaining
//! candidate answer. The state tracks both move histories and the shrinking
//! candidate set.

use crate::core::{Status, Word};
use std::fmt;

/// The two players of Adversarial Wordle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    /// Proposes words, wins on an all-correct status within the guess budget
    Guesser,
    /// Reveals statuses, wins when the budget runs out
    Adversary,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guesser => write!(f, "Guesser"),
            Self::Adversary => write!(f, "Adversary"),
        }
    }
}

/// Live state of one Adversarial Wordle game
///
/// Cloning yields an independent snapshot, which tree generation relies on
/// to explore sibling branches without leaking state between them.
#[derive(Debug, Clone)]
pub struct AdversarialWordle {
    possible_answers: Vec<Word>,
    max_guesses: usize,
    guesses: Vec<Word>,
    statuses: Vec<Status>,
}

impl AdversarialWordle {
    /// Create a new game over the given word set
    ///
    /// # Panics
    /// Panics if `word_set` is empty or `max_guesses` is zero.
    #[must_use]
    pub fn new(word_set: &[Word], max_guesses: usize) -> Self {
        assert!(!word_set.is_empty(), "word set must not be empty");
        assert!(max_guesses >= 1, "max_guesses must be at least 1");

        Self {
            possible_answers: word_set.to_vec(),
            max_guesses,
            guesses: Vec::new(),
            statuses: Vec::new(),
        }
    }

    /// Whether the NEXT move is the Guesser's
    #[inline]
    #[must_use]
    pub fn is_guesser_turn(&self) -> bool {
        self.guesses.len() == self.statuses.len()
    }

    /// The candidate answers still consistent with every revealed status
    #[inline]
    #[must_use]
    pub fn get_possible_answers(&self) -> &[Word] {
        &self.possible_answers
    }

    /// The maximum number of guesses allowed
    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Guesses made so far, in order
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Statuses revealed so far, in order
    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[Status] {
        &self.statuses
    }

    /// The winner, or `None` while the game is undecided
    ///
    /// The Guesser wins as soon as a status is all-correct; the Adversary
    /// wins once the guess budget is spent without one. A game is only
    /// decided after the Adversary has answered the last guess.
    #[must_use]
    pub fn get_winner(&self) -> Option<Player> {
        let last_status = self.statuses.last()?;
        if !self.is_guesser_turn() {
            return None;
        }

        if last_status.is_all_correct() {
            Some(Player::Guesser)
        } else if self.guesses.len() >= self.max_guesses {
            Some(Player::Adversary)
        } else {
            None
        }
    }

    /// Feedback the most recent guess would receive if `answer` were the target
    ///
    /// # Panics
    /// Panics if no guess has been made yet.
    #[must_use]
    pub fn get_status_for_answer(&self, answer: &Word) -> Status {
        let guess = self
            .guesses
            .last()
            .expect("a guess must be made before statuses are derived");
        Status::calculate(guess, answer)
    }

    /// Record a guess by the Guesser
    ///
    /// # Panics
    /// Panics if it is not the Guesser's turn (contract violation).
    pub fn record_guess(&mut self, guess: Word) {
        assert!(self.is_guesser_turn(), "it is not the Guesser's turn");
        self.guesses.push(guess);
    }

    /// Record a status revealed by the Adversary
    ///
    /// Filters the candidate set down to the answers consistent with the
    /// status for the most recent guess.
    ///
    /// # Panics
    /// Panics if it is the Guesser's turn, or if the status is inconsistent
    /// with every remaining candidate (contract violation: the Adversary may
    /// only reveal legal statuses).
    pub fn record_status(&mut self, status: Status) {
        assert!(!self.is_guesser_turn(), "it is not the Adversary's turn");

        let guess = self
            .guesses
            .last()
            .expect("a status always answers a guess");
        self.possible_answers
            .retain(|answer| Status::calculate(guess, answer) == status);
        assert!(
            !self.possible_answers.is_empty(),
            "status {status} is consistent with no remaining answer"
        );

        self.statuses.push(status);
    }
}
