//! Adversary feedback statuses
//!
//! A status is the per-letter feedback revealed for a guess:
//! - `Y` = Correct (letter in correct position)
//! - `?` = WrongPosition (letter in word, wrong position)
//! - `N` = Incorrect (letter not in word)
//!
//! The symbol form (`"?NYN?"`) doubles as the game-log encoding.

use super::{WORD_LEN, Word};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter is in the correct position
    Correct,
    /// Letter is in the word but in a different position
    WrongPosition,
    /// Letter is not in the word
    Incorrect,
}

impl Feedback {
    /// The log symbol for this feedback
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'Y',
            Self::WrongPosition => '?',
            Self::Incorrect => 'N',
        }
    }

    /// Parse a log symbol
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'Y' => Some(Self::Correct),
            '?' => Some(Self::WrongPosition),
            'N' => Some(Self::Incorrect),
            _ => None,
        }
    }
}

/// Feedback status for a full guess
///
/// An ordered, fixed-length sequence of per-letter feedback symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status([Feedback; WORD_LEN]);

/// Error type for invalid status strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusParseError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for StatusParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Status must be exactly {WORD_LEN} symbols, got {len}")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "Invalid status symbol '{ch}' (expected Y, ? or N)")
            }
        }
    }
}

impl std::error::Error for StatusParseError {}

impl Status {
    /// All letters correct (the Guesser's winning status)
    pub const ALL_CORRECT: Self = Self([Feedback::Correct; WORD_LEN]);

    /// Create a status from explicit per-letter feedback
    #[inline]
    #[must_use]
    pub const fn new(outcomes: [Feedback; WORD_LEN]) -> Self {
        Self(outcomes)
    }

    /// The per-letter feedback, in position order
    #[inline]
    #[must_use]
    pub const fn outcomes(&self) -> &[Feedback; WORD_LEN] {
        &self.0
    }

    /// Check whether every position is correct
    #[inline]
    #[must_use]
    pub fn is_all_correct(self) -> bool {
        self == Self::ALL_CORRECT
    }

    /// Calculate the status when `guess` is guessed and `answer` is the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches (Correct) and remove from available pool
    /// 2. Second pass: Mark present-but-wrong-position from remaining pool
    ///
    /// # Examples
    /// ```
    /// use adversarial_wordle::core::{Status, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let status = Status::calculate(&guess, &answer);
    ///
    /// // C(no) R(no) A(yes) N(no) E(yes)
    /// assert_eq!(status.to_string(), "NNYNY");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [Feedback::Incorrect; WORD_LEN];
        let mut answer_available = answer.char_counts();

        // First pass: exact position matches
        for i in 0..WORD_LEN {
            if guess.chars()[i] == answer.chars()[i] {
                result[i] = Feedback::Correct;

                let letter = guess.chars()[i];
                if let Some(count) = answer_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but letter still available
        for i in 0..WORD_LEN {
            if result[i] == Feedback::Incorrect {
                let letter = guess.chars()[i];
                if let Some(count) = answer_available.get_mut(&letter)
                    && *count > 0
                {
                    result[i] = Feedback::WrongPosition;
                    *count -= 1;
                }
            }
        }

        Self(result)
    }

    /// Count the number of correct positions
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.0.iter().filter(|&&f| f == Feedback::Correct).count()
    }

    /// Parse a status from its symbol form, e.g. `"?NYN?"`
    ///
    /// # Examples
    /// ```
    /// use adversarial_wordle::core::Status;
    ///
    /// let status = Status::from_symbols("YYNN?").unwrap();
    /// assert_eq!(status.count_correct(), 2);
    /// ```
    ///
    /// # Errors
    /// Returns `StatusParseError` if the string is not exactly 5 valid symbols.
    pub fn from_symbols(s: &str) -> Result<Self, StatusParseError> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LEN {
            return Err(StatusParseError::InvalidLength(chars.len()));
        }

        let mut result = [Feedback::Incorrect; WORD_LEN];
        for (i, ch) in chars.into_iter().enumerate() {
            result[i] = Feedback::from_symbol(ch).ok_or(StatusParseError::InvalidSymbol(ch))?;
        }

        Ok(Self(result))
    }

    /// Convert status to emoji string, e.g. `"🟩🟨⬜🟩🟨"`
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0
            .iter()
            .map(|f| match f {
                Feedback::Correct => '🟩',
                Feedback::WrongPosition => '🟨',
                Feedback::Incorrect => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for feedback in &self.0 {
            write!(f, "{}", feedback.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Status {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbols(s)
    }
}
