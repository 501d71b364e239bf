use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of a given letter at a specific location.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MatchResult {
    /// The letter is correct and in the correct location.
    Exact,
    /// The letter is in the word, but is credited to a different location.
    Partial,
    /// The letter is not in the word, or all of its occurrences were already credited elsewhere.
    NoMatch,
}

/// Indicates that an error occurred while scoring a guess or advancing a game.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum WordleError {
    /// Indicates that a guess did not have the required number of letters.
    #[error("guess must be {expected} letters long, but it has {actual}")]
    InvalidGuessLength { expected: usize, actual: usize },
    /// Indicates that a turn was played after the game already ended.
    #[error("the game is already over")]
    GameOver,
    /// Indicates that the word size or the attempt budget was zero.
    #[error("word size and max attempts must both be at least 1")]
    InvalidRules,
}

/// Whether the game is still running, or has been won or lost by the guesser.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// The guesser found the word.
    Won,
    /// The guesser used up every attempt without finding the word.
    Lost,
    /// More attempts remain.
    InProgress,
}

impl GameStatus {
    /// Returns `true` once no further turns can be played.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Everything that happened in a single turn.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttemptOutcome {
    /// The one-based number of this attempt.
    pub attempt: u32,
    pub status: GameStatus,
    /// The result of each letter, provided in the same letter order as in the guess.
    pub results: Vec<MatchResult>,
    /// A closing message for the player. Empty unless the game just ended.
    pub message: String,
}

impl AttemptOutcome {
    /// Returns `true` iff every letter of the guess was an exact match.
    pub fn is_correct(&self) -> bool {
        is_correct(&self.results)
    }
}

pub(crate) fn is_correct(results: &[MatchResult]) -> bool {
    results.iter().all(|result| *result == MatchResult::Exact)
}
