use crate::results::*;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of letters in every secret word and every guess.
pub const WORD_SIZE: usize = 5;

/// The number of guesses allowed before the game is lost.
pub const MAX_ATTEMPTS: u32 = 6;

/// The fixed parameters of a game.
///
/// [`GameRules::default()`] gives the standard game: five-letter words and six attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGameRules"))]
pub struct GameRules {
    word_size: usize,
    max_attempts: u32,
}

/// Unvalidated rules, as read by a deserializer.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawGameRules {
    word_size: usize,
    max_attempts: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGameRules> for GameRules {
    type Error = WordleError;

    fn try_from(raw: RawGameRules) -> Result<Self, Self::Error> {
        GameRules::new(raw.word_size, raw.max_attempts)
    }
}

impl Default for GameRules {
    fn default() -> Self {
        GameRules {
            word_size: WORD_SIZE,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

impl GameRules {
    /// Constructs custom rules. Both values must be at least 1.
    pub fn new(word_size: usize, max_attempts: u32) -> Result<Self, WordleError> {
        if word_size == 0 || max_attempts == 0 {
            return Err(WordleError::InvalidRules);
        }
        Ok(GameRules {
            word_size,
            max_attempts,
        })
    }

    /// The required length, in letters, of every guess.
    pub fn word_size(&self) -> usize {
        self.word_size
    }

    /// The number of attempts allowed per game.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Determines the result of the given `guess` when applied to the given `target`.
    ///
    /// The guess must have exactly [`GameRules::word_size()`] letters. Note that this is checked
    /// against the rules, not against the length of `target`.
    ///
    /// Exact matches are credited first. The remaining occurrences of each letter in the target
    /// are then credited as partial matches from left to right, so a letter is never credited
    /// more times than it appears in the target.
    pub fn score(&self, target: &str, guess: &str) -> Result<Vec<MatchResult>, WordleError> {
        let guess: Vec<char> = guess.chars().collect();
        if guess.len() != self.word_size {
            return Err(WordleError::InvalidGuessLength {
                expected: self.word_size,
                actual: guess.len(),
            });
        }
        let target: Vec<char> = target.chars().collect();

        let mut unmatched_counts: HashMap<char, u32> = HashMap::new();
        for letter in target.iter() {
            *unmatched_counts.entry(*letter).or_insert(0) += 1;
        }

        let mut results = vec![MatchResult::NoMatch; guess.len()];
        for (index, letter) in guess.iter().enumerate() {
            if target.get(index) == Some(letter) {
                results[index] = MatchResult::Exact;
                if let Some(count) = unmatched_counts.get_mut(letter) {
                    *count -= 1;
                }
            }
        }

        for (index, letter) in guess.iter().enumerate() {
            if results[index] == MatchResult::Exact {
                continue;
            }
            if let Some(count) = unmatched_counts.get_mut(letter) {
                if *count > 0 {
                    *count -= 1;
                    results[index] = MatchResult::Partial;
                }
            }
        }

        Ok(results)
    }
}

/// Determines the result of the given `guess` when applied to the given `target`, using the
/// default [`GameRules`].
pub fn score(target: &str, guess: &str) -> Result<Vec<MatchResult>, WordleError> {
    GameRules::default().score(target, guess)
}
