use crate::results::*;
use crate::scoring::*;
use log::{debug, info};

/// The message shown to a player who guessed the word after the given number of attempts.
pub fn win_message(attempts: u32) -> &'static str {
    match attempts {
        1 => "Amazing",
        2 => "Splendid",
        3 => "Awesome",
        _ => "Yay",
    }
}

/// The message shown to a player who ran out of attempts.
pub fn loss_message(target: &str) -> String {
    format!("It was {}, better luck next time", target)
}

/// A single game of Wordle against a fixed target word.
///
/// Turns are played one at a time with [`Game::play_turn`]. Once the game is won or lost, no
/// further turns can be played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    target: Box<str>,
    rules: GameRules,
    attempts: u32,
    status: GameStatus,
}

impl Game {
    /// Starts a new game with the default [`GameRules`].
    pub fn new(target: &str) -> Game {
        Game::with_rules(target, GameRules::default())
    }

    /// Starts a new game with the given rules.
    pub fn with_rules(target: &str, rules: GameRules) -> Game {
        Game {
            target: Box::from(target),
            rules,
            attempts: 0,
            status: GameStatus::InProgress,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// The number of attempts made so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn remaining_attempts(&self) -> u32 {
        self.rules.max_attempts() - self.attempts
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns `true` while more turns may be played.
    pub fn is_in_progress(&self) -> bool {
        !self.status.is_terminal() && self.attempts < self.rules.max_attempts()
    }

    /// Scores the guess and advances the game by one attempt.
    ///
    /// A guess with the wrong number of letters is rejected with
    /// [`WordleError::InvalidGuessLength`] and does not use up an attempt. Playing a turn after
    /// the game has ended returns [`WordleError::GameOver`].
    pub fn play_turn(&mut self, guess: &str) -> Result<AttemptOutcome, WordleError> {
        if !self.is_in_progress() {
            return Err(WordleError::GameOver);
        }
        let results = self.rules.score(&self.target, guess)?;
        self.attempts += 1;

        self.status = if is_correct(&results) {
            GameStatus::Won
        } else if self.attempts >= self.rules.max_attempts() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };
        debug!(
            "Attempt {}/{}: {} scored {:?}",
            self.attempts,
            self.rules.max_attempts(),
            guess,
            results
        );

        let message = match self.status {
            GameStatus::Won => win_message(self.attempts).to_string(),
            GameStatus::Lost => loss_message(&self.target),
            GameStatus::InProgress => String::new(),
        };
        if self.status.is_terminal() {
            info!(
                "Game ended after {} attempts: {:?}",
                self.attempts, self.status
            );
        }

        Ok(AttemptOutcome {
            attempt: self.attempts,
            status: self.status,
            results,
            message,
        })
    }
}

/// Plays a full game against `target` with the default [`GameRules`].
///
/// Each turn calls `read_guess` for the next guess, scores it, and passes the outcome to
/// `report`. The game stops as soon as it is won or lost, so `read_guess` and `report` are each
/// called exactly once per attempt.
///
/// Any error returned by `read_guess` or `report` is returned unchanged, and a guess of the wrong
/// length ends the game with [`WordleError::InvalidGuessLength`] before that turn is reported.
pub fn play<E, S, R, D>(target: &str, read_guess: R, report: D) -> Result<(), E>
where
    E: From<WordleError>,
    S: AsRef<str>,
    R: FnMut() -> Result<S, E>,
    D: FnMut(AttemptOutcome) -> Result<(), E>,
{
    play_with_rules(&GameRules::default(), target, read_guess, report)
}

/// Plays a full game against `target` with the given rules. See [`play`].
pub fn play_with_rules<E, S, R, D>(
    rules: &GameRules,
    target: &str,
    mut read_guess: R,
    mut report: D,
) -> Result<(), E>
where
    E: From<WordleError>,
    S: AsRef<str>,
    R: FnMut() -> Result<S, E>,
    D: FnMut(AttemptOutcome) -> Result<(), E>,
{
    let mut game = Game::with_rules(target, *rules);
    while game.is_in_progress() {
        let guess = read_guess()?;
        let outcome = game.play_turn(guess.as_ref())?;
        report(outcome)?;
    }
    Ok(())
}
