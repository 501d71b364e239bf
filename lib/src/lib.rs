#![cfg_attr(feature = "unstable", feature(test))]

//! An engine for Wordle-style puzzles.
//!
//! [`score`] compares a guess with the target word, and [`play`] runs a whole game, reading
//! guesses from and reporting each turn to functions supplied by the caller.

mod engine;
mod results;
mod scoring;

pub use engine::*;
pub use results::*;
pub use scoring::*;
