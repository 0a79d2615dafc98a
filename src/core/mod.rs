//! Core domain types for the round state engine
//!
//! This module contains the fundamental domain types with zero external state.
//! All types here are pure, testable, and have clear mathematical properties.

mod guesses;
mod outcome;
mod word;

pub use guesses::GuessSet;
pub use outcome::{RoundOutcome, evaluate};
pub use word::{Word, WordError};

/// The fixed guessing alphabet
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
