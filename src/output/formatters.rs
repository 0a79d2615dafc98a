//! Formatting utilities for rendering a round
//!
//! Everything here is a pure read of the round state, so both the simple CLI
//! and the TUI derive their visuals from the same functions.

use crate::core::{GuessSet, Word};

/// Display state of one letter of the hidden word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Not yet guessed, shown as a blank
    Hidden,
    /// Guessed, shown as the letter
    Revealed,
    /// Never guessed but exposed because the round was lost
    Missed,
}

/// Display state of one keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    /// Not guessed yet
    Unused,
    /// Guessed and present in the word
    Correct,
    /// Guessed and absent from the word
    Wrong,
}

/// Per-letter reveal states for the hidden word, in word order
///
/// Once the round is lost every letter is exposed; letters the player never
/// found come back as [`RevealState::Missed`] so renderers can highlight them.
#[must_use]
pub fn reveal_states(word: &Word, guesses: &GuessSet, is_lost: bool) -> Vec<(char, RevealState)> {
    word.chars()
        .map(|c| {
            let state = if guesses.contains(c) {
                RevealState::Revealed
            } else if is_lost {
                RevealState::Missed
            } else {
                RevealState::Hidden
            };
            (c, state)
        })
        .collect()
}

/// Plain-text reveal line, e.g. `C A _` while playing or `C A T` after a loss
#[must_use]
pub fn reveal_line(word: &Word, guesses: &GuessSet, is_lost: bool) -> String {
    let rendered: Vec<String> = reveal_states(word, guesses, is_lost)
        .into_iter()
        .map(|(c, state)| match state {
            RevealState::Hidden => "_".to_string(),
            RevealState::Revealed | RevealState::Missed => c.to_uppercase().to_string(),
        })
        .collect();
    rendered.join(" ")
}

/// Keyboard state of a single letter
#[must_use]
pub fn key_state(letter: char, word: &Word, guesses: &GuessSet) -> KeyState {
    if !guesses.contains(letter) {
        KeyState::Unused
    } else if word.contains(letter) {
        KeyState::Correct
    } else {
        KeyState::Wrong
    }
}

/// Guessed letters in submission order, e.g. `X, C, A`
#[must_use]
pub fn guessed_line(guesses: &GuessSet) -> String {
    let rendered: Vec<String> = guesses
        .iter()
        .map(|c| c.to_uppercase().to_string())
        .collect();
    rendered.join(", ")
}
