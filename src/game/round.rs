//! Single-round guess engine
//!
//! The mutation gateway for a round: accepts candidate letters, enforces
//! idempotence and the frozen-after-game-over rule. The outcome is never
//! cached; every read re-derives it from the word and the guesses.

use crate::core::{GuessSet, RoundOutcome, Word, evaluate};

/// One round of the game: a hidden word, the guesses so far, and the
/// allowed number of wrong guesses
#[derive(Debug, Clone)]
pub struct Round {
    word: Word,
    guesses: GuessSet,
    max_wrong: usize,
}

impl Round {
    /// Start a round over the given word
    #[must_use]
    pub const fn new(word: Word, max_wrong: usize) -> Self {
        Self {
            word,
            guesses: GuessSet::new(),
            max_wrong,
        }
    }

    /// Submit a guess
    ///
    /// Every input has a defined, non-panicking transition:
    /// - characters outside `a..=z` (after lowercasing) are ignored
    /// - guesses after the round is over are ignored
    /// - duplicate guesses are ignored
    ///
    /// Otherwise the letter is appended to the guess set in submission order.
    pub fn submit(&mut self, guess: char) {
        let letter = guess.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return;
        }

        if self.outcome().is_over {
            return;
        }

        self.guesses.insert(letter);
    }

    /// Derive the current outcome
    ///
    /// Recomputed fresh on every call; see [`evaluate`].
    #[must_use]
    pub fn outcome(&self) -> RoundOutcome {
        evaluate(&self.word, &self.guesses, self.max_wrong)
    }

    /// The hidden word
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// The guesses submitted so far
    #[inline]
    #[must_use]
    pub const fn guesses(&self) -> &GuessSet {
        &self.guesses
    }

    /// Maximum allowed wrong guesses before the round is lost
    #[inline]
    #[must_use]
    pub const fn max_wrong(&self) -> usize {
        self.max_wrong
    }
}
