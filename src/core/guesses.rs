//! Ordered collection of submitted guesses
//!
//! Insertion order is the sole basis for "most recent guess" derivations, so
//! the collection preserves it strictly. Membership is unique: no letter can
//! appear twice.

/// The letters guessed so far in a round, in submission order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessSet {
    letters: Vec<char>,
}

impl GuessSet {
    /// Create an empty guess set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            letters: Vec::new(),
        }
    }

    /// Append a letter, preserving insertion order
    ///
    /// Returns `false` without mutating if the letter is already present.
    pub fn insert(&mut self, letter: char) -> bool {
        if self.contains(letter) {
            return false;
        }
        self.letters.push(letter);
        true
    }

    /// Check whether a letter has been guessed
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// The most recently submitted guess, if any
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<char> {
        self.letters.last().copied()
    }

    /// Number of guesses submitted so far
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether no guesses have been submitted yet
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Iterate over guesses in submission order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }

    /// Discard all guesses
    pub fn clear(&mut self) {
        self.letters.clear();
    }
}
