//! Target word representation
//!
//! A Word stores the hidden word for a round along with a letter-membership
//! index for fast guess checks.

use rustc_hash::FxHashSet;
use std::fmt;

/// The hidden target word for a round
///
/// Stores the normalized (lowercase) text and maintains a set of its distinct
/// letters. Immutable for the lifetime of the round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: FxHashSet<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains non-alphabetic characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is normalized to lowercase, so all comparisons downstream are
    /// case-insensitive.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - It contains non-ASCII characters
    /// - It contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use endgame::core::Word;
    ///
    /// let word = Word::new("Planet").unwrap();
    /// assert_eq!(word.text(), "planet");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("s0lar").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters: FxHashSet<char> = text.chars().collect();

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the word (including repeats)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the word has no characters (never true once constructed)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Iterate over the word's characters in order
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }

    /// The set of distinct letters in the word
    #[inline]
    pub(crate) const fn distinct_letters(&self) -> &FxHashSet<char> {
        &self.letters
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("planet").unwrap();
        assert_eq!(word.text(), "planet");
        assert_eq!(word.len(), 6);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("PLANET").unwrap();
        assert_eq!(word.text(), "planet");

        let word2 = Word::new("PlAnEt").unwrap();
        assert_eq!(word2.text(), "planet");
    }

    #[test]
    fn word_creation_empty() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("plan3t").is_err()); // Number
        assert!(Word::new("pla net").is_err()); // Space
        assert!(Word::new("plan-t").is_err()); // Punctuation
    }

    #[test]
    fn word_contains() {
        let word = Word::new("planet").unwrap();
        assert!(word.contains('p'));
        assert!(word.contains('t'));
        assert!(!word.contains('z'));
        assert!(!word.contains('x'));
    }

    #[test]
    fn word_single_letter() {
        let word = Word::new("a").unwrap();
        assert_eq!(word.len(), 1);
        assert!(word.contains('a'));
    }

    #[test]
    fn word_distinct_letters_deduplicates() {
        let word = Word::new("guitar").unwrap();
        assert_eq!(word.distinct_letters().len(), 6);

        let repeated = Word::new("cheese").unwrap();
        assert_eq!(repeated.distinct_letters().len(), 4); // c, h, e, s
    }

    #[test]
    fn word_display() {
        let word = Word::new("planet").unwrap();
        assert_eq!(format!("{word}"), "planet");
    }

    #[test]
    fn word_equality_case_insensitive() {
        let word1 = Word::new("planet").unwrap();
        let word2 = Word::new("PLANET").unwrap();
        let word3 = Word::new("rocket").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
