//! Word supply
//!
//! The engine assumes nothing about the provider beyond non-emptiness of the
//! words it hands out, which `Word::new` already enforces.

use crate::core::Word;
use anyhow::{Result, bail};
use rand::prelude::IndexedRandom;

/// Source of target words for new rounds
pub trait WordProvider {
    /// Supply the next target word
    ///
    /// # Errors
    ///
    /// Returns an error if no word can be supplied.
    fn next_word(&mut self) -> Result<Word>;
}

/// Draws uniformly at random from a word pool
#[derive(Debug, Clone, Copy)]
pub struct RandomWordProvider<'a> {
    pool: &'a [Word],
}

impl<'a> RandomWordProvider<'a> {
    /// Create a provider over the given pool
    #[must_use]
    pub const fn new(pool: &'a [Word]) -> Self {
        Self { pool }
    }
}

impl WordProvider for RandomWordProvider<'_> {
    fn next_word(&mut self) -> Result<Word> {
        let Some(word) = self.pool.choose(&mut rand::rng()) else {
            bail!("word pool is empty");
        };
        Ok(word.clone())
    }
}
