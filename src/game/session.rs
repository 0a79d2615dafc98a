//! Round lifecycle
//!
//! A session owns the word provider and the active round. Starting a new
//! round draws a fresh word and discards all prior guesses, unconditionally,
//! even mid-round. Provider failures propagate; they are the only operations
//! here that can fail.

use super::Round;
use crate::providers::WordProvider;
use anyhow::Result;

/// A sequence of independent rounds over a word provider
#[derive(Debug)]
pub struct Session<P: WordProvider> {
    provider: P,
    round: Round,
    max_wrong: usize,
}

impl<P: WordProvider> Session<P> {
    /// Start a session, drawing the first word from the provider
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails to supply a word.
    pub fn new(mut provider: P, max_wrong: usize) -> Result<Self> {
        let word = provider.next_word()?;
        Ok(Self {
            provider,
            round: Round::new(word, max_wrong),
            max_wrong,
        })
    }

    /// Abandon the current round and start a fresh one
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails; the current round is left
    /// untouched in that case.
    pub fn new_round(&mut self) -> Result<()> {
        let word = self.provider.next_word()?;
        self.round = Round::new(word, self.max_wrong);
        Ok(())
    }

    /// The active round
    #[inline]
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Mutable access to the active round, for guess submission
    #[inline]
    pub const fn round_mut(&mut self) -> &mut Round {
        &mut self.round
    }
}
