//! Round outcome evaluation
//!
//! The outcome is derived, never stored: `evaluate` recomputes every field
//! from the word and the guesses on each call, so there is no second source
//! of truth to go stale.

use super::{GuessSet, Word};

/// Derived status of a round
///
/// `last_guess_wrong` is structurally correct at all times but is only
/// meaningful for narration while the round is still in progress; the
/// narrator gates on `is_over` before consulting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    /// How many guessed letters are absent from the word
    pub wrong_guesses: usize,
    /// Every distinct letter of the word has been guessed
    pub is_won: bool,
    /// The wrong-guess count reached the allowed maximum
    pub is_lost: bool,
    /// Won or lost
    pub is_over: bool,
    /// The most recently submitted guess, if any
    pub last_guess: Option<char>,
    /// The most recent guess is absent from the word
    pub last_guess_wrong: bool,
}

/// Compute the outcome of a round from its word and guesses
///
/// Pure and deterministic: identical inputs always produce identical results,
/// so callers can re-derive on every read.
///
/// `is_won` is always evaluated, even when `is_lost` already holds; for any
/// non-empty word the two cannot both be true (a word-completing letter is
/// never a wrong guess), but the narrator's priority rule is what resolves
/// the order, not this function.
///
/// # Examples
/// ```
/// use endgame::core::{GuessSet, Word, evaluate};
///
/// let word = Word::new("cat").unwrap();
/// let mut guesses = GuessSet::new();
/// guesses.insert('c');
/// guesses.insert('x');
///
/// let outcome = evaluate(&word, &guesses, 3);
/// assert_eq!(outcome.wrong_guesses, 1);
/// assert!(!outcome.is_over);
/// assert_eq!(outcome.last_guess, Some('x'));
/// assert!(outcome.last_guess_wrong);
/// ```
#[must_use]
pub fn evaluate(word: &Word, guesses: &GuessSet, max_wrong: usize) -> RoundOutcome {
    let wrong_guesses = guesses.iter().filter(|&c| !word.contains(c)).count();

    let is_lost = wrong_guesses >= max_wrong;
    let is_won = word
        .distinct_letters()
        .iter()
        .all(|&c| guesses.contains(c));
    let is_over = is_won || is_lost;

    let last_guess = guesses.last();
    let last_guess_wrong = last_guess.is_some_and(|c| !word.contains(c));

    RoundOutcome {
        wrong_guesses,
        is_won,
        is_lost,
        is_over,
        last_guess,
        last_guess_wrong,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guesses_of(letters: &[char]) -> GuessSet {
        let mut set = GuessSet::new();
        for &c in letters {
            set.insert(c);
        }
        set
    }

    #[test]
    fn fresh_round_is_neutral() {
        let word = Word::new("cat").unwrap();
        let outcome = evaluate(&word, &GuessSet::new(), 3);

        assert_eq!(outcome.wrong_guesses, 0);
        assert!(!outcome.is_won);
        assert!(!outcome.is_lost);
        assert!(!outcome.is_over);
        assert_eq!(outcome.last_guess, None);
        assert!(!outcome.last_guess_wrong);
    }

    #[test]
    fn win_completeness_any_order() {
        let word = Word::new("cat").unwrap();

        for order in [['c', 'a', 't'], ['t', 'a', 'c'], ['a', 'c', 't']] {
            let outcome = evaluate(&word, &guesses_of(&order), 3);
            assert!(outcome.is_won, "order {order:?} should win");
            assert!(!outcome.is_lost);
            assert!(outcome.is_over);
        }
    }

    #[test]
    fn win_with_repeated_letters_in_word() {
        // One 'e' guess covers both e's
        let word = Word::new("cheese").unwrap();
        let outcome = evaluate(&word, &guesses_of(&['c', 'h', 'e', 's']), 5);
        assert!(outcome.is_won);
    }

    #[test]
    fn loss_threshold_boundary() {
        let word = Word::new("cat").unwrap();

        let two_wrong = evaluate(&word, &guesses_of(&['x', 'y']), 3);
        assert_eq!(two_wrong.wrong_guesses, 2);
        assert!(!two_wrong.is_lost);
        assert!(!two_wrong.is_over);

        let three_wrong = evaluate(&word, &guesses_of(&['x', 'y', 'z']), 3);
        assert_eq!(three_wrong.wrong_guesses, 3);
        assert!(three_wrong.is_lost);
        assert!(three_wrong.is_over);
        assert!(!three_wrong.is_won);
    }

    #[test]
    fn wrong_guesses_counts_only_misses() {
        let word = Word::new("cat").unwrap();
        let outcome = evaluate(&word, &guesses_of(&['c', 'x', 'a', 'y']), 5);
        assert_eq!(outcome.wrong_guesses, 2);
    }

    #[test]
    fn wrong_guesses_monotonic() {
        let word = Word::new("cat").unwrap();
        let sequence = ['x', 'c', 'y', 'a', 'z'];

        let mut guesses = GuessSet::new();
        let mut previous = 0;
        for c in sequence {
            guesses.insert(c);
            let outcome = evaluate(&word, &guesses, 10);
            assert!(outcome.wrong_guesses >= previous);
            previous = outcome.wrong_guesses;
        }
    }

    #[test]
    fn last_guess_tracking() {
        let word = Word::new("cat").unwrap();

        let after_three = evaluate(&word, &guesses_of(&['a', 'x', 't']), 5);
        assert_eq!(after_three.last_guess, Some('t'));
        assert!(!after_three.last_guess_wrong);

        let after_two = evaluate(&word, &guesses_of(&['a', 'x']), 5);
        assert_eq!(after_two.last_guess, Some('x'));
        assert!(after_two.last_guess_wrong);
    }

    #[test]
    fn winning_final_guess_is_never_wrong() {
        // The guess that completes the word is by definition in the word, so
        // it cannot simultaneously push the wrong count over the threshold.
        let word = Word::new("cat").unwrap();
        let outcome = evaluate(&word, &guesses_of(&['x', 'y', 'c', 'a', 't']), 3);

        assert!(outcome.is_won);
        assert!(!outcome.is_lost);
        assert!(!outcome.last_guess_wrong);
    }

    #[test]
    fn referential_transparency() {
        let word = Word::new("planet").unwrap();
        let guesses = guesses_of(&['p', 'x', 'l']);

        let first = evaluate(&word, &guesses, 4);
        let second = evaluate(&word, &guesses, 4);
        assert_eq!(first, second);
    }

    #[test]
    fn case_insensitive_word_domain() {
        let word = Word::new("CAT").unwrap();
        let outcome = evaluate(&word, &guesses_of(&['c', 'a', 't']), 3);
        assert!(outcome.is_won);
    }
}
