//! Status narration
//!
//! Classifies a round outcome into one of four narrative states, evaluated in
//! strict priority order. The classifier is a pure function of the outcome;
//! there is no stored transition history.

use crate::core::RoundOutcome;

/// Source of escalating warning texts, keyed by how many wrong guesses have
/// occurred so far (index = `wrong_guesses - 1`)
///
/// Implementations must cover every index the engine can request, i.e. every
/// reachable wrong-guess count below the loss threshold.
pub trait WarningTextProvider {
    /// The warning text for the given escalation index
    fn text_for(&self, index: usize) -> String;
}

/// The four-way narrative state of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Narrative {
    /// The word is complete
    Won,
    /// The wrong-guess budget is spent
    Lost,
    /// The round continues but the latest guess was wrong
    Warning {
        /// Index into the warning text list (`wrong_guesses - 1`)
        index: usize,
    },
    /// Nothing to report
    Neutral,
}

/// Classify an outcome, first match wins
///
/// Priority: Won, then Lost, then Warning, then Neutral. The warning branch is
/// gated on the round not being over, so a raw `last_guess_wrong` left over
/// from a finished round never fires it.
///
/// # Examples
/// ```
/// use endgame::core::{GuessSet, Word, evaluate};
/// use endgame::game::{Narrative, classify};
///
/// let word = Word::new("cat").unwrap();
/// let mut guesses = GuessSet::new();
/// guesses.insert('x');
///
/// let outcome = evaluate(&word, &guesses, 3);
/// assert_eq!(classify(&outcome), Narrative::Warning { index: 0 });
/// ```
#[must_use]
pub fn classify(outcome: &RoundOutcome) -> Narrative {
    if outcome.is_won {
        return Narrative::Won;
    }
    if outcome.is_lost {
        return Narrative::Lost;
    }
    if outcome.last_guess_wrong {
        // last_guess_wrong implies at least one wrong guess exists
        return Narrative::Warning {
            index: outcome.wrong_guesses - 1,
        };
    }
    Narrative::Neutral
}

/// Resolve an outcome into banner text, if any
///
/// Won and Lost use fixed messages; Warning asks the provider for the text at
/// the escalation index; Neutral produces nothing.
pub fn banner_text(
    outcome: &RoundOutcome,
    warnings: &dyn WarningTextProvider,
) -> Option<String> {
    match classify(outcome) {
        Narrative::Won => Some("You win! Well done! 🎉".to_string()),
        Narrative::Lost => {
            Some("Game Over! You lose! Better start learning Assembly 😰".to_string())
        }
        Narrative::Warning { index } => Some(warnings.text_for(index)),
        Narrative::Neutral => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GuessSet, Word, evaluate};

    struct FixedWarnings;

    impl WarningTextProvider for FixedWarnings {
        fn text_for(&self, index: usize) -> String {
            format!("warning {index}")
        }
    }

    fn outcome_for(word: &str, letters: &[char], max_wrong: usize) -> RoundOutcome {
        let word = Word::new(word).unwrap();
        let mut guesses = GuessSet::new();
        for &c in letters {
            guesses.insert(c);
        }
        evaluate(&word, &guesses, max_wrong)
    }

    #[test]
    fn neutral_on_fresh_round() {
        let outcome = outcome_for("cat", &[], 3);
        assert_eq!(classify(&outcome), Narrative::Neutral);
        assert_eq!(banner_text(&outcome, &FixedWarnings), None);
    }

    #[test]
    fn neutral_after_correct_guess() {
        let outcome = outcome_for("cat", &['c'], 3);
        assert_eq!(classify(&outcome), Narrative::Neutral);
    }

    #[test]
    fn warning_after_first_wrong_guess() {
        let outcome = outcome_for("cat", &['x'], 3);
        assert_eq!(classify(&outcome), Narrative::Warning { index: 0 });
        assert_eq!(
            banner_text(&outcome, &FixedWarnings),
            Some("warning 0".to_string())
        );
    }

    #[test]
    fn warning_index_escalates_with_wrong_count() {
        let outcome = outcome_for("cat", &['x', 'y'], 5);
        assert_eq!(classify(&outcome), Narrative::Warning { index: 1 });
    }

    #[test]
    fn no_warning_when_latest_guess_correct() {
        // Two wrong guesses on record, but the most recent one landed
        let outcome = outcome_for("cat", &['x', 'y', 'c'], 5);
        assert_eq!(classify(&outcome), Narrative::Neutral);
    }

    #[test]
    fn won_beats_everything() {
        // Prior wrong guesses, winning letter last
        let outcome = outcome_for("cat", &['x', 'y', 'c', 'a', 't'], 5);
        assert_eq!(classify(&outcome), Narrative::Won);
        assert_eq!(
            banner_text(&outcome, &FixedWarnings),
            Some("You win! Well done! 🎉".to_string())
        );
    }

    #[test]
    fn lost_beats_warning() {
        // Final wrong guess hits the threshold; warning must not fire
        let outcome = outcome_for("cat", &['x', 'y', 'z'], 3);
        assert!(outcome.last_guess_wrong);
        assert_eq!(classify(&outcome), Narrative::Lost);

        let text = banner_text(&outcome, &FixedWarnings).unwrap();
        assert!(text.contains("Game Over!"));
        assert!(text.contains("Better start learning Assembly"));
    }
}
