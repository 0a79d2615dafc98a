//! Farewell texts for the warning narrative
//!
//! After each wrong guess the status banner bids farewell to the language
//! that was just lost. The template is picked at random per call; the
//! language is fixed by the escalation index.

use crate::game::WarningTextProvider;
use rand::prelude::IndexedRandom;

/// Farewell phrase templates; `{}` is replaced with the language name
const TEMPLATES: &[&str] = &[
    "Farewell, {}",
    "Adios, {}",
    "R.I.P., {}",
    "We'll miss you, {}",
    "Oh no, not {}!",
    "{} bites the dust",
    "Gone but not forgotten, {}",
    "The end of {} as we know it",
    "Off into the sunset, {}",
    "{}, it's been real",
    "{}, your watch has ended",
    "{} has left the building",
];

/// Warning texts over a lives pool's names
///
/// Index `i` mourns the `i`-th entry of the pool, so the provider covers
/// exactly the indices the narrator can request for that pool.
#[derive(Debug, Clone)]
pub struct FarewellTexts {
    names: Vec<&'static str>,
}

impl FarewellTexts {
    /// Create a provider over the given names, in pool order
    #[must_use]
    pub const fn new(names: Vec<&'static str>) -> Self {
        Self { names }
    }

    /// Fill a template with a language name
    fn fill(template: &str, name: &str) -> String {
        template.replace("{}", name)
    }
}

impl WarningTextProvider for FarewellTexts {
    fn text_for(&self, index: usize) -> String {
        let name = self.names[index];
        let template = TEMPLATES
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(TEMPLATES[0]);
        Self::fill(template, name)
    }
}
