//! Raw cue bundle extracted from a problem description

use serde::{Deserialize, Serialize};

/// Raw cues pulled out of a free-text problem description by the external
/// signal extractor.
///
/// Only the specificity transformer consumes this; an empty bundle simply
/// turns the numeric-evidence rule into a no-op.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemSignals {
    /// Numeric tokens as they appeared in the text ("40%", "3 weeks", "$12k")
    pub numbers: Vec<String>,

    /// Salient keywords from the problem description
    pub keywords: Vec<String>,
}

impl ProblemSignals {
    /// Create a signal bundle
    pub fn new(numbers: Vec<String>, keywords: Vec<String>) -> Self {
        Self { numbers, keywords }
    }

    /// True when at least one numeric cue was found
    pub fn has_numbers(&self) -> bool {
        !self.numbers.is_empty()
    }

    /// First numeric cue, if any
    pub fn first_number(&self) -> Option<&str> {
        self.numbers.first().map(String::as_str)
    }
}
