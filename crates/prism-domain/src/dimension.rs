//! The closed set of quality dimensions

use serde::{Deserialize, Serialize};
use std::fmt;

/// A quality dimension along which an application is scored and refined.
///
/// The set is closed on purpose: every dimension maps to exactly one scorer
/// function and one transformer function, so adding a dimension is a local,
/// additive change in those two places plus a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Concrete, measurable, numerically grounded content
    Specificity,
    /// Reframing beyond generic advice, lens-specific insight
    Novelty,
    /// Implications a reader can act on directly
    Actionability,
    /// Beliefs that hang together as one argument
    Coherence,
}

impl Dimension {
    /// All dimensions, in the fixed order transformers are applied
    pub const ALL: [Dimension; 4] = [
        Dimension::Specificity,
        Dimension::Novelty,
        Dimension::Actionability,
        Dimension::Coherence,
    ];

    /// Stable snake_case name, used in trace actions and feedback
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Specificity => "specificity",
            Dimension::Novelty => "novelty",
            Dimension::Actionability => "actionability",
            Dimension::Coherence => "coherence",
        }
    }

    /// Parse a dimension from its stable name
    pub fn parse(s: &str) -> Option<Dimension> {
        match s {
            "specificity" => Some(Dimension::Specificity),
            "novelty" => Some(Dimension::Novelty),
            "actionability" => Some(Dimension::Actionability),
            "coherence" => Some(Dimension::Coherence),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
