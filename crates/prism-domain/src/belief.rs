//! Belief statement - the atomic unit produced by applying a lens

use serde::{Deserialize, Serialize};

/// One atomic insight produced by applying a lens to a problem.
///
/// Beliefs are immutable once created; refinement builds modified copies
/// rather than editing in place, so a rejected refinement iteration can be
/// discarded by simply not adopting the new value.
///
/// Partially populated records are legal everywhere: missing evidence or
/// confidence degrades the relevant scores toward baseline, it never errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeliefStatement {
    /// Short natural-language claim
    pub belief: String,

    /// Supporting explanation for the claim
    pub reasoning: String,

    /// Supporting observation, if any
    pub evidence: Option<String>,

    /// Confidence in [0.0, 1.0], if the generator supplied one
    pub confidence: Option<f64>,

    /// Suggested follow-up actions, ordered top-to-bottom as a sequence
    pub implications: Vec<String>,

    /// Name of the lens that produced this belief (set at aggregation time)
    pub lens: String,
}

impl BeliefStatement {
    /// Create a belief with just a claim and reasoning
    ///
    /// # Examples
    ///
    /// ```
    /// use prism_domain::BeliefStatement;
    ///
    /// let b = BeliefStatement::new("Checkout latency is the bottleneck", "Payments block rendering");
    /// assert!(b.evidence.is_none());
    /// assert!(b.implications.is_empty());
    /// ```
    pub fn new(belief: impl Into<String>, reasoning: impl Into<String>) -> Self {
        Self {
            belief: belief.into(),
            reasoning: reasoning.into(),
            evidence: None,
            confidence: None,
            implications: Vec::new(),
            lens: String::new(),
        }
    }

    /// Attach evidence
    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = Some(evidence.into());
        self
    }

    /// Attach a confidence value
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Attach implications
    pub fn with_implications(mut self, implications: Vec<String>) -> Self {
        self.implications = implications;
        self
    }

    /// Tag the belief with the lens that produced it
    pub fn with_lens(mut self, lens: impl Into<String>) -> Self {
        self.lens = lens.into();
        self
    }

    /// True when evidence is present and non-empty
    pub fn has_evidence(&self) -> bool {
        self.evidence.as_deref().is_some_and(|e| !e.trim().is_empty())
    }

    /// True when the generator supplied a numeric confidence
    pub fn has_confidence(&self) -> bool {
        self.confidence.is_some()
    }
}
