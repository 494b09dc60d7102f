//! Quality scores and the weight configuration that combines them

use crate::Dimension;
use serde::{Deserialize, Serialize};

fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Named weight configuration for combining dimension scores into `overall`.
///
/// The weights are a swappable value, not constants baked into the scorer:
/// callers that value novelty less than the default can supply their own.
///
/// # Examples
///
/// ```
/// use prism_domain::QualityWeights;
///
/// let weights = QualityWeights::default();
/// assert!((weights.sum() - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityWeights {
    /// Weight of the specificity dimension
    pub specificity: f64,
    /// Weight of the novelty dimension
    pub novelty: f64,
    /// Weight of the actionability dimension
    pub actionability: f64,
    /// Weight of the coherence dimension
    pub coherence: f64,
}

impl Default for QualityWeights {
    fn default() -> Self {
        Self {
            specificity: 0.25,
            novelty: 0.30,
            actionability: 0.25,
            coherence: 0.20,
        }
    }
}

impl QualityWeights {
    /// Sum of all weights; a well-formed configuration sums to 1.0
    pub fn sum(&self) -> f64 {
        self.specificity + self.novelty + self.actionability + self.coherence
    }

    /// Weight assigned to one dimension
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Specificity => self.specificity,
            Dimension::Novelty => self.novelty,
            Dimension::Actionability => self.actionability,
            Dimension::Coherence => self.coherence,
        }
    }
}

/// Four independent dimension scores plus their weighted combination.
///
/// Every field is clamped to [0.0, 1.0] at construction, regardless of what
/// the heuristic arithmetic produced. Threshold comparisons use the raw
/// values stored here; use [`QualityScore::rounded`] for external reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityScore {
    /// How concrete and measurable the content is
    pub specificity: f64,
    /// How far the content moves beyond generic advice
    pub novelty: f64,
    /// How directly a reader can act on the implications
    pub actionability: f64,
    /// How well the beliefs hang together
    pub coherence: f64,
    /// Weighted combination of the four dimensions
    pub overall: f64,
}

impl QualityScore {
    /// Build a score from raw dimension values, clamping each to [0, 1]
    /// and combining them with the given weights.
    ///
    /// # Examples
    ///
    /// ```
    /// use prism_domain::{QualityScore, QualityWeights};
    ///
    /// let score = QualityScore::from_dimensions(0.8, 0.6, 0.7, 1.4, &QualityWeights::default());
    /// assert_eq!(score.coherence, 1.0);
    /// assert!(score.overall > 0.0 && score.overall <= 1.0);
    /// ```
    pub fn from_dimensions(
        specificity: f64,
        novelty: f64,
        actionability: f64,
        coherence: f64,
        weights: &QualityWeights,
    ) -> Self {
        let specificity = clamp01(specificity);
        let novelty = clamp01(novelty);
        let actionability = clamp01(actionability);
        let coherence = clamp01(coherence);

        let overall = clamp01(
            specificity * weights.specificity
                + novelty * weights.novelty
                + actionability * weights.actionability
                + coherence * weights.coherence,
        );

        Self {
            specificity,
            novelty,
            actionability,
            coherence,
            overall,
        }
    }

    /// Score of one dimension
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Specificity => self.specificity,
            Dimension::Novelty => self.novelty,
            Dimension::Actionability => self.actionability,
            Dimension::Coherence => self.coherence,
        }
    }

    /// Copy with every value rounded to 2 decimal places, for reporting
    pub fn rounded(&self) -> Self {
        Self {
            specificity: round2(self.specificity),
            novelty: round2(self.novelty),
            actionability: round2(self.actionability),
            coherence: round2(self.coherence),
            overall: round2(self.overall),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = QualityWeights::default();
        assert!((weights.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_overall_is_weighted_sum() {
        let weights = QualityWeights::default();
        let score = QualityScore::from_dimensions(0.8, 0.6, 0.4, 0.5, &weights);

        let expected = 0.8 * 0.25 + 0.6 * 0.30 + 0.4 * 0.25 + 0.5 * 0.20;
        assert!((score.overall - expected).abs() < 1e-9);
    }

    #[test]
    fn test_dimensions_clamped() {
        let weights = QualityWeights::default();
        let score = QualityScore::from_dimensions(-0.3, 1.7, 0.5, 0.5, &weights);

        assert_eq!(score.specificity, 0.0);
        assert_eq!(score.novelty, 1.0);
    }

    #[test]
    fn test_rounded_to_two_places() {
        let weights = QualityWeights::default();
        let score = QualityScore::from_dimensions(0.333_33, 0.666_66, 0.5, 0.5, &weights);
        let rounded = score.rounded();

        assert_eq!(rounded.specificity, 0.33);
        assert_eq!(rounded.novelty, 0.67);
    }

    #[test]
    fn test_custom_weights() {
        let weights = QualityWeights {
            specificity: 1.0,
            novelty: 0.0,
            actionability: 0.0,
            coherence: 0.0,
        };
        let score = QualityScore::from_dimensions(0.42, 0.9, 0.9, 0.9, &weights);
        assert!((score.overall - 0.42).abs() < 1e-9);
    }
}
