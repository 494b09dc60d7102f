//! Scorer configuration

use crate::vocabulary::LensVocabulary;
use prism_domain::QualityWeights;

/// Configuration for the quality scorer
///
/// # Examples
///
/// ```
/// use prism_scorer::ScorerConfig;
/// use prism_domain::QualityWeights;
///
/// let config = ScorerConfig::default();
/// assert_eq!(config.min_reasoning_len, 40);
///
/// // Swap the weight profile without touching scorer logic
/// let weights = QualityWeights { novelty: 0.4, specificity: 0.2, ..QualityWeights::default() };
/// let config = ScorerConfig::with_weights(weights);
/// assert_eq!(config.weights.novelty, 0.4);
/// ```
#[derive(Debug, Clone)]
pub struct ScorerConfig {
    /// Weights combining dimension scores into the overall score
    pub weights: QualityWeights,

    /// Per-lens novelty terminology table
    pub vocabulary: LensVocabulary,

    /// Minimum reasoning length (chars) for the coherence thoroughness check
    pub min_reasoning_len: usize,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            weights: QualityWeights::default(),
            vocabulary: LensVocabulary::default(),
            min_reasoning_len: 40,
        }
    }
}

impl ScorerConfig {
    /// Default configuration with a custom weight profile
    pub fn with_weights(weights: QualityWeights) -> Self {
        Self {
            weights,
            ..Self::default()
        }
    }

    /// Default configuration with a custom vocabulary table
    pub fn with_vocabulary(vocabulary: LensVocabulary) -> Self {
        Self {
            vocabulary,
            ..Self::default()
        }
    }
}
