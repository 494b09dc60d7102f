//! Per-lens novelty vocabulary
//!
//! Novelty scoring rewards beliefs that use the terminology a lens is
//! expected to surface. The mapping is an injectable table, not a dispatch
//! inside the scorer, so new lenses are added through configuration.

use std::collections::HashMap;

/// Generic fallback terms for lenses without a dedicated entry
pub const GENERIC_LENS_TERMS: &[&str] =
    &["framework", "lens", "perspective", "model", "principle"];

/// Injectable mapping from lens name to expected terminology.
///
/// Lookup falls back to [`GENERIC_LENS_TERMS`] for unknown lenses.
///
/// # Examples
///
/// ```
/// use prism_scorer::LensVocabulary;
///
/// let mut vocab = LensVocabulary::default();
/// vocab.insert("Ooda Loop", vec!["observe", "orient", "decide", "act"]);
/// assert!(vocab.terms_for("Ooda Loop").contains(&"orient".to_string()));
///
/// // Unknown lenses fall back to generic terminology
/// assert!(vocab.terms_for("Unknown").contains(&"framework".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct LensVocabulary {
    entries: HashMap<String, Vec<String>>,
}

impl LensVocabulary {
    /// Create an empty table (every lens falls back to generic terms)
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add or replace the terminology for a lens
    pub fn insert(&mut self, lens: impl Into<String>, terms: Vec<&str>) {
        self.entries.insert(
            lens.into().to_lowercase(),
            terms.into_iter().map(|t| t.to_lowercase()).collect(),
        );
    }

    /// Expected terminology for a lens, falling back to generic terms.
    ///
    /// Lens names match case-insensitively.
    pub fn terms_for(&self, lens: &str) -> Vec<String> {
        self.entries
            .get(&lens.to_lowercase())
            .cloned()
            .unwrap_or_else(|| GENERIC_LENS_TERMS.iter().map(|t| t.to_string()).collect())
    }

    /// True when the lens has a dedicated entry
    pub fn has_entry(&self, lens: &str) -> bool {
        self.entries.contains_key(&lens.to_lowercase())
    }
}

impl Default for LensVocabulary {
    /// Built-in table covering the lenses the generator ships with
    fn default() -> Self {
        let mut vocab = Self::empty();
        vocab.insert(
            "Pace Layering",
            vec!["pace", "layer", "fast layer", "slow layer", "tempo", "shearing"],
        );
        vocab.insert(
            "Theory of Constraints",
            vec!["constraint", "bottleneck", "throughput", "buffer", "subordinate", "flow"],
        );
        vocab.insert(
            "Inversion",
            vec!["invert", "avoid", "failure mode", "worst case", "downside", "prevent"],
        );
        vocab.insert(
            "Second-Order Effects",
            vec!["second-order", "downstream", "ripple", "knock-on", "unintended", "cascade"],
        );
        vocab.insert(
            "Systems Thinking",
            vec!["feedback loop", "stock", "delay", "reinforcing", "balancing", "leverage point"],
        );
        vocab.insert(
            "Via Negativa",
            vec!["remove", "subtract", "eliminate", "less", "fragility", "omit"],
        );
        vocab
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_has_known_lenses() {
        let vocab = LensVocabulary::default();
        assert!(vocab.has_entry("Pace Layering"));
        assert!(vocab.has_entry("theory of constraints"));
        assert!(!vocab.has_entry("Unknown Lens"));
    }

    #[test]
    fn test_fallback_for_unknown_lens() {
        let vocab = LensVocabulary::default();
        let terms = vocab.terms_for("Some New Lens");
        assert_eq!(terms.len(), GENERIC_LENS_TERMS.len());
        assert!(terms.contains(&"perspective".to_string()));
    }

    #[test]
    fn test_injected_lens_picked_up() {
        let mut vocab = LensVocabulary::default();
        vocab.insert("Antifragility", vec!["optionality", "convexity", "barbell"]);

        let terms = vocab.terms_for("antifragility");
        assert!(terms.contains(&"convexity".to_string()));
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let vocab = LensVocabulary::default();
        assert_eq!(vocab.terms_for("INVERSION"), vocab.terms_for("inversion"));
    }
}
