//! The four-dimension quality scorer

use crate::config::ScorerConfig;
use crate::lexicon::{
    contains_any, count_distinct, count_occurrences, count_word_occurrences, has_digit,
    numeric_tokens, starts_with_action_verb, ABSOLUTE_WORDS, CONDITIONAL_MARKERS,
    COUNTER_INTUITIVE_MARKERS,
    DOMAIN_TERMS, GENERIC_ADVICE_PHRASES, LOGICAL_CONNECTORS, MEASUREMENT_TERMS, METRIC_PATTERNS,
    NEGATION_WORDS, REFRAMING_PHRASES, SEQUENCING_MARKERS, STRUCTURAL_TERMS, VAGUE_QUALIFIERS,
    VALIDATION_MARKERS,
};
use prism_domain::{Application, BeliefStatement, QualityScore};

// Dimension baselines. Each dimension starts here and is adjusted by
// independent pattern checks; the final value is clamped to [0, 1].
const SPECIFICITY_BASE: f64 = 0.35;
const NOVELTY_BASE: f64 = 0.35;
const ACTIONABILITY_BASE: f64 = 0.30;
const COHERENCE_BASE: f64 = 0.35;

// Specificity adjustments
const DIGIT_BONUS: f64 = 0.12;
const METRIC_PATTERN_BONUS: f64 = 0.06;
const METRIC_PATTERN_CAP: f64 = 0.18;
const DOMAIN_TERM_BONUS: f64 = 0.04;
const DOMAIN_TERM_CAP: f64 = 0.12;
const EVIDENCE_FRACTION_WEIGHT: f64 = 0.10;
const MEASURED_IMPLICATION_WEIGHT: f64 = 0.12;
const CONTEXT_ECHO_BONUS: f64 = 0.05;
const VAGUE_PENALTY: f64 = 0.05;
const VAGUE_PENALTY_CAP: f64 = 0.25;

// Novelty adjustments
const LENS_TERM_BONUS: f64 = 0.07;
const LENS_TERM_CAP: f64 = 0.21;
const REFRAMING_BONUS: f64 = 0.08;
const REFRAMING_CAP: f64 = 0.16;
const STRUCTURAL_BONUS: f64 = 0.05;
const STRUCTURAL_CAP: f64 = 0.15;
const COUNTER_INTUITIVE_BONUS: f64 = 0.08;
const GENERIC_ADVICE_PENALTY: f64 = 0.08;
const GENERIC_ADVICE_CAP: f64 = 0.24;

// Actionability adjustments
const IMPLICATION_COUNT_BONUS: f64 = 0.04;
const IMPLICATION_COUNT_CAP: f64 = 0.12;
const VERB_FRACTION_WEIGHT: f64 = 0.25;
const CONDITIONAL_BONUS: f64 = 0.08;
const VALIDATION_BONUS: f64 = 0.08;
const SEQUENCING_BONUS: f64 = 0.08;

// Coherence adjustments
const SWEET_SPOT_BONUS: f64 = 0.15;
const CROWDED_BONUS: f64 = 0.05;
const FRAGMENTATION_PENALTY: f64 = 0.10;
const CONNECTOR_BONUS: f64 = 0.05;
const CONNECTOR_CAP: f64 = 0.15;
const UNIVERSAL_EVIDENCE_BONUS: f64 = 0.12;
const THOROUGH_REASONING_BONUS: f64 = 0.10;
const CONFIDENCE_PRESENT_BONUS: f64 = 0.08;
const CONTRADICTION_PENALTY: f64 = 0.15;
const CONTRADICTION_MIN_HITS: usize = 3;

/// Scores one application along four independent quality dimensions.
///
/// Deterministic and infallible: partially populated belief records degrade
/// toward the dimension baselines instead of erroring. Dimensions never
/// share an accumulator, so a transformer targeting one dimension can be
/// verified to move only that dimension's checks.
pub struct Scorer {
    config: ScorerConfig,
}

impl Scorer {
    /// Create a scorer with the given configuration
    pub fn new(config: ScorerConfig) -> Self {
        Self { config }
    }

    /// Create a scorer with default configuration
    pub fn default_config() -> Self {
        Self::new(ScorerConfig::default())
    }

    /// The active configuration
    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Score an application
    ///
    /// # Examples
    ///
    /// ```
    /// use prism_domain::Application;
    /// use prism_scorer::Scorer;
    ///
    /// let app = Application::new("Inversion", vec![], "empty");
    /// let score = Scorer::default_config().score(&app);
    /// assert!(score.overall > 0.0);
    /// ```
    pub fn score(&self, application: &Application) -> QualityScore {
        let text = combined_text(&application.belief_statements);
        let context = application.problem_context.to_lowercase();

        QualityScore::from_dimensions(
            self.score_specificity(application, &text, &context),
            self.score_novelty(application, &text, &context),
            self.score_actionability(application, &text),
            self.score_coherence(application, &text),
            &self.config.weights,
        )
    }

    /// Specificity: numeric grounding, concrete terminology, evidence, and
    /// measurable implications, penalized by vague qualifiers.
    fn score_specificity(&self, application: &Application, text: &str, context: &str) -> f64 {
        let mut score = SPECIFICITY_BASE;

        if has_digit(text) {
            score += DIGIT_BONUS;
        }
        score += (count_distinct(text, METRIC_PATTERNS) as f64 * METRIC_PATTERN_BONUS)
            .min(METRIC_PATTERN_CAP);
        score +=
            (count_distinct(text, DOMAIN_TERMS) as f64 * DOMAIN_TERM_BONUS).min(DOMAIN_TERM_CAP);

        score += evidence_fraction(&application.belief_statements) * EVIDENCE_FRACTION_WEIGHT;
        score += measured_implication_fraction(&application.belief_statements)
            * MEASURED_IMPLICATION_WEIGHT;

        // Grounding bonus: the beliefs echo a numeric cue from the problem
        if numeric_tokens(context).iter().any(|t| text.contains(t)) {
            score += CONTEXT_ECHO_BONUS;
        }

        score -=
            (count_occurrences(text, VAGUE_QUALIFIERS) as f64 * VAGUE_PENALTY).min(VAGUE_PENALTY_CAP);

        score
    }

    /// Novelty: lens-specific vocabulary (terms merely echoed from the
    /// problem don't count), reframing and structural language, penalized
    /// by generic-advice phrases.
    fn score_novelty(&self, application: &Application, text: &str, context: &str) -> f64 {
        let mut score = NOVELTY_BASE;

        let lens_terms = self.config.vocabulary.terms_for(&application.lens);
        let novel_terms = lens_terms
            .iter()
            .filter(|t| text.contains(t.as_str()) && !context.contains(t.as_str()))
            .count();
        score += (novel_terms as f64 * LENS_TERM_BONUS).min(LENS_TERM_CAP);

        score += (count_distinct(text, REFRAMING_PHRASES) as f64 * REFRAMING_BONUS).min(REFRAMING_CAP);
        score +=
            (count_distinct(text, STRUCTURAL_TERMS) as f64 * STRUCTURAL_BONUS).min(STRUCTURAL_CAP);

        if contains_any(text, COUNTER_INTUITIVE_MARKERS) {
            score += COUNTER_INTUITIVE_BONUS;
        }

        score -= (count_distinct(text, GENERIC_ADVICE_PHRASES) as f64 * GENERIC_ADVICE_PENALTY)
            .min(GENERIC_ADVICE_CAP);

        score
    }

    /// Actionability: implication count (capped), action-verb leads,
    /// conditional, validation, and sequencing language.
    fn score_actionability(&self, application: &Application, text: &str) -> f64 {
        let mut score = ACTIONABILITY_BASE;

        let implications: Vec<&String> = application
            .belief_statements
            .iter()
            .flat_map(|b| b.implications.iter())
            .collect();

        score +=
            (implications.len() as f64 * IMPLICATION_COUNT_BONUS).min(IMPLICATION_COUNT_CAP);

        if !implications.is_empty() {
            let verb_leads = implications
                .iter()
                .filter(|i| starts_with_action_verb(i))
                .count();
            score += verb_leads as f64 / implications.len() as f64 * VERB_FRACTION_WEIGHT;
        }

        if contains_any(text, CONDITIONAL_MARKERS) {
            score += CONDITIONAL_BONUS;
        }
        if contains_any(text, VALIDATION_MARKERS) {
            score += VALIDATION_BONUS;
        }
        if contains_any(text, SEQUENCING_MARKERS) {
            score += SEQUENCING_BONUS;
        }

        score
    }

    /// Coherence: belief-count sweet spot, logical connectors, universal
    /// evidence/reasoning/confidence, and the contradiction heuristic.
    fn score_coherence(&self, application: &Application, text: &str) -> f64 {
        let mut score = COHERENCE_BASE;
        let beliefs = &application.belief_statements;

        match beliefs.len() {
            1..=3 => score += SWEET_SPOT_BONUS,
            4..=5 => score += CROWDED_BONUS,
            n if n > 5 => score -= FRAGMENTATION_PENALTY,
            _ => {}
        }

        score +=
            (count_distinct(text, LOGICAL_CONNECTORS) as f64 * CONNECTOR_BONUS).min(CONNECTOR_CAP);

        if !beliefs.is_empty() {
            if beliefs.iter().all(BeliefStatement::has_evidence) {
                score += UNIVERSAL_EVIDENCE_BONUS;
            }
            if beliefs
                .iter()
                .all(|b| b.reasoning.trim().len() >= self.config.min_reasoning_len)
            {
                score += THOROUGH_REASONING_BONUS;
            }
            if beliefs.iter().all(BeliefStatement::has_confidence) {
                score += CONFIDENCE_PRESENT_BONUS;
            }
        }

        // Weak contradiction proxy: lots of negation alongside lots of
        // absolutes reads like the beliefs argue against each other.
        // Whole-word counts, so "cannot" registers once, not also as "not".
        if count_word_occurrences(text, NEGATION_WORDS) >= CONTRADICTION_MIN_HITS
            && count_word_occurrences(text, ABSOLUTE_WORDS) >= CONTRADICTION_MIN_HITS
        {
            score -= CONTRADICTION_PENALTY;
        }

        score
    }
}

/// Lowercased concatenation of every text field across the belief set
fn combined_text(beliefs: &[BeliefStatement]) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for b in beliefs {
        parts.push(&b.belief);
        parts.push(&b.reasoning);
        if let Some(evidence) = &b.evidence {
            parts.push(evidence);
        }
        for implication in &b.implications {
            parts.push(implication);
        }
    }
    parts.join(" ").to_lowercase()
}

/// Fraction of beliefs carrying non-empty evidence
fn evidence_fraction(beliefs: &[BeliefStatement]) -> f64 {
    if beliefs.is_empty() {
        return 0.0;
    }
    beliefs.iter().filter(|b| b.has_evidence()).count() as f64 / beliefs.len() as f64
}

/// Fraction of implications containing a digit or measurement language
fn measured_implication_fraction(beliefs: &[BeliefStatement]) -> f64 {
    let implications: Vec<&String> = beliefs.iter().flat_map(|b| b.implications.iter()).collect();
    if implications.is_empty() {
        return 0.0;
    }
    let measured = implications
        .iter()
        .filter(|i| {
            let lower = i.to_lowercase();
            has_digit(&lower) || contains_any(&lower, MEASUREMENT_TERMS)
        })
        .count();
    measured as f64 / implications.len() as f64
}
