//! Per-dimension belief transformers
//!
//! One pure function per quality dimension, each nudging that dimension
//! upward by a conditional textual edit. Every edit is gated on the absence
//! of the marker it introduces, so transformers lean idempotent: a second
//! pass over an already-transformed belief changes nothing.

use prism_domain::{BeliefStatement, Dimension, ProblemSignals};
use prism_scorer::lexicon::{
    contains_any, has_digit, starts_with_action_verb, CORROBORATION_MARKERS, LOGICAL_CONNECTORS,
    MEASUREMENT_TERMS, REFRAMING_PHRASES, STRUCTURAL_TERMS, VALIDATION_MARKERS,
};

/// Implication count above which no validation step is appended
const MAX_IMPLICATIONS: usize = 5;

/// Confidence at or above which a corroboration sentence is warranted
const CORROBORATION_CONFIDENCE: f64 = 0.75;

/// Content cues that pick "Measure:" as the action-verb rewrite
const DATA_CUES: &[&str] = &[
    "data", "metric", "number", "rate", "cost", "latency", "count", "percent",
];

/// Content cues that pick "Examine:" as the action-verb rewrite
const STRUCTURE_CUES: &[&str] = &[
    "structure",
    "architecture",
    "design",
    "dependency",
    "interface",
    "boundary",
    "layer",
    "coupling",
];

/// Thread a belief through the transformers for every listed dimension,
/// in the fixed order specificity → novelty → actionability → coherence.
///
/// # Examples
///
/// ```
/// use prism_domain::{BeliefStatement, Dimension, ProblemSignals};
/// use prism_refiner::transform::apply;
///
/// let belief = BeliefStatement::new("The process is slow", "handoffs add delay");
/// let signals = ProblemSignals::new(vec!["40%".to_string()], vec![]);
///
/// let refined = apply(belief, &[Dimension::Specificity], &signals);
/// assert!(refined.evidence.unwrap().contains("40%"));
/// ```
pub fn apply(
    belief: BeliefStatement,
    dimensions: &[Dimension],
    signals: &ProblemSignals,
) -> BeliefStatement {
    let mut belief = belief;
    for dim in Dimension::ALL {
        if dimensions.contains(&dim) {
            belief = transform(belief, dim, signals);
        }
    }
    belief
}

/// Apply the transformer for one dimension
pub fn transform(
    belief: BeliefStatement,
    dimension: Dimension,
    signals: &ProblemSignals,
) -> BeliefStatement {
    match dimension {
        Dimension::Specificity => sharpen_specificity(belief, signals),
        Dimension::Novelty => deepen_novelty(belief),
        Dimension::Actionability => strengthen_actionability(belief),
        Dimension::Coherence => tighten_coherence(belief),
    }
}

/// Pull a numeric cue into evidence, mark implications as measurable, and
/// anchor reasoning with a specificity marker.
fn sharpen_specificity(mut belief: BeliefStatement, signals: &ProblemSignals) -> BeliefStatement {
    let combined = combined_lower(&belief);

    if !has_digit(&combined) {
        if let Some(number) = signals.first_number() {
            belief.evidence = Some(match belief.evidence.take() {
                Some(existing) => format!("{} (context signal: {})", existing, number),
                None => format!("(context signal: {})", number),
            });
        }
    }

    for implication in &mut belief.implications {
        let lower = implication.to_lowercase();
        if !has_digit(&lower) && !contains_any(&lower, MEASUREMENT_TERMS) {
            implication.push_str(" (measure the impact)");
        }
    }

    let reasoning_lower = belief.reasoning.to_lowercase();
    if !has_digit(&reasoning_lower)
        && !contains_any(&reasoning_lower, MEASUREMENT_TERMS)
        && !reasoning_lower.contains("specifically")
    {
        belief.reasoning = format!("Specifically: {}", belief.reasoning);
    }

    belief
}

/// Reframe the claim and tie the reasoning to structure rather than symptom.
fn deepen_novelty(mut belief: BeliefStatement) -> BeliefStatement {
    if !contains_any(&belief.belief.to_lowercase(), REFRAMING_PHRASES) {
        belief.belief = format!("What this is actually about: {}", belief.belief);
    }

    if !contains_any(&belief.reasoning.to_lowercase(), STRUCTURAL_TERMS) {
        belief
            .reasoning
            .push_str(" This points to a structural property of the system rather than a local symptom.");
    }

    belief
}

/// Lead every implication with an action verb and make sure one implication
/// validates the belief.
fn strengthen_actionability(mut belief: BeliefStatement) -> BeliefStatement {
    for implication in &mut belief.implications {
        if !starts_with_action_verb(implication) {
            let lower = implication.to_lowercase();
            let verb = if contains_any(&lower, DATA_CUES) {
                "Measure"
            } else if contains_any(&lower, STRUCTURE_CUES) {
                "Examine"
            } else {
                "Identify"
            };
            *implication = format!("{}: {}", verb, implication);
        }
    }

    let has_validation = belief
        .implications
        .iter()
        .any(|i| contains_any(&i.to_lowercase(), VALIDATION_MARKERS));
    if !has_validation && belief.implications.len() < MAX_IMPLICATIONS {
        belief
            .implications
            .push("Validate the outcome with a before/after measurement".to_string());
    }

    belief
}

/// Wire the reasoning to the claim, echo the evidence, and note
/// corroboration for high-confidence beliefs.
fn tighten_coherence(mut belief: BeliefStatement) -> BeliefStatement {
    if !contains_any(&belief.reasoning.to_lowercase(), LOGICAL_CONNECTORS) {
        belief.reasoning = format!("Because {}", belief.reasoning);
    }

    if let Some(evidence) = belief.evidence.clone() {
        if !evidence.trim().is_empty()
            && !belief
                .reasoning
                .to_lowercase()
                .contains(&evidence.to_lowercase())
        {
            belief
                .reasoning
                .push_str(&format!(" This is supported by the observation that {}.", evidence));
        }
    }

    let confident = belief
        .confidence
        .is_some_and(|c| c >= CORROBORATION_CONFIDENCE);
    if confident && !contains_any(&belief.reasoning.to_lowercase(), CORROBORATION_MARKERS) {
        belief
            .reasoning
            .push_str(" Multiple signals support this conclusion.");
    }

    belief
}

fn combined_lower(belief: &BeliefStatement) -> String {
    let mut parts: Vec<&str> = vec![&belief.belief, &belief.reasoning];
    if let Some(evidence) = &belief.evidence {
        parts.push(evidence);
    }
    for implication in &belief.implications {
        parts.push(implication);
    }
    parts.join(" ").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals_with_number() -> ProblemSignals {
        ProblemSignals::new(vec!["40%".to_string()], vec!["churn".to_string()])
    }

    #[test]
    fn test_specificity_pulls_number_into_evidence() {
        let belief = BeliefStatement::new("The process is slow", "handoffs add delay");
        let refined = transform(belief, Dimension::Specificity, &signals_with_number());

        assert_eq!(refined.evidence.as_deref(), Some("(context signal: 40%)"));
    }

    #[test]
    fn test_specificity_noop_when_digit_present() {
        let belief = BeliefStatement::new("Latency rose 40%", "measured over 3 weeks");
        let refined = transform(belief.clone(), Dimension::Specificity, &signals_with_number());

        assert_eq!(refined.evidence, belief.evidence);
        assert_eq!(refined.reasoning, belief.reasoning);
    }

    #[test]
    fn test_specificity_noop_without_signals() {
        let belief = BeliefStatement::new("The process is slow", "handoffs add delay");
        let refined = transform(belief, Dimension::Specificity, &ProblemSignals::default());

        assert!(refined.evidence.is_none());
    }

    #[test]
    fn test_specificity_marks_unmeasured_implications() {
        let belief = BeliefStatement::new("Claim", "uses a metric already")
            .with_implications(vec![
                "reduce the handoffs".to_string(),
                "track the queue length".to_string(),
            ]);
        let refined = transform(belief, Dimension::Specificity, &ProblemSignals::default());

        assert!(refined.implications[0].ends_with("(measure the impact)"));
        assert_eq!(refined.implications[1], "track the queue length");
    }

    #[test]
    fn test_specificity_prefixes_vague_reasoning() {
        let belief = BeliefStatement::new("Claim", "it feels slower than before");
        let refined = transform(belief, Dimension::Specificity, &ProblemSignals::default());

        assert!(refined.reasoning.starts_with("Specifically: "));
    }

    #[test]
    fn test_novelty_reframes_belief_and_reasoning() {
        let belief = BeliefStatement::new("The team is overloaded", "too many tickets");
        let refined = transform(belief, Dimension::Novelty, &ProblemSignals::default());

        assert!(refined.belief.starts_with("What this is actually about: "));
        assert!(refined.reasoning.contains("structural property"));
    }

    #[test]
    fn test_novelty_noop_when_already_reframed() {
        let belief = BeliefStatement::new(
            "This is not about headcount, the root cause is queue design",
            "a structural constraint in intake",
        );
        let refined = transform(belief.clone(), Dimension::Novelty, &ProblemSignals::default());

        assert_eq!(refined, belief);
    }

    #[test]
    fn test_actionability_verb_choice() {
        let belief = BeliefStatement::new("Claim", "reasoning").with_implications(vec![
            "look at the conversion rate data".to_string(),
            "revisit the module boundary design".to_string(),
            "figure out who owns the decision".to_string(),
        ]);
        let refined = transform(belief, Dimension::Actionability, &ProblemSignals::default());

        assert!(refined.implications[0].starts_with("Measure: "));
        assert!(refined.implications[1].starts_with("Examine: "));
        assert!(refined.implications[2].starts_with("Identify: "));
    }

    #[test]
    fn test_actionability_keeps_verb_led_implications() {
        let belief = BeliefStatement::new("Claim", "reasoning")
            .with_implications(vec!["Profile the slow endpoint".to_string()]);
        let refined = transform(belief, Dimension::Actionability, &ProblemSignals::default());

        assert_eq!(refined.implications[0], "Profile the slow endpoint");
    }

    #[test]
    fn test_actionability_appends_validation_step() {
        let belief = BeliefStatement::new("Claim", "reasoning")
            .with_implications(vec!["Fix the queue".to_string()]);
        let refined = transform(belief, Dimension::Actionability, &ProblemSignals::default());

        assert_eq!(refined.implications.len(), 2);
        assert!(refined.implications[1].starts_with("Validate"));
    }

    #[test]
    fn test_actionability_respects_implication_cap() {
        let implications: Vec<String> =
            (0..5).map(|i| format!("Fix item {}", i)).collect();
        let belief = BeliefStatement::new("Claim", "reasoning").with_implications(implications);
        let refined = transform(belief, Dimension::Actionability, &ProblemSignals::default());

        assert_eq!(refined.implications.len(), 5);
    }

    #[test]
    fn test_coherence_prefixes_because() {
        let belief = BeliefStatement::new("Claim", "the queue only grows on Mondays");
        let refined = transform(belief, Dimension::Coherence, &ProblemSignals::default());

        assert!(refined.reasoning.starts_with("Because "));
    }

    #[test]
    fn test_coherence_echoes_evidence() {
        let belief = BeliefStatement::new("Claim", "because intake is unbounded")
            .with_evidence("intake doubled in March");
        let refined = transform(belief, Dimension::Coherence, &ProblemSignals::default());

        assert!(refined.reasoning.contains("intake doubled in March"));
    }

    #[test]
    fn test_coherence_corroborates_confident_beliefs() {
        let confident = BeliefStatement::new("Claim", "because intake is unbounded")
            .with_confidence(0.8);
        let unsure = BeliefStatement::new("Claim", "because intake is unbounded")
            .with_confidence(0.5);

        let refined_confident =
            transform(confident, Dimension::Coherence, &ProblemSignals::default());
        let refined_unsure = transform(unsure, Dimension::Coherence, &ProblemSignals::default());

        assert!(refined_confident.reasoning.contains("Multiple signals"));
        assert!(!refined_unsure.reasoning.contains("Multiple signals"));
    }

    #[test]
    fn test_apply_only_listed_dimensions() {
        let belief = BeliefStatement::new("The team is overloaded", "too many tickets");
        let refined = apply(
            belief,
            &[Dimension::Novelty],
            &signals_with_number(),
        );

        // Novelty ran, specificity did not
        assert!(refined.belief.starts_with("What this is actually about: "));
        assert!(refined.evidence.is_none());
    }

    #[test]
    fn test_second_pass_is_a_noop() {
        let belief = BeliefStatement::new("The team is overloaded", "too many tickets")
            .with_confidence(0.9)
            .with_implications(vec!["reduce the intake".to_string()]);
        let signals = signals_with_number();

        let once = apply(belief, &Dimension::ALL, &signals);
        let twice = apply(once.clone(), &Dimension::ALL, &signals);

        assert_eq!(once, twice);
    }
}
