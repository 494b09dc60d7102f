//! Feedback advisor: maps sub-threshold dimension scores to feedback items

use crate::types::FeedbackItem;
use prism_domain::{Dimension, QualityScore};

/// Map a score to structured feedback, one item per dimension strictly
/// below `feedback_threshold`.
///
/// Pure function of the score alone; the belief content never enters. A
/// dimension at or above the threshold contributes nothing even if it is
/// not perfect, so an empty return is the loop's natural stop signal.
///
/// # Examples
///
/// ```
/// use prism_domain::{QualityScore, QualityWeights};
/// use prism_refiner::advise;
///
/// let score = QualityScore::from_dimensions(0.4, 0.8, 0.8, 0.8, &QualityWeights::default());
/// let feedback = advise(&score, 0.6);
///
/// assert_eq!(feedback.len(), 1);
/// assert_eq!(feedback[0].dimension.as_str(), "specificity");
/// ```
pub fn advise(score: &QualityScore, feedback_threshold: f64) -> Vec<FeedbackItem> {
    Dimension::ALL
        .into_iter()
        .filter(|dim| score.get(*dim) < feedback_threshold)
        .map(item_for)
        .collect()
}

fn item_for(dimension: Dimension) -> FeedbackItem {
    let (issue, suggestions) = match dimension {
        Dimension::Specificity => (
            "Beliefs are too abstract: few numbers, metrics, or concrete observations",
            vec![
                "Quote a number or measurement from the problem description",
                "Name the concrete component or layer the belief is about",
                "Attach an observable piece of evidence to each belief",
            ],
        ),
        Dimension::Novelty => (
            "Beliefs restate the problem or give generic advice instead of reframing it",
            vec![
                "State what the problem is actually about, not what it appears to be about",
                "Use the lens's own vocabulary to name the pattern",
                "Point at the structural or systemic cause behind the symptom",
            ],
        ),
        Dimension::Actionability => (
            "Implications are not directly actionable",
            vec![
                "Start each implication with an action verb",
                "Add a validation step that would confirm or refute the belief",
                "Order the implications as a sequence a reader could follow",
            ],
        ),
        Dimension::Coherence => (
            "The beliefs do not hang together as one argument",
            vec![
                "Connect reasoning to the claim with an explicit logical connector",
                "Echo the evidence inside the reasoning",
                "Prefer one to three well-supported beliefs over many fragments",
            ],
        ),
    };

    FeedbackItem {
        dimension,
        issue: issue.to_string(),
        suggestions: suggestions.into_iter().map(String::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_domain::QualityWeights;

    fn score(s: f64, n: f64, a: f64, c: f64) -> QualityScore {
        QualityScore::from_dimensions(s, n, a, c, &QualityWeights::default())
    }

    #[test]
    fn test_no_feedback_when_all_dimensions_pass() {
        assert!(advise(&score(0.61, 0.7, 0.9, 0.6), 0.6).is_empty());
    }

    #[test]
    fn test_dimension_exactly_at_threshold_contributes_nothing() {
        assert!(advise(&score(0.6, 0.6, 0.6, 0.6), 0.6).is_empty());
    }

    #[test]
    fn test_each_low_dimension_contributes_one_item() {
        let feedback = advise(&score(0.2, 0.9, 0.3, 0.9), 0.6);

        let dims: Vec<Dimension> = feedback.iter().map(|f| f.dimension).collect();
        assert_eq!(dims, vec![Dimension::Specificity, Dimension::Actionability]);
    }

    #[test]
    fn test_all_dimensions_low() {
        let feedback = advise(&score(0.1, 0.1, 0.1, 0.1), 0.6);
        assert_eq!(feedback.len(), 4);
        assert!(feedback.iter().all(|f| !f.suggestions.is_empty()));
    }

    #[test]
    fn test_pure_function_of_score() {
        let s = score(0.2, 0.9, 0.9, 0.9);
        assert_eq!(advise(&s, 0.6), advise(&s, 0.6));
    }
}
