//! Fixed word lists and text helpers behind the dimension heuristics
//!
//! Matching is plain lowercase substring search. Several entries are stems
//! ("improv", "optimiz") so that inflected forms match too. All helpers
//! expect already-lowercased input.

/// Vague qualifiers that pull specificity down, one penalty per occurrence
pub const VAGUE_QUALIFIERS: &[&str] = &[
    "improv",
    "optimiz",
    "consider",
    "enhanc",
    "streamlin",
    "leverag",
    "robust",
    "efficien",
    "better",
    "effectiv",
    "appropriat",
];

/// Metric-like patterns: percentages, durations, currency
pub const METRIC_PATTERNS: &[&str] = &[
    "%", " ms", "msec", "second", "minute", "hour", "day", "week", "month", "$", "p95", "p99",
];

/// Domain-concrete terminology (stems)
pub const DOMAIN_TERMS: &[&str] = &[
    "database",
    "api",
    "cache",
    "latency",
    "deploy",
    "service",
    "queue",
    "schema",
    "endpoint",
    "pipeline",
    "index",
    "throughput",
    "migration",
    "timeout",
    "memory",
    "conversion",
    "churn",
    "onboarding",
    "backlog",
    "infrastructure",
    "bottleneck",
];

/// Measurement language expected inside actionable implications
pub const MEASUREMENT_TERMS: &[&str] = &[
    "measure", "metric", "track", "count", "percent", "baseline", "target", "quantif", "rate",
    "benchmark",
];

/// Reframing language that signals a lens actually shifted the perspective
pub const REFRAMING_PHRASES: &[&str] = &[
    "not about",
    "actually",
    "root cause",
    "the real",
    "contrary",
    "turns out",
    "reframe",
];

/// Structural / systemic vocabulary
pub const STRUCTURAL_TERMS: &[&str] = &[
    "structural",
    "systemic",
    "feedback loop",
    "incentive",
    "second-order",
    "emergent",
    "coupling",
    "constraint",
    "layer",
    "dynamic",
];

/// Counter-intuitive framing markers
pub const COUNTER_INTUITIVE_MARKERS: &[&str] = &[
    "counterintuitive",
    "counter-intuitive",
    "paradox",
    "opposite",
    "inverse",
    "surprising",
];

/// Generic-advice phrases that penalize novelty
pub const GENERIC_ADVICE_PHRASES: &[&str] = &[
    "best practice",
    "find balance",
    "right balance",
    "it depends",
    "holistic",
    "synergy",
    "win-win",
];

/// The fixed action-verb set recognized at the start of an implication
pub const ACTION_VERBS: &[&str] = &[
    "identify",
    "measure",
    "test",
    "build",
    "create",
    "fix",
    "change",
    "implement",
    "examine",
    "profile",
    "validate",
    "check",
];

/// Conditional / decision language
pub const CONDITIONAL_MARKERS: &[&str] =
    &["if ", "when ", "unless", "depending on", "decide", "choose", "either"];

/// Validation / testing language
pub const VALIDATION_MARKERS: &[&str] =
    &["test", "validate", "verify", "confirm", "experiment", "pilot", "a/b"];

/// Sequencing language ("first", "then", "week N")
pub const SEQUENCING_MARKERS: &[&str] =
    &["first", "then", "next", "finally", "step", "week ", "phase"];

/// Logical connectors between reasoning and claim
pub const LOGICAL_CONNECTORS: &[&str] = &[
    "because",
    "therefore",
    "this means",
    "as a result",
    "which leads to",
    "so that",
    "consequently",
];

/// Negation words for the contradiction heuristic, matched as whole words
pub const NEGATION_WORDS: &[&str] = &["not", "never", "cannot", "won't", "isn't", "doesn't"];

/// Absolute / affirmation words for the contradiction heuristic, matched
/// as whole words
pub const ABSOLUTE_WORDS: &[&str] =
    &["always", "must", "definitely", "certainly", "every", "undoubtedly"];

/// Corroboration language ("multiple signals point the same way")
pub const CORROBORATION_MARKERS: &[&str] =
    &["multiple signals", "corroborat", "consistent with", "converg"];

/// True when any term occurs in the text
pub fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| text.contains(t))
}

/// Number of terms that occur at least once
pub fn count_distinct(text: &str, terms: &[&str]) -> usize {
    terms.iter().filter(|t| text.contains(*t)).count()
}

/// Total occurrences across all terms
pub fn count_occurrences(text: &str, terms: &[&str]) -> usize {
    terms.iter().map(|t| text.matches(t).count()).sum()
}

/// Total occurrences counted on word boundaries, so "cannot" never also
/// registers as "not". Apostrophes and hyphens stay inside a word.
pub fn count_word_occurrences(text: &str, words: &[&str]) -> usize {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '-'))
        .filter(|w| !w.is_empty() && words.contains(w))
        .count()
}

/// True when the text contains any ASCII digit
pub fn has_digit(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_digit())
}

/// Whitespace-separated tokens that contain a digit, trimmed of trailing
/// punctuation ("40%", "3", "$12k")
pub fn numeric_tokens(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|t| has_digit(t))
        .map(|t| t.trim_matches(|c: char| matches!(c, '.' | ',' | ';' | ':' | ')' | '(')).to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// True when the implication's first word (ignoring a trailing colon) is a
/// recognized action verb
pub fn starts_with_action_verb(implication: &str) -> bool {
    implication
        .split_whitespace()
        .next()
        .map(|w| {
            let w = w.trim_end_matches(':').to_lowercase();
            ACTION_VERBS.contains(&w.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_matching() {
        let text = "we should consider improving and optimizing";
        assert_eq!(count_occurrences(text, VAGUE_QUALIFIERS), 3);
    }

    #[test]
    fn test_count_distinct_vs_occurrences() {
        let text = "measure the metric, then measure again";
        assert_eq!(count_distinct(text, MEASUREMENT_TERMS), 2);
        assert_eq!(count_occurrences(text, &["measure"]), 2);
    }

    #[test]
    fn test_has_digit() {
        assert!(has_digit("latency rose 40%"));
        assert!(!has_digit("latency rose a lot"));
    }

    #[test]
    fn test_numeric_tokens() {
        let tokens = numeric_tokens("churn rose 40%, from $12k over 3 weeks.");
        assert_eq!(tokens, vec!["40%", "$12k", "3"]);
    }

    #[test]
    fn test_starts_with_action_verb() {
        assert!(starts_with_action_verb("Measure the p95 baseline"));
        assert!(starts_with_action_verb("measure: the p95 baseline"));
        assert!(!starts_with_action_verb("consider optimizing"));
        assert!(!starts_with_action_verb(""));
    }

    #[test]
    fn test_contains_any_empty_text() {
        assert!(!contains_any("", LOGICAL_CONNECTORS));
    }

    #[test]
    fn test_word_counting_does_not_double_count_cannot() {
        assert_eq!(count_word_occurrences("it cannot ship", NEGATION_WORDS), 1);
        assert_eq!(
            count_word_occurrences("it is not done and cannot ship", NEGATION_WORDS),
            2
        );
    }

    #[test]
    fn test_word_counting_respects_boundaries() {
        // "every" must not match inside "everything"
        assert_eq!(count_word_occurrences("everything is fine", ABSOLUTE_WORDS), 0);
        assert_eq!(
            count_word_occurrences("it must always work, in every case", ABSOLUTE_WORDS),
            3
        );
        // Apostrophes stay inside a word
        assert_eq!(count_word_occurrences("it won't recover", NEGATION_WORDS), 1);
    }
}
