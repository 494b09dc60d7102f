//! Result, trace, and feedback types for refinement runs

use prism_domain::{BeliefStatement, Dimension, QualityScore, RunId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One structured "what's wrong + how to fix it" item for a sub-threshold
/// dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackItem {
    /// The dimension that fell short
    pub dimension: Dimension,

    /// What is wrong
    pub issue: String,

    /// How to fix it
    pub suggestions: Vec<String>,
}

/// What produced the belief set recorded in a trace entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefinementAction {
    /// Iteration 1: the external generator's output, untouched
    InitialGeneration,

    /// A refinement pass targeting the listed dimensions
    Refined {
        /// Dimensions the transformers targeted, in application order
        dimensions: Vec<Dimension>,
    },
}

impl fmt::Display for RefinementAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefinementAction::InitialGeneration => write!(f, "initial_generation"),
            RefinementAction::Refined { dimensions } => {
                write!(f, "refined_based_on")?;
                for dim in dimensions {
                    write!(f, "_{}", dim)?;
                }
                Ok(())
            }
        }
    }
}

/// One record per refinement iteration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// Iteration index, 1-based
    pub iteration: usize,

    /// The belief set that was evaluated this iteration
    pub beliefs: Vec<BeliefStatement>,

    /// The score that belief set received
    pub score: QualityScore,

    /// What produced this belief set
    pub action: RefinementAction,

    /// The feedback that drove this iteration (empty for iteration 1)
    pub feedback: Vec<FeedbackItem>,
}

/// Terminal state of a refinement run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefinementOutcome {
    /// The overall score met the quality threshold
    Converged,

    /// The iteration budget ran out below the threshold
    Exhausted,

    /// No feedback remained or an iteration failed to meaningfully improve
    Stalled,
}

/// Final output of a refinement run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefinementResult {
    /// Identifier for this run
    pub run_id: RunId,

    /// Lens that was applied
    pub lens: String,

    /// The final (adopted) belief set
    pub beliefs: Vec<BeliefStatement>,

    /// The final (adopted) quality score
    pub quality: QualityScore,

    /// Iterations actually recorded in the trace
    pub iterations_taken: usize,

    /// One entry per iteration, including rejected ones
    pub trace: Vec<TraceEntry>,

    /// How the run terminated
    pub outcome: RefinementOutcome,

    /// True only when the run converged
    pub threshold_met: bool,
}

impl RefinementResult {
    /// Quality of the initial generation (iteration 1)
    ///
    /// A refiner-produced trace always carries the initial entry; a
    /// hand-built result with an empty trace falls back to the final score.
    pub fn initial_quality(&self) -> QualityScore {
        self.trace.first().map_or(self.quality, |entry| entry.score)
    }

    /// Condense the run into a human-readable summary
    ///
    /// Scores are rounded to 2 decimal places for reporting; the raw values
    /// stay on the result itself.
    pub fn summarize(&self) -> RefinementSummary {
        let initial = self.initial_quality().rounded().overall;
        let final_quality = self.quality.rounded().overall;
        let improvement = ((final_quality - initial) * 100.0).round() / 100.0;

        let message = match self.outcome {
            RefinementOutcome::Converged => format!(
                "Quality threshold met after {} iteration(s) (overall {:.2})",
                self.iterations_taken, final_quality
            ),
            RefinementOutcome::Exhausted => format!(
                "Iteration budget exhausted below threshold (overall {:.2})",
                final_quality
            ),
            RefinementOutcome::Stalled => format!(
                "Refinement stalled; keeping the best state (overall {:.2})",
                final_quality
            ),
        };

        RefinementSummary {
            initial_quality: initial,
            final_quality,
            improvement,
            threshold_met: self.threshold_met,
            message,
        }
    }
}

/// Human-readable condensation of a refinement run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefinementSummary {
    /// Overall score of iteration 1, rounded to 2 decimal places
    pub initial_quality: f64,

    /// Overall score of the final adopted state, rounded
    pub final_quality: f64,

    /// final_quality - initial_quality, rounded
    pub improvement: f64,

    /// Whether the run converged
    pub threshold_met: bool,

    /// One-line description of the outcome
    pub message: String,
}
