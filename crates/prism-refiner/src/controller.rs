//! Refinement controller: the iterate-score-transform-rescore loop

use crate::advisor::advise;
use crate::config::RefinerConfig;
use crate::error::RefinerError;
use crate::transform;
use crate::types::{
    RefinementAction, RefinementOutcome, RefinementResult, TraceEntry,
};
use prism_domain::traits::{BeliefGenerator, SignalExtractor};
use prism_domain::{Application, Dimension, ProblemSignals, QualityScore, RunId};
use prism_scorer::Scorer;
use std::fmt;
use tracing::{debug, info};

/// One refinement request: a lens applied to a problem
#[derive(Debug, Clone)]
pub struct RefinementRequest {
    /// Lens identifier
    pub lens: String,

    /// Free-text problem description
    pub problem_context: String,

    /// Definition text handed to the belief generator
    pub lens_definition: String,
}

impl RefinementRequest {
    /// Create a request
    pub fn new(
        lens: impl Into<String>,
        problem_context: impl Into<String>,
        lens_definition: impl Into<String>,
    ) -> Self {
        Self {
            lens: lens.into(),
            problem_context: problem_context.into(),
            lens_definition: lens_definition.into(),
        }
    }
}

/// Drives quality-gated refinement over externally generated beliefs.
///
/// The controller owns the termination policy: it converges when the
/// overall score meets the threshold, stalls when no feedback remains or an
/// iteration fails to meaningfully improve, and exhausts when the iteration
/// budget runs out. A stalled iteration is rolled back by not adopting it;
/// the caller always receives the best adopted state.
///
/// Fully synchronous and stateless across calls: each run owns its values
/// exclusively, so independent runs can be parallelized by the caller.
pub struct Refiner<G, X>
where
    G: BeliefGenerator,
    X: SignalExtractor,
{
    generator: G,
    signals: X,
    scorer: Scorer,
    config: RefinerConfig,
}

impl<G, X> Refiner<G, X>
where
    G: BeliefGenerator,
    X: SignalExtractor,
    G::Error: fmt::Display,
    X::Error: fmt::Display,
{
    /// Create a refiner with default scoring and loop configuration
    pub fn new(generator: G, signals: X) -> Self {
        Self {
            generator,
            signals,
            scorer: Scorer::default_config(),
            config: RefinerConfig::default(),
        }
    }

    /// Replace the loop configuration
    pub fn with_config(mut self, config: RefinerConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the scorer (custom weights or lens vocabulary)
    pub fn with_scorer(mut self, scorer: Scorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// The active loop configuration
    pub fn config(&self) -> &RefinerConfig {
        &self.config
    }

    /// Score an application without refining it
    pub fn score(&self, application: &Application) -> QualityScore {
        self.scorer.score(application)
    }

    /// Run one quality-gated refinement
    ///
    /// Generates the initial beliefs, scores them, and loops: compute
    /// feedback for sub-threshold dimensions, transform every belief for
    /// every flagged dimension, re-score, and adopt the refined state only
    /// when it meaningfully improves. Collaborator failures propagate;
    /// ending below the threshold is a normal result, not an error.
    pub fn refine(&self, request: &RefinementRequest) -> Result<RefinementResult, RefinerError> {
        let run_id = RunId::new();
        // The initial generation always happens, so the budget is at least 1
        let max_iterations = self.config.max_iterations.max(1);

        info!(
            "Starting refinement run {} for lens '{}' (threshold {}, budget {})",
            run_id, request.lens, self.config.quality_threshold, max_iterations
        );

        let beliefs = self
            .generator
            .generate(&request.lens, &request.problem_context, &request.lens_definition)
            .map_err(|e| RefinerError::Generator(e.to_string()))?;

        let mut current = Application::new(
            request.lens.clone(),
            beliefs,
            request.problem_context.clone(),
        );
        let mut current_score = self.scorer.score(&current);

        debug!(
            "Iteration 1: {} belief(s), overall {:.2}",
            current.belief_count(),
            current_score.overall
        );

        let mut trace = vec![TraceEntry {
            iteration: 1,
            beliefs: current.belief_statements.clone(),
            score: current_score,
            action: RefinementAction::InitialGeneration,
            feedback: Vec::new(),
        }];

        if current_score.overall >= self.config.quality_threshold {
            info!(
                "Run {} converged on the initial generation (overall {:.2})",
                run_id, current_score.overall
            );
            return Ok(build_result(
                run_id,
                current,
                current_score,
                trace,
                RefinementOutcome::Converged,
            ));
        }

        let mut signals: Option<ProblemSignals> = None;
        let mut outcome = RefinementOutcome::Exhausted;

        for iteration in 2..=max_iterations {
            let feedback = advise(&current_score, self.config.feedback_threshold);
            if feedback.is_empty() {
                debug!(
                    "Iteration {}: no dimension below {}; stalling",
                    iteration, self.config.feedback_threshold
                );
                outcome = RefinementOutcome::Stalled;
                break;
            }

            let dimensions: Vec<Dimension> = feedback.iter().map(|f| f.dimension).collect();
            debug!(
                "Iteration {}: refining {} dimension(s): {:?}",
                iteration,
                dimensions.len(),
                dimensions
            );

            // Signals feed only the specificity transformer; extract them
            // once, right before the first transformation pass actually runs
            if signals.is_none() {
                signals = Some(
                    self.signals
                        .extract(&request.problem_context)
                        .map_err(|e| RefinerError::Signals(e.to_string()))?,
                );
            }
            let signals: &ProblemSignals = signals.get_or_insert_with(ProblemSignals::default);

            let refined = current
                .belief_statements
                .iter()
                .map(|b| transform::apply(b.clone(), &dimensions, signals))
                .collect();
            let candidate = current.with_beliefs(refined);
            let candidate_score = self.scorer.score(&candidate);

            trace.push(TraceEntry {
                iteration,
                beliefs: candidate.belief_statements.clone(),
                score: candidate_score,
                action: RefinementAction::Refined {
                    dimensions: dimensions.clone(),
                },
                feedback,
            });

            let improvement = candidate_score.overall - current_score.overall;
            debug!(
                "Iteration {}: overall {:.2} -> {:.2} (improvement {:.3})",
                iteration, current_score.overall, candidate_score.overall, improvement
            );

            if improvement <= self.config.min_improvement {
                // The candidate did not meaningfully help; keep the prior state
                info!(
                    "Run {} stalled at iteration {} (improvement {:.3})",
                    run_id, iteration, improvement
                );
                outcome = RefinementOutcome::Stalled;
                break;
            }

            current = candidate;
            current_score = candidate_score;

            if current_score.overall >= self.config.quality_threshold {
                info!(
                    "Run {} converged at iteration {} (overall {:.2})",
                    run_id, iteration, current_score.overall
                );
                outcome = RefinementOutcome::Converged;
                break;
            }
        }

        if outcome == RefinementOutcome::Exhausted {
            info!(
                "Run {} exhausted its budget below threshold (overall {:.2})",
                run_id, current_score.overall
            );
        }

        Ok(build_result(run_id, current, current_score, trace, outcome))
    }
}

fn build_result(
    run_id: RunId,
    application: Application,
    quality: QualityScore,
    trace: Vec<TraceEntry>,
    outcome: RefinementOutcome,
) -> RefinementResult {
    RefinementResult {
        run_id,
        lens: application.lens,
        beliefs: application.belief_statements,
        quality,
        iterations_taken: trace.len(),
        trace,
        outcome,
        threshold_met: outcome == RefinementOutcome::Converged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockGenerator, StaticSignals};
    use prism_domain::BeliefStatement;

    fn vague_beliefs() -> Vec<BeliefStatement> {
        vec![BeliefStatement::new(
            "We should improve the process",
            "we should improve the process",
        )
        .with_implications(vec!["consider optimizing".to_string()])]
    }

    fn request() -> RefinementRequest {
        RefinementRequest::new(
            "Inversion",
            "delivery slipped 40% this quarter",
            "invert the problem",
        )
    }

    #[test]
    fn test_refinement_improves_vague_input() {
        let refiner = Refiner::new(
            MockGenerator::new(vague_beliefs()),
            StaticSignals::with_numbers(vec!["40%"]),
        );

        let result = refiner.refine(&request()).unwrap();

        assert!(result.iterations_taken >= 2);
        assert!(result.quality.overall > result.initial_quality().overall);
    }

    #[test]
    fn test_zero_iteration_budget_is_clamped_to_one() {
        let refiner = Refiner::new(
            MockGenerator::new(vague_beliefs()),
            StaticSignals::default(),
        )
        .with_config(RefinerConfig {
            max_iterations: 0,
            ..RefinerConfig::default()
        });

        let result = refiner.refine(&request()).unwrap();

        assert_eq!(result.iterations_taken, 1);
        assert_eq!(result.outcome, RefinementOutcome::Exhausted);
    }

    #[test]
    fn test_standalone_scoring() {
        let refiner = Refiner::new(
            MockGenerator::new(vague_beliefs()),
            StaticSignals::default(),
        );
        let app = Application::new("Inversion", vague_beliefs(), "ctx");

        let score = refiner.score(&app);
        assert!(score.overall > 0.0 && score.overall < 1.0);
    }

    #[test]
    fn test_trace_actions_are_labeled() {
        let refiner = Refiner::new(
            MockGenerator::new(vague_beliefs()),
            StaticSignals::with_numbers(vec!["40%"]),
        );

        let result = refiner.refine(&request()).unwrap();

        assert_eq!(result.trace[0].action.to_string(), "initial_generation");
        if result.iterations_taken > 1 {
            assert!(result.trace[1]
                .action
                .to_string()
                .starts_with("refined_based_on_"));
            assert!(!result.trace[1].feedback.is_empty());
        }
    }
}
