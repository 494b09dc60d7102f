//! Trait definitions for external collaborators
//!
//! These traits are the entire boundary between the refinement core and the
//! systems that feed it. Implementations live outside this workspace (or in
//! `prism-refiner`'s mocks for testing). Collaborator failures propagate to
//! the caller; the core cannot proceed without their output and does not
//! try to mask them.

use crate::{BeliefStatement, ProblemSignals};

/// Produces the initial belief set for a lens applied to a problem.
///
/// Implementations must return confidences within [0.0, 1.0] when they
/// supply one. An empty belief set is legal; the scorer degrades to
/// baseline scores rather than erroring.
pub trait BeliefGenerator {
    /// Error type for generation failures
    type Error;

    /// Generate belief statements for one lens/problem pair
    fn generate(
        &self,
        lens: &str,
        problem_context: &str,
        lens_definition: &str,
    ) -> Result<Vec<BeliefStatement>, Self::Error>;
}

/// Extracts raw cues (numbers, keywords) from a problem description.
///
/// Consumed only by the specificity transformer. A bundle with no numeric
/// cues is legal and turns the numeric-evidence rule into a no-op.
pub trait SignalExtractor {
    /// Error type for extraction failures
    type Error;

    /// Extract signals from free text
    fn extract(&self, problem_context: &str) -> Result<ProblemSignals, Self::Error>;
}
