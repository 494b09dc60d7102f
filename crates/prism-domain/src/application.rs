//! Application - one lens applied to one problem, the unit under evaluation

use crate::BeliefStatement;
use serde::{Deserialize, Serialize};

/// One lens applied to one problem description.
///
/// An `Application` is the unit that gets scored and refined. It is built
/// fresh at every refinement iteration and discarded when the refinement
/// call returns; no caller ever observes a partially refined value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Lens identifier
    pub lens: String,

    /// Belief statements in generation order
    pub belief_statements: Vec<BeliefStatement>,

    /// Free-text problem description the lens was applied to
    pub problem_context: String,
}

impl Application {
    /// Create a new application, tagging each belief with the lens name
    ///
    /// # Examples
    ///
    /// ```
    /// use prism_domain::{Application, BeliefStatement};
    ///
    /// let beliefs = vec![BeliefStatement::new("claim", "reasoning")];
    /// let app = Application::new("Inversion", beliefs, "signups dropped 20%");
    /// assert_eq!(app.belief_statements[0].lens, "Inversion");
    /// ```
    pub fn new(
        lens: impl Into<String>,
        belief_statements: Vec<BeliefStatement>,
        problem_context: impl Into<String>,
    ) -> Self {
        let lens = lens.into();
        let belief_statements = belief_statements
            .into_iter()
            .map(|b| b.with_lens(lens.clone()))
            .collect();

        Self {
            lens,
            belief_statements,
            problem_context: problem_context.into(),
        }
    }

    /// Build the next iteration of this application from a refined belief set
    ///
    /// Lens and problem context carry over unchanged; the prior value is
    /// left intact so a stalled iteration can be rolled back by dropping
    /// the new one.
    pub fn with_beliefs(&self, belief_statements: Vec<BeliefStatement>) -> Self {
        Self {
            lens: self.lens.clone(),
            belief_statements,
            problem_context: self.problem_context.clone(),
        }
    }

    /// Number of belief statements
    pub fn belief_count(&self) -> usize {
        self.belief_statements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lens_tagged_at_aggregation() {
        let beliefs = vec![
            BeliefStatement::new("a", "r1"),
            BeliefStatement::new("b", "r2"),
        ];
        let app = Application::new("Theory of Constraints", beliefs, "context");

        assert!(app
            .belief_statements
            .iter()
            .all(|b| b.lens == "Theory of Constraints"));
    }

    #[test]
    fn test_with_beliefs_preserves_original() {
        let app = Application::new("Inversion", vec![BeliefStatement::new("a", "r")], "ctx");
        let refined = app.with_beliefs(vec![
            BeliefStatement::new("a'", "r'").with_lens("Inversion"),
        ]);

        assert_eq!(app.belief_statements[0].belief, "a");
        assert_eq!(refined.belief_statements[0].belief, "a'");
        assert_eq!(refined.problem_context, app.problem_context);
    }

    #[test]
    fn test_empty_belief_set_tolerated() {
        let app = Application::new("Inversion", Vec::new(), "ctx");
        assert_eq!(app.belief_count(), 0);
    }
}
