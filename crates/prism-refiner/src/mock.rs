//! Deterministic mock collaborators for testing
//!
//! The real generator and signal extractor live outside this workspace;
//! these mocks stand in for them in unit tests, integration tests, and
//! downstream consumers' tests. No network, no randomness.

use prism_domain::traits::{BeliefGenerator, SignalExtractor};
use prism_domain::{BeliefStatement, ProblemSignals};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors the mock collaborators can be configured to return
#[derive(Error, Debug)]
pub enum MockError {
    /// Configured failure
    #[error("Mock failure: {0}")]
    Failure(String),
}

/// Belief generator that returns a fixed belief set on every call
///
/// # Examples
///
/// ```
/// use prism_domain::BeliefStatement;
/// use prism_domain::traits::BeliefGenerator;
/// use prism_refiner::MockGenerator;
///
/// let generator = MockGenerator::new(vec![BeliefStatement::new("claim", "reasoning")]);
/// let beliefs = generator.generate("Inversion", "context", "definition").unwrap();
/// assert_eq!(beliefs.len(), 1);
/// assert_eq!(generator.call_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockGenerator {
    beliefs: Vec<BeliefStatement>,
    fail_with: Option<String>,
    call_count: Arc<Mutex<usize>>,
}

impl MockGenerator {
    /// Create a generator that always returns the given beliefs
    pub fn new(beliefs: Vec<BeliefStatement>) -> Self {
        Self {
            beliefs,
            fail_with: None,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a generator that always fails with the given message
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            beliefs: Vec::new(),
            fail_with: Some(message.into()),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of times `generate` was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl BeliefGenerator for MockGenerator {
    type Error = MockError;

    fn generate(
        &self,
        _lens: &str,
        _problem_context: &str,
        _lens_definition: &str,
    ) -> Result<Vec<BeliefStatement>, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        match &self.fail_with {
            Some(message) => Err(MockError::Failure(message.clone())),
            None => Ok(self.beliefs.clone()),
        }
    }
}

/// Signal extractor that returns a fixed signal bundle
///
/// The default instance returns an empty bundle, which turns the
/// specificity transformer's numeric-evidence rule into a no-op.
#[derive(Debug, Clone, Default)]
pub struct StaticSignals {
    signals: ProblemSignals,
    fail_with: Option<String>,
}

impl StaticSignals {
    /// Create an extractor that always returns the given signals
    pub fn new(signals: ProblemSignals) -> Self {
        Self {
            signals,
            fail_with: None,
        }
    }

    /// Convenience constructor from numeric cues alone
    pub fn with_numbers(numbers: Vec<&str>) -> Self {
        Self::new(ProblemSignals::new(
            numbers.into_iter().map(String::from).collect(),
            Vec::new(),
        ))
    }

    /// Create an extractor that always fails with the given message
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            signals: ProblemSignals::default(),
            fail_with: Some(message.into()),
        }
    }
}

impl SignalExtractor for StaticSignals {
    type Error = MockError;

    fn extract(&self, _problem_context: &str) -> Result<ProblemSignals, Self::Error> {
        match &self.fail_with {
            Some(message) => Err(MockError::Failure(message.clone())),
            None => Ok(self.signals.clone()),
        }
    }
}
