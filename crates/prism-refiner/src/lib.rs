//! Prism Refiner
//!
//! Quality-gated iterative refinement of lens applications. Given the
//! initial belief set an external generator produced, the refiner scores it,
//! asks the feedback advisor what falls short, applies targeted
//! per-dimension transformations, and re-scores, until the quality threshold
//! is met, no further improvement occurs, or the iteration budget runs out.
//!
//! Refinement is copy-on-write: every iteration builds a new application
//! value, so a rejected iteration is discarded by simply not adopting it.
//!
//! # Examples
//!
//! ```
//! use prism_domain::BeliefStatement;
//! use prism_refiner::{MockGenerator, Refiner, RefinementRequest, StaticSignals};
//!
//! let generator = MockGenerator::new(vec![BeliefStatement::new(
//!     "We should improve the process",
//!     "we should improve the process",
//! )]);
//! let refiner = Refiner::new(generator, StaticSignals::default());
//!
//! let request = RefinementRequest::new("Inversion", "delivery feels slow", "invert the problem");
//! let result = refiner.refine(&request).unwrap();
//!
//! assert!(result.iterations_taken >= 1);
//! assert_eq!(result.trace.len(), result.iterations_taken);
//! ```

#![warn(missing_docs)]

pub mod advisor;
pub mod config;
pub mod controller;
pub mod error;
pub mod mock;
pub mod transform;
pub mod types;

pub use advisor::advise;
pub use config::RefinerConfig;
pub use controller::{Refiner, RefinementRequest};
pub use error::RefinerError;
pub use mock::{MockGenerator, StaticSignals};
pub use types::{
    FeedbackItem, RefinementAction, RefinementOutcome, RefinementResult, RefinementSummary,
    TraceEntry,
};
