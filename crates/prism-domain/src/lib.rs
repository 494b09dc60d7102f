//! Prism Domain Layer
//!
//! This crate contains the core domain model for Prism: the value objects
//! that flow through scoring and refinement, and the trait interfaces for
//! the external collaborators (belief generation, signal extraction).
//!
//! ## Key Concepts
//!
//! - **Belief statement**: one claim produced by applying a lens, with
//!   reasoning, optional evidence, optional confidence, and implications
//! - **Application**: one lens applied to one problem - the unit that gets
//!   scored and refined
//! - **Quality score**: four independent dimension scores in [0, 1] plus a
//!   weighted overall
//! - **Dimension**: the closed set of quality dimensions (specificity,
//!   novelty, actionability, coherence)
//!
//! ## Architecture
//!
//! Value semantics throughout: refinement never mutates an `Application`,
//! it builds a new one, so a rejected iteration is discarded by simply not
//! adopting the new value. Infrastructure (the actual generator, the report
//! layer) lives in other crates and behind the traits defined here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod application;
pub mod belief;
pub mod dimension;
pub mod quality;
pub mod run;
pub mod signals;
pub mod traits;

// Re-exports for convenience
pub use application::Application;
pub use belief::BeliefStatement;
pub use dimension::Dimension;
pub use quality::{QualityScore, QualityWeights};
pub use run::RunId;
pub use signals::ProblemSignals;
