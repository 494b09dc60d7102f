//! Refiner error types

use thiserror::Error;

/// Errors that can surface from a refinement run.
///
/// The refinement core itself has no failure modes; only collaborator
/// failures propagate, wrapped but never swallowed. A run that ends below
/// the quality threshold is a normal result, not an error.
#[derive(Error, Debug)]
pub enum RefinerError {
    /// The external belief generator failed
    #[error("Generator error: {0}")]
    Generator(String),

    /// The external signal extractor failed
    #[error("Signal extraction error: {0}")]
    Signals(String),
}
