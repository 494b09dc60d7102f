//! Prism Scorer
//!
//! Heuristic quality scoring for lens applications. Maps one application
//! (lens + belief statements + problem context) to four dimension scores in
//! [0, 1] plus a weighted overall score.
//!
//! The scorer is deterministic, side-effect free, and infallible: missing
//! or empty fields degrade scores toward their baselines, they never error.
//! The four dimensions are computed independently so that the per-dimension
//! transformers in `prism-refiner` can be verified to move only their
//! intended dimension.
//!
//! # Examples
//!
//! ```
//! use prism_domain::{Application, BeliefStatement};
//! use prism_scorer::Scorer;
//!
//! let beliefs = vec![BeliefStatement::new(
//!     "Checkout latency is the real bottleneck",
//!     "Because the payment service blocks rendering, p95 rose 40%",
//! )];
//! let app = Application::new("Theory of Constraints", beliefs, "checkout is slow");
//!
//! let score = Scorer::default_config().score(&app);
//! assert!(score.overall >= 0.0 && score.overall <= 1.0);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod lexicon;
mod scorer;
pub mod vocabulary;

pub use config::ScorerConfig;
pub use scorer::Scorer;
pub use vocabulary::LensVocabulary;
