//! Refinement loop configuration

/// Configuration for the refinement controller
///
/// # Examples
///
/// ```
/// use prism_refiner::RefinerConfig;
///
/// let config = RefinerConfig::default();
/// assert_eq!(config.quality_threshold, 0.7);
/// assert_eq!(config.max_iterations, 3);
///
/// // Demand more, allow more attempts
/// let config = RefinerConfig::strict();
/// assert_eq!(config.quality_threshold, 0.85);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RefinerConfig {
    /// Minimum acceptable overall score for a run to converge
    pub quality_threshold: f64,

    /// Iteration budget, counting the initial generation as iteration 1
    pub max_iterations: usize,

    /// Minimum overall-score gain for a refined iteration to be adopted;
    /// anything at or below this stalls the loop
    pub min_improvement: f64,

    /// Per-dimension score below which the advisor emits feedback
    pub feedback_threshold: f64,
}

impl Default for RefinerConfig {
    fn default() -> Self {
        Self {
            quality_threshold: 0.7,
            max_iterations: 3,
            min_improvement: 0.01,
            feedback_threshold: 0.6,
        }
    }
}

impl RefinerConfig {
    /// Demanding configuration: higher bar, larger budget
    pub fn strict() -> Self {
        Self {
            quality_threshold: 0.85,
            max_iterations: 5,
            min_improvement: 0.01,
            feedback_threshold: 0.7,
        }
    }

    /// Permissive configuration: accept sooner, try less
    pub fn lenient() -> Self {
        Self {
            quality_threshold: 0.6,
            max_iterations: 2,
            min_improvement: 0.005,
            feedback_threshold: 0.5,
        }
    }

    /// Default configuration with a custom threshold
    pub fn with_threshold(quality_threshold: f64) -> Self {
        Self {
            quality_threshold,
            ..Self::default()
        }
    }

    /// Default configuration with a custom iteration budget
    pub fn with_max_iterations(max_iterations: usize) -> Self {
        Self {
            max_iterations,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RefinerConfig::default();
        assert_eq!(config.quality_threshold, 0.7);
        assert_eq!(config.max_iterations, 3);
        assert_eq!(config.min_improvement, 0.01);
        assert_eq!(config.feedback_threshold, 0.6);
    }

    #[test]
    fn test_strict_config() {
        let config = RefinerConfig::strict();
        assert!(config.quality_threshold > RefinerConfig::default().quality_threshold);
        assert!(config.max_iterations > RefinerConfig::default().max_iterations);
    }

    #[test]
    fn test_lenient_config() {
        let config = RefinerConfig::lenient();
        assert!(config.quality_threshold < RefinerConfig::default().quality_threshold);
    }

    #[test]
    fn test_with_threshold() {
        let config = RefinerConfig::with_threshold(0.95);
        assert_eq!(config.quality_threshold, 0.95);
        assert_eq!(config.max_iterations, 3);
    }
}
