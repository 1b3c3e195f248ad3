//! Choosing the fitting method from the sample size
//!
//! Rank regression on a probability plot is stable with few points;
//! likelihood fitting needs more points to be well conditioned. The cut-off
//! is a fixed design constant ([`DEFAULT_SMALL_SAMPLE_THRESHOLD`]) that can be
//! overridden per selector without changing the default.

use crate::method::FitMethod;
use reliability_core::{AnalysisConfig, DEFAULT_SMALL_SAMPLE_THRESHOLD};
use tracing::trace;

/// Picks [`FitMethod::LinearRegression`] below a sample size threshold,
/// [`FitMethod::MaximumLikelihood`] otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimatorSelector {
    small_sample_threshold: usize,
}

impl EstimatorSelector {
    /// Create a selector with a custom threshold
    pub fn new(small_sample_threshold: usize) -> Self {
        Self {
            small_sample_threshold,
        }
    }

    /// Create a selector from an analysis configuration
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.small_sample_threshold)
    }

    /// The sample size at which maximum likelihood takes over
    pub fn threshold(&self) -> usize {
        self.small_sample_threshold
    }

    /// Choose the method for a sample of `sample_size` durations
    pub fn select(&self, sample_size: usize) -> FitMethod {
        let method = if sample_size < self.small_sample_threshold {
            FitMethod::LinearRegression
        } else {
            FitMethod::MaximumLikelihood
        };
        trace!(sample_size, %method, "Selected fit method");
        method
    }
}

impl Default for EstimatorSelector {
    fn default() -> Self {
        Self::new(DEFAULT_SMALL_SAMPLE_THRESHOLD)
    }
}

/// Choose the method using the default threshold of 15
///
/// ```
/// use reliability_fit::{select, FitMethod};
///
/// assert_eq!(select(14), FitMethod::LinearRegression);
/// assert_eq!(select(15), FitMethod::MaximumLikelihood);
/// ```
pub fn select(sample_size: usize) -> FitMethod {
    EstimatorSelector::default().select(sample_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_boundary() {
        assert_eq!(select(0), FitMethod::LinearRegression);
        assert_eq!(select(2), FitMethod::LinearRegression);
        assert_eq!(select(14), FitMethod::LinearRegression);
        assert_eq!(select(15), FitMethod::MaximumLikelihood);
        assert_eq!(select(1000), FitMethod::MaximumLikelihood);
    }

    #[test]
    fn test_custom_threshold() {
        let selector = EstimatorSelector::new(5);
        assert_eq!(selector.threshold(), 5);
        assert_eq!(selector.select(4), FitMethod::LinearRegression);
        assert_eq!(selector.select(5), FitMethod::MaximumLikelihood);
    }

    #[test]
    fn test_from_config() {
        let config = AnalysisConfig::default().with_small_sample_threshold(30);
        let selector = EstimatorSelector::from_config(&config);
        assert_eq!(selector.select(29), FitMethod::LinearRegression);
        assert_eq!(selector.select(30), FitMethod::MaximumLikelihood);
        assert_eq!(EstimatorSelector::default().threshold(), 15);
    }
}
