//! Analysis configuration
//!
//! All tunables of a run live in [`AnalysisConfig`]. The defaults reproduce
//! the fixed behaviour of the engine: rank regression below 15 durations,
//! maximum likelihood from 15 upwards.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Sample size below which rank regression is used instead of maximum likelihood
pub const DEFAULT_SMALL_SAMPLE_THRESHOLD: usize = 15;

/// Curve time range extends to `max(duration) * margin`
pub const DEFAULT_CURVE_MARGIN: f64 = 1.2;

/// Number of grid points for survival and hazard curves
pub const DEFAULT_CURVE_RESOLUTION: usize = 200;

/// Newton-Raphson iteration cap for maximum likelihood
pub const DEFAULT_MLE_MAX_ITERATIONS: usize = 100;

/// Relative step tolerance for maximum likelihood
pub const DEFAULT_MLE_TOLERANCE: f64 = 1e-10;

/// Two-sided confidence level for parameter bounds
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Tunables for one analysis run
///
/// Deserializes from any serde format; missing fields take their defaults.
///
/// ```
/// use reliability_core::AnalysisConfig;
///
/// let config = AnalysisConfig::default()
///     .with_curve_resolution(500)
///     .with_confidence_level(0.90);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.small_sample_threshold, 15);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Samples smaller than this are fitted by rank regression
    pub small_sample_threshold: usize,
    /// Multiplier on the largest duration for the curve time range (>= 1)
    pub curve_margin: f64,
    /// Number of evenly spaced curve points (>= 2)
    pub curve_resolution: usize,
    /// Iteration cap for maximum likelihood
    pub mle_max_iterations: usize,
    /// Relative convergence tolerance on the shape step
    pub mle_tolerance: f64,
    /// Confidence level for parameter bounds, in (0, 1)
    pub confidence_level: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            small_sample_threshold: DEFAULT_SMALL_SAMPLE_THRESHOLD,
            curve_margin: DEFAULT_CURVE_MARGIN,
            curve_resolution: DEFAULT_CURVE_RESOLUTION,
            mle_max_iterations: DEFAULT_MLE_MAX_ITERATIONS,
            mle_tolerance: DEFAULT_MLE_TOLERANCE,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
        }
    }
}

impl AnalysisConfig {
    /// Set the rank-regression sample size threshold
    pub fn with_small_sample_threshold(mut self, threshold: usize) -> Self {
        self.small_sample_threshold = threshold;
        self
    }

    /// Set the curve range margin
    pub fn with_curve_margin(mut self, margin: f64) -> Self {
        self.curve_margin = margin;
        self
    }

    /// Set the number of curve points
    pub fn with_curve_resolution(mut self, resolution: usize) -> Self {
        self.curve_resolution = resolution;
        self
    }

    /// Set the maximum likelihood iteration cap
    pub fn with_mle_max_iterations(mut self, iterations: usize) -> Self {
        self.mle_max_iterations = iterations;
        self
    }

    /// Set the maximum likelihood tolerance
    pub fn with_mle_tolerance(mut self, tolerance: f64) -> Self {
        self.mle_tolerance = tolerance;
        self
    }

    /// Set the confidence level for parameter bounds
    pub fn with_confidence_level(mut self, level: f64) -> Self {
        self.confidence_level = level;
        self
    }

    /// Check every field against its admissible range
    pub fn validate(&self) -> Result<()> {
        if !(self.curve_margin.is_finite() && self.curve_margin >= 1.0) {
            return Err(Error::InvalidParameter(format!(
                "curve_margin {} must be finite and >= 1",
                self.curve_margin
            )));
        }
        if self.curve_resolution < 2 {
            return Err(Error::InvalidParameter(format!(
                "curve_resolution {} must be at least 2",
                self.curve_resolution
            )));
        }
        if self.mle_max_iterations == 0 {
            return Err(Error::InvalidParameter(
                "mle_max_iterations must be positive".to_string(),
            ));
        }
        if !(self.mle_tolerance.is_finite() && self.mle_tolerance > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "mle_tolerance {} must be finite and positive",
                self.mle_tolerance
            )));
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(Error::invalid_probability(
                "Confidence level",
                self.confidence_level,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.small_sample_threshold, 15);
        assert_eq!(config.curve_margin, 1.2);
        assert_eq!(config.curve_resolution, 200);
        assert_eq!(config.mle_max_iterations, 100);
        assert_eq!(config.confidence_level, 0.95);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = AnalysisConfig::default()
            .with_small_sample_threshold(10)
            .with_curve_margin(1.5)
            .with_curve_resolution(50)
            .with_mle_max_iterations(20)
            .with_mle_tolerance(1e-8)
            .with_confidence_level(0.9);
        assert_eq!(config.small_sample_threshold, 10);
        assert_eq!(config.curve_margin, 1.5);
        assert_eq!(config.curve_resolution, 50);
        assert_eq!(config.mle_max_iterations, 20);
        assert_eq!(config.mle_tolerance, 1e-8);
        assert_eq!(config.confidence_level, 0.9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_values() {
        let base = AnalysisConfig::default();
        assert!(base.clone().with_curve_margin(0.9).validate().is_err());
        assert!(base.clone().with_curve_margin(f64::NAN).validate().is_err());
        assert!(base.clone().with_curve_resolution(1).validate().is_err());
        assert!(base.clone().with_mle_max_iterations(0).validate().is_err());
        assert!(base.clone().with_mle_tolerance(0.0).validate().is_err());
        assert!(base.clone().with_confidence_level(1.0).validate().is_err());
        assert!(base.with_confidence_level(0.0).validate().is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: AnalysisConfig =
            serde_json::from_str(r#"{ "small_sample_threshold": 20 }"#).unwrap();
        assert_eq!(config.small_sample_threshold, 20);
        assert_eq!(config.curve_resolution, DEFAULT_CURVE_RESOLUTION);
    }
}
