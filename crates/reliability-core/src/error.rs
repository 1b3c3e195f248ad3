//! Error types for reliability analysis
//!
//! Provides a unified error type for all reliability crates.

use std::fmt;
use thiserror::Error;

/// Core error type for reliability operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The duration sample cannot be fitted
    #[error("Invalid sample: {0}")]
    InvalidSample(SampleDefect),

    /// Maximum likelihood iteration did not reach the tolerance
    #[error("Convergence error: no solution within {tolerance:e} after {iterations} iterations")]
    Convergence { iterations: usize, tolerance: f64 },

    /// Negative or undefined reliability horizon
    #[error("Invalid horizon: {0} (must be a non-negative time)")]
    InvalidHorizon(f64),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Precondition a duration sample failed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleDefect {
    /// No durations at all
    Empty,
    /// A zero or negative duration
    NonPositive { index: usize, value: f64 },
    /// NaN or infinite duration
    NonFinite { index: usize },
    /// Fewer than two distinct durations; neither a line nor a likelihood can be fitted
    TooFewDistinct { distinct: usize, required: usize },
}

impl fmt::Display for SampleDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleDefect::Empty => write!(f, "sample is empty"),
            SampleDefect::NonPositive { index, value } => {
                write!(f, "duration {value} at index {index} is not positive")
            }
            SampleDefect::NonFinite { index } => {
                write!(f, "duration at index {index} is NaN or infinite")
            }
            SampleDefect::TooFewDistinct { distinct, required } => write!(
                f,
                "expected at least {required} distinct durations, got {distinct}"
            ),
        }
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an empty sample
    pub fn empty_sample() -> Self {
        Self::InvalidSample(SampleDefect::Empty)
    }

    /// Create an error for a probability outside (0, 1)
    pub fn invalid_probability(name: &str, p: f64) -> Self {
        Self::InvalidParameter(format!("{name} {p} must be in (0, 1)"))
    }

    /// Create an error for NaN/Inf results
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} is NaN or infinite"))
    }

    /// Whether the failure concerns the input sample rather than the computation
    pub fn is_sample_error(&self) -> bool {
        matches!(self, Self::InvalidSample(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidSample(SampleDefect::Empty);
        assert_eq!(err.to_string(), "Invalid sample: sample is empty");

        let err = Error::InvalidSample(SampleDefect::NonPositive { index: 1, value: -5.0 });
        assert_eq!(
            err.to_string(),
            "Invalid sample: duration -5 at index 1 is not positive"
        );

        let err = Error::InvalidSample(SampleDefect::TooFewDistinct { distinct: 1, required: 2 });
        assert_eq!(
            err.to_string(),
            "Invalid sample: expected at least 2 distinct durations, got 1"
        );

        let err = Error::InvalidHorizon(-1.0);
        assert_eq!(
            err.to_string(),
            "Invalid horizon: -1 (must be a non-negative time)"
        );

        let err = Error::Convergence { iterations: 100, tolerance: 1e-10 };
        assert!(err.to_string().contains("100 iterations"));

        let err = Error::Computation("singular information matrix".to_string());
        assert_eq!(err.to_string(), "Computation error: singular information matrix");
    }

    #[test]
    fn test_error_helper_functions() {
        assert_eq!(Error::empty_sample(), Error::InvalidSample(SampleDefect::Empty));

        let err = Error::invalid_probability("Confidence level", 1.5);
        assert_eq!(
            err.to_string(),
            "Invalid parameter: Confidence level 1.5 must be in (0, 1)"
        );

        let err = Error::non_finite("scale estimate");
        assert_eq!(
            err.to_string(),
            "Computation error: scale estimate is NaN or infinite"
        );
    }

    #[test]
    fn test_is_sample_error() {
        assert!(Error::empty_sample().is_sample_error());
        assert!(!Error::InvalidHorizon(-1.0).is_sample_error());
        assert!(!Error::Convergence { iterations: 1, tolerance: 1e-3 }.is_sample_error());
    }
}
