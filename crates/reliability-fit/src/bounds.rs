//! Confidence bounds on fitted parameters

use reliability_core::{Error, Result};
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal, StudentsT};
use std::fmt;

/// A confidence interval with lower and upper bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// The point estimate
    pub estimate: f64,
    /// Confidence level (e.g., 0.95 for 95% CI)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    /// Create a new confidence interval
    pub fn new(lower: f64, upper: f64, estimate: f64, confidence_level: f64) -> Self {
        Self {
            lower,
            upper,
            estimate,
            confidence_level,
        }
    }

    /// Interval for a positive quantity from a standard error on its log scale
    ///
    /// `estimate * exp(±critical * log_se)`, which keeps both bounds positive.
    pub fn log_normal(estimate: f64, log_se: f64, critical: f64, confidence_level: f64) -> Self {
        let factor = (critical * log_se).exp();
        Self::new(estimate / factor, estimate * factor, estimate, confidence_level)
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CI: [{:.4}, {:.4}], estimate: {:.4}",
            self.confidence_level * 100.0,
            self.lower,
            self.upper,
            self.estimate
        )
    }
}

/// Bounds on both Weibull parameters at one confidence level
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterBounds {
    /// Bounds on the shape parameter (beta)
    pub shape: ConfidenceInterval,
    /// Bounds on the scale parameter (eta)
    pub scale: ConfidenceInterval,
}

/// Two-sided standard normal critical value for a confidence level
pub(crate) fn normal_critical(confidence_level: f64) -> Result<f64> {
    check_level(confidence_level)?;
    let normal = Normal::new(0.0, 1.0).map_err(|e| {
        Error::Computation(format!("Failed to create normal distribution: {}", e))
    })?;
    Ok(normal.inverse_cdf(1.0 - (1.0 - confidence_level) / 2.0))
}

/// Two-sided Student-t critical value for a confidence level
pub(crate) fn students_t_critical(confidence_level: f64, degrees_of_freedom: f64) -> Result<f64> {
    check_level(confidence_level)?;
    if degrees_of_freedom <= 0.0 {
        return Err(Error::InvalidParameter(
            "Not enough data for t-distribution".to_string(),
        ));
    }
    let t_dist = StudentsT::new(0.0, 1.0, degrees_of_freedom).map_err(|e| {
        Error::Computation(format!("Failed to create t-distribution: {}", e))
    })?;
    Ok(t_dist.inverse_cdf(1.0 - (1.0 - confidence_level) / 2.0))
}

fn check_level(confidence_level: f64) -> Result<()> {
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(Error::invalid_probability("Confidence level", confidence_level));
    }
    Ok(())
}
