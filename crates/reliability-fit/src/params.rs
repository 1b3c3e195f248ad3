//! Fitted Weibull parameters and fit results

use crate::bounds::ParameterBounds;
use crate::method::FitMethod;
use reliability_core::{Error, Result};
use serde::Serialize;
use statrs::function::gamma::gamma;
use std::fmt;

/// Shape, scale and mean life of a two-parameter Weibull distribution
///
/// Immutable once constructed; the mean is derived as
/// `eta * Gamma(1 + 1/beta)`.
///
/// ```
/// use reliability_fit::WeibullParameters;
///
/// // beta = 1 is the exponential distribution, whose mean is eta
/// let params = WeibullParameters::new(1.0, 50.0).unwrap();
/// assert!((params.mean() - 50.0).abs() < 1e-8);
///
/// assert!(WeibullParameters::new(-1.0, 50.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeibullParameters {
    shape: f64,
    scale: f64,
    mean: f64,
}

impl WeibullParameters {
    /// Validate shape and scale and derive the mean life
    pub fn new(shape: f64, scale: f64) -> Result<Self> {
        if !shape.is_finite() || shape <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "shape {shape} must be finite and positive"
            )));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "scale {scale} must be finite and positive"
            )));
        }
        let mean = scale * gamma(1.0 + 1.0 / shape);
        if !mean.is_finite() {
            return Err(Error::non_finite("mean life"));
        }
        Ok(Self { shape, scale, mean })
    }

    /// Shape parameter (beta)
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Scale parameter (eta), the characteristic life
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Mean life (MTBF)
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Alias for [`mean`](Self::mean)
    pub fn mtbf(&self) -> f64 {
        self.mean
    }

    /// Log-likelihood of a set of durations under these parameters
    pub fn log_likelihood(&self, durations: &[f64]) -> f64 {
        log_likelihood(durations, self.shape, self.scale)
    }
}

impl fmt::Display for WeibullParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "beta = {:.4}, eta = {:.4}, MTBF = {:.4}",
            self.shape, self.scale, self.mean
        )
    }
}

/// Goodness-of-fit and solver information
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitDiagnostics {
    /// Coefficient of determination of the probability plot regression
    pub r_squared: Option<f64>,
    /// Log-likelihood of the sample at the fitted parameters
    pub log_likelihood: f64,
    /// Newton-Raphson iterations (zero for closed-form fits)
    pub iterations: usize,
}

/// Result of fitting a duration sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeibullFit {
    parameters: WeibullParameters,
    method: FitMethod,
    sample_size: usize,
    bounds: Option<ParameterBounds>,
    diagnostics: FitDiagnostics,
}

impl WeibullFit {
    /// Create a new fit result
    pub fn new(
        parameters: WeibullParameters,
        method: FitMethod,
        sample_size: usize,
        bounds: Option<ParameterBounds>,
        diagnostics: FitDiagnostics,
    ) -> Self {
        Self {
            parameters,
            method,
            sample_size,
            bounds,
            diagnostics,
        }
    }

    /// The fitted parameters
    pub fn parameters(&self) -> &WeibullParameters {
        &self.parameters
    }

    /// Method that produced the fit
    pub fn method(&self) -> FitMethod {
        self.method
    }

    /// Number of durations fitted
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Confidence bounds, when the sample supports them
    pub fn bounds(&self) -> Option<&ParameterBounds> {
        self.bounds.as_ref()
    }

    /// Solver and goodness-of-fit information
    pub fn diagnostics(&self) -> &FitDiagnostics {
        &self.diagnostics
    }

    /// Shorthand for `parameters().shape()`
    pub fn shape(&self) -> f64 {
        self.parameters.shape
    }

    /// Shorthand for `parameters().scale()`
    pub fn scale(&self) -> f64 {
        self.parameters.scale
    }

    /// Shorthand for `parameters().mean()`
    pub fn mean(&self) -> f64 {
        self.parameters.mean
    }
}

impl fmt::Display for WeibullFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Weibull fit ({}):", self.method)?;
        writeln!(f, "  Sample size: {}", self.sample_size)?;
        writeln!(f, "  {}", self.parameters)?;
        if let Some(bounds) = &self.bounds {
            writeln!(f, "  beta {}", bounds.shape)?;
            writeln!(f, "  eta {}", bounds.scale)?;
        }
        if let Some(r2) = self.diagnostics.r_squared {
            writeln!(f, "  R^2: {:.4}", r2)?;
        }
        writeln!(f, "  Log-likelihood: {:.4}", self.diagnostics.log_likelihood)
    }
}

/// Weibull log-likelihood
///
/// ```text
/// l(beta, eta) = n ln(beta) - n beta ln(eta) + (beta - 1) sum(ln t_i) - sum((t_i / eta)^beta)
/// ```
pub fn log_likelihood(durations: &[f64], shape: f64, scale: f64) -> f64 {
    let n = durations.len() as f64;
    let sum_ln_t: f64 = durations.iter().map(|t| t.ln()).sum();
    let sum_z: f64 = durations.iter().map(|&t| (t / scale).powf(shape)).sum();
    n * shape.ln() - n * shape * scale.ln() + (shape - 1.0) * sum_ln_t - sum_z
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_valid() {
        let params = WeibullParameters::new(2.0, 1.0).unwrap();
        assert_eq!(params.shape(), 2.0);
        assert_eq!(params.scale(), 1.0);
        // Gamma(1.5) = sqrt(pi) / 2
        assert_relative_eq!(params.mean(), std::f64::consts::PI.sqrt() / 2.0, epsilon = 1e-10);
        assert_eq!(params.mtbf(), params.mean());
    }

    #[test]
    fn test_new_invalid() {
        assert!(WeibullParameters::new(0.0, 50.0).is_err());
        assert!(WeibullParameters::new(-1.0, 50.0).is_err());
        assert!(WeibullParameters::new(2.0, 0.0).is_err());
        assert!(WeibullParameters::new(2.0, -1.0).is_err());
        assert!(WeibullParameters::new(f64::NAN, 50.0).is_err());
        assert!(WeibullParameters::new(2.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_log_likelihood_exponential() {
        // beta = 1: l = -n ln(eta) - sum(t) / eta
        let data = [1.0, 2.0, 3.0];
        let ll = log_likelihood(&data, 1.0, 2.0);
        assert_relative_eq!(ll, -3.0 * 2.0_f64.ln() - 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fit_display() {
        let params = WeibullParameters::new(2.0, 100.0).unwrap();
        let fit = WeibullFit::new(
            params,
            FitMethod::LinearRegression,
            10,
            None,
            FitDiagnostics {
                r_squared: Some(0.98),
                log_likelihood: -50.0,
                iterations: 0,
            },
        );
        let display = fit.to_string();
        assert!(display.contains("linear regression"));
        assert!(display.contains("Sample size: 10"));
        assert!(display.contains("beta = 2.0000"));
        assert!(display.contains("R^2: 0.9800"));
    }
}
