//! Median Rank Regression (MRR) for Weibull parameter estimation
//!
//! Fits Weibull parameters using least-squares regression on the
//! linearized Weibull probability plot.

use crate::bounds::{students_t_critical, ConfidenceInterval, ParameterBounds};
use crate::method::FitMethod;
use crate::params::{log_likelihood, FitDiagnostics, WeibullFit, WeibullParameters};
use crate::traits::{EstimatorProperties, WeibullEstimator};
use reliability_core::{DurationSample, Error, Result, SampleDefect, DEFAULT_CONFIDENCE_LEVEL};
use tracing::{debug, instrument};

/// Benard's approximation of the median rank of the `rank`-th of `n` order statistics
///
/// ```text
/// F_i = (i - 0.3) / (n + 0.4)
/// ```
///
/// `rank` is 1-based.
pub fn median_rank(rank: usize, n: usize) -> f64 {
    (rank as f64 - 0.3) / (n as f64 + 0.4)
}

/// Linearized Weibull plot coordinates of ascending durations
///
/// Returns `(ln t_i, ln(-ln(1 - F_i)))` for each order statistic, where `F_i`
/// is the median rank.
pub fn linearize(sorted: &[f64]) -> Vec<(f64, f64)> {
    let n = sorted.len();
    sorted
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            let f = median_rank(i + 1, n);
            (t.ln(), (-(1.0 - f).ln()).ln())
        })
        .collect()
}

/// Ordinary least squares summary of a set of points
#[derive(Debug, Clone, Copy)]
struct LineFit {
    slope: f64,
    intercept: f64,
    mean_y: f64,
    sxx: f64,
    sxy: f64,
    syy: f64,
    n: usize,
}

impl LineFit {
    fn from_points(points: &[(f64, f64)]) -> Result<Self> {
        let n = points.len();
        let n_f = n as f64;
        let mean_x = points.iter().map(|p| p.0).sum::<f64>() / n_f;
        let mean_y = points.iter().map(|p| p.1).sum::<f64>() / n_f;

        let (mut sxx, mut sxy, mut syy) = (0.0, 0.0, 0.0);
        for &(x, y) in points {
            let dx = x - mean_x;
            let dy = y - mean_y;
            sxx += dx * dx;
            sxy += dx * dy;
            syy += dy * dy;
        }

        // Distinct durations closer than one ulp collapse under ln
        if sxx == 0.0 {
            return Err(Error::InvalidSample(SampleDefect::TooFewDistinct { distinct: 1, required: 2 }));
        }

        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_x;
        Ok(Self {
            slope,
            intercept,
            mean_y,
            sxx,
            sxy,
            syy,
            n,
        })
    }

    fn r_squared(&self) -> f64 {
        if self.syy <= 0.0 {
            return 1.0;
        }
        (self.sxy * self.sxy / (self.sxx * self.syy)).clamp(0.0, 1.0)
    }

    /// Residual variance, `None` without residual degrees of freedom
    fn residual_variance(&self) -> Option<f64> {
        let df = self.n.checked_sub(2).filter(|&df| df > 0)?;
        let ss_res = (self.syy - self.slope * self.sxy).max(0.0);
        Some(ss_res / df as f64)
    }
}

/// Median rank regression estimator
///
/// Plotting `y = ln(-ln(1 - F_i))` against `x = ln(t_i)` gives a line with
/// slope beta and intercept `-beta * ln(eta)`, so
///
/// ```text
/// beta = a,  eta = exp(-b / a)      for the least squares line y = a x + b
/// ```
///
/// Bounds use a Student-t interval on the slope and the delta method on
/// `ln(eta) = mean(x) - mean(y) / a`, both on the log scale. They need at
/// least three durations.
///
/// # Reference
/// Abernethy (2006), *The New Weibull Handbook*, 5th ed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankRegression {
    confidence_level: Option<f64>,
}

impl RankRegression {
    /// Create an estimator reporting 95% bounds
    pub fn new() -> Self {
        Self {
            confidence_level: Some(DEFAULT_CONFIDENCE_LEVEL),
        }
    }

    /// Report bounds at a different confidence level
    pub fn with_confidence_level(mut self, level: f64) -> Self {
        self.confidence_level = Some(level);
        self
    }

    /// Skip confidence bounds
    pub fn without_bounds(mut self) -> Self {
        self.confidence_level = None;
        self
    }

    fn bounds(&self, line: &LineFit, shape: f64, scale: f64) -> Result<Option<ParameterBounds>> {
        let (Some(level), Some(s2)) = (self.confidence_level, line.residual_variance()) else {
            return Ok(None);
        };
        let df = (line.n - 2) as f64;
        let critical = students_t_critical(level, df)?;

        let var_slope = s2 / line.sxx;
        let a2 = shape * shape;
        let var_ln_scale = (line.mean_y / a2).powi(2) * var_slope + s2 / (line.n as f64 * a2);

        Ok(Some(ParameterBounds {
            shape: ConfidenceInterval::log_normal(shape, var_slope.sqrt() / shape, critical, level),
            scale: ConfidenceInterval::log_normal(scale, var_ln_scale.sqrt(), critical, level),
        }))
    }
}

impl Default for RankRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl EstimatorProperties for RankRegression {
    fn name(&self) -> &'static str {
        "Median Rank Regression"
    }

    fn method(&self) -> FitMethod {
        FitMethod::LinearRegression
    }
}

impl WeibullEstimator for RankRegression {
    #[instrument(skip(self, sample), fields(n = sample.len()))]
    fn estimate(&self, sample: &DurationSample) -> Result<WeibullFit> {
        self.validate_sample(sample)?;

        let sorted = sample.sorted();
        let points = linearize(&sorted);
        let line = LineFit::from_points(&points)?;

        let shape = line.slope;
        if !(shape.is_finite() && shape > 0.0) {
            return Err(Error::Computation(format!(
                "regression slope {shape} is not a valid shape"
            )));
        }
        let scale = (-line.intercept / shape).exp();
        let parameters = WeibullParameters::new(shape, scale)?;
        debug!(
            "Rank regression: beta={:.4}, eta={:.4}, R^2={:.4}",
            shape,
            scale,
            line.r_squared()
        );

        let bounds = self.bounds(&line, shape, scale)?;
        let diagnostics = FitDiagnostics {
            r_squared: Some(line.r_squared()),
            log_likelihood: log_likelihood(sample.values(), shape, scale),
            iterations: 0,
        };

        Ok(WeibullFit::new(
            parameters,
            FitMethod::LinearRegression,
            sample.len(),
            bounds,
            diagnostics,
        ))
    }
}
