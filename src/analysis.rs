//! End-to-end analysis: select, fit, then build curves

use reliability_core::{AnalysisConfig, DurationSample, Result};
use reliability_curves::{CurveGenerator, ReliabilityCurve, ReliabilityEvaluator};
use reliability_fit::{EstimatorSelector, WeibullFit, WeibullFitter, WeibullParameters};
use serde::Serialize;
use std::fmt;
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Fit and curves for one duration sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Fitted parameters, method, bounds and diagnostics
    pub fit: WeibullFit,
    /// Probability plot, survival and hazard curves
    pub curve: ReliabilityCurve,
}

impl AnalysisReport {
    /// Shorthand for `fit.parameters()`
    pub fn parameters(&self) -> &WeibullParameters {
        self.fit.parameters()
    }

    /// Reliability at a horizon, recomputed from the fitted parameters
    pub fn reliability(&self, time: f64) -> Result<f64> {
        self.evaluator().reliability(time)
    }

    /// Life statistics for the fitted parameters
    pub fn evaluator(&self) -> ReliabilityEvaluator {
        ReliabilityEvaluator::new(*self.fit.parameters())
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fit)
    }
}

/// Stateless analysis pipeline
///
/// # Example
///
/// ```
/// use weibull_reliability::prelude::*;
///
/// let analysis = WeibullAnalysis::new(AnalysisConfig::default()).unwrap();
/// let report = analysis
///     .run_values(&[120.0, 340.0, 560.0, 780.0, 1000.0, 1220.0, 1440.0, 1660.0, 1880.0, 2100.0])
///     .unwrap();
///
/// assert_eq!(report.fit.method(), FitMethod::LinearRegression);
/// assert_eq!(report.reliability(0.0).unwrap(), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct WeibullAnalysis {
    config: AnalysisConfig,
    fitter: WeibullFitter,
    curves: CurveGenerator,
}

impl WeibullAnalysis {
    /// Validate the configuration and build the pipeline
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        let fitter = WeibullFitter::new(&config)?;
        let curves = CurveGenerator::from_config(&config)?;
        Ok(Self {
            config,
            fitter,
            curves,
        })
    }

    /// The validated configuration
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Selector deciding between rank regression and maximum likelihood
    pub fn selector(&self) -> &EstimatorSelector {
        self.fitter.selector()
    }

    /// Analyze one sample
    #[instrument(skip(self, sample), fields(n = sample.len()))]
    pub fn run(&self, sample: &DurationSample) -> Result<AnalysisReport> {
        let fit = self.fitter.fit_auto(sample)?;
        let curve = self.curves.curves(fit.parameters(), sample)?;
        info!(
            method = fit.method().abbreviation(),
            "Analysis complete: {}",
            fit.parameters()
        );
        Ok(AnalysisReport { fit, curve })
    }

    /// Validate raw durations and analyze them
    pub fn run_values(&self, values: &[f64]) -> Result<AnalysisReport> {
        self.run(&DurationSample::try_from(values)?)
    }

    /// Analyze independent samples, one result per sample
    #[cfg(not(feature = "parallel"))]
    pub fn run_batch(&self, samples: &[DurationSample]) -> Vec<Result<AnalysisReport>> {
        samples.iter().map(|sample| self.run(sample)).collect()
    }

    /// Analyze independent samples, one result per sample
    #[cfg(feature = "parallel")]
    pub fn run_batch(&self, samples: &[DurationSample]) -> Vec<Result<AnalysisReport>> {
        samples.par_iter().map(|sample| self.run(sample)).collect()
    }
}
