//! Method dispatch for Weibull fitting

use crate::method::FitMethod;
use crate::mle::MaximumLikelihood;
use crate::params::WeibullFit;
use crate::regression::RankRegression;
use crate::selector::EstimatorSelector;
use crate::traits::{EstimatorProperties, WeibullEstimator};
use reliability_core::{AnalysisConfig, DurationSample, Result};
use tracing::{debug, instrument};

/// Fits a sample with either estimator, configured once
///
/// # Example
///
/// ```
/// use reliability_core::DurationSample;
/// use reliability_fit::{FitMethod, WeibullFitter};
///
/// let sample = DurationSample::new(vec![120.0, 340.0, 560.0, 780.0, 1000.0]).unwrap();
/// let fitter = WeibullFitter::default();
/// let fit = fitter.fit_auto(&sample).unwrap();
///
/// assert_eq!(fit.method(), FitMethod::LinearRegression);
/// assert!(fit.shape() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeibullFitter {
    selector: EstimatorSelector,
    regression: RankRegression,
    mle: MaximumLikelihood,
}

impl WeibullFitter {
    /// Build a fitter from a validated configuration
    pub fn new(config: &AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            selector: EstimatorSelector::from_config(config),
            regression: RankRegression::new().with_confidence_level(config.confidence_level),
            mle: MaximumLikelihood::from_config(config),
        })
    }

    /// The selector used by [`fit_auto`](Self::fit_auto)
    pub fn selector(&self) -> &EstimatorSelector {
        &self.selector
    }

    /// Fit with an explicit method
    #[instrument(skip(self, sample), fields(n = sample.len()))]
    pub fn fit(&self, sample: &DurationSample, method: FitMethod) -> Result<WeibullFit> {
        let estimator: &dyn WeibullEstimator = match method {
            FitMethod::LinearRegression => &self.regression,
            FitMethod::MaximumLikelihood => &self.mle,
        };
        debug!("Fitting with {}", estimator.name());
        estimator.estimate(sample)
    }

    /// Fit with the method the selector picks for this sample size
    pub fn fit_auto(&self, sample: &DurationSample) -> Result<WeibullFit> {
        self.fit(sample, self.selector.select(sample.len()))
    }

    /// Validate raw durations and fit them
    pub fn fit_values(&self, values: &[f64], method: FitMethod) -> Result<WeibullFit> {
        let sample = DurationSample::try_from(values)?;
        self.fit(&sample, method)
    }
}

impl Default for WeibullFitter {
    fn default() -> Self {
        Self {
            selector: EstimatorSelector::default(),
            regression: RankRegression::default(),
            mle: MaximumLikelihood::default(),
        }
    }
}

/// Fit a sample with default settings
pub fn fit(sample: &DurationSample, method: FitMethod) -> Result<WeibullFit> {
    WeibullFitter::default().fit(sample, method)
}
