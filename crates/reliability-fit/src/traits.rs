//! Core traits for Weibull parameter estimation
//!
//! Each estimator is a small value object holding only its tunables; the
//! sample is passed to every call, so one estimator can be shared freely
//! across threads and runs.

use crate::method::FitMethod;
use crate::params::WeibullFit;
use reliability_core::{DurationSample, Result};

/// Properties of an estimator that don't depend on the data
pub trait EstimatorProperties {
    /// Human-readable algorithm name
    fn name(&self) -> &'static str;

    /// The method this estimator implements
    fn method(&self) -> FitMethod;

    /// Minimum number of distinct durations required
    fn minimum_sample_size(&self) -> usize {
        2
    }
}

/// Fits Weibull parameters to a duration sample
pub trait WeibullEstimator: EstimatorProperties {
    /// Fit the sample
    fn estimate(&self, sample: &DurationSample) -> Result<WeibullFit>;

    /// Reject samples with fewer distinct durations than
    /// [`minimum_sample_size`](EstimatorProperties::minimum_sample_size)
    fn validate_sample(&self, sample: &DurationSample) -> Result<()> {
        sample.ensure_distinct(self.minimum_sample_size())
    }

    /// Fit several independent samples
    ///
    /// Default implementation processes sequentially and stops at the
    /// first failure.
    fn estimate_batch(&self, samples: &[&DurationSample]) -> Result<Vec<WeibullFit>> {
        samples.iter().map(|sample| self.estimate(sample)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MaximumLikelihood, RankRegression};
    use reliability_core::{Error, SampleDefect};

    /// Rank regression that insists on three distinct durations
    struct StrictRegression(RankRegression);

    impl EstimatorProperties for StrictRegression {
        fn name(&self) -> &'static str {
            "Strict Rank Regression"
        }

        fn method(&self) -> FitMethod {
            FitMethod::LinearRegression
        }

        fn minimum_sample_size(&self) -> usize {
            3
        }
    }

    impl WeibullEstimator for StrictRegression {
        fn estimate(&self, sample: &DurationSample) -> Result<WeibullFit> {
            self.validate_sample(sample)?;
            self.0.estimate(sample)
        }
    }

    fn sample(values: &[f64]) -> DurationSample {
        DurationSample::new(values.to_vec()).unwrap()
    }

    #[test]
    fn test_minimum_sample_size_enforced() {
        let two = sample(&[50.0, 100.0, 100.0]);
        assert_eq!(
            StrictRegression(RankRegression::new()).estimate(&two),
            Err(Error::InvalidSample(SampleDefect::TooFewDistinct { distinct: 2, required: 3 }))
        );
        assert!(RankRegression::new().estimate(&two).is_ok());
        assert!(StrictRegression(RankRegression::new())
            .estimate(&sample(&[50.0, 75.0, 100.0]))
            .is_ok());
    }

    #[test]
    fn test_builtin_minimum() {
        assert_eq!(RankRegression::new().minimum_sample_size(), 2);
        assert_eq!(MaximumLikelihood::default().minimum_sample_size(), 2);
        assert!(MaximumLikelihood::default().validate_sample(&sample(&[7.0; 3])).is_err());
    }

    #[test]
    fn test_estimate_batch() {
        let a = sample(&[10.0, 20.0, 30.0, 40.0]);
        let b = sample(&[100.0, 250.0, 400.0, 900.0, 1200.0]);
        let estimator = MaximumLikelihood::default();

        let fits = estimator.estimate_batch(&[&a, &b]).unwrap();
        assert_eq!(fits.len(), 2);
        assert_eq!(fits[0], estimator.estimate(&a).unwrap());
        assert_eq!(fits[1], estimator.estimate(&b).unwrap());
        assert!(estimator.estimate_batch(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_estimate_batch_stops_at_failure() {
        let good = sample(&[10.0, 20.0, 30.0]);
        let flat = sample(&[5.0; 4]);
        let result = RankRegression::new().estimate_batch(&[&good, &flat, &good]);
        assert_eq!(
            result,
            Err(Error::InvalidSample(SampleDefect::TooFewDistinct { distinct: 1, required: 2 }))
        );
    }
}
