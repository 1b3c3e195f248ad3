//! Duration samples
//!
//! A [`DurationSample`] is the validated input to every fit: an ordered
//! sequence of strictly positive, finite elapsed times in hours. It is
//! validated once on construction and never mutated afterwards.

use crate::error::{Error, Result, SampleDefect};
use serde::Serialize;
use std::cmp::Ordering;

/// Ordered, immutable sequence of positive inter-event durations (hours)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationSample {
    values: Vec<f64>,
}

impl DurationSample {
    /// Validate and wrap a sequence of durations
    ///
    /// Fails with [`Error::InvalidSample`] if the sequence is empty or
    /// contains a NaN, infinite, zero or negative value. The first offending
    /// entry is reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use reliability_core::DurationSample;
    ///
    /// let sample = DurationSample::new(vec![100.0, 150.0, 90.0]).unwrap();
    /// assert_eq!(sample.len(), 3);
    ///
    /// assert!(DurationSample::new(vec![]).is_err());
    /// assert!(DurationSample::new(vec![10.0, -5.0, 20.0]).is_err());
    /// ```
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::empty_sample());
        }
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(Error::InvalidSample(SampleDefect::NonFinite { index }));
            }
            if value <= 0.0 {
                return Err(Error::InvalidSample(SampleDefect::NonPositive { index, value }));
            }
        }
        Ok(Self { values })
    }

    /// Durations in their original order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of durations
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed sample
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Ascending copy of the durations (order statistics)
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        // Finite by construction
        sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        sorted
    }

    /// Largest duration
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::MIN, f64::max)
    }

    /// Smallest duration
    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::MAX, f64::min)
    }

    /// Arithmetic mean of the durations
    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Number of distinct duration values
    pub fn distinct_count(&self) -> usize {
        let sorted = self.sorted();
        1 + sorted.windows(2).filter(|w| w[1] > w[0]).count()
    }

    /// True when every duration is identical
    pub fn has_zero_variance(&self) -> bool {
        self.distinct_count() < 2
    }

    /// Require at least `required` distinct values
    pub fn ensure_distinct(&self, required: usize) -> Result<()> {
        let distinct = self.distinct_count();
        if distinct < required {
            return Err(Error::InvalidSample(SampleDefect::TooFewDistinct { distinct, required }));
        }
        Ok(())
    }

    /// Require at least two distinct values, the minimum any Weibull fit needs
    pub fn ensure_fittable(&self) -> Result<()> {
        self.ensure_distinct(2)
    }
}

impl TryFrom<Vec<f64>> for DurationSample {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl TryFrom<&[f64]> for DurationSample {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::new(values.to_vec())
    }
}

impl AsRef<[f64]> for DurationSample {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_valid_sample() {
        let sample = DurationSample::new(vec![100.0, 150.0, 90.0, 200.0]).unwrap();
        assert_eq!(sample.len(), 4);
        assert!(!sample.is_empty());
        assert_eq!(sample.values(), &[100.0, 150.0, 90.0, 200.0]);
        assert_eq!(sample.sorted(), vec![90.0, 100.0, 150.0, 200.0]);
        assert_eq!(sample.max(), 200.0);
        assert_eq!(sample.min(), 90.0);
        assert_relative_eq!(sample.mean(), 135.0);
    }

    #[test]
    fn test_empty_sample() {
        assert_eq!(
            DurationSample::new(vec![]),
            Err(Error::InvalidSample(SampleDefect::Empty))
        );
    }

    #[test]
    fn test_non_positive_values() {
        assert_eq!(
            DurationSample::new(vec![10.0, -5.0, 20.0]),
            Err(Error::InvalidSample(SampleDefect::NonPositive { index: 1, value: -5.0 }))
        );
        assert_eq!(
            DurationSample::new(vec![0.0, 10.0]),
            Err(Error::InvalidSample(SampleDefect::NonPositive { index: 0, value: 0.0 }))
        );
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(
            DurationSample::new(vec![10.0, f64::NAN]),
            Err(Error::InvalidSample(SampleDefect::NonFinite { index: 1 }))
        );
        assert_eq!(
            DurationSample::new(vec![f64::INFINITY]),
            Err(Error::InvalidSample(SampleDefect::NonFinite { index: 0 }))
        );
    }

    #[test]
    fn test_distinct_count() {
        let sample = DurationSample::new(vec![5.0, 5.0, 7.0, 5.0, 9.0]).unwrap();
        assert_eq!(sample.distinct_count(), 3);
        assert!(!sample.has_zero_variance());
        assert!(sample.ensure_fittable().is_ok());

        let flat = DurationSample::new(vec![100.0; 20]).unwrap();
        assert_eq!(flat.distinct_count(), 1);
        assert!(flat.has_zero_variance());
        assert_eq!(
            flat.ensure_fittable(),
            Err(Error::InvalidSample(SampleDefect::TooFewDistinct { distinct: 1, required: 2 }))
        );
    }

    #[test]
    fn test_ensure_distinct_threshold() {
        let sample = DurationSample::new(vec![5.0, 5.0, 7.0]).unwrap();
        assert!(sample.ensure_distinct(2).is_ok());
        assert_eq!(
            sample.ensure_distinct(3),
            Err(Error::InvalidSample(SampleDefect::TooFewDistinct { distinct: 2, required: 3 }))
        );
    }

    #[test]
    fn test_single_value_not_fittable() {
        let sample = DurationSample::new(vec![42.0]).unwrap();
        assert!(sample.ensure_fittable().is_err());
    }

    #[test]
    fn test_try_from() {
        let sample: DurationSample = vec![1.0, 2.0].try_into().unwrap();
        assert_eq!(sample.len(), 2);

        let slice: &[f64] = &[3.0, -1.0];
        assert!(DurationSample::try_from(slice).is_err());
    }
}
