//! Shared utilities for estimator integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Weibull};
use reliability_core::DurationSample;
use reliability_fit::median_rank;

/// Ten evenly spaced failure gaps, in hours
pub const SMALL_SAMPLE: [f64; 10] = [
    120.0, 340.0, 560.0, 780.0, 1000.0, 1220.0, 1440.0, 1660.0, 1880.0, 2100.0,
];

/// Seeded draws from Weibull(shape, scale)
pub fn weibull_values(n: usize, shape: f64, scale: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = Weibull::new(scale, shape).expect("valid Weibull parameters");
    (0..n).map(|_| dist.sample(&mut rng)).collect()
}

pub fn weibull_sample(n: usize, shape: f64, scale: f64, seed: u64) -> DurationSample {
    DurationSample::new(weibull_values(n, shape, scale, seed)).expect("positive draws")
}

/// Exact Weibull quantiles at the median ranks
pub fn quantile_sample(n: usize, shape: f64, scale: f64) -> DurationSample {
    let values = (1..=n)
        .map(|i| scale * (-(1.0 - median_rank(i, n)).ln()).powf(1.0 / shape))
        .collect();
    DurationSample::new(values).expect("positive quantiles")
}

/// Route tracing output to the test harness; `RUST_LOG` selects the level
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Relative error of an estimate
pub fn relative_error(estimate: f64, truth: f64) -> f64 {
    (estimate - truth).abs() / truth
}
