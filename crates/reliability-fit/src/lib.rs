//! Weibull parameter estimation
//!
//! This crate fits a two-parameter Weibull distribution to a
//! [`DurationSample`](reliability_core::DurationSample) with one of two
//! methods:
//!
//! - **Median rank regression**: least squares on the linearized probability
//!   plot, robust for small samples
//! - **Maximum likelihood**: safeguarded Newton-Raphson on the profile
//!   likelihood, efficient for larger samples
//!
//! The [`EstimatorSelector`] picks between them by sample size, and
//! [`WeibullFitter`] runs either one from a single
//! [`AnalysisConfig`](reliability_core::AnalysisConfig).
//!
//! # Examples
//!
//! ```rust
//! use reliability_core::DurationSample;
//! use reliability_fit::{select, FitMethod, RankRegression, WeibullEstimator};
//!
//! let sample = DurationSample::new(vec![
//!     120.0, 340.0, 560.0, 780.0, 1000.0, 1220.0, 1440.0, 1660.0, 1880.0, 2100.0,
//! ]).unwrap();
//! assert_eq!(select(sample.len()), FitMethod::LinearRegression);
//!
//! let fit = RankRegression::new().estimate(&sample).unwrap();
//! println!("{}", fit.parameters());
//! assert!(fit.diagnostics().r_squared.unwrap() > 0.9);
//! ```

mod bounds;
mod fitter;
mod method;
mod mle;
mod params;
mod regression;
mod selector;
pub mod traits;

// Re-exports
pub use bounds::{ConfidenceInterval, ParameterBounds};
pub use fitter::{fit, WeibullFitter};
pub use method::FitMethod;
pub use mle::MaximumLikelihood;
pub use params::{log_likelihood, FitDiagnostics, WeibullFit, WeibullParameters};
pub use regression::{linearize, median_rank, RankRegression};
pub use selector::{select, EstimatorSelector};
pub use traits::{EstimatorProperties, WeibullEstimator};
