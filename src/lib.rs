//! Weibull reliability analysis
//!
//! Fits a two-parameter Weibull distribution to times between failures and
//! answers reliability questions about the fitted model.
//!
//! This crate re-exports the workspace crates:
//!
//! - [`reliability_core`]: samples, configuration, data preparation, errors
//! - [`reliability_fit`]: rank regression and maximum likelihood fitting
//! - [`reliability_curves`]: probability plots, survival and hazard curves,
//!   reliability queries
//!
//! and adds [`WeibullAnalysis`], which runs selection, fitting and curve
//! generation in one call.
//!
//! # Quick Start
//!
//! ```rust
//! use weibull_reliability::prelude::*;
//!
//! let analysis = WeibullAnalysis::new(AnalysisConfig::default()).unwrap();
//! let report = analysis
//!     .run_values(&[410.0, 230.0, 1120.0, 760.0, 95.0, 640.0, 880.0, 300.0])
//!     .unwrap();
//!
//! println!("{}", report.fit);
//! let r = report.reliability(500.0).unwrap();
//! assert!(r > 0.0 && r < 1.0);
//! ```
//!
//! # Features
//!
//! - `parallel`: run [`WeibullAnalysis::run_batch`] on the rayon thread pool

mod analysis;

pub use analysis::{AnalysisReport, WeibullAnalysis};

pub use reliability_core;
pub use reliability_curves;
pub use reliability_fit;

pub use reliability_core::{AnalysisConfig, DurationSample, Error, Result};
pub use reliability_curves::{reliability, ReliabilityCurve, ReliabilityEvaluator};
pub use reliability_fit::{fit, select, FitMethod, WeibullFit, WeibullParameters};

/// Commonly used items
pub mod prelude {
    pub use crate::analysis::{AnalysisReport, WeibullAnalysis};
    pub use reliability_core::{
        durations_from_entries, AnalysisConfig, DurationSample, Error, EventLog, Result,
        SampleDefect,
    };
    pub use reliability_curves::{reliability, CurveGenerator, ReliabilityCurve, ReliabilityEvaluator};
    pub use reliability_fit::{
        fit, select, FitMethod, MaximumLikelihood, RankRegression, WeibullEstimator, WeibullFit,
        WeibullFitter, WeibullParameters,
    };
}
