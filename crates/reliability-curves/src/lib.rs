//! Reliability curves and queries for fitted Weibull models
//!
//! Given [`WeibullParameters`](reliability_fit::WeibullParameters), this crate
//! produces:
//!
//! - **Curves**: the linearized probability plot with its fitted line, and
//!   survival and hazard functions over a time grid ([`CurveGenerator`])
//! - **Point queries**: reliability at a horizon, plus B-lives, median life
//!   and other life statistics ([`ReliabilityEvaluator`])
//!
//! # Example
//!
//! ```rust
//! use reliability_curves::{reliability, ReliabilityEvaluator};
//! use reliability_fit::WeibullParameters;
//!
//! let params = WeibullParameters::new(1.8, 5000.0).unwrap();
//! let r = reliability(&params, 1000.0).unwrap();
//! assert!(r > 0.9);
//!
//! let b10 = ReliabilityEvaluator::new(params).b_life(0.10).unwrap();
//! assert!(b10 < 5000.0);
//! ```

mod curve;
mod evaluator;

pub use curve::{CurveGenerator, CurvePoint, PlotPoint, ProbabilityPlot, ReliabilityCurve};
pub use evaluator::{reliability, ReliabilityEvaluator};
