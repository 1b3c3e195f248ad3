//! Core types for Weibull reliability analysis
//!
//! This crate holds what every other reliability crate shares: the validated
//! [`DurationSample`] input, the [`AnalysisConfig`] tunables, helpers that
//! turn raw observations into samples, and the unified [`Error`] type.
//!
//! # Example
//!
//! ```rust
//! use reliability_core::{AnalysisConfig, DurationSample};
//!
//! let sample = DurationSample::new(vec![100.0, 150.0, 90.0, 200.0]).unwrap();
//! assert_eq!(sample.max(), 200.0);
//!
//! let config = AnalysisConfig::default();
//! assert_eq!(config.small_sample_threshold, 15);
//! ```

pub mod config;
pub mod error;
pub mod prepare;
pub mod sample;

// Re-export core types
pub use config::{
    AnalysisConfig, DEFAULT_CONFIDENCE_LEVEL, DEFAULT_CURVE_MARGIN, DEFAULT_CURVE_RESOLUTION,
    DEFAULT_MLE_MAX_ITERATIONS, DEFAULT_MLE_TOLERANCE, DEFAULT_SMALL_SAMPLE_THRESHOLD,
};
pub use error::{Error, Result, SampleDefect};
pub use prepare::{durations_from_entries, inter_event_hours, Event, EventLog};
pub use sample::DurationSample;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
