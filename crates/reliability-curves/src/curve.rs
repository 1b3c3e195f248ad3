//! Curve generation for fitted Weibull models

use crate::evaluator::ReliabilityEvaluator;
use reliability_core::{
    AnalysisConfig, DurationSample, Error, Result, DEFAULT_CURVE_MARGIN, DEFAULT_CURVE_RESOLUTION,
};
use reliability_fit::{linearize, median_rank, WeibullParameters};
use serde::Serialize;
use tracing::debug;

/// A value of a curve at one time
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    /// Time in hours
    pub time: f64,
    /// Curve value at `time`
    pub value: f64,
}

/// One observed duration on the Weibull probability plot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotPoint {
    /// Observed duration
    pub time: f64,
    /// Benard median rank of the duration
    pub median_rank: f64,
    /// `ln(t)`
    pub x: f64,
    /// `ln(-ln(1 - F))`
    pub y: f64,
}

/// Linearized probability plot with the fitted line overlaid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbabilityPlot {
    /// Order statistics, ascending
    pub points: Vec<PlotPoint>,
    /// `y = beta (x - ln eta)` at each observed duration
    pub fitted_line: Vec<CurvePoint>,
}

/// Plottable curves for one fit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReliabilityCurve {
    /// Observed durations against the fitted line
    pub probability_plot: ProbabilityPlot,
    /// `S(t)` on the time grid
    pub survival: Vec<CurvePoint>,
    /// `h(t)` on the time grid
    pub hazard: Vec<CurvePoint>,
}

/// Builds probability plot, survival and hazard curves
///
/// The time grid has `resolution` evenly spaced points from zero to
/// `margin` times the longest observed duration.
///
/// # Example
///
/// ```
/// use reliability_core::DurationSample;
/// use reliability_curves::CurveGenerator;
/// use reliability_fit::WeibullParameters;
///
/// let sample = DurationSample::new(vec![100.0, 200.0, 300.0]).unwrap();
/// let params = WeibullParameters::new(2.0, 250.0).unwrap();
/// let curve = CurveGenerator::default().curves(&params, &sample).unwrap();
///
/// assert_eq!(curve.survival.len(), 200);
/// assert_eq!(curve.survival[0].value, 1.0);
/// assert_eq!(curve.probability_plot.points.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveGenerator {
    margin: f64,
    resolution: usize,
}

impl CurveGenerator {
    /// Create a generator, rejecting `margin < 1` and `resolution < 2`
    pub fn new(margin: f64, resolution: usize) -> Result<Self> {
        if !(margin.is_finite() && margin >= 1.0) {
            return Err(Error::InvalidParameter(format!(
                "curve margin {margin} must be finite and at least 1"
            )));
        }
        if resolution < 2 {
            return Err(Error::InvalidParameter(format!(
                "curve resolution {resolution} must be at least 2"
            )));
        }
        Ok(Self { margin, resolution })
    }

    /// Create a generator from an analysis configuration
    pub fn from_config(config: &AnalysisConfig) -> Result<Self> {
        Self::new(config.curve_margin, config.curve_resolution)
    }

    /// Multiplier on the longest duration for the grid end
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Number of grid points
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Evenly spaced times over `[0, max(sample) * margin]`
    pub fn time_grid(&self, sample: &DurationSample) -> Vec<f64> {
        let upper = sample.max() * self.margin;
        let step = upper / (self.resolution - 1) as f64;
        (0..self.resolution).map(|i| i as f64 * step).collect()
    }

    /// Generate every curve for a fit
    pub fn curves(
        &self,
        parameters: &WeibullParameters,
        sample: &DurationSample,
    ) -> Result<ReliabilityCurve> {
        let evaluator = ReliabilityEvaluator::new(*parameters);
        let probability_plot = probability_plot(parameters, sample);

        let grid = self.time_grid(sample);
        let survival = grid
            .iter()
            .map(|&time| Ok(CurvePoint { time, value: evaluator.reliability(time)? }))
            .collect::<Result<Vec<_>>>()?;

        // h(0) is unbounded for beta < 1
        let skip_origin = parameters.shape() < 1.0;
        let hazard = grid
            .iter()
            .filter(|&&time| !(skip_origin && time == 0.0))
            .map(|&time| Ok(CurvePoint { time, value: evaluator.hazard(time)? }))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Generated curves: {} plot points, {} survival points, {} hazard points",
            probability_plot.points.len(),
            survival.len(),
            hazard.len()
        );

        Ok(ReliabilityCurve {
            probability_plot,
            survival,
            hazard,
        })
    }
}

impl Default for CurveGenerator {
    fn default() -> Self {
        Self {
            margin: DEFAULT_CURVE_MARGIN,
            resolution: DEFAULT_CURVE_RESOLUTION,
        }
    }
}

fn probability_plot(parameters: &WeibullParameters, sample: &DurationSample) -> ProbabilityPlot {
    let sorted = sample.sorted();
    let n = sorted.len();
    let ln_scale = parameters.scale().ln();

    let points: Vec<PlotPoint> = sorted
        .iter()
        .zip(linearize(&sorted))
        .enumerate()
        .map(|(i, (&time, (x, y)))| PlotPoint {
            time,
            median_rank: median_rank(i + 1, n),
            x,
            y,
        })
        .collect();

    let fitted_line = points
        .iter()
        .map(|p| CurvePoint {
            time: p.time,
            value: parameters.shape() * (p.x - ln_scale),
        })
        .collect();

    ProbabilityPlot {
        points,
        fitted_line,
    }
}
