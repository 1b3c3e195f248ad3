//! Reliability and life statistics of fitted parameters

use reliability_core::{Error, Result};
use reliability_fit::WeibullParameters;
use statrs::function::gamma::gamma;

/// Probability of surviving past `time` hours
///
/// ```text
/// R(t) = exp(-(t / eta)^beta)
/// ```
///
/// `R(0)` is exactly one and `R(inf)` is zero. A negative or NaN horizon is
/// an [`Error::InvalidHorizon`]. Large horizons may underflow to `0.0`.
///
/// # Example
///
/// ```
/// use reliability_curves::reliability;
/// use reliability_fit::WeibullParameters;
///
/// let params = WeibullParameters::new(2.0, 1000.0).unwrap();
/// assert_eq!(reliability(&params, 0.0).unwrap(), 1.0);
/// assert!((reliability(&params, 1000.0).unwrap() - (-1.0_f64).exp()).abs() < 1e-12);
/// assert!(reliability(&params, -1.0).is_err());
/// ```
pub fn reliability(parameters: &WeibullParameters, time: f64) -> Result<f64> {
    ReliabilityEvaluator::new(*parameters).reliability(time)
}

/// Distribution functions and life statistics for one parameter set
///
/// Every query is recomputed from the parameters; nothing is cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReliabilityEvaluator {
    parameters: WeibullParameters,
}

impl ReliabilityEvaluator {
    /// Create an evaluator for fitted parameters
    pub fn new(parameters: WeibullParameters) -> Self {
        Self { parameters }
    }

    /// The parameters being evaluated
    pub fn parameters(&self) -> &WeibullParameters {
        &self.parameters
    }

    /// `(t / eta)^beta`
    fn cumulative_hazard(&self, time: f64) -> f64 {
        (time / self.parameters.scale()).powf(self.parameters.shape())
    }

    /// Survival function `R(t)`
    pub fn reliability(&self, time: f64) -> Result<f64> {
        check_horizon(time)?;
        if time == 0.0 {
            return Ok(1.0);
        }
        if time.is_infinite() {
            return Ok(0.0);
        }
        Ok((-self.cumulative_hazard(time)).exp())
    }

    /// Cumulative failure probability `F(t) = 1 - R(t)`
    pub fn unreliability(&self, time: f64) -> Result<f64> {
        check_horizon(time)?;
        if time.is_infinite() {
            return Ok(1.0);
        }
        // -expm1 keeps precision for small t
        Ok(-(-self.cumulative_hazard(time)).exp_m1())
    }

    /// Probability density `f(t) = h(t) R(t)`
    ///
    /// Infinite at `t = 0` when beta < 1.
    pub fn pdf(&self, time: f64) -> Result<f64> {
        check_horizon(time)?;
        if time.is_infinite() {
            return Ok(0.0);
        }
        Ok(self.hazard(time)? * (-self.cumulative_hazard(time)).exp())
    }

    /// Instantaneous failure rate
    ///
    /// ```text
    /// h(t) = (beta / eta) (t / eta)^(beta - 1)
    /// ```
    ///
    /// Infinite at `t = 0` when beta < 1.
    pub fn hazard(&self, time: f64) -> Result<f64> {
        check_horizon(time)?;
        let shape = self.parameters.shape();
        let scale = self.parameters.scale();
        Ok((shape / scale) * (time / scale).powf(shape - 1.0))
    }

    /// Time at which reliability falls to `target`
    ///
    /// ```text
    /// t = eta (-ln R)^(1 / beta)
    /// ```
    pub fn time_to_reliability(&self, target: f64) -> Result<f64> {
        if !(target > 0.0 && target < 1.0) {
            return Err(Error::invalid_probability("Reliability", target));
        }
        Ok(self.parameters.scale() * (-target.ln()).powf(1.0 / self.parameters.shape()))
    }

    /// Time by which `fraction` of the population has failed
    ///
    /// `b_life(0.10)` is the B10 life.
    pub fn b_life(&self, fraction: f64) -> Result<f64> {
        if !(fraction > 0.0 && fraction < 1.0) {
            return Err(Error::invalid_probability("Failure fraction", fraction));
        }
        self.time_to_reliability(1.0 - fraction)
    }

    /// Time by which half the population has failed
    pub fn median_life(&self) -> f64 {
        self.parameters.scale() * std::f64::consts::LN_2.powf(1.0 / self.parameters.shape())
    }

    /// Most likely failure time; zero unless beta > 1
    pub fn mode(&self) -> f64 {
        let shape = self.parameters.shape();
        if shape <= 1.0 {
            return 0.0;
        }
        self.parameters.scale() * ((shape - 1.0) / shape).powf(1.0 / shape)
    }

    /// Variance of the failure time
    ///
    /// ```text
    /// Var = eta^2 [Gamma(1 + 2/beta) - Gamma(1 + 1/beta)^2]
    /// ```
    pub fn variance(&self) -> Result<f64> {
        let shape = self.parameters.shape();
        let scale = self.parameters.scale();
        let g1 = gamma(1.0 + 1.0 / shape);
        let variance = scale * scale * (gamma(1.0 + 2.0 / shape) - g1 * g1);
        if !variance.is_finite() {
            return Err(Error::non_finite("variance"));
        }
        Ok(variance.max(0.0))
    }
}

impl From<WeibullParameters> for ReliabilityEvaluator {
    fn from(parameters: WeibullParameters) -> Self {
        Self::new(parameters)
    }
}

fn check_horizon(time: f64) -> Result<()> {
    // NaN fails the comparison
    if !(time >= 0.0) {
        return Err(Error::InvalidHorizon(time));
    }
    Ok(())
}
