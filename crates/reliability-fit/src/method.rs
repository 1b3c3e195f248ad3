//! Fitting methods

use serde::{Deserialize, Serialize};
use std::fmt;

/// How Weibull parameters are estimated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FitMethod {
    /// Least squares on the linearized probability plot (median rank regression)
    LinearRegression,
    /// Maximization of the Weibull log-likelihood
    MaximumLikelihood,
}

impl FitMethod {
    /// Short conventional abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::LinearRegression => "LR",
            Self::MaximumLikelihood => "MLE",
        }
    }
}

impl fmt::Display for FitMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::LinearRegression => "linear regression",
            Self::MaximumLikelihood => "maximum likelihood",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(FitMethod::LinearRegression.to_string(), "linear regression");
        assert_eq!(FitMethod::MaximumLikelihood.to_string(), "maximum likelihood");
        assert_eq!(FitMethod::MaximumLikelihood.abbreviation(), "MLE");
    }
}
