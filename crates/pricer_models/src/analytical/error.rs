//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors from Black-Scholes pricing and the
//!   implied-volatility search
//!
//! The variants fall into two families. Invalid inputs (spot, strike, expiry,
//! volatility, price, rate, search bounds) are domain errors; an exhausted search is
//! a convergence error. [`AnalyticalError::is_domain_error`] and
//! [`AnalyticalError::is_convergence_error`] tell them apart.

use pricer_core::types::{OptionSide, PricingError, SolverError};
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// assert!(err.is_domain_error());
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid spot price (non-positive or not finite).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike price (non-positive or not finite).
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time to expiry (non-positive or not finite).
    #[error("Invalid time to expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value, in the caller's units
        expiry: f64,
    },

    /// Invalid volatility (non-positive or not finite).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Observed option price is negative or not finite.
    #[error("Invalid option price: {price}")]
    InvalidPrice {
        /// The invalid price value
        price: f64,
    },

    /// Interest rate is not finite.
    #[error("Invalid interest rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate value
        rate: f64,
    },

    /// Volatility search bounds are not a usable bracket.
    #[error("Invalid volatility bounds: [{low}, {high}]")]
    InvalidBounds {
        /// Lower bound
        low: f64,
        /// Upper bound
        high: f64,
    },

    /// No volatility in the bracket reproduces the target price.
    #[error(
        "No implied volatility in [{low}, {high}] reproduces {target} \
         after {iterations} iterations"
    )]
    NoConvergence {
        /// The observed price being matched
        target: f64,
        /// Lower search bound
        low: f64,
        /// Upper search bound
        high: f64,
        /// Iterations spent
        iterations: usize,
    },

    /// Solver failure not covered by the variants above.
    #[error(transparent)]
    Solver(#[from] SolverError),

    /// A computed price came out NaN or infinite, e.g. when an extreme
    /// rate overflows the discount factor.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Description of the numerical issue
        message: String,
    },
}

impl AnalyticalError {
    /// True for invalid-input failures.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            AnalyticalError::InvalidSpot { .. }
                | AnalyticalError::InvalidStrike { .. }
                | AnalyticalError::InvalidExpiry { .. }
                | AnalyticalError::InvalidVolatility { .. }
                | AnalyticalError::InvalidPrice { .. }
                | AnalyticalError::InvalidRate { .. }
                | AnalyticalError::InvalidBounds { .. }
        )
    }

    /// Passes a computed `side` price through unless it is NaN or infinite.
    pub(crate) fn check_finite_price(price: f64, side: OptionSide) -> Result<f64, Self> {
        if price.is_finite() {
            Ok(price)
        } else {
            Err(AnalyticalError::NumericalInstability {
                message: format!("{} price is not finite ({})", side, price),
            })
        }
    }

    /// True when the implied-volatility search ran out of iterations.
    pub fn is_convergence_error(&self) -> bool {
        matches!(
            self,
            AnalyticalError::NoConvergence { .. }
                | AnalyticalError::Solver(SolverError::MaxIterationsExceeded { .. })
        )
    }
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        if err.is_domain_error() {
            PricingError::Domain(err.to_string())
        } else if err.is_convergence_error() {
            PricingError::Convergence(err.to_string())
        } else {
            PricingError::NumericalInstability(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_invalid_spot_display() {
        let err = AnalyticalError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_invalid_strike_display() {
        let err = AnalyticalError::InvalidStrike { strike: 0.0 };
        assert_eq!(format!("{}", err), "Invalid strike price: K = 0");
    }

    #[test]
    fn test_invalid_expiry_display() {
        let err = AnalyticalError::InvalidExpiry { expiry: -1.0 };
        assert_eq!(format!("{}", err), "Invalid time to expiry: T = -1");
    }

    #[test]
    fn test_no_convergence_display() {
        let err = AnalyticalError::NoConvergence {
            target: 150.0,
            low: 1.0,
            high: 200.0,
            iterations: 10_000,
        };
        assert_eq!(
            format!("{}", err),
            "No implied volatility in [1, 200] reproduces 150 after 10000 iterations"
        );
    }

    #[test]
    fn test_error_families() {
        let domain = [
            AnalyticalError::InvalidSpot { spot: 0.0 },
            AnalyticalError::InvalidStrike { strike: 0.0 },
            AnalyticalError::InvalidExpiry { expiry: 0.0 },
            AnalyticalError::InvalidVolatility { volatility: 0.0 },
            AnalyticalError::InvalidPrice { price: -1.0 },
            AnalyticalError::InvalidRate { rate: f64::NAN },
            AnalyticalError::InvalidBounds {
                low: 2.0,
                high: 1.0,
            },
        ];
        for err in domain {
            assert!(err.is_domain_error(), "{:?}", err);
            assert!(!err.is_convergence_error(), "{:?}", err);
        }

        let convergence = [
            AnalyticalError::NoConvergence {
                target: 1.0,
                low: 1.0,
                high: 2.0,
                iterations: 1,
            },
            AnalyticalError::Solver(SolverError::MaxIterationsExceeded {
                iterations: 1,
                last: 1.5,
            }),
        ];
        for err in convergence {
            assert!(err.is_convergence_error(), "{:?}", err);
            assert!(!err.is_domain_error(), "{:?}", err);
        }
    }

    #[test]
    fn test_from_solver_error() {
        let err: AnalyticalError = SolverError::InvalidBracket {
            low: 3.0,
            high: 1.0,
        }
        .into();
        assert_eq!(format!("{}", err), "Invalid bracket: [3, 1]");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = AnalyticalError::InvalidVolatility { volatility: 0.0 };
        let _: &dyn std::error::Error = &err;
    }

    // ==========================================================
    // From<AnalyticalError> for PricingError tests
    // ==========================================================

    #[test]
    fn test_domain_to_pricing_error() {
        let err = AnalyticalError::InvalidStrike { strike: -5.0 };
        match PricingError::from(err) {
            PricingError::Domain(msg) => assert!(msg.contains("strike")),
            other => panic!("Expected Domain variant, got {:?}", other),
        }
    }

    #[test]
    fn test_convergence_to_pricing_error() {
        let err = AnalyticalError::NoConvergence {
            target: 999.0,
            low: 1.0,
            high: 200.0,
            iterations: 10_000,
        };
        match PricingError::from(err) {
            PricingError::Convergence(msg) => assert!(msg.contains("999")),
            other => panic!("Expected Convergence variant, got {:?}", other),
        }
    }

    #[test]
    fn test_check_finite_price() {
        assert_eq!(
            AnalyticalError::check_finite_price(10.45, OptionSide::Call).unwrap(),
            10.45
        );

        let err = AnalyticalError::check_finite_price(f64::NAN, OptionSide::Call).unwrap_err();
        assert!(matches!(err, AnalyticalError::NumericalInstability { .. }));
        assert_eq!(err.to_string(), "Numerical instability: call price is not finite (NaN)");
        assert!(!err.is_domain_error());
        assert!(!err.is_convergence_error());

        let err =
            AnalyticalError::check_finite_price(f64::INFINITY, OptionSide::Put).unwrap_err();
        assert!(err.to_string().contains("put price is not finite (inf)"));
    }

    #[test]
    fn test_numerical_instability_to_pricing_error() {
        let err = AnalyticalError::NumericalInstability {
            message: "Overflow".to_string(),
        };
        match PricingError::from(err) {
            PricingError::NumericalInstability(msg) => assert!(msg.contains("Overflow")),
            other => panic!("Expected NumericalInstability variant, got {:?}", other),
        }
    }
}
