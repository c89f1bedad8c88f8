//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Layer-neutral errors from pricing operations
//! - `SolverError`: Errors from the bisection solver
//! - `QuoteError`: Errors from parsing quoted prices and option sides

use thiserror::Error;

/// Categorised pricing errors.
///
/// The two failure families of the pricer map onto the first two variants:
/// invalid inputs (a domain error) and an exhausted implied-volatility search
/// (a convergence error).
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::Domain("strike must be positive".to_string());
/// assert_eq!(format!("{}", err), "Domain error: strike must be positive");
/// assert!(err.is_domain());
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// Invalid pricing inputs (non-positive price, strike, time or volatility)
    #[error("Domain error: {0}")]
    Domain(String),

    /// Implied-volatility search exhausted its budget without a match
    #[error("Convergence error: {0}")]
    Convergence(String),

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl PricingError {
    /// True for invalid-input failures.
    pub fn is_domain(&self) -> bool {
        matches!(self, PricingError::Domain(_))
    }

    /// True for search exhaustion.
    pub fn is_convergence(&self) -> bool {
        matches!(self, PricingError::Convergence(_))
    }
}

/// Root-finding solver errors.
///
/// # Examples
/// ```
/// use pricer_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100, last: 1.5 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations (last estimate {last})")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
        /// Midpoint evaluated on the final iteration
        last: f64,
    },

    /// Bracket is empty, inverted or not finite.
    #[error("Invalid bracket: [{low}, {high}]")]
    InvalidBracket {
        /// Lower bound
        low: f64,
        /// Upper bound
        high: f64,
    },
}

/// Errors from parsing textual quotes.
///
/// # Examples
/// ```
/// use pricer_core::types::{QuoteError, QuotedPrice};
///
/// let err = "abc".parse::<QuotedPrice>().unwrap_err();
/// assert!(matches!(err, QuoteError::Malformed(_)));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuoteError {
    /// Empty or whitespace-only input.
    #[error("Empty price quote")]
    Empty,

    /// Not a plain decimal number (`123`, `12.5`, `.75`).
    #[error("Malformed price quote: {0:?}")]
    Malformed(String),

    /// Negative prices cannot be observed for vanilla options.
    #[error("Negative price quote: {0}")]
    Negative(String),

    /// More decimal places than can be compared reliably.
    #[error("Too many decimal places in {text:?}: {decimals} (maximum {max})")]
    TooPrecise {
        /// The offending quote text
        text: String,
        /// Decimal places found
        decimals: u32,
        /// Maximum supported
        max: u32,
    },

    /// Unknown option side.
    #[error("Unknown option side: {0:?}. Expected call or put")]
    UnknownSide(String),
}
