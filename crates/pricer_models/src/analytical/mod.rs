//! Analytical pricing formulas for European options.
//!
//! This module provides the closed-form Black-Scholes model in natural units
//! (decimal rate and volatility, expiry in years):
//! - Call and put prices
//! - Analytical Greeks (Delta, Dual Delta, Gamma, Vega, Theta, Rho)
//! - Risk-neutral exercise probability
//!
//! Percent and day-count quoting conventions live one level up, in
//! [`crate::quote`].
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Works with `f64` and `f32`
//! - **Validated construction**: A built model always has positive spot and volatility
//! - **Numerical Stability**: Double-precision normal CDF

pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black_scholes::BlackScholes;
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
