//! Implied volatility from observed option prices.
//!
//! A bounded bisection over percent volatility, re-pricing in fast mode at
//! every midpoint. A quote is matched at the number of decimals it was
//! written with, carried by [`pricer_core::types::QuotedPrice`].
//!
//! - [`VolBounds`]: the search bracket (default 1 % to 200 %)
//! - [`PriceModel`]: the formula being inverted, chosen statically
//! - [`ImpliedVolSolver`]: the search itself
//! - [`implied_volatility`]: one-call entry point on raw numbers

mod bounds;
mod model;
mod solver;

pub use bounds::{VolBounds, DEFAULT_VOL_HIGH, DEFAULT_VOL_LOW};
pub use model::{BlackScholesModel, PriceModel};
pub use solver::{implied_volatility, ImpliedVolSolver};
