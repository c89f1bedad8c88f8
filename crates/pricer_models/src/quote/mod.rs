//! Option quotes in market conventions.
//!
//! Rates and volatilities are quoted in percent and expiry in calendar days;
//! this module converts them for [`crate::analytical::BlackScholes`] and
//! scales the Greeks back (Vega and Rho per percentage point, Theta per day).
//!
//! - [`PricingInputs`]: validated underlying, strike, rate and days
//! - [`OptionQuote`]: immutable prices, optional Greeks and parity residual
//! - [`price`] / [`put_call_parity`]: one-call entry points on raw numbers

mod greeks;
mod inputs;
mod option_quote;

pub use greeks::Greeks;
pub use inputs::{PricingInputs, DAYS_PER_YEAR, PERCENT};
pub use option_quote::{
    price, put_call_parity, ObservedPrice, OptionQuote, PricingMode, STORED_PRICE_DECIMALS,
};
