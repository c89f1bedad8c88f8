//! Core value and error types.
//!
//! This module provides:
//! - `side`: The call/put selector used to pick a pricing formula statically
//! - `quoted`: Observed prices carrying the decimal precision of their text
//! - `error`: Structured error types for pricing, solver and quote-parsing operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionSide`] from `side`
//! - [`QuotedPrice`], [`round_to_decimals`] from `quoted`
//! - [`PricingError`], [`SolverError`], [`QuoteError`] from `error`

pub mod error;
pub mod quoted;
pub mod side;

// Re-export commonly used types at module level
pub use error::{PricingError, QuoteError, SolverError};
pub use quoted::{round_to_decimals, QuotedPrice, MAX_DECIMALS};
pub use side::OptionSide;
