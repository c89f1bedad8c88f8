//! # pricer_core: Numerical Foundation for the Option Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace and provides:
//! - A bounded bisection search driven by a caller-supplied probe (`math::solvers`)
//! - Quoted prices that remember their textual decimal precision (`types::quoted`)
//! - The call/put selector shared by every pricing routine (`types::side`)
//! - Error types: `PricingError`, `SolverError`, `QuoteError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{OptionSide, QuotedPrice};
//!
//! let quote: QuotedPrice = "10.4506".parse().unwrap();
//! assert_eq!(quote.decimals(), 4);
//! assert!(quote.matches(10.450583));
//!
//! assert_eq!("put".parse::<OptionSide>().unwrap(), OptionSide::Put);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `OptionSide`, `QuotedPrice` and error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
