//! # Pricer Models (L2: Business Logic)
//!
//! Black-Scholes prices, Greeks and implied volatility for European options.
//!
//! This crate provides:
//! - The closed-form Black-Scholes model in natural units (`analytical`)
//! - Percent/day quoting conventions and immutable option quotes (`quote`)
//! - A bisection implied-volatility solver matching quotes at their own
//!   decimal precision (`implied_vol`)
//! - An optional access gate callers may consult before pricing (`access`)
//!
//! ## Quick Start
//!
//! ```
//! use pricer_models::quote::{price, PricingMode};
//! use pricer_models::implied_vol::{implied_volatility, VolBounds};
//! use pricer_core::types::{OptionSide, QuotedPrice};
//!
//! // S=100, K=100, r=5%, 365 days, σ=20%
//! let quote = price(100.0, 100.0, 5.0, 365.0, 20.0, PricingMode::Full).unwrap();
//! assert!((quote.call_price() - 10.4506).abs() < 1e-3);
//! assert!(quote.greeks().is_some());
//!
//! let target: QuotedPrice = "10.4506".parse().unwrap();
//! let vol = implied_volatility(
//!     100.0, 100.0, 5.0, 365.0, target, OptionSide::Call, VolBounds::default(),
//! )
//! .unwrap();
//! assert!((vol - 20.0).abs() < 0.5);
//! ```
//!
//! ## Design Principles
//!
//! - **Static formula selection**: call/put is an enum, never a looked-up name
//! - **Immutable results**: quotes are fully computed at construction
//! - **Explicit failure**: invalid inputs and exhausted searches are errors

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod access;
pub mod analytical;
pub mod implied_vol;
pub mod quote;
