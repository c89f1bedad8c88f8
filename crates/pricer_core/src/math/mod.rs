//! Numerical routines shared by the pricing layers.
//!
//! - `solvers`: bracketing search used by the implied-volatility solver

pub mod solvers;
