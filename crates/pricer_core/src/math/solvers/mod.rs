//! Root-finding solvers for numerical computation.
//!
//! ## Available Solvers
//!
//! - [`BisectionSolver`]: Bounded interval halving driven by a probe that
//!   classifies each midpoint as a hit, an overshoot or an undershoot.
//!
//! The probe decides what "close enough" means, so the same solver serves a
//! residual tolerance, a rounding-based match against a quoted price, or any
//! other acceptance test.
//!
//! ## Configuration
//!
//! [`BisectionConfig`] controls:
//! - `max_iterations`: Maximum number of midpoint evaluations (default: 10 000)
//! - `floor`: Lower clamp applied to every midpoint (default: 1e-5)
//!
//! ## Examples
//!
//! ```
//! use pricer_core::math::solvers::{BisectionConfig, BisectionSolver, Probe};
//!
//! // Find √2 to 6 decimal places
//! let solver = BisectionSolver::new(BisectionConfig::default());
//! let root = solver
//!     .search(0.0, 2.0, |x: f64| {
//!         let y = x * x - 2.0;
//!         if y.abs() < 1e-6 {
//!             Probe::Hit
//!         } else if y > 0.0 {
//!             Probe::Above
//!         } else {
//!             Probe::Below
//!         }
//!     })
//!     .unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-6);
//! ```

mod bisection;
mod config;

// Re-export public types at module level
pub use bisection::{BisectionSolver, Probe};
pub use config::BisectionConfig;
