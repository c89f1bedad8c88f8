//! Bisection root-finding solver.

use super::BisectionConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Classification of a single midpoint evaluation.
///
/// The probe compares whatever it computes at the midpoint against its
/// target and reports which half of the bracket still contains the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// The midpoint is acceptable; the search stops here.
    Hit,
    /// The value at the midpoint overshoots the target; the upper bound moves down.
    Above,
    /// The value at the midpoint undershoots the target; the lower bound moves up.
    Below,
}

/// Bounded bisection search.
///
/// Repeatedly halves `[low, high]`, asking the probe about each midpoint,
/// until the probe accepts one or the iteration budget is spent. The probe
/// is assumed to describe a function that is increasing over the bracket.
///
/// Non-convergence is always an error: the last midpoint is reported inside
/// the error, never returned as if it were a solution.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{BisectionConfig, BisectionSolver, Probe};
///
/// let solver = BisectionSolver::new(BisectionConfig::default());
///
/// // e^x = 2 to 8 decimal places
/// let root = solver
///     .search(0.0_f64, 1.0, |x| {
///         let y = x.exp();
///         if (y - 2.0).abs() < 1e-8 {
///             Probe::Hit
///         } else if y > 2.0 {
///             Probe::Above
///         } else {
///             Probe::Below
///         }
///     })
///     .unwrap();
/// assert!((root - 2.0_f64.ln()).abs() < 1e-7);
/// ```
#[derive(Debug, Clone)]
pub struct BisectionSolver<T: Float> {
    config: BisectionConfig<T>,
}

impl<T: Float> BisectionSolver<T> {
    /// Create a new bisection solver with the given configuration.
    pub fn new(config: BisectionConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: BisectionConfig::default(),
        }
    }

    /// Search `[low, high]` with an infallible probe.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - First midpoint the probe accepted
    /// * `Err(SolverError::InvalidBracket)` - Bounds not finite or `low >= high`
    /// * `Err(SolverError::MaxIterationsExceeded)` - No midpoint accepted
    pub fn search<F>(&self, low: T, high: T, mut probe: F) -> Result<T, SolverError>
    where
        F: FnMut(T) -> Probe,
    {
        self.try_search(low, high, |x| Ok::<_, SolverError>(probe(x)))
    }

    /// Search `[low, high]` with a probe that may itself fail.
    ///
    /// Probe errors abort the search immediately and are returned unchanged;
    /// solver failures are converted into the caller's error type.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{BisectionSolver, Probe};
    /// use pricer_core::types::SolverError;
    ///
    /// #[derive(Debug)]
    /// enum EstimateError {
    ///     Refused(f64),
    ///     Solver(SolverError),
    /// }
    ///
    /// impl From<SolverError> for EstimateError {
    ///     fn from(err: SolverError) -> Self {
    ///         EstimateError::Solver(err)
    ///     }
    /// }
    ///
    /// let solver = BisectionSolver::<f64>::with_defaults();
    /// let result = solver.try_search(1.0, 3.0, |x| {
    ///     if x > 1.5 {
    ///         Err(EstimateError::Refused(x))
    ///     } else {
    ///         Ok(Probe::Below)
    ///     }
    /// });
    /// assert!(matches!(result, Err(EstimateError::Refused(x)) if x == 2.0));
    /// ```
    pub fn try_search<F, E>(&self, low: T, high: T, mut probe: F) -> Result<T, E>
    where
        F: FnMut(T) -> Result<Probe, E>,
        E: From<SolverError>,
    {
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(SolverError::InvalidBracket {
                low: low.to_f64().unwrap_or(f64::NAN),
                high: high.to_f64().unwrap_or(f64::NAN),
            }
            .into());
        }

        let two = T::from(2.0).unwrap();
        let mut low = low;
        let mut high = high;
        let mut mid = low;

        for _iteration in 0..self.config.max_iterations {
            mid = (high + low) / two;
            if mid < self.config.floor {
                mid = self.config.floor;
            }

            match probe(mid)? {
                Probe::Hit => return Ok(mid),
                Probe::Above => high = mid,
                Probe::Below => low = mid,
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
            last: mid.to_f64().unwrap_or(f64::NAN),
        }
        .into())
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &BisectionConfig<T> {
        &self.config
    }
}
