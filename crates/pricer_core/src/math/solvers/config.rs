//! Solver configuration types.

use num_traits::Float;

/// Configuration for the bisection search.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for the floor (e.g., `f64`)
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::BisectionConfig;
///
/// let config: BisectionConfig<f64> = BisectionConfig::default();
/// assert_eq!(config.max_iterations, 10_000);
/// assert!(config.floor > 0.0);
///
/// let custom = BisectionConfig {
///     max_iterations: 500,
///     floor: 1e-8,
/// };
/// assert_eq!(custom.max_iterations, 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionConfig<T: Float> {
    /// Maximum number of midpoint evaluations before giving up.
    ///
    /// If no midpoint is accepted within this limit the search returns
    /// `SolverError::MaxIterationsExceeded`.
    pub max_iterations: usize,

    /// Lower clamp applied to every midpoint.
    ///
    /// Keeps the probe away from degenerate arguments (e.g. zero volatility)
    /// when the bracket collapses towards its lower end.
    pub floor: T,
}

impl<T: Float> Default for BisectionConfig<T> {
    /// Default values:
    /// - `max_iterations`: 10 000
    /// - `floor`: 1e-5
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            floor: T::from(1e-5).unwrap(),
        }
    }
}

impl<T: Float> BisectionConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Panics
    ///
    /// Panics if `max_iterations == 0` or `floor` is negative or not finite.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::BisectionConfig;
    ///
    /// let config = BisectionConfig::new(200, 1e-6);
    /// assert_eq!(config.max_iterations, 200);
    /// ```
    pub fn new(max_iterations: usize, floor: T) -> Self {
        assert!(max_iterations > 0, "max_iterations must be > 0");
        assert!(
            floor >= T::zero() && floor.is_finite(),
            "floor must be finite and non-negative"
        );
        Self {
            max_iterations,
            floor,
        }
    }

    /// Same floor, different iteration budget.
    pub fn with_max_iterations(self, max_iterations: usize) -> Self {
        Self::new(max_iterations, self.floor)
    }
}
