//! Volatility search bracket.

use crate::analytical::AnalyticalError;

/// Default lower bound of the search, in percent.
pub const DEFAULT_VOL_LOW: f64 = 1.0;

/// Default upper bound of the search, in percent.
pub const DEFAULT_VOL_HIGH: f64 = 200.0;

/// Percent-volatility bracket `[low, high]` searched by the solver.
///
/// # Examples
/// ```
/// use pricer_models::implied_vol::VolBounds;
///
/// let bounds = VolBounds::default();
/// assert_eq!((bounds.low(), bounds.high()), (1.0, 200.0));
///
/// assert!(VolBounds::new(5.0, 80.0).is_ok());
/// assert!(VolBounds::new(80.0, 5.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolBounds {
    low: f64,
    high: f64,
}

impl Default for VolBounds {
    fn default() -> Self {
        Self {
            low: DEFAULT_VOL_LOW,
            high: DEFAULT_VOL_HIGH,
        }
    }
}

impl VolBounds {
    /// Creates a bracket.
    ///
    /// `low` may be zero; the solver floors every midpoint above zero.
    ///
    /// # Errors
    /// `AnalyticalError::InvalidBounds` unless `0 <= low < high` with both finite.
    pub fn new(low: f64, high: f64) -> Result<Self, AnalyticalError> {
        if !low.is_finite() || !high.is_finite() || low < 0.0 || low >= high {
            return Err(AnalyticalError::InvalidBounds { low, high });
        }
        Ok(Self { low, high })
    }

    /// Lower bound, in percent.
    #[inline]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound, in percent.
    #[inline]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// True when `volatility` lies inside the bracket.
    #[inline]
    pub fn contains(&self, volatility: f64) -> bool {
        volatility >= self.low && volatility <= self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bracket() {
        let bounds = VolBounds::default();
        assert_eq!(bounds.low(), DEFAULT_VOL_LOW);
        assert_eq!(bounds.high(), DEFAULT_VOL_HIGH);
    }

    #[test]
    fn test_zero_low_allowed() {
        assert!(VolBounds::new(0.0, 50.0).is_ok());
    }

    #[test]
    fn test_invalid_brackets() {
        for (low, high) in [
            (10.0, 10.0),
            (20.0, 10.0),
            (-1.0, 10.0),
            (f64::NAN, 10.0),
            (1.0, f64::INFINITY),
        ] {
            match VolBounds::new(low, high) {
                Err(AnalyticalError::InvalidBounds { .. }) => {}
                other => panic!("Expected InvalidBounds for [{}, {}], got {:?}", low, high, other),
            }
        }
    }

    #[test]
    fn test_contains() {
        let bounds = VolBounds::new(5.0, 50.0).unwrap();
        assert!(bounds.contains(5.0));
        assert!(bounds.contains(27.5));
        assert!(bounds.contains(50.0));
        assert!(!bounds.contains(4.99));
        assert!(!bounds.contains(50.01));
    }
}
