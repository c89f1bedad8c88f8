//! Validated pricing inputs in market quoting conventions.

use crate::analytical::{AnalyticalError, BlackScholes};

/// Day count used to turn days to expiration into years.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Percent quotes (rates, volatilities) are divided by this.
pub const PERCENT: f64 = 100.0;

/// Everything needed to price an option except the volatility.
///
/// Rates are annualised percentages (`5.0` means 5 %), expiry is in calendar
/// days. Construction validates every field, so a `PricingInputs` value is
/// always safe to price.
///
/// # Examples
/// ```
/// use pricer_models::quote::PricingInputs;
///
/// let inputs = PricingInputs::new(100.0, 100.0, 5.0, 365.0).unwrap();
/// assert_eq!(inputs.years(), 1.0);
/// assert_eq!(inputs.rate_decimal(), 0.05);
///
/// assert!(PricingInputs::new(100.0, 0.0, 5.0, 365.0).is_err());
/// assert!(PricingInputs::new(100.0, 100.0, 5.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingInputs {
    underlying_price: f64,
    strike_price: f64,
    interest_rate: f64,
    days_to_expiration: f64,
}

impl PricingInputs {
    /// Validates and stores the inputs.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if the underlying price is not positive and finite
    /// - `AnalyticalError::InvalidStrike` if the strike is not positive and finite
    /// - `AnalyticalError::InvalidRate` if the rate is not finite
    /// - `AnalyticalError::InvalidExpiry` if days to expiration is not positive and finite
    pub fn new(
        underlying_price: f64,
        strike_price: f64,
        interest_rate: f64,
        days_to_expiration: f64,
    ) -> Result<Self, AnalyticalError> {
        if !(underlying_price > 0.0) || !underlying_price.is_finite() {
            return Err(AnalyticalError::InvalidSpot {
                spot: underlying_price,
            });
        }
        if !(strike_price > 0.0) || !strike_price.is_finite() {
            return Err(AnalyticalError::InvalidStrike {
                strike: strike_price,
            });
        }
        if !interest_rate.is_finite() {
            return Err(AnalyticalError::InvalidRate {
                rate: interest_rate,
            });
        }
        if !(days_to_expiration > 0.0) || !days_to_expiration.is_finite() {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: days_to_expiration,
            });
        }

        Ok(Self {
            underlying_price,
            strike_price,
            interest_rate,
            days_to_expiration,
        })
    }

    /// Underlying price (S).
    #[inline]
    pub fn underlying_price(&self) -> f64 {
        self.underlying_price
    }

    /// Strike price (K).
    #[inline]
    pub fn strike_price(&self) -> f64 {
        self.strike_price
    }

    /// Annualised interest rate in percent.
    #[inline]
    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }

    /// Calendar days until expiration.
    #[inline]
    pub fn days_to_expiration(&self) -> f64 {
        self.days_to_expiration
    }

    /// Time to expiry in years.
    #[inline]
    pub fn years(&self) -> f64 {
        self.days_to_expiration / DAYS_PER_YEAR
    }

    /// Interest rate as a decimal.
    #[inline]
    pub fn rate_decimal(&self) -> f64 {
        self.interest_rate / PERCENT
    }

    /// Present value of the strike, K·e^(-rT).
    #[inline]
    pub fn discounted_strike(&self) -> f64 {
        self.strike_price * (-self.rate_decimal() * self.years()).exp()
    }

    /// Builds the natural-unit model for a percent volatility.
    ///
    /// # Errors
    /// `AnalyticalError::InvalidVolatility` if `volatility` is not positive
    /// and finite. The error carries the percent value the caller supplied.
    pub fn model(&self, volatility: f64) -> Result<BlackScholes<f64>, AnalyticalError> {
        if !(volatility > 0.0) || !volatility.is_finite() {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }
        BlackScholes::new(
            self.underlying_price,
            self.rate_decimal(),
            volatility / PERCENT,
        )
    }

    /// Put-call parity residual, C - P - S + K·e^(-rT).
    ///
    /// Zero for arbitrage-free prices under continuous discounting.
    ///
    /// # Errors
    /// `AnalyticalError::InvalidPrice` if either price is negative or not finite.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::quote::PricingInputs;
    ///
    /// let inputs = PricingInputs::new(100.0, 100.0, 5.0, 365.0).unwrap();
    /// let residual = inputs.parity_residual(10.450584, 5.573526).unwrap();
    /// assert!(residual.abs() < 1e-5);
    /// ```
    pub fn parity_residual(&self, call_price: f64, put_price: f64) -> Result<f64, AnalyticalError> {
        for price in [call_price, put_price] {
            if !(price >= 0.0) || !price.is_finite() {
                return Err(AnalyticalError::InvalidPrice { price });
            }
        }
        Ok(call_price - put_price - self.underlying_price + self.discounted_strike())
    }
}
