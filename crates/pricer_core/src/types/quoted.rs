//! Observed prices with textual precision.
//!
//! A market quote such as `"3.45"` carries two pieces of information: its
//! value and the number of decimal places it was quoted to. The second one is
//! lost as soon as the text becomes an `f64` (`"3.40"` and `"3.4"` parse to
//! the same float), so [`QuotedPrice`] captures both at parse time.
//!
//! The implied-volatility solver treats a model price as matching the quote
//! when both round to the same number of ticks at the quote's precision.

use std::fmt;
use std::str::FromStr;

use super::error::QuoteError;

/// Maximum number of decimal places a quote may carry.
pub const MAX_DECIMALS: u32 = 12;

/// Rounds `x` to `decimals` decimal places (half away from zero).
///
/// # Examples
/// ```
/// use pricer_core::types::round_to_decimals;
///
/// assert_eq!(round_to_decimals(10.450583, 4), 10.4506);
/// assert_eq!(round_to_decimals(2.5, 0), 3.0);
/// ```
#[inline]
pub fn round_to_decimals(x: f64, decimals: u32) -> f64 {
    let scale = 10_f64.powi(decimals as i32);
    (x * scale).round() / scale
}

/// An observed option price together with its quoted decimal precision.
///
/// # Examples
/// ```
/// use pricer_core::types::QuotedPrice;
///
/// let loose: QuotedPrice = "4.1".parse().unwrap();
/// let tight: QuotedPrice = "4.123".parse().unwrap();
/// assert_eq!(loose.decimals(), 1);
/// assert_eq!(tight.decimals(), 3);
///
/// // 4.1249 is "4.1" at one decimal but not "4.123" at three.
/// assert!(loose.matches(4.1249));
/// assert!(!tight.matches(4.1249));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuotedPrice {
    value: f64,
    decimals: u32,
}

impl QuotedPrice {
    /// Builds a quote from an already-parsed value and an explicit precision.
    ///
    /// # Errors
    /// - `QuoteError::Malformed` if `value` is not finite
    /// - `QuoteError::Negative` if `value < 0`
    /// - `QuoteError::TooPrecise` if `decimals > MAX_DECIMALS`
    pub fn new(value: f64, decimals: u32) -> Result<Self, QuoteError> {
        if !value.is_finite() {
            return Err(QuoteError::Malformed(value.to_string()));
        }
        if value < 0.0 {
            return Err(QuoteError::Negative(value.to_string()));
        }
        if decimals > MAX_DECIMALS {
            return Err(QuoteError::TooPrecise {
                text: value.to_string(),
                decimals,
                max: MAX_DECIMALS,
            });
        }
        Ok(Self { value, decimals })
    }

    /// The quoted value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Number of decimal places in the original quote text.
    #[inline]
    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Rounds `estimate` to this quote's precision.
    #[inline]
    pub fn round(&self, estimate: f64) -> f64 {
        round_to_decimals(estimate, self.decimals)
    }

    /// True when `estimate` and the quote land on the same tick.
    ///
    /// Comparison happens on scaled integers so that representation error in
    /// the quoted value itself cannot break an exact match.
    #[inline]
    pub fn matches(&self, estimate: f64) -> bool {
        let scale = 10_f64.powi(self.decimals as i32);
        (estimate * scale).round() == (self.value * scale).round()
    }
}

impl FromStr for QuotedPrice {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(QuoteError::Empty);
        }

        let (negative, body) = match text.as_bytes()[0] {
            b'-' => (true, &text[1..]),
            b'+' => (false, &text[1..]),
            _ => (false, text),
        };

        let (integral, fractional) = match body.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (body, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(integral)
            || !all_digits(fractional)
            || (integral.is_empty() && fractional.is_empty())
        {
            return Err(QuoteError::Malformed(text.to_string()));
        }

        if negative {
            return Err(QuoteError::Negative(text.to_string()));
        }

        let decimals = fractional.len() as u32;
        if decimals > MAX_DECIMALS {
            return Err(QuoteError::TooPrecise {
                text: text.to_string(),
                decimals,
                max: MAX_DECIMALS,
            });
        }

        let value = body
            .parse::<f64>()
            .map_err(|_| QuoteError::Malformed(text.to_string()))?;

        Ok(Self { value, decimals })
    }
}

impl fmt::Display for QuotedPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", self.decimals as usize, self.value)
    }
}
