//! Immutable option quotes.

use pricer_core::types::{round_to_decimals, OptionSide, QuotedPrice};

use super::greeks::Greeks;
use super::inputs::PricingInputs;
use crate::analytical::AnalyticalError;
use crate::implied_vol::{ImpliedVolSolver, PriceModel, VolBounds};

/// Decimal places kept when an observed price is stored on a quote.
pub const STORED_PRICE_DECIMALS: u32 = 6;

/// How much work a pricing call does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PricingMode {
    /// Call and put prices only.
    #[default]
    Fast,
    /// Prices plus every Greek and the exercise probability.
    Full,
}

/// Market prices a quote can be reconstructed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObservedPrice {
    /// An observed call price; volatility is implied from it.
    Call(QuotedPrice),
    /// An observed put price; volatility is implied from it.
    Put(QuotedPrice),
    /// Both prices. Volatility is implied from the call and the pair is
    /// checked against put-call parity.
    Both {
        /// Observed call price
        call: QuotedPrice,
        /// Observed put price
        put: QuotedPrice,
    },
}

impl ObservedPrice {
    /// Builds the request from optional call and put quotes.
    ///
    /// Returns `None` when neither price is present.
    pub fn from_parts(call: Option<QuotedPrice>, put: Option<QuotedPrice>) -> Option<Self> {
        match (call, put) {
            (Some(call), Some(put)) => Some(Self::Both { call, put }),
            (Some(call), None) => Some(Self::Call(call)),
            (None, Some(put)) => Some(Self::Put(put)),
            (None, None) => None,
        }
    }

    /// Quote the volatility is implied from, and its side.
    ///
    /// When both prices are given the call wins.
    pub fn solve_target(&self) -> (QuotedPrice, OptionSide) {
        match *self {
            Self::Call(call) | Self::Both { call, .. } => (call, OptionSide::Call),
            Self::Put(put) => (put, OptionSide::Put),
        }
    }
}

/// A fully computed option quote.
///
/// Every value is computed when the quote is built; there are no setters.
///
/// # Examples
/// ```
/// use pricer_models::quote::{OptionQuote, PricingInputs, PricingMode};
///
/// let inputs = PricingInputs::new(100.0, 100.0, 5.0, 365.0).unwrap();
/// let quote = OptionQuote::price(inputs, 20.0, PricingMode::Fast).unwrap();
///
/// assert!((quote.call_price() - 10.4506).abs() < 1e-4);
/// assert!((quote.put_price() - 5.5735).abs() < 1e-4);
/// assert!(quote.greeks().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptionQuote {
    inputs: PricingInputs,
    volatility: f64,
    call_price: f64,
    put_price: f64,
    greeks: Option<Greeks>,
    parity_residual: Option<f64>,
}

impl OptionQuote {
    /// Prices a call/put pair at a percent volatility.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidVolatility` if `volatility` is not positive
    ///   and finite
    /// - `AnalyticalError::NumericalInstability` if either price overflows
    pub fn price(
        inputs: PricingInputs,
        volatility: f64,
        mode: PricingMode,
    ) -> Result<Self, AnalyticalError> {
        let model = inputs.model(volatility)?;
        let (call_price, put_price) = model.prices(inputs.strike_price(), inputs.years());
        let call_price = AnalyticalError::check_finite_price(call_price, OptionSide::Call)?;
        let put_price = AnalyticalError::check_finite_price(put_price, OptionSide::Put)?;
        let greeks = match mode {
            PricingMode::Fast => None,
            PricingMode::Full => Some(Greeks::compute(&model, &inputs)),
        };

        Ok(Self {
            inputs,
            volatility,
            call_price,
            put_price,
            greeks,
            parity_residual: None,
        })
    }

    /// Rebuilds a quote from observed market prices using the default
    /// Black-Scholes solver.
    ///
    /// Observed prices are stored rounded to six decimals; the other side
    /// is priced at the implied volatility. When both prices are given the
    /// parity residual of the observed pair is recorded as well.
    ///
    /// # Errors
    /// - `AnalyticalError::NoConvergence` if no volatility in `bounds`
    ///   reproduces the price
    /// - `AnalyticalError::InvalidPrice` if the parity check gets a bad price
    ///
    /// # Examples
    /// ```
    /// use pricer_models::implied_vol::VolBounds;
    /// use pricer_models::quote::{ObservedPrice, OptionQuote, PricingInputs};
    ///
    /// let inputs = PricingInputs::new(100.0, 100.0, 5.0, 365.0).unwrap();
    /// let observed = ObservedPrice::Call("10.4506".parse().unwrap());
    /// let quote = OptionQuote::from_observed(inputs, observed, VolBounds::default()).unwrap();
    ///
    /// assert!((quote.volatility() - 20.0).abs() < 0.5);
    /// assert_eq!(quote.call_price(), 10.4506);
    /// ```
    pub fn from_observed(
        inputs: PricingInputs,
        observed: ObservedPrice,
        bounds: VolBounds,
    ) -> Result<Self, AnalyticalError> {
        Self::from_observed_with(&ImpliedVolSolver::new(bounds), inputs, observed)
    }

    /// Same as [`OptionQuote::from_observed`] with a caller-supplied solver.
    pub fn from_observed_with<M: PriceModel>(
        solver: &ImpliedVolSolver<M>,
        inputs: PricingInputs,
        observed: ObservedPrice,
    ) -> Result<Self, AnalyticalError> {
        let (target, side) = observed.solve_target();
        let volatility = solver.solve(&inputs, &target, side)?;
        let solved = Self::price(inputs, volatility, PricingMode::Fast)?;
        let stored = |q: QuotedPrice| round_to_decimals(q.value(), STORED_PRICE_DECIMALS);

        let (call_price, put_price, parity_residual) = match observed {
            ObservedPrice::Call(call) => (stored(call), solved.put_price, None),
            ObservedPrice::Put(put) => (solved.call_price, stored(put), None),
            ObservedPrice::Both { call, put } => {
                let call = stored(call);
                let put = stored(put);
                (call, put, Some(inputs.parity_residual(call, put)?))
            }
        };

        Ok(Self {
            inputs,
            volatility,
            call_price,
            put_price,
            greeks: None,
            parity_residual,
        })
    }

    /// Inputs the quote was built from.
    #[inline]
    pub fn inputs(&self) -> &PricingInputs {
        &self.inputs
    }

    /// Volatility in percent, either supplied or implied.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Call price.
    #[inline]
    pub fn call_price(&self) -> f64 {
        self.call_price
    }

    /// Put price.
    #[inline]
    pub fn put_price(&self) -> f64 {
        self.put_price
    }

    /// Price of one side.
    #[inline]
    pub fn side_price(&self, side: OptionSide) -> f64 {
        match side {
            OptionSide::Call => self.call_price,
            OptionSide::Put => self.put_price,
        }
    }

    /// Greeks, present only for [`PricingMode::Full`] quotes.
    #[inline]
    pub fn greeks(&self) -> Option<&Greeks> {
        self.greeks.as_ref()
    }

    /// Parity residual of an observed call/put pair.
    #[inline]
    pub fn parity_residual(&self) -> Option<f64> {
        self.parity_residual
    }
}

/// Prices a call/put pair from raw inputs.
///
/// Rate and volatility are percentages, expiry is in days.
///
/// # Errors
/// Domain errors for non-positive underlying, strike, days or volatility,
/// and for any non-finite input.
///
/// # Examples
/// ```
/// use pricer_models::quote::{price, PricingMode};
///
/// let quote = price(100.0, 100.0, 5.0, 365.0, 20.0, PricingMode::Full).unwrap();
/// let greeks = quote.greeks().unwrap();
/// assert!((greeks.call_delta - 0.6368).abs() < 1e-4);
///
/// assert!(price(100.0, 0.0, 5.0, 365.0, 20.0, PricingMode::Fast).is_err());
/// ```
pub fn price(
    underlying_price: f64,
    strike_price: f64,
    interest_rate: f64,
    days_to_expiration: f64,
    volatility: f64,
    mode: PricingMode,
) -> Result<OptionQuote, AnalyticalError> {
    let inputs = PricingInputs::new(
        underlying_price,
        strike_price,
        interest_rate,
        days_to_expiration,
    )?;
    OptionQuote::price(inputs, volatility, mode)
}

/// Put-call parity residual C - P - S + K·e^(-rT) from raw inputs.
///
/// # Examples
/// ```
/// use pricer_models::quote::put_call_parity;
///
/// let residual = put_call_parity(100.0, 100.0, 5.0, 365.0, 10.4506, 5.5735).unwrap();
/// assert!(residual.abs() < 1e-3);
/// ```
pub fn put_call_parity(
    underlying_price: f64,
    strike_price: f64,
    interest_rate: f64,
    days_to_expiration: f64,
    call_price: f64,
    put_price: f64,
) -> Result<f64, AnalyticalError> {
    PricingInputs::new(
        underlying_price,
        strike_price,
        interest_rate,
        days_to_expiration,
    )?
    .parity_residual(call_price, put_price)
}
