//! Pricing strategies the solver can invert.

use pricer_core::types::OptionSide;

use crate::analytical::AnalyticalError;
use crate::quote::PricingInputs;

/// A pricing formula that is increasing in volatility.
///
/// The implied-volatility solver is generic over this trait, so the formula
/// is fixed at compile time.
pub trait PriceModel: Send + Sync {
    /// Price of `side` at a percent `volatility`. Prices only, no Greeks.
    fn price(
        &self,
        inputs: &PricingInputs,
        volatility: f64,
        side: OptionSide,
    ) -> Result<f64, AnalyticalError>;

    /// Short model name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Closed-form Black-Scholes prices.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionSide;
/// use pricer_models::implied_vol::{BlackScholesModel, PriceModel};
/// use pricer_models::quote::PricingInputs;
///
/// let inputs = PricingInputs::new(100.0, 100.0, 5.0, 365.0).unwrap();
/// let call = BlackScholesModel.price(&inputs, 20.0, OptionSide::Call).unwrap();
/// assert!((call - 10.4506).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlackScholesModel;

impl PriceModel for BlackScholesModel {
    #[inline]
    fn price(
        &self,
        inputs: &PricingInputs,
        volatility: f64,
        side: OptionSide,
    ) -> Result<f64, AnalyticalError> {
        let model = inputs.model(volatility)?;
        AnalyticalError::check_finite_price(
            model.price(inputs.strike_price(), inputs.years(), side),
            side,
        )
    }

    fn name(&self) -> &'static str {
        "black-scholes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_black_scholes_model_prices_both_sides() {
        let inputs = PricingInputs::new(100.0, 100.0, 5.0, 365.0).unwrap();
        let call = BlackScholesModel.price(&inputs, 20.0, OptionSide::Call).unwrap();
        let put = BlackScholesModel.price(&inputs, 20.0, OptionSide::Put).unwrap();
        assert_relative_eq!(call, 10.450583572185565, epsilon = 1e-10);
        assert_relative_eq!(put, 5.573526022256971, epsilon = 1e-10);
    }

    #[test]
    fn test_black_scholes_model_rejects_zero_volatility() {
        let inputs = PricingInputs::new(100.0, 100.0, 5.0, 365.0).unwrap();
        assert!(BlackScholesModel
            .price(&inputs, 0.0, OptionSide::Call)
            .unwrap_err()
            .is_domain_error());
    }

    #[test]
    fn test_black_scholes_model_flags_overflowing_discount() {
        // e^(-rT) overflows for an absurdly negative rate
        let inputs = PricingInputs::new(100.0, 100.0, -1e300, 365.0).unwrap();
        for side in OptionSide::ALL {
            let err = BlackScholesModel.price(&inputs, 20.0, side).unwrap_err();
            assert!(matches!(err, AnalyticalError::NumericalInstability { .. }));
        }
    }

    #[test]
    fn test_name() {
        assert_eq!(BlackScholesModel.name(), "black-scholes");
    }
}
