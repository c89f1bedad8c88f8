//! Bisection search for implied volatility.

use pricer_core::math::solvers::{BisectionConfig, BisectionSolver, Probe};
use pricer_core::types::{OptionSide, QuotedPrice, SolverError};

use super::bounds::VolBounds;
use super::model::{BlackScholesModel, PriceModel};
use crate::analytical::AnalyticalError;
use crate::quote::PricingInputs;

/// Implied-volatility solver over a fixed pricing model.
///
/// Each midpoint volatility is re-priced in fast mode. The search stops at
/// the first midpoint whose price lands on the same tick as the quote at the
/// quote's own decimal precision; otherwise the bracket shrinks towards the
/// side containing the quote. Running out of iterations is an error.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionSide;
/// use pricer_models::implied_vol::{ImpliedVolSolver, VolBounds};
/// use pricer_models::quote::PricingInputs;
///
/// let solver = ImpliedVolSolver::new(VolBounds::default());
/// let inputs = PricingInputs::new(100.0, 100.0, 5.0, 365.0).unwrap();
/// let target = "10.4506".parse().unwrap();
///
/// let vol = solver.solve(&inputs, &target, OptionSide::Call).unwrap();
/// assert!((vol - 20.0).abs() < 0.01);
/// ```
#[derive(Debug, Clone)]
pub struct ImpliedVolSolver<M: PriceModel = BlackScholesModel> {
    model: M,
    bounds: VolBounds,
    bisection: BisectionSolver<f64>,
}

impl ImpliedVolSolver<BlackScholesModel> {
    /// Black-Scholes solver with the default iteration budget.
    pub fn new(bounds: VolBounds) -> Self {
        Self::with_model(BlackScholesModel, bounds, BisectionConfig::default())
    }
}

impl Default for ImpliedVolSolver<BlackScholesModel> {
    fn default() -> Self {
        Self::new(VolBounds::default())
    }
}

impl<M: PriceModel> ImpliedVolSolver<M> {
    /// Solver over an arbitrary model and search configuration.
    pub fn with_model(model: M, bounds: VolBounds, config: BisectionConfig<f64>) -> Self {
        Self {
            model,
            bounds,
            bisection: BisectionSolver::new(config),
        }
    }

    /// The search bracket.
    #[inline]
    pub fn bounds(&self) -> VolBounds {
        self.bounds
    }

    /// The bisection settings.
    #[inline]
    pub fn config(&self) -> &BisectionConfig<f64> {
        self.bisection.config()
    }

    /// The pricing model being inverted.
    #[inline]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Finds a percent volatility whose `side` price matches `target`.
    ///
    /// # Errors
    /// - `AnalyticalError::NoConvergence` if no midpoint matched within the
    ///   iteration budget, including targets the bracket cannot reach
    /// - Domain errors raised by the model
    pub fn solve(
        &self,
        inputs: &PricingInputs,
        target: &QuotedPrice,
        side: OptionSide,
    ) -> Result<f64, AnalyticalError> {
        let result = self
            .bisection
            .try_search(self.bounds.low(), self.bounds.high(), |volatility| {
                let estimate = self.model.price(inputs, volatility, side)?;
                Ok(if target.matches(estimate) {
                    Probe::Hit
                } else if estimate > target.value() {
                    Probe::Above
                } else {
                    Probe::Below
                })
            });

        match result {
            Err(AnalyticalError::Solver(SolverError::MaxIterationsExceeded {
                iterations, ..
            })) => Err(AnalyticalError::NoConvergence {
                target: target.value(),
                low: self.bounds.low(),
                high: self.bounds.high(),
                iterations,
            }),
            other => other,
        }
    }
}

/// Implied volatility, in percent, from raw inputs.
///
/// `target`'s decimal precision decides when a re-priced value counts as a
/// match, so `"4.1"` is solved more loosely than `"4.123"`.
///
/// # Errors
/// - Domain errors for invalid underlying, strike, rate or days
/// - `AnalyticalError::NoConvergence` when the search is exhausted
///
/// # Examples
/// ```
/// use pricer_core::types::OptionSide;
/// use pricer_models::implied_vol::{implied_volatility, VolBounds};
///
/// let vol = implied_volatility(
///     100.0, 100.0, 5.0, 365.0,
///     "5.5735".parse().unwrap(),
///     OptionSide::Put,
///     VolBounds::default(),
/// )
/// .unwrap();
/// assert!((vol - 20.0).abs() < 0.01);
/// ```
pub fn implied_volatility(
    underlying_price: f64,
    strike_price: f64,
    interest_rate: f64,
    days_to_expiration: f64,
    target: QuotedPrice,
    side: OptionSide,
    bounds: VolBounds,
) -> Result<f64, AnalyticalError> {
    let inputs = PricingInputs::new(
        underlying_price,
        strike_price,
        interest_rate,
        days_to_expiration,
    )?;
    ImpliedVolSolver::new(bounds).solve(&inputs, &target, side)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use pricer_core::types::round_to_decimals;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Re-pricing at the solved volatility reproduces the quote.
        #[test]
        fn solved_volatility_reprices_quote(
            spot in 50.0_f64..150.0,
            strike in 50.0_f64..150.0,
            rate in -1.0_f64..8.0,
            days in 30.0_f64..730.0,
            vol in 1.5_f64..199.5,
            put in any::<bool>(),
        ) {
            let side = if put { OptionSide::Put } else { OptionSide::Call };
            let inputs = PricingInputs::new(spot, strike, rate, days).unwrap();
            let observed = BlackScholesModel.price(&inputs, vol, side).unwrap();
            // Skip prices too small to carry information at four decimals.
            prop_assume!(observed > 0.01);

            let target = QuotedPrice::new(round_to_decimals(observed, 4), 4).unwrap();
            let solved = ImpliedVolSolver::default().solve(&inputs, &target, side).unwrap();
            let repriced = BlackScholesModel.price(&inputs, solved, side).unwrap();
            prop_assert!(target.matches(repriced));
        }

        /// At the money and zero rate the solved volatility is close to the
        /// one priced; vega stays large enough for four decimals to pin it.
        #[test]
        fn atm_volatility_round_trip(
            days in 30.0_f64..730.0,
            vol in 1.5_f64..199.5,
        ) {
            let inputs = PricingInputs::new(100.0, 100.0, 0.0, days).unwrap();
            let observed = BlackScholesModel.price(&inputs, vol, OptionSide::Call).unwrap();
            let target = QuotedPrice::new(round_to_decimals(observed, 4), 4).unwrap();
            let solved = ImpliedVolSolver::default()
                .solve(&inputs, &target, OptionSide::Call)
                .unwrap();
            prop_assert!((solved - vol).abs() < 0.01, "solved {} vs {}", solved, vol);
        }
    }
}
