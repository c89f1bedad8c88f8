//! Full-mode sensitivities in quoting conventions.

use pricer_core::types::OptionSide;

use super::inputs::{PricingInputs, DAYS_PER_YEAR, PERCENT};
use crate::analytical::BlackScholes;

/// Greeks of a call/put pair, scaled the way desks quote them.
///
/// - Vega and Rho are per one percentage point of volatility / rate
/// - Theta is per calendar day
/// - Delta, Dual Delta and Gamma are in natural units
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// Call Delta: N(d₁)
    pub call_delta: f64,
    /// Put Delta: N(d₁) - 1
    pub put_delta: f64,
    /// Call Dual Delta: -e^(-rT)·N(d₂)
    pub call_dual_delta: f64,
    /// Put Dual Delta: e^(-rT)·N(-d₂)
    pub put_dual_delta: f64,
    /// Gamma, shared by both sides
    pub gamma: f64,
    /// Vega per 1 % volatility, shared by both sides
    pub vega: f64,
    /// Call Theta per day
    pub call_theta: f64,
    /// Put Theta per day
    pub put_theta: f64,
    /// Call Rho per 1 % rate
    pub call_rho: f64,
    /// Put Rho per 1 % rate
    pub put_rho: f64,
    /// Risk-neutral probability of finishing in the money, N(d₂)
    pub exercise_probability: f64,
}

impl Greeks {
    pub(crate) fn compute(model: &BlackScholes<f64>, inputs: &PricingInputs) -> Self {
        let strike = inputs.strike_price();
        let expiry = inputs.years();

        Self {
            call_delta: model.delta(strike, expiry, OptionSide::Call),
            put_delta: model.delta(strike, expiry, OptionSide::Put),
            call_dual_delta: model.dual_delta(strike, expiry, OptionSide::Call),
            put_dual_delta: model.dual_delta(strike, expiry, OptionSide::Put),
            gamma: model.gamma(strike, expiry),
            vega: model.vega(strike, expiry) / PERCENT,
            call_theta: model.theta(strike, expiry, OptionSide::Call) / DAYS_PER_YEAR,
            put_theta: model.theta(strike, expiry, OptionSide::Put) / DAYS_PER_YEAR,
            call_rho: model.rho(strike, expiry, OptionSide::Call) / PERCENT,
            put_rho: model.rho(strike, expiry, OptionSide::Put) / PERCENT,
            exercise_probability: model.exercise_probability(strike, expiry),
        }
    }

    /// Delta of one side.
    #[inline]
    pub fn delta(&self, side: OptionSide) -> f64 {
        match side {
            OptionSide::Call => self.call_delta,
            OptionSide::Put => self.put_delta,
        }
    }

    /// Dual Delta of one side.
    #[inline]
    pub fn dual_delta(&self, side: OptionSide) -> f64 {
        match side {
            OptionSide::Call => self.call_dual_delta,
            OptionSide::Put => self.put_dual_delta,
        }
    }

    /// Theta of one side.
    #[inline]
    pub fn theta(&self, side: OptionSide) -> f64 {
        match side {
            OptionSide::Call => self.call_theta,
            OptionSide::Put => self.put_theta,
        }
    }

    /// Rho of one side.
    #[inline]
    pub fn rho(&self, side: OptionSide) -> f64 {
        match side {
            OptionSide::Call => self.call_rho,
            OptionSide::Put => self.put_rho,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_greeks() -> Greeks {
        let inputs = PricingInputs::new(100.0, 100.0, 5.0, 365.0).unwrap();
        let model = inputs.model(20.0).unwrap();
        Greeks::compute(&model, &inputs)
    }

    #[test]
    fn test_reference_values() {
        // S=K=100, r=5%, σ=20%, one year: d1 = 0.35, d2 = 0.15
        let g = reference_greeks();
        assert_relative_eq!(g.call_delta, 0.6368306511756191, epsilon = 1e-10);
        assert_relative_eq!(g.put_delta, 0.6368306511756191 - 1.0, epsilon = 1e-10);
        assert_relative_eq!(g.gamma, 0.018762017345846895, epsilon = 1e-10);
        assert_relative_eq!(g.vega, 0.3752403469169379, epsilon = 1e-10);
        assert_relative_eq!(g.call_theta, -6.414027546438197 / 365.0, epsilon = 1e-10);
        assert_relative_eq!(g.put_theta, -1.657880423934626 / 365.0, epsilon = 1e-10);
        assert_relative_eq!(g.call_rho, 0.5323248154537634, epsilon = 1e-10);
        assert_relative_eq!(g.put_rho, -0.4189046090469506, epsilon = 1e-10);
        assert_relative_eq!(g.exercise_probability, 0.5596176923702425, epsilon = 1e-10);
    }

    #[test]
    fn test_side_accessors() {
        let g = reference_greeks();
        assert_eq!(g.delta(OptionSide::Call), g.call_delta);
        assert_eq!(g.delta(OptionSide::Put), g.put_delta);
        assert_eq!(g.dual_delta(OptionSide::Put), g.put_dual_delta);
        assert_eq!(g.theta(OptionSide::Call), g.call_theta);
        assert_eq!(g.rho(OptionSide::Put), g.put_rho);
    }

    #[test]
    fn test_exercise_probability_equals_minus_scaled_dual_delta() {
        // N(d₂) = -e^(rT) · call dual delta
        let g = reference_greeks();
        assert_relative_eq!(
            g.exercise_probability,
            -g.call_dual_delta * 0.05_f64.exp(),
            epsilon = 1e-12
        );
    }
}
