//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options with analytical Greeks calculations. All inputs are
//! in natural units: decimal rate and volatility, expiry in years.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use num_traits::Float;
use pricer_core::types::OptionSide;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;

/// Black-Scholes model for European option pricing.
///
/// Holds the market state (spot, rate, volatility); strike and expiry are
/// supplied per call so one model can price a whole strip.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised, decimal; may be negative)
    /// * `volatility` - Volatility (annualised, decimal; must be positive)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0 or not finite
    /// - `AnalyticalError::InvalidRate` if rate is not finite
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0 or not finite
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if !(spot > zero) || !spot.is_finite() {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !rate.is_finite() {
            return Err(AnalyticalError::InvalidRate {
                rate: rate.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !(volatility > zero) || !volatility.is_finite() {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Total volatility over the option's life, a = σ√T.
    #[inline]
    pub fn total_volatility(&self, expiry: T) -> T {
        self.volatility * expiry.sqrt()
    }

    /// Discount factor e^(-rT).
    #[inline]
    pub fn discount(&self, expiry: T) -> T {
        (-self.rate * expiry).exp()
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// # Returns
    /// The d1 term. Returns large positive/negative values at expiry.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let half = T::from(0.5).unwrap();
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            // At expiry, if S > K, d1 → +∞, otherwise d1 → -∞
            let large = T::from(100.0).unwrap();
            if self.spot > strike {
                return large;
            } else if self.spot < strike {
                return -large;
            } else {
                return zero;
            }
        }

        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / self.total_volatility(expiry)
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            return self.d1(strike, expiry);
        }

        self.d1(strike, expiry) - self.total_volatility(expiry)
    }

    /// Computes European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// assert!((bs.price_call(100.0, 1.0) - 10.4506).abs() < 1e-4);
    /// ```
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        self.prices(strike, expiry).0
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// assert!((bs.price_put(100.0, 1.0) - 5.5735).abs() < 1e-4);
    /// ```
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        self.prices(strike, expiry).1
    }

    /// Price of the requested side.
    #[inline]
    pub fn price(&self, strike: T, expiry: T, side: OptionSide) -> T {
        match side {
            OptionSide::Call => self.price_call(strike, expiry),
            OptionSide::Put => self.price_put(strike, expiry),
        }
    }

    /// Call and put prices from a single d1/d2 evaluation.
    ///
    /// At expiry (T ≈ 0) both collapse to intrinsic value.
    ///
    /// # Returns
    /// `(call, put)`
    #[inline]
    pub fn prices(&self, strike: T, expiry: T) -> (T, T) {
        let zero = T::zero();
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            let call = (self.spot - strike).max(zero);
            let put = (strike - self.spot).max(zero);
            return (call, put);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.total_volatility(expiry);
        let discounted_strike = strike * self.discount(expiry);

        let call = self.spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2);
        let put = discounted_strike * norm_cdf(-d2) - self.spot * norm_cdf(-d1);
        (call, put)
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = N(d₁)
    /// - Put Delta = N(d₁) - 1
    #[inline]
    pub fn delta(&self, strike: T, expiry: T, side: OptionSide) -> T {
        let epsilon = T::from(1e-10).unwrap();
        let one = T::one();
        let zero = T::zero();

        if expiry <= epsilon {
            return match side {
                OptionSide::Call if self.spot > strike => one,
                OptionSide::Put if self.spot < strike => -one,
                _ => zero,
            };
        }

        let n_d1 = norm_cdf(self.d1(strike, expiry));
        match side {
            OptionSide::Call => n_d1,
            OptionSide::Put => n_d1 - one,
        }
    }

    /// Computes the dual delta (∂V/∂K), the sensitivity to the strike.
    ///
    /// - Call Dual Delta = -e^(-rT)·N(d₂)
    /// - Put Dual Delta = e^(-rT)·N(-d₂)
    #[inline]
    pub fn dual_delta(&self, strike: T, expiry: T, side: OptionSide) -> T {
        let epsilon = T::from(1e-10).unwrap();
        let one = T::one();
        let zero = T::zero();

        if expiry <= epsilon {
            return match side {
                OptionSide::Call if self.spot > strike => -one,
                OptionSide::Put if self.spot < strike => one,
                _ => zero,
            };
        }

        let d2 = self.d2(strike, expiry);
        let discount = self.discount(expiry);
        match side {
            OptionSide::Call => -discount * norm_cdf(d2),
            OptionSide::Put => discount * norm_cdf(-d2),
        }
    }

    /// Computes Gamma (∂²V/∂S²).
    ///
    /// Gamma = φ(d₁) / (S·σ·√T), identical for calls and puts.
    #[inline]
    pub fn gamma(&self, strike: T, expiry: T) -> T {
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            return T::zero();
        }

        let d1 = self.d1(strike, expiry);
        norm_pdf(d1) / (self.spot * self.total_volatility(expiry))
    }

    /// Computes Vega (∂V/∂σ) per unit of volatility.
    ///
    /// Vega = S·√T·φ(d₁), identical for calls and puts.
    #[inline]
    pub fn vega(&self, strike: T, expiry: T) -> T {
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            return T::zero();
        }

        let d1 = self.d1(strike, expiry);
        self.spot * expiry.sqrt() * norm_pdf(d1)
    }

    /// Computes Theta (∂V/∂t) per year.
    ///
    /// - Call Theta = -(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·N(d₂)
    /// - Put Theta = -(S·σ·φ(d₁))/(2√T) + r·K·e^(-rT)·N(-d₂)
    ///
    /// Usually negative (time decay).
    #[inline]
    pub fn theta(&self, strike: T, expiry: T, side: OptionSide) -> T {
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            return T::zero();
        }

        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.total_volatility(expiry);
        let two = T::from(2.0).unwrap();
        let carry = self.rate * strike * self.discount(expiry);

        let decay = -(self.spot * self.volatility * norm_pdf(d1)) / (two * expiry.sqrt());

        match side {
            OptionSide::Call => decay - carry * norm_cdf(d2),
            OptionSide::Put => decay + carry * norm_cdf(-d2),
        }
    }

    /// Computes Rho (∂V/∂r) per unit of rate.
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂)
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂)
    #[inline]
    pub fn rho(&self, strike: T, expiry: T, side: OptionSide) -> T {
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            return T::zero();
        }

        let d2 = self.d2(strike, expiry);
        let weight = strike * expiry * self.discount(expiry);

        match side {
            OptionSide::Call => weight * norm_cdf(d2),
            OptionSide::Put => -weight * norm_cdf(-d2),
        }
    }

    /// Risk-neutral probability that the call finishes in the money, N(d₂).
    #[inline]
    pub fn exercise_probability(&self, strike: T, expiry: T) -> T {
        norm_cdf(self.d2(strike, expiry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const CALL: OptionSide = OptionSide::Call;
    const PUT: OptionSide = OptionSide::Put;

    fn reference_model() -> BlackScholes<f64> {
        BlackScholes::new(100.0, 0.05, 0.2).unwrap()
    }

    // ==========================================================
    // Constructor Tests
    // ==========================================================

    #[test]
    fn test_new_valid_parameters() {
        let bs = reference_model();
        assert_eq!(bs.spot(), 100.0);
        assert_eq!(bs.rate(), 0.05);
        assert_eq!(bs.volatility(), 0.2);
    }

    #[test]
    fn test_new_invalid_spot() {
        for spot in [-100.0, 0.0, f64::NAN, f64::INFINITY] {
            match BlackScholes::new(spot, 0.05, 0.2) {
                Err(AnalyticalError::InvalidSpot { .. }) => {}
                other => panic!("Expected InvalidSpot for {}, got {:?}", spot, other),
            }
        }
    }

    #[test]
    fn test_new_invalid_volatility() {
        for vol in [-0.2, 0.0, f64::NAN] {
            match BlackScholes::new(100.0, 0.05, vol) {
                Err(AnalyticalError::InvalidVolatility { .. }) => {}
                other => panic!("Expected InvalidVolatility for {}, got {:?}", vol, other),
            }
        }
    }

    #[test]
    fn test_new_invalid_rate() {
        match BlackScholes::new(100.0_f64, f64::NAN, 0.2) {
            Err(AnalyticalError::InvalidRate { .. }) => {}
            other => panic!("Expected InvalidRate, got {:?}", other),
        }
    }

    #[test]
    fn test_new_negative_rate_allowed() {
        assert!(BlackScholes::new(100.0_f64, -0.02, 0.2).is_ok());
    }

    // ==========================================================
    // d1/d2 Tests
    // ==========================================================

    #[test]
    fn test_d1_d2_atm_zero_rate() {
        // ATM with r=0: d1 = σ√T / 2, d2 = -σ√T / 2
        let bs = BlackScholes::new(100.0_f64, 0.0, 0.2).unwrap();
        assert_relative_eq!(bs.d1(100.0, 1.0), 0.1, epsilon = 1e-12);
        assert_relative_eq!(bs.d2(100.0, 1.0), -0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_d1_d2_relationship() {
        let bs = reference_model();
        let d1 = bs.d1(105.0, 0.5);
        let d2 = bs.d2(105.0, 0.5);
        assert_relative_eq!(d2, d1 - 0.2 * 0.5_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_d1_expiry_zero() {
        let bs = BlackScholes::new(110.0_f64, 0.05, 0.2).unwrap();
        assert!(bs.d1(100.0, 0.0) > 50.0);
        assert!(bs.d1(120.0, 0.0) < -50.0);
    }

    // ==========================================================
    // Price Tests
    // ==========================================================

    #[test]
    fn test_reference_prices() {
        // S=100, K=100, r=0.05, σ=0.2, T=1
        let bs = reference_model();
        assert_relative_eq!(bs.price_call(100.0, 1.0), 10.450583572185565, epsilon = 1e-10);
        assert_relative_eq!(bs.price_put(100.0, 1.0), 5.573526022256971, epsilon = 1e-10);
    }

    #[test]
    fn test_price_dispatches_on_side() {
        let bs = reference_model();
        assert_eq!(bs.price(95.0, 0.5, CALL), bs.price_call(95.0, 0.5));
        assert_eq!(bs.price(95.0, 0.5, PUT), bs.price_put(95.0, 0.5));
    }

    #[test]
    fn test_prices_pair_matches_single_side() {
        let bs = reference_model();
        let (call, put) = bs.prices(90.0, 0.75);
        assert_eq!(call, bs.price_call(90.0, 0.75));
        assert_eq!(put, bs.price_put(90.0, 0.75));
    }

    #[test]
    fn test_expiry_zero_intrinsic() {
        let itm_call = BlackScholes::new(110.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(itm_call.price_call(100.0, 0.0), 10.0, epsilon = 1e-12);
        assert_relative_eq!(itm_call.price_put(100.0, 0.0), 0.0, epsilon = 1e-12);

        let itm_put = BlackScholes::new(90.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(itm_put.price_put(100.0, 0.0), 10.0, epsilon = 1e-12);
        assert_relative_eq!(itm_put.price_call(100.0, 0.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_deep_itm_call_near_forward_intrinsic() {
        let bs = BlackScholes::new(200.0_f64, 0.05, 0.2).unwrap();
        let intrinsic = 200.0 - 100.0 * (-0.05_f64).exp();
        assert!(bs.price_call(100.0, 1.0) >= intrinsic - 0.01);
    }

    #[test]
    fn test_deep_otm_call_near_zero() {
        let bs = BlackScholes::new(50.0_f64, 0.05, 0.2).unwrap();
        assert!(bs.price_call(100.0, 1.0) < 0.01);
    }

    // ==========================================================
    // Put-Call Parity Tests
    // ==========================================================

    #[test]
    fn test_put_call_parity_various_strikes_and_expiries() {
        let bs = reference_model();
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            for expiry in [0.1, 0.5, 1.0, 2.0] {
                let (call, put) = bs.prices(strike, expiry);
                let forward = 100.0 - strike * (-0.05 * expiry).exp();
                assert_relative_eq!(call - put, forward, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_put_call_parity_negative_rate() {
        let bs = BlackScholes::new(100.0_f64, -0.02, 0.2).unwrap();
        let (call, put) = bs.prices(100.0, 1.0);
        let forward = 100.0 - 100.0 * (0.02_f64).exp();
        assert_relative_eq!(call - put, forward, epsilon = 1e-10);
    }

    // ==========================================================
    // Greeks Tests
    // ==========================================================

    #[test]
    fn test_delta_bounds() {
        let bs = reference_model();
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            let call_delta = bs.delta(strike, 1.0, CALL);
            let put_delta = bs.delta(strike, 1.0, PUT);
            assert!((0.0..=1.0).contains(&call_delta));
            assert!((-1.0..=0.0).contains(&put_delta));
            assert_relative_eq!(put_delta, call_delta - 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_dual_delta_reference() {
        // S=K=100, r=5%, σ=20%, T=1: N(d2) = N(0.15) = 0.559617..
        let bs = reference_model();
        let discount = (-0.05_f64).exp();
        assert_relative_eq!(
            bs.dual_delta(100.0, 1.0, CALL),
            -discount * 0.5596176923702425,
            epsilon = 1e-10
        );
        assert_relative_eq!(
            bs.dual_delta(100.0, 1.0, PUT),
            discount * (1.0 - 0.5596176923702425),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_dual_delta_call_put_relationship() {
        // ∂(C - P)/∂K = -e^(-rT)
        let bs = reference_model();
        let diff = bs.dual_delta(110.0, 0.5, CALL) - bs.dual_delta(110.0, 0.5, PUT);
        assert_relative_eq!(diff, -(-0.05_f64 * 0.5).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_gamma_maximum_near_atm() {
        let bs = reference_model();
        let gamma_atm = bs.gamma(100.0, 1.0);
        assert!(gamma_atm >= bs.gamma(80.0, 1.0));
        assert!(gamma_atm >= bs.gamma(120.0, 1.0));
        assert!(bs.gamma(80.0, 1.0) > 0.0);
    }

    #[test]
    fn test_vega_non_negative() {
        let bs = reference_model();
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            assert!(bs.vega(strike, 1.0) >= 0.0);
        }
    }

    #[test]
    fn test_theta_call_negative() {
        let bs = reference_model();
        assert!(bs.theta(100.0, 1.0, CALL) < 0.0);
    }

    #[test]
    fn test_rho_signs() {
        let bs = reference_model();
        assert!(bs.rho(100.0, 1.0, CALL) > 0.0);
        assert!(bs.rho(100.0, 1.0, PUT) < 0.0);
    }

    #[test]
    fn test_exercise_probability() {
        let bs = reference_model();
        assert_relative_eq!(
            bs.exercise_probability(100.0, 1.0),
            0.5596176923702425,
            epsilon = 1e-10
        );
        let deep_itm = BlackScholes::new(300.0_f64, 0.05, 0.2).unwrap();
        assert!(deep_itm.exercise_probability(100.0, 1.0) > 0.999);
    }

    // ==========================================================
    // Greeks vs Finite Difference Tests
    // ==========================================================

    #[test]
    fn test_delta_vs_finite_diff() {
        let h = 0.01;
        let up = BlackScholes::new(100.0 + h, 0.05, 0.2).unwrap();
        let dn = BlackScholes::new(100.0 - h, 0.05, 0.2).unwrap();
        for side in OptionSide::ALL {
            let fd = (up.price(100.0, 1.0, side) - dn.price(100.0, 1.0, side)) / (2.0 * h);
            assert_relative_eq!(reference_model().delta(100.0, 1.0, side), fd, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_dual_delta_vs_finite_diff() {
        let bs = reference_model();
        let h = 0.01;
        for side in OptionSide::ALL {
            let fd = (bs.price(100.0 + h, 1.0, side) - bs.price(100.0 - h, 1.0, side)) / (2.0 * h);
            assert_relative_eq!(bs.dual_delta(100.0, 1.0, side), fd, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_gamma_vs_finite_diff() {
        let bs = reference_model();
        let h = 0.01;
        let up = BlackScholes::new(100.0 + h, 0.05, 0.2).unwrap();
        let dn = BlackScholes::new(100.0 - h, 0.05, 0.2).unwrap();
        let fd = (up.price_call(100.0, 1.0) - 2.0 * bs.price_call(100.0, 1.0)
            + dn.price_call(100.0, 1.0))
            / (h * h);
        assert_relative_eq!(bs.gamma(100.0, 1.0), fd, epsilon = 1e-4);
    }

    #[test]
    fn test_vega_vs_finite_diff() {
        let h = 1e-4;
        let up = BlackScholes::new(100.0, 0.05, 0.2 + h).unwrap();
        let dn = BlackScholes::new(100.0, 0.05, 0.2 - h).unwrap();
        let fd = (up.price_call(100.0, 1.0) - dn.price_call(100.0, 1.0)) / (2.0 * h);
        assert_relative_eq!(reference_model().vega(100.0, 1.0), fd, epsilon = 1e-4);
    }

    #[test]
    fn test_theta_vs_finite_diff() {
        // Theta is -∂V/∂T
        let bs = reference_model();
        let h = 1e-5;
        for side in OptionSide::ALL {
            let fd = -(bs.price(100.0, 1.0 + h, side) - bs.price(100.0, 1.0 - h, side)) / (2.0 * h);
            assert_relative_eq!(bs.theta(100.0, 1.0, side), fd, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_rho_vs_finite_diff() {
        let h = 1e-5;
        let up = BlackScholes::new(100.0, 0.05 + h, 0.2).unwrap();
        let dn = BlackScholes::new(100.0, 0.05 - h, 0.2).unwrap();
        for side in OptionSide::ALL {
            let fd = (up.price(100.0, 1.0, side) - dn.price(100.0, 1.0, side)) / (2.0 * h);
            assert_relative_eq!(reference_model().rho(100.0, 1.0, side), fd, epsilon = 1e-4);
        }
    }

    // ==========================================================
    // Clone, Debug and f32
    // ==========================================================

    #[test]
    fn test_clone_and_debug() {
        let bs1 = reference_model();
        let bs2 = bs1.clone();
        assert_eq!(bs1.spot(), bs2.spot());
        let debug_str = format!("{:?}", bs1);
        assert!(debug_str.contains("BlackScholes"));
        assert!(debug_str.contains("spot"));
    }

    #[test]
    fn test_f32_compatibility() {
        let bs = BlackScholes::new(100.0_f32, 0.05_f32, 0.2_f32).unwrap();
        assert!(bs.price_call(100.0_f32, 1.0_f32) > 0.0_f32);
    }
}
