//! Integration tests for the public pricing and implied-volatility API.
//!
//! Exercises the crate the way a caller does: raw percent/day inputs in,
//! quotes and volatilities out.

use approx::assert_relative_eq;
use pricer_core::types::{OptionSide, PricingError, QuotedPrice};
use pricer_models::access::{check_access, KeyListGate};
use pricer_models::implied_vol::{implied_volatility, VolBounds};
use pricer_models::quote::{price, put_call_parity, PricingMode};
use proptest::prelude::*;

fn quoted(text: &str) -> QuotedPrice {
    text.parse().unwrap()
}

// ==========================================================
// Reference scenario
// ==========================================================

#[test]
fn test_reference_scenario() {
    let quote = price(100.0, 100.0, 5.0, 365.0, 20.0, PricingMode::Full).unwrap();
    assert_relative_eq!(quote.call_price(), 10.4506, epsilon = 1e-4);
    assert_relative_eq!(quote.put_price(), 5.5735, epsilon = 1e-4);

    let greeks = quote.greeks().unwrap();
    assert_relative_eq!(greeks.call_delta - greeks.put_delta, 1.0, epsilon = 1e-12);
    assert!(greeks.gamma > 0.0);
    assert!(greeks.vega > 0.0);
    assert!(greeks.call_theta < 0.0);
    assert!(greeks.call_rho > 0.0 && greeks.put_rho < 0.0);
    assert!(greeks.exercise_probability > 0.0 && greeks.exercise_probability < 1.0);
}

#[test]
fn test_reference_implied_volatility() {
    let vol = implied_volatility(
        100.0,
        100.0,
        5.0,
        365.0,
        quoted("10.4506"),
        OptionSide::Call,
        VolBounds::default(),
    )
    .unwrap();
    assert_relative_eq!(vol, 20.0, epsilon = 0.5);
}

// ==========================================================
// Limits
// ==========================================================

#[test]
fn test_atm_zero_rate_short_expiry_call_equals_put() {
    for days in [1.0, 0.1, 0.001] {
        let quote = price(100.0, 100.0, 0.0, days, 20.0, PricingMode::Fast).unwrap();
        assert_relative_eq!(quote.call_price(), quote.put_price(), epsilon = 1e-9);
    }
    let tiny = price(100.0, 100.0, 0.0, 0.001, 20.0, PricingMode::Fast).unwrap();
    assert!(tiny.call_price() < 0.05);
}

#[test]
fn test_vanishing_volatility_gives_forward_intrinsic() {
    for (spot, strike) in [(100.0, 95.0), (100.0, 100.0), (90.0, 100.0), (120.0, 80.0)] {
        let quote = price(spot, strike, 5.0, 365.0, 0.00001, PricingMode::Fast).unwrap();
        let forward_intrinsic = (spot - strike * (-0.05_f64).exp()).max(0.0);
        assert_relative_eq!(quote.call_price(), forward_intrinsic, epsilon = 1e-6);
    }
}

#[test]
fn test_price_strictly_increasing_in_volatility() {
    let mut previous = (0.0, 0.0);
    for step in 1..=40 {
        let vol = step as f64 * 5.0;
        let quote = price(100.0, 110.0, 3.0, 180.0, vol, PricingMode::Fast).unwrap();
        assert!(quote.call_price() > previous.0, "call not increasing at σ = {}", vol);
        assert!(quote.put_price() > previous.1, "put not increasing at σ = {}", vol);
        previous = (quote.call_price(), quote.put_price());
    }
}

// ==========================================================
// Errors
// ==========================================================

#[test]
fn test_domain_errors() {
    let cases = [
        (100.0, 0.0, 5.0, 365.0, 20.0),
        (100.0, 100.0, 5.0, 0.0, 20.0),
        (100.0, 100.0, 5.0, 365.0, 0.0),
        (0.0, 100.0, 5.0, 365.0, 20.0),
        (100.0, 100.0, 5.0, -10.0, 20.0),
    ];
    for (s, k, r, d, v) in cases {
        let err = price(s, k, r, d, v, PricingMode::Full).unwrap_err();
        assert!(err.is_domain_error(), "{:?}", err);
        assert!(PricingError::from(err).is_domain());
    }
}

#[test]
fn test_convergence_error_for_unreachable_target() {
    let err = implied_volatility(
        100.0,
        100.0,
        5.0,
        365.0,
        quoted("150.00"),
        OptionSide::Call,
        VolBounds::default(),
    )
    .unwrap_err();
    assert!(err.is_convergence_error());
    assert!(PricingError::from(err).is_convergence());
}

#[test]
fn test_narrow_bounds_exclude_solution() {
    let bounds = VolBounds::new(30.0, 60.0).unwrap();
    let err = implied_volatility(
        100.0,
        100.0,
        5.0,
        365.0,
        quoted("10.4506"),
        OptionSide::Call,
        bounds,
    )
    .unwrap_err();
    assert!(err.is_convergence_error());
}

// ==========================================================
// Access gate
// ==========================================================

#[test]
fn test_pricing_behind_key_gate() {
    let gate = KeyListGate::new(vec!["desk-7".to_string()], Some("desk-7".to_string()));
    check_access(Some(&gate)).unwrap();
    assert!(price(100.0, 100.0, 5.0, 365.0, 20.0, PricingMode::Fast).is_ok());

    let wrong = KeyListGate::new(vec!["desk-7".to_string()], Some("desk-8".to_string()));
    assert!(check_access(Some(&wrong)).is_err());
}

// ==========================================================
// Property-based tests
// ==========================================================

#[test]
fn test_public_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<pricer_models::quote::OptionQuote>();
    assert_send_sync::<pricer_models::quote::PricingInputs>();
    assert_send_sync::<pricer_models::implied_vol::ImpliedVolSolver>();
    assert_send_sync::<pricer_models::analytical::BlackScholes<f64>>();
    assert_send_sync::<KeyListGate>();
    assert_send_sync::<QuotedPrice>();
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn put_call_parity_holds(
        spot in 10.0_f64..500.0,
        strike in 10.0_f64..500.0,
        rate in -2.0_f64..10.0,
        days in 1.0_f64..1095.0,
        vol in 1.0_f64..200.0,
    ) {
        let quote = price(spot, strike, rate, days, vol, PricingMode::Fast).unwrap();
        let residual = put_call_parity(
            spot, strike, rate, days, quote.call_price(), quote.put_price(),
        )
        .unwrap();
        prop_assert!(residual.abs() < 1e-9 * spot.max(strike), "residual = {}", residual);
    }

    #[test]
    fn prices_respect_no_arbitrage_bounds(
        spot in 10.0_f64..500.0,
        strike in 10.0_f64..500.0,
        rate in 0.0_f64..10.0,
        days in 1.0_f64..1095.0,
        vol in 1.0_f64..200.0,
    ) {
        let quote = price(spot, strike, rate, days, vol, PricingMode::Fast).unwrap();
        let discounted_strike = strike * (-rate / 100.0 * days / 365.0).exp();
        let tol = 1e-9 * spot.max(strike);
        prop_assert!(quote.call_price() >= (spot - discounted_strike).max(0.0) - tol);
        prop_assert!(quote.call_price() <= spot + tol);
        prop_assert!(quote.put_price() >= (discounted_strike - spot).max(0.0) - tol);
        prop_assert!(quote.put_price() <= discounted_strike + tol);
    }
}
