//! Implied-volatility command implementation
//!
//! Solves volatility from an observed call or put price given as text, so
//! the quote's own decimal places set the matching precision.

use pricer_core::types::QuotedPrice;
use pricer_models::quote::{ObservedPrice, OptionQuote};
use tracing::{info, warn};

use super::price::render_table;
use super::MarketArgs;
use crate::config::{OutputFormat, PricerConfig};
use crate::{CliError, Result};

/// Parse the observed prices into a solve request
pub fn observed_from_text(call: Option<&str>, put: Option<&str>) -> Result<ObservedPrice> {
    let call = call.map(str::parse::<QuotedPrice>).transpose()?;
    let put = put.map(str::parse::<QuotedPrice>).transpose()?;

    ObservedPrice::from_parts(call, put).ok_or_else(|| {
        CliError::InvalidArgument("one of --call-price or --put-price is required".to_string())
    })
}

/// Run the implied-vol command
pub fn run(
    market: &MarketArgs,
    call_price: Option<&str>,
    put_price: Option<&str>,
    config: &PricerConfig,
) -> Result<()> {
    let inputs = market.inputs()?;
    let observed = observed_from_text(call_price, put_price)?;
    let (target, side) = observed.solve_target();

    if matches!(observed, ObservedPrice::Both { .. }) {
        warn!("Both prices given: solving from the call, the put is used for the parity check");
    }

    let solver = config.solver()?;
    info!(
        %side,
        target = %target,
        decimals = target.decimals(),
        low = solver.bounds().low(),
        high = solver.bounds().high(),
        max_iterations = solver.config().max_iterations,
        "Solving implied volatility"
    );

    let quote = OptionQuote::from_observed_with(&solver, inputs, observed)?;
    info!(volatility = quote.volatility(), "Implied volatility found");

    match config.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&quote)?),
        OutputFormat::Table => print!("{}", render_table(&quote)),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::OptionSide;

    #[test]
    fn test_observed_call_keeps_text_precision() {
        let observed = observed_from_text(Some("4.10"), None).unwrap();
        let (target, side) = observed.solve_target();
        assert_eq!(side, OptionSide::Call);
        assert_eq!(target.decimals(), 2);
    }

    #[test]
    fn test_observed_put() {
        let observed = observed_from_text(None, Some("5.5735")).unwrap();
        assert_eq!(observed.solve_target().1, OptionSide::Put);
    }

    #[test]
    fn test_observed_both_prefers_call() {
        let observed = observed_from_text(Some("10.45"), Some("5.57")).unwrap();
        assert!(matches!(observed, ObservedPrice::Both { .. }));
        assert_eq!(observed.solve_target().1, OptionSide::Call);
    }

    #[test]
    fn test_observed_requires_a_price() {
        assert!(matches!(
            observed_from_text(None, None),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_observed_rejects_bad_text() {
        assert!(matches!(
            observed_from_text(Some("ten"), None),
            Err(CliError::Quote(_))
        ));
        assert!(matches!(
            observed_from_text(None, Some("-1.5")),
            Err(CliError::Quote(_))
        ));
    }
}
