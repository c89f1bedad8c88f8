//! Parity command implementation
//!
//! Checks an observed call/put pair against put-call parity.

use pricer_core::types::QuotedPrice;
use serde::Serialize;
use tracing::info;

use super::MarketArgs;
use crate::config::{OutputFormat, PricerConfig};
use crate::Result;

/// Parity check result
#[derive(Debug, Clone, Serialize)]
pub struct ParityReport {
    pub call_price: f64,
    pub put_price: f64,
    pub discounted_strike: f64,
    pub residual: f64,
}

/// Compute the report from text prices
pub fn report(market: &MarketArgs, call_price: &str, put_price: &str) -> Result<ParityReport> {
    let inputs = market.inputs()?;
    let call: QuotedPrice = call_price.parse()?;
    let put: QuotedPrice = put_price.parse()?;
    let residual = inputs.parity_residual(call.value(), put.value())?;

    Ok(ParityReport {
        call_price: call.value(),
        put_price: put.value(),
        discounted_strike: inputs.discounted_strike(),
        residual,
    })
}

/// Run the parity command
pub fn run(
    market: &MarketArgs,
    call_price: &str,
    put_price: &str,
    config: &PricerConfig,
) -> Result<()> {
    let report = report(market, call_price, put_price)?;
    info!(residual = report.residual, "Parity residual computed");

    match config.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => {
            println!("Call price:         {:.6}", report.call_price);
            println!("Put price:          {:.6}", report.put_price);
            println!("Discounted strike:  {:.6}", report.discounted_strike);
            println!("C - P - S + K·e^-rT: {:.6}", report.residual);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use approx::assert_relative_eq;

    fn market() -> MarketArgs {
        MarketArgs {
            underlying: 100.0,
            strike: 100.0,
            rate: 5.0,
            days: Some(365.0),
            expiry: None,
            as_of: None,
        }
    }

    #[test]
    fn test_fair_pair_has_small_residual() {
        let report = report(&market(), "10.450584", "5.573526").unwrap();
        assert_relative_eq!(report.residual, 0.0, epsilon = 1e-5);
        assert_relative_eq!(report.discounted_strike, 95.122942, epsilon = 1e-6);
    }

    #[test]
    fn test_rich_put_shows_negative_residual() {
        let report = report(&market(), "10.45", "6.57").unwrap();
        assert!(report.residual < -0.9);
    }

    #[test]
    fn test_bad_price_text() {
        assert!(matches!(
            report(&market(), "abc", "5.57"),
            Err(CliError::Quote(_))
        ));
    }
}
