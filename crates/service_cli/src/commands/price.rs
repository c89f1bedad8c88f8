//! Price command implementation
//!
//! Prices one call/put pair at a given volatility, optionally with Greeks.

use std::fmt::Write as _;

use pricer_models::quote::{OptionQuote, PricingMode};
use tracing::info;

use super::MarketArgs;
use crate::config::{OutputFormat, PricerConfig};
use crate::Result;

/// Run the price command
pub fn run(
    market: &MarketArgs,
    volatility: f64,
    greeks: bool,
    config: &PricerConfig,
) -> Result<()> {
    let inputs = market.inputs()?;
    let mode = if greeks {
        PricingMode::Full
    } else {
        PricingMode::Fast
    };

    info!(
        underlying = inputs.underlying_price(),
        strike = inputs.strike_price(),
        rate = inputs.interest_rate(),
        days = inputs.days_to_expiration(),
        volatility,
        ?mode,
        "Pricing option"
    );

    let quote = OptionQuote::price(inputs, volatility, mode)?;

    match config.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&quote)?),
        OutputFormat::Table => print!("{}", render_table(&quote)),
    }

    info!("Pricing complete");
    Ok(())
}

/// Render a quote as a two-column table
pub fn render_table(quote: &OptionQuote) -> String {
    let mut rows: Vec<(&str, String, String)> = vec![
        (
            "Price",
            format!("{:.6}", quote.call_price()),
            format!("{:.6}", quote.put_price()),
        ),
    ];

    if let Some(g) = quote.greeks() {
        rows.extend([
            ("Delta", format!("{:.6}", g.call_delta), format!("{:.6}", g.put_delta)),
            (
                "Dual Delta",
                format!("{:.6}", g.call_dual_delta),
                format!("{:.6}", g.put_dual_delta),
            ),
            ("Gamma", format!("{:.6}", g.gamma), format!("{:.6}", g.gamma)),
            ("Vega", format!("{:.6}", g.vega), format!("{:.6}", g.vega)),
            ("Theta", format!("{:.6}", g.call_theta), format!("{:.6}", g.put_theta)),
            ("Rho", format!("{:.6}", g.call_rho), format!("{:.6}", g.put_rho)),
        ]);
    }

    let mut out = String::new();
    let _ = writeln!(out, "┌──────────────┬──────────────┬──────────────┐");
    let _ = writeln!(out, "│ {:<12} │ {:>12} │ {:>12} │", "", "Call", "Put");
    let _ = writeln!(out, "├──────────────┼──────────────┼──────────────┤");
    for (label, call, put) in &rows {
        let _ = writeln!(out, "│ {:<12} │ {:>12} │ {:>12} │", label, call, put);
    }
    let _ = writeln!(out, "└──────────────┴──────────────┴──────────────┘");

    let _ = writeln!(out, "Volatility: {:.4}%", quote.volatility());
    if let Some(g) = quote.greeks() {
        let _ = writeln!(out, "Exercise probability: {:.6}", g.exercise_probability);
    }
    if let Some(residual) = quote.parity_residual() {
        let _ = writeln!(out, "Parity residual: {:.6}", residual);
    }
    out
}
