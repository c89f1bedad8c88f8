//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Shared argument groups
//! and the access check live here.

use chrono::{Local, NaiveDate};
use clap::Args;
use pricer_models::access::check_access;
use pricer_models::quote::PricingInputs;
use tracing::debug;

use crate::config::PricerConfig;
use crate::{CliError, Result};

pub mod batch;
pub mod check;
pub mod implied_vol;
pub mod parity;
pub mod price;

/// Market inputs shared by single-option commands
#[derive(Args, Debug, Clone)]
pub struct MarketArgs {
    /// Underlying price
    #[arg(short = 's', long)]
    pub underlying: f64,

    /// Strike price
    #[arg(short = 'k', long)]
    pub strike: f64,

    /// Annual interest rate in percent (5 = 5%)
    #[arg(short = 'r', long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub rate: f64,

    /// Calendar days to expiration
    #[arg(short = 'd', long, conflicts_with = "expiry", required_unless_present = "expiry")]
    pub days: Option<f64>,

    /// Expiration date (YYYY-MM-DD), instead of --days
    #[arg(long)]
    pub expiry: Option<NaiveDate>,

    /// Valuation date for --expiry (YYYY-MM-DD, defaults to today)
    #[arg(long, requires = "expiry")]
    pub as_of: Option<NaiveDate>,
}

impl MarketArgs {
    /// Days to expiration, from --days or the expiry date
    pub fn days_to_expiration(&self) -> Result<f64> {
        match (self.days, self.expiry) {
            (Some(days), _) => Ok(days),
            (None, Some(expiry)) => {
                let as_of = self.as_of.unwrap_or_else(|| Local::now().date_naive());
                let days = days_between(as_of, expiry);
                debug!(%as_of, %expiry, days, "Resolved expiry date");
                Ok(days)
            }
            (None, None) => Err(CliError::InvalidArgument(
                "either --days or --expiry is required".to_string(),
            )),
        }
    }

    /// Validated pricing inputs
    pub fn inputs(&self) -> Result<PricingInputs> {
        let days = self.days_to_expiration()?;
        Ok(PricingInputs::new(
            self.underlying,
            self.strike,
            self.rate,
            days,
        )?)
    }
}

/// Calendar days from `as_of` to `expiry`; negative once expired
pub fn days_between(as_of: NaiveDate, expiry: NaiveDate) -> f64 {
    (expiry - as_of).num_days() as f64
}

/// Consult the licence gate when the configuration asks for one
pub fn authorise(config: &PricerConfig, licence_key: Option<String>) -> Result<()> {
    let gate = config.access_gate(licence_key);
    if let Some(gate) = &gate {
        debug!(gate = %gate.describe(), "Checking licence");
    }
    check_access(gate.as_deref())?;
    Ok(())
}
