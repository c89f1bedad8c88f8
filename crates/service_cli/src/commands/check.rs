//! Check command implementation
//!
//! Prints the resolved configuration and whether pricing is currently
//! allowed by the licence gate.

use pricer_models::access::check_access;
use tracing::info;

use crate::config::PricerConfig;
use crate::Result;

/// Human-readable access status
pub fn access_status(config: &PricerConfig, licence_key: Option<String>) -> String {
    let gate = config.access_gate(licence_key);
    let description = gate
        .as_deref()
        .map(|g| g.describe())
        .unwrap_or_else(|| "none".to_string());

    match check_access(gate.as_deref()) {
        Ok(()) => format!("granted (gate: {})", description),
        Err(e) => format!("denied (gate: {}): {}", description, e),
    }
}

/// Run the check command
pub fn run(config: &PricerConfig, licence_key: Option<String>) -> Result<()> {
    info!("Checking configuration");

    println!("option-pricer v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Configuration:");
    println!("  log_level:       {}", config.log_level);
    println!("  output_format:   {}", config.output_format);
    println!("  vol_low:         {}", config.vol_low);
    println!("  vol_high:        {}", config.vol_high);
    println!("  max_iterations:  {}", config.max_iterations);
    println!("  require_licence: {}", config.require_licence);
    println!("  licence_keys:    {} configured", config.licence_keys.len());
    println!();
    println!("Access: {}", access_status(config, licence_key));

    info!("Check complete");
    Ok(())
}
