//! option-pricer - Command Line Black-Scholes Pricing
//!
//! This is the operational entry point for the pricing library.
//!
//! # Commands
//!
//! - `option-pricer price` - Price a call/put pair, optionally with Greeks
//! - `option-pricer implied-vol` - Solve volatility from an observed price
//! - `option-pricer parity` - Check a call/put pair against put-call parity
//! - `option-pricer batch` - Solve implied volatility for a CSV of quotes
//! - `option-pricer check` - Show resolved configuration and licence status
//!
//! # Configuration
//!
//! Settings come from an optional TOML file (`--config`), then
//! `OPTION_PRICER_*` environment variables, then command-line flags.
//! `RUST_LOG` overrides the configured log level.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use commands::MarketArgs;
use config::{build_config, CliArgs as ConfigCliArgs, LogLevel, PricerConfig};
pub use error::{CliError, Result};

/// Black-Scholes option pricer and implied-volatility solver
#[derive(Parser)]
#[command(name = "option-pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Lower implied-volatility search bound, percent
    #[arg(long, global = true)]
    vol_low: Option<f64>,

    /// Upper implied-volatility search bound, percent
    #[arg(long, global = true)]
    vol_high: Option<f64>,

    /// Bisection iteration budget
    #[arg(long, global = true)]
    max_iterations: Option<usize>,

    /// Licence key, checked when the configuration requires one
    #[arg(long, global = true, env = "OPTION_PRICER_LICENCE_KEY", hide_env_values = true)]
    licence_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

impl From<&Cli> for ConfigCliArgs {
    fn from(cli: &Cli) -> Self {
        ConfigCliArgs {
            config_file: cli.config.clone(),
            log_level: cli.log_level.clone(),
            output_format: cli.format.clone(),
            vol_low: cli.vol_low,
            vol_high: cli.vol_high,
            max_iterations: cli.max_iterations,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Price a call/put pair at a given volatility
    Price {
        #[command(flatten)]
        market: MarketArgs,

        /// Annual volatility in percent (20 = 20%)
        #[arg(long)]
        volatility: f64,

        /// Also compute Greeks and exercise probability
        #[arg(short, long)]
        greeks: bool,
    },

    /// Solve implied volatility from an observed call or put price
    ImpliedVol {
        #[command(flatten)]
        market: MarketArgs,

        /// Observed call price, as quoted (its decimals set the precision)
        #[arg(long)]
        call_price: Option<String>,

        /// Observed put price, as quoted (ignored for solving if a call price is given)
        #[arg(long)]
        put_price: Option<String>,
    },

    /// Put-call parity residual of an observed call/put pair
    Parity {
        #[command(flatten)]
        market: MarketArgs,

        /// Observed call price
        #[arg(long)]
        call_price: String,

        /// Observed put price
        #[arg(long)]
        put_price: String,
    },

    /// Solve implied volatility for every row of a CSV file
    Batch {
        /// Input CSV (underlying,strike,rate,days,side,price)
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check configuration and licence status
    Check,
}

impl Commands {
    /// Every command but `check` sits behind the licence gate
    fn requires_licence(&self) -> bool {
        !matches!(self, Commands::Check)
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = build_config(&ConfigCliArgs::from(&cli))?;

    if cli.verbose {
        config.log_level = LogLevel::Debug;
    }
    init_tracing(config.log_level.as_filter_str());

    debug!(
        log_level = %config.log_level,
        output_format = %config.output_format,
        vol_low = config.vol_low,
        vol_high = config.vol_high,
        max_iterations = config.max_iterations,
        require_licence = config.require_licence,
        "Configuration loaded"
    );

    dispatch(&cli.command, &config, cli.licence_key.clone())
}

fn dispatch(command: &Commands, config: &PricerConfig, licence_key: Option<String>) -> Result<()> {
    if command.requires_licence() {
        commands::authorise(config, licence_key.clone())?;
        info!("Licence check passed");
    }

    match command {
        Commands::Price {
            market,
            volatility,
            greeks,
        } => commands::price::run(market, *volatility, *greeks, config),
        Commands::ImpliedVol {
            market,
            call_price,
            put_price,
        } => commands::implied_vol::run(
            market,
            call_price.as_deref(),
            put_price.as_deref(),
            config,
        ),
        Commands::Parity {
            market,
            call_price,
            put_price,
        } => commands::parity::run(market, call_price, put_price, config),
        Commands::Batch { input, output } => {
            commands::batch::run(input, output.as_deref(), config)
        }
        Commands::Check => commands::check::run(config, licence_key),
    }
}
