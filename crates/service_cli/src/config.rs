//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables, and
//! command-line flags.

use pricer_core::math::solvers::BisectionConfig;
use pricer_models::access::{AccessGate, KeyListGate};
use pricer_models::implied_vol::{
    BlackScholesModel, ImpliedVolSolver, VolBounds, DEFAULT_VOL_HIGH, DEFAULT_VOL_LOW,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Prefix shared by every environment variable the CLI reads.
pub const ENV_PREFIX: &str = "OPTION_PRICER_";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidOutputFormat(String),

    #[error("Invalid volatility bounds: [{low}, {high}]. Need 0 <= low < high")]
    InvalidBounds { low: f64, high: f64 },

    #[error("max_iterations must be positive")]
    ZeroIterations,

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable {name}: {message}")]
    EnvError { name: String, message: String },
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How single results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PricerConfig {
    /// Log level, overridden by `RUST_LOG` when set
    pub log_level: LogLevel,
    /// Output format for single results
    pub output_format: OutputFormat,
    /// Lower implied-volatility search bound, percent
    pub vol_low: f64,
    /// Upper implied-volatility search bound, percent
    pub vol_high: f64,
    /// Bisection iteration budget
    pub max_iterations: usize,
    /// Whether a licence key must be presented
    pub require_licence: bool,
    /// Accepted licence keys
    #[serde(skip_serializing)]
    pub licence_keys: Vec<String>,
}

impl Default for PricerConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            output_format: OutputFormat::Table,
            vol_low: DEFAULT_VOL_LOW,
            vol_high: DEFAULT_VOL_HIGH,
            max_iterations: BisectionConfig::<f64>::default().max_iterations,
            require_licence: false,
            licence_keys: Vec::new(),
        }
    }
}

fn env_name(key: &str) -> String {
    format!("{}{}", ENV_PREFIX, key)
}

fn parse_env<T: FromStr>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::EnvError {
        name: name.to_string(),
        message: e.to_string(),
    })
}

impl PricerConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: PricerConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Override fields from `OPTION_PRICER_*` variables found by `lookup`
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            let name = env_name(key);
            lookup(&name).map(|value| (name, value))
        };

        if let Some((_, value)) = var("LOG_LEVEL") {
            self.log_level = LogLevel::from_str(value.trim())?;
        }
        if let Some((_, value)) = var("OUTPUT_FORMAT") {
            self.output_format = OutputFormat::from_str(value.trim())?;
        }
        if let Some((name, value)) = var("VOL_LOW") {
            self.vol_low = parse_env(&name, &value)?;
        }
        if let Some((name, value)) = var("VOL_HIGH") {
            self.vol_high = parse_env(&name, &value)?;
        }
        if let Some((name, value)) = var("MAX_ITERATIONS") {
            self.max_iterations = parse_env(&name, &value)?;
        }
        if let Some((name, value)) = var("REQUIRE_LICENCE") {
            self.require_licence = parse_env(&name, &value.to_ascii_lowercase())?;
        }
        if let Some((_, value)) = var("LICENCE_KEYS") {
            self.licence_keys = value.split(',').map(|s| s.trim().to_string()).collect();
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if VolBounds::new(self.vol_low, self.vol_high).is_err() {
            return Err(ConfigError::InvalidBounds {
                low: self.vol_low,
                high: self.vol_high,
            });
        }

        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if let Some(format) = &cli.output_format {
            self.output_format = OutputFormat::from_str(format)?;
        }
        if let Some(low) = cli.vol_low {
            self.vol_low = low;
        }
        if let Some(high) = cli.vol_high {
            self.vol_high = high;
        }
        if let Some(iterations) = cli.max_iterations {
            self.max_iterations = iterations;
        }
        Ok(())
    }

    /// Search bracket from the configured bounds
    pub fn vol_bounds(&self) -> Result<VolBounds, ConfigError> {
        VolBounds::new(self.vol_low, self.vol_high).map_err(|_| ConfigError::InvalidBounds {
            low: self.vol_low,
            high: self.vol_high,
        })
    }

    /// Implied-volatility solver honouring bounds and iteration budget
    pub fn solver(&self) -> Result<ImpliedVolSolver, ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(ImpliedVolSolver::with_model(
            BlackScholesModel,
            self.vol_bounds()?,
            BisectionConfig::default().with_max_iterations(self.max_iterations),
        ))
    }

    /// Access gate to consult, if licensing is switched on
    pub fn access_gate(&self, presented: Option<String>) -> Option<Box<dyn AccessGate>> {
        if self.require_licence {
            Some(Box::new(KeyListGate::new(self.licence_keys.clone(), presented)))
        } else {
            None
        }
    }
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Output format override
    pub output_format: Option<String>,
    /// Lower search bound override
    pub vol_low: Option<f64>,
    /// Upper search bound override
    pub vol_high: Option<f64>,
    /// Iteration budget override
    pub max_iterations: Option<usize>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<PricerConfig, ConfigError> {
    build_config_with_env(cli, |name| std::env::var(name).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<PricerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => PricerConfig::from_file(path)?,
        None => PricerConfig::default(),
    };

    config.apply_env_from(lookup)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
