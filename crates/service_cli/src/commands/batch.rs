//! Batch command implementation
//!
//! Reads option quotes from CSV, solves implied volatility for every row in
//! parallel and writes one result row per input row. A failing row is
//! reported in its `error` column and does not stop the batch.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use pricer_core::types::{OptionSide, QuotedPrice};
use pricer_models::implied_vol::ImpliedVolSolver;
use pricer_models::quote::PricingInputs;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::PricerConfig;
use crate::{CliError, Result};

/// One input row, every column kept as text
///
/// Numbers are parsed per row so a bad cell fails only its own row, and
/// the price keeps its quoted decimals. Columns absent from the header
/// read as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BatchRow {
    pub underlying: String,
    pub strike: String,
    pub rate: String,
    pub days: String,
    pub side: String,
    pub price: String,
}

/// A record as read: its columns, or why it could not be decoded
pub type RowRecord = std::result::Result<BatchRow, String>;

/// One output row
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BatchResult {
    pub row: usize,
    pub underlying: String,
    pub strike: String,
    pub rate: String,
    pub days: String,
    pub side: String,
    pub price: String,
    pub implied_vol: Option<f64>,
    pub error: Option<String>,
}

impl BatchResult {
    fn new(row: usize, input: &BatchRow, outcome: std::result::Result<f64, String>) -> Self {
        let (implied_vol, error) = match outcome {
            Ok(vol) => (Some(vol), None),
            Err(e) => (None, Some(e)),
        };
        Self {
            row,
            underlying: input.underlying.clone(),
            strike: input.strike.clone(),
            rate: input.rate.clone(),
            days: input.days.clone(),
            side: input.side.clone(),
            price: input.price.clone(),
            implied_vol,
            error,
        }
    }
}

/// Read all records from CSV with a header line
///
/// Undecodable records are kept in place as errors. Only I/O failures
/// abort the read.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RowRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for record in csv_reader.deserialize::<BatchRow>() {
        match record {
            Ok(row) => records.push(Ok(row)),
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => records.push(Err(CliError::from(e).to_string())),
        }
    }
    Ok(records)
}

fn parse_number(column: &str, text: &str) -> Result<f64> {
    text.parse().map_err(|_| {
        CliError::InvalidArgument(format!("{} is not a number: {:?}", column, text))
    })
}

fn solve_row(row: &BatchRow, solver: &ImpliedVolSolver) -> Result<f64> {
    let inputs = PricingInputs::new(
        parse_number("underlying", &row.underlying)?,
        parse_number("strike", &row.strike)?,
        parse_number("rate", &row.rate)?,
        parse_number("days", &row.days)?,
    )?;
    let side: OptionSide = row.side.parse()?;
    let target: QuotedPrice = row.price.parse()?;
    Ok(solver.solve(&inputs, &target, side)?)
}

/// Solve every record in parallel; output order follows input order
pub fn solve_rows(records: &[RowRecord], solver: &ImpliedVolSolver) -> Vec<BatchResult> {
    records
        .par_iter()
        .enumerate()
        .map(|(i, record)| match record {
            Ok(row) => BatchResult::new(
                i + 1,
                row,
                solve_row(row, solver).map_err(|e| e.to_string()),
            ),
            Err(message) => BatchResult::new(i + 1, &BatchRow::default(), Err(message.clone())),
        })
        .collect()
}

/// Write results as CSV with a header line
pub fn write_results<W: Write>(writer: W, results: &[BatchResult]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for result in results {
        csv_writer.serialize(result)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Run the batch command
pub fn run(input: &Path, output: Option<&Path>, config: &PricerConfig) -> Result<()> {
    if !input.exists() {
        return Err(CliError::FileNotFound(input.display().to_string()));
    }

    let rows = read_rows(File::open(input)?)?;
    info!(rows = rows.len(), input = %input.display(), "Loaded batch");

    let solver = config.solver()?;
    let results = solve_rows(&rows, &solver);

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    for result in results.iter().filter(|r| r.error.is_some()) {
        warn!(
            row = result.row,
            error = result.error.as_deref().unwrap_or_default(),
            "Row failed"
        );
    }

    match output {
        Some(path) => write_results(File::create(path)?, &results)?,
        None => write_results(std::io::stdout().lock(), &results)?,
    }

    info!(
        solved = results.len() - failed,
        failed,
        "Batch complete"
    );
    Ok(())
}
