//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Accrue - U.S. savings bond redemption calculator
///
/// Reads a CSV of bond records, values each bond as of the given date,
/// prints the results, and writes them to a sibling `-processed.csv`
/// file next to the input.
#[derive(Parser)]
#[command(name = "accrue")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input CSV file of bond records
    /// (series,issue_date,denomination[,serial_number,registration])
    pub input: PathBuf,

    /// Valuation date (YYYY-MM-DD). Defaults to today.
    pub as_of: Option<String>,

    /// Output format for the console
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Substitute rate table CSV. Defaults to the built-in dataset.
    #[arg(long)]
    pub rates: Option<PathBuf>,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
