//! Accrue CLI - batch redemption values for U.S. savings bonds.
//!
//! # Usage
//!
//! ```bash
//! # Value a batch of bonds as of today
//! accrue bonds.csv
//!
//! # Value as of a specific date
//! accrue bonds.csv 2024-11-01
//!
//! # Use a newer published rate table
//! accrue bonds.csv --rates rates-2026-05.csv
//! ```
//!
//! On success the results are printed and written to a sibling
//! `<input>-processed.csv`. On any failure nothing is written: one error
//! line and a usage reminder go to stderr.

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use log::debug;

use accrue_core::types::Date;
use accrue_engine::ValuationEngine;
use accrue_rates::RateTable;

mod cli;
mod error;
mod output;
mod records;

use cli::Cli;
use records::OutputRow;

const USAGE: &str = "Usage: accrue <INPUT.csv> [AS_OF] [--format table|json|csv] [--rates FILE]";

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("{} {err:#}", "Error:".red().bold());
        eprintln!("{USAGE}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let as_of = cli
        .as_of
        .as_deref()
        .map(Date::parse)
        .transpose()
        .context("invalid as-of date")?;

    // Coverage defects in a substitute table fail here, before any
    // records are read.
    let loaded;
    let rates = match &cli.rates {
        Some(path) => {
            loaded = RateTable::from_csv_path(path)
                .with_context(|| format!("loading rate table {}", path.display()))?;
            &loaded
        }
        None => {
            debug!("using built-in rate dataset {}", accrue_rates::DATASET_VERSION);
            RateTable::builtin()
        }
    };
    debug!("rate table ready ({} entries)", rates.len());

    let bonds = records::read_bonds(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    if !cli.quiet {
        println!("Valuing {} bonds from {}...", bonds.len(), cli.input.display());
    }

    let engine = ValuationEngine::new(rates);
    let report = engine.valuate(&bonds, as_of);

    // All-or-nothing: any per-record failure aborts the run before the
    // output file is created.
    for (slot, result) in report.results.iter().enumerate() {
        if let Err(err) = result {
            let bond = &bonds[slot];
            let label = bond
                .serial_number
                .as_deref()
                .unwrap_or("no serial");
            bail!("bond {} ({label}): {err}", slot + 1);
        }
    }

    let rows: Vec<OutputRow> = report
        .results
        .iter()
        .filter_map(|r| r.as_ref().ok())
        .map(OutputRow::from)
        .collect();

    if !cli.quiet {
        println!("As of {}:", report.as_of_date);
        output::print_output(&rows, cli.format)?;
    }

    let out_path = records::output_path(&cli.input);
    records::write_output(&out_path, &rows)
        .with_context(|| format!("writing {}", out_path.display()))?;
    if !cli.quiet {
        println!("Wrote {}", out_path.display());
    }

    Ok(())
}
