//! Loading rate tables from CSV datasets.
//!
//! The built-in dataset is a versioned snapshot of the published rate
//! history, embedded at compile time and parsed once on first use. Rate
//! tables are static input data; there is no network fetch and no runtime
//! mutation. Callers that need a newer or fixture table load one with
//! [`RateTable::from_csv_path`] and inject it into the engine instead.

use std::path::Path;
use std::str::FromStr;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::Deserialize;

use accrue_core::types::{Date, Series};

use crate::entry::RateTableEntry;
use crate::error::{RateError, RateResult};
use crate::table::RateTable;

/// Version label of the embedded dataset (publication period of its
/// newest entries).
pub const DATASET_VERSION: &str = "2025-11";

const BUILTIN_CSV: &str = include_str!("../data/rates-2025-11.csv");

static BUILTIN: Lazy<RateTable> = Lazy::new(|| {
    RateTable::from_csv_str(BUILTIN_CSV)
        .expect("embedded rate dataset is validated by the crate's tests")
});

/// One raw CSV row; dates and series are parsed in a second step so
/// errors can name the offending row.
#[derive(Debug, Deserialize)]
struct RawEntry {
    series: String,
    effective_from: String,
    effective_to: Option<String>,
    fixed_rate_percent: Decimal,
    inflation_rate_percent: Option<Decimal>,
}

impl RawEntry {
    fn into_entry(self, row: usize) -> RateResult<RateTableEntry> {
        let at = |what: &str, detail: String| {
            RateError::dataset(format!("row {row}: bad {what}: {detail}"))
        };
        let series = Series::from_str(&self.series)
            .map_err(|e| at("series", e.to_string()))?;
        let effective_from = Date::parse(&self.effective_from)
            .map_err(|e| at("effective_from", e.to_string()))?;
        let effective_to = match self.effective_to.as_deref() {
            None | Some("") => None,
            Some(s) => {
                Some(Date::parse(s).map_err(|e| at("effective_to", e.to_string()))?)
            }
        };
        Ok(RateTableEntry {
            series,
            effective_from,
            effective_to,
            fixed_rate_percent: self.fixed_rate_percent,
            inflation_rate_percent: self.inflation_rate_percent,
            compounding_months: series.compounding_months(),
        })
    }
}

impl RateTable {
    /// The built-in dataset, parsed and validated on first access.
    #[must_use]
    pub fn builtin() -> &'static RateTable {
        &BUILTIN
    }

    /// Parses a table from CSV text
    /// (`series,effective_from,effective_to,fixed_rate_percent,inflation_rate_percent`).
    ///
    /// # Errors
    ///
    /// Returns `RateError::Dataset` for malformed rows and the usual
    /// coverage errors from [`RateTable::from_entries`].
    pub fn from_csv_str(data: &str) -> RateResult<RateTable> {
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let mut entries = Vec::new();
        for (i, record) in reader.deserialize::<RawEntry>().enumerate() {
            // Row numbers are 1-based and skip the header line.
            let row = i + 2;
            let raw = record
                .map_err(|e| RateError::dataset(format!("row {row}: {e}")))?;
            entries.push(raw.into_entry(row)?);
        }
        RateTable::from_entries(entries)
    }

    /// Loads and validates a table from a CSV file on disk.
    ///
    /// # Errors
    ///
    /// Returns `RateError::Dataset` for IO or parse failures, plus the
    /// coverage errors from [`RateTable::from_entries`].
    pub fn from_csv_path(path: impl AsRef<Path>) -> RateResult<RateTable> {
        let data = std::fs::read_to_string(path)?;
        Self::from_csv_str(&data)
    }
}
