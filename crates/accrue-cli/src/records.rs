//! The tabular record adapter: CSV rows in, CSV rows out.

use std::path::Path;
use std::str::FromStr;

use csv::{QuoteStyle, WriterBuilder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use accrue_core::types::{Date, Series};
use accrue_engine::{BondRecord, ValueRecord};

use crate::error::{InputError, InputResult};

/// One raw input row. Fields stay as strings so conversion errors can
/// name the exact row and column.
#[derive(Debug, Deserialize)]
struct RawBondRow {
    series: String,
    issue_date: String,
    denomination: String,
    #[serde(default)]
    serial_number: Option<String>,
    #[serde(default)]
    registration: Option<String>,
}

impl RawBondRow {
    fn into_bond(self, row: usize) -> InputResult<BondRecord> {
        let series = Series::from_str(&self.series)
            .map_err(|e| InputError::invalid_input(row, "series", e.to_string()))?;
        let issue_date = Date::parse(&self.issue_date)
            .map_err(|e| InputError::invalid_input(row, "issue_date", e.to_string()))?;
        let denomination = Decimal::from_str(self.denomination.trim()).map_err(|e| {
            InputError::invalid_input(row, "denomination", e.to_string())
        })?;
        if denomination <= Decimal::ZERO {
            return Err(InputError::invalid_input(
                row,
                "denomination",
                format!("must be positive, got {denomination}"),
            ));
        }

        let mut bond = BondRecord::new(series, issue_date, denomination);
        if let Some(serial) = self.serial_number.filter(|s| !s.is_empty()) {
            bond = bond.with_serial_number(serial);
        }
        if let Some(registration) = self.registration.filter(|s| !s.is_empty()) {
            bond = bond.with_registration(registration);
        }
        Ok(bond)
    }
}

/// Reads and validates the batch of bond records from a CSV file.
///
/// Row order is preserved; the first defective row aborts the read with
/// an error naming the row and field.
pub fn read_bonds(path: impl AsRef<Path>) -> InputResult<Vec<BondRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut bonds = Vec::new();
    for (i, record) in reader.deserialize::<RawBondRow>().enumerate() {
        // 1-based, counting the header line
        let row = i + 2;
        bonds.push(record?.into_bond(row)?);
    }
    Ok(bonds)
}

/// One output row, shared by the console table, JSON output, and the
/// processed CSV file.
#[derive(Debug, Serialize, Tabled)]
pub struct OutputRow {
    /// Bond series.
    #[tabled(rename = "Series")]
    pub series: String,
    /// Issue date from the input.
    #[tabled(rename = "Issue Date")]
    pub issue_date: String,
    /// Face value.
    #[tabled(rename = "Denomination")]
    pub denomination: String,
    /// Serial number passthrough (blank when absent).
    #[tabled(rename = "Serial")]
    pub serial_number: String,
    /// Registration passthrough (blank when absent).
    #[tabled(rename = "Registration")]
    pub registration: String,
    /// Valuation date.
    #[tabled(rename = "As Of")]
    pub as_of_date: String,
    /// Interest accrued to the valuation date.
    #[tabled(rename = "Accrued Interest")]
    pub accrued_interest: String,
    /// Denomination plus accrued interest.
    #[tabled(rename = "Redemption Value")]
    pub redemption_value: String,
}

impl From<&ValueRecord> for OutputRow {
    fn from(value: &ValueRecord) -> Self {
        Self {
            series: value.series.to_string(),
            issue_date: value.issue_date.to_string(),
            denomination: format!("{:.2}", value.denomination),
            serial_number: value.serial_number.clone().unwrap_or_default(),
            registration: value.registration.clone().unwrap_or_default(),
            as_of_date: value.as_of_date.to_string(),
            accrued_interest: format!("{:.2}", value.accrued_interest),
            redemption_value: format!("{:.2}", value.redemption_value),
        }
    }
}

/// Writes the processed rows to `path`.
///
/// String-valued fields are quoted, with embedded quotes doubled;
/// numeric fields are written bare.
pub fn write_output(path: impl AsRef<Path>, rows: &[OutputRow]) -> InputResult<()> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Derives the sibling output path: `bonds.csv` -> `bonds-processed.csv`.
pub fn output_path(input: &Path) -> std::path::PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}-processed.csv"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_bonds_minimal_columns() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "series,issue_date,denomination\nEE,2020-05-01,100.00\nI,2021-11-01,25\n"
        )
        .unwrap();

        let bonds = read_bonds(file.path()).unwrap();
        assert_eq!(bonds.len(), 2);
        assert_eq!(bonds[0].series, Series::EE);
        assert_eq!(bonds[1].issue_date, Date::parse("2021-11-01").unwrap());
        assert!(bonds[0].serial_number.is_none());
    }

    #[test]
    fn test_read_bonds_bad_field_names_row() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "series,issue_date,denomination\nEE,2020-05-01,100.00\nEE,soon,100.00\n"
        )
        .unwrap();

        let err = read_bonds(file.path()).unwrap_err();
        assert!(err.to_string().contains("row 3"));
        assert!(err.to_string().contains("issue_date"));
    }

    #[test]
    fn test_read_bonds_rejects_non_positive_denomination() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "series,issue_date,denomination\nEE,2020-05-01,-5\n").unwrap();

        let err = read_bonds(file.path()).unwrap_err();
        assert!(err.to_string().contains("denomination"));
    }

    #[test]
    fn test_output_path_sibling() {
        assert_eq!(
            output_path(Path::new("/tmp/bonds.csv")),
            Path::new("/tmp/bonds-processed.csv")
        );
        assert_eq!(
            output_path(Path::new("bonds.csv")),
            Path::new("bonds-processed.csv")
        );
    }

    #[test]
    fn test_write_output_quotes_strings_and_doubles_quotes() {
        let row = OutputRow {
            series: "EE".to_string(),
            issue_date: "2020-05-01".to_string(),
            denomination: "100.00".to_string(),
            serial_number: "A\"1".to_string(),
            registration: String::new(),
            as_of_date: "2023-05-01".to_string(),
            accrued_interest: "1.30".to_string(),
            redemption_value: "101.30".to_string(),
        };
        let file = tempfile::NamedTempFile::new().unwrap();
        write_output(file.path(), &[row]).unwrap();

        let written = std::fs::read_to_string(file.path()).unwrap();
        assert!(written.contains("\"EE\""));
        assert!(written.contains("\"A\"\"1\""));
    }
}
