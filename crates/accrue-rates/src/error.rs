//! Error types for rate table loading and lookup.

use accrue_core::types::{Date, Series};
use thiserror::Error;

/// A specialized Result type for rate table operations.
pub type RateResult<T> = Result<T, RateError>;

/// Errors raised by the rate table store.
///
/// Coverage defects (`Overlap`, `CoverageGap`, `MissingInflation`) are
/// load-time configuration errors and surface before any valuation runs. `RateNotFound` is the only variant a caller sees
/// at lookup time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RateError {
    /// No rate entry covers the requested date for the series.
    #[error("No published rate for series {series} on {date}")]
    RateNotFound {
        /// Series that was looked up.
        series: Series,
        /// Date with no covering entry.
        date: Date,
    },

    /// Two entries for one series claim the same date.
    #[error("Overlapping rate entries for series {series} at {date}")]
    Overlap {
        /// Series with the overlap.
        series: Series,
        /// Start of the entry that overlaps its predecessor.
        date: Date,
    },

    /// A hole between consecutive entries for one series.
    #[error("Rate coverage gap for series {series} between {from} and {to}")]
    CoverageGap {
        /// Series with the gap.
        series: Series,
        /// End of the earlier entry.
        from: Date,
        /// Start of the later entry.
        to: Date,
    },

    /// An inflation-linked series entry without an inflation component.
    #[error("Missing inflation component for series {series} effective {date}")]
    MissingInflation {
        /// The inflation-linked series.
        series: Series,
        /// Start of the defective entry.
        date: Date,
    },

    /// The dataset could not be read or parsed.
    #[error("Rate dataset error: {message}")]
    Dataset {
        /// Description of the problem, including the offending row.
        message: String,
    },
}

impl RateError {
    /// Creates a dataset error.
    #[must_use]
    pub fn dataset(message: impl Into<String>) -> Self {
        Self::Dataset {
            message: message.into(),
        }
    }
}

impl From<csv::Error> for RateError {
    fn from(err: csv::Error) -> Self {
        Self::dataset(err.to_string())
    }
}

impl From<std::io::Error> for RateError {
    fn from(err: std::io::Error) -> Self {
        Self::dataset(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_not_found_display() {
        let err = RateError::RateNotFound {
            series: Series::EE,
            date: Date::from_ymd(1985, 1, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "No published rate for series EE on 1985-01-01"
        );
    }

    #[test]
    fn test_gap_display() {
        let err = RateError::CoverageGap {
            series: Series::I,
            from: Date::from_ymd(2020, 5, 1).unwrap(),
            to: Date::from_ymd(2020, 11, 1).unwrap(),
        };
        assert!(err.to_string().contains("gap"));
    }
}
