//! Error types for bond valuation.

use accrue_core::error::CoreError;
use accrue_core::types::Date;
use accrue_rates::RateError;
use thiserror::Error;

/// A specialized Result type for valuation operations.
pub type ValuationResult<T> = Result<T, ValuationError>;

/// Per-record valuation errors.
///
/// Every variant is attributable to a single bond record; the engine
/// reports them as per-slot markers so one bad record never disturbs its
/// siblings in the batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValuationError {
    /// The as-of date precedes the bond's issue date.
    #[error("As-of date {as_of_date} precedes issue date {issue_date}")]
    InvalidDateRange {
        /// The bond's issue date.
        issue_date: Date,
        /// The offending as-of date.
        as_of_date: Date,
    },

    /// The bond record failed validation.
    #[error("Invalid bond: {reason}")]
    InvalidBond {
        /// Which field is wrong, and why.
        reason: String,
    },

    /// No published rate covers one of the bond's compounding intervals.
    #[error(transparent)]
    Rate(#[from] RateError),

    /// Date arithmetic failed while building the schedule.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ValuationError {
    /// Creates an invalid bond error.
    #[must_use]
    pub fn invalid_bond(reason: impl Into<String>) -> Self {
        Self::InvalidBond {
            reason: reason.into(),
        }
    }
}
