//! CLI error types.

use thiserror::Error;

/// Errors raised while adapting tabular input to bond records.
#[derive(Debug, Error)]
pub enum InputError {
    /// A row holds a malformed or out-of-range field.
    #[error("row {row}, field '{field}': {message}")]
    InvalidInput {
        /// 1-based row number, counting the header as row 1.
        row: usize,
        /// Name of the offending column.
        field: String,
        /// What was wrong with the value.
        message: String,
    },

    /// The file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not parseable as CSV with the expected columns.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl InputError {
    /// Creates an invalid input error for one field of one row.
    #[must_use]
    pub fn invalid_input(
        row: usize,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidInput {
            row,
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A specialized Result type for input adaptation.
pub type InputResult<T> = Result<T, InputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = InputError::invalid_input(3, "denomination", "must be positive");
        assert_eq!(
            err.to_string(),
            "row 3, field 'denomination': must be positive"
        );
    }
}
