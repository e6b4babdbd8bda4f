//! A single published rate entry.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use accrue_core::types::{Date, Series};

/// One row of the published rate schedule for a series.
///
/// An entry is in force over the half-open interval
/// `[effective_from, effective_to)`; `effective_to = None` marks the
/// current, open-ended entry. `fixed_rate_percent` is the annual fixed
/// rate in percent as published. `inflation_rate_percent` is the
/// semiannual inflation rate in percent and is `None` for series without
/// an inflation component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTableEntry {
    /// Series the entry applies to.
    pub series: Series,
    /// First date (inclusive) the entry is in force.
    pub effective_from: Date,
    /// First date (exclusive) the entry is no longer in force; `None`
    /// for the current open-ended entry.
    pub effective_to: Option<Date>,
    /// Published annual fixed rate, in percent.
    pub fixed_rate_percent: Decimal,
    /// Published semiannual inflation rate, in percent; `None` for
    /// fixed-only series.
    pub inflation_rate_percent: Option<Decimal>,
    /// Length of one compounding interval under this entry, in months.
    pub compounding_months: u32,
}

impl RateTableEntry {
    /// Whether `date` falls inside `[effective_from, effective_to)`.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        date >= self.effective_from && self.effective_to.map_or(true, |to| date < to)
    }

    /// The per-compounding-interval rate as a decimal fraction, combined
    /// according to the series' rule.
    #[must_use]
    pub fn periodic_rate(&self) -> Decimal {
        self.series.periodic_rate(
            self.fixed_rate_percent,
            self.inflation_rate_percent.unwrap_or_default(),
        )
    }
}
