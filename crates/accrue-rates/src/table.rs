//! The validated, immutable rate table store.

use std::collections::BTreeMap;

use log::debug;

use accrue_core::types::{Date, Series};

use crate::entry::RateTableEntry;
use crate::error::{RateError, RateResult};

/// An immutable store of published rate entries, keyed by series.
///
/// Construction validates the coverage invariant: per series, entries
/// sorted by `effective_from` must tile the timeline with no overlap and
/// no gap, and only the final entry may be open-ended. After that the
/// table is read-only, so concurrent lookups from parallel valuation are
/// safe without locking.
#[derive(Debug, Clone)]
pub struct RateTable {
    entries: BTreeMap<Series, Vec<RateTableEntry>>,
}

impl RateTable {
    /// Builds a table from a flat entry list, validating coverage.
    ///
    /// # Errors
    ///
    /// Returns `RateError::Overlap`, `RateError::CoverageGap`, or
    /// `RateError::MissingInflation` describing the first defect found.
    /// These are configuration errors; callers should fail fast rather
    /// than start valuating.
    pub fn from_entries(entries: Vec<RateTableEntry>) -> RateResult<Self> {
        let mut by_series: BTreeMap<Series, Vec<RateTableEntry>> = BTreeMap::new();
        for entry in entries {
            by_series.entry(entry.series).or_default().push(entry);
        }

        for (series, series_entries) in &mut by_series {
            series_entries.sort_by_key(|e| e.effective_from);
            validate_series(*series, series_entries)?;
        }

        let table = Self { entries: by_series };
        debug!(
            "rate table loaded: {} series, {} entries",
            table.entries.len(),
            table.entries.values().map(Vec::len).sum::<usize>()
        );
        Ok(table)
    }

    /// Finds the entry in force for `series` on `date`.
    ///
    /// # Errors
    ///
    /// Returns `RateError::RateNotFound` when the date precedes the
    /// series' earliest published entry or the series is absent from the
    /// table.
    pub fn lookup(&self, series: Series, date: Date) -> RateResult<&RateTableEntry> {
        let not_found = || RateError::RateNotFound { series, date };
        let series_entries = self.entries.get(&series).ok_or_else(not_found)?;

        // Entries tile the timeline, so the candidate is the last entry
        // starting on or before the date.
        let idx = series_entries.partition_point(|e| e.effective_from <= date);
        let candidate = idx.checked_sub(1).and_then(|i| series_entries.get(i));
        candidate
            .filter(|e| e.contains(date))
            .ok_or_else(not_found)
    }

    /// The series this table covers.
    pub fn series(&self) -> impl Iterator<Item = Series> + '_ {
        self.entries.keys().copied()
    }

    /// Earliest covered date for a series, if the series is present.
    #[must_use]
    pub fn earliest_for(&self, series: Series) -> Option<Date> {
        self.entries
            .get(&series)
            .and_then(|v| v.first())
            .map(|e| e.effective_from)
    }

    /// Total number of entries across all series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Whether the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_series(series: Series, entries: &[RateTableEntry]) -> RateResult<()> {
    for entry in entries {
        if series.uses_inflation_component() && entry.inflation_rate_percent.is_none() {
            return Err(RateError::MissingInflation {
                series,
                date: entry.effective_from,
            });
        }
    }

    for pair in entries.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        match prev.effective_to {
            // An open-ended entry must be the last one.
            None => {
                return Err(RateError::Overlap {
                    series,
                    date: next.effective_from,
                })
            }
            Some(end) if end > next.effective_from => {
                return Err(RateError::Overlap {
                    series,
                    date: next.effective_from,
                })
            }
            Some(end) if end < next.effective_from => {
                return Err(RateError::CoverageGap {
                    series,
                    from: end,
                    to: next.effective_from,
                })
            }
            Some(_) => {}
        }
    }

    Ok(())
}
