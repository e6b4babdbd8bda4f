//! The bond valuation engine.

use log::debug;
use rust_decimal::Decimal;

use accrue_core::types::Date;
use accrue_rates::RateTable;

use crate::accrual::{accrue, ValuationPeriod};
use crate::error::{ValuationError, ValuationResult};
use crate::record::{BondRecord, ValueRecord};
use crate::schedule::CompoundingSchedule;

/// Valuates batches of bonds against an injected, read-only rate table.
///
/// The engine is a pure synchronous computation: for a fixed rate table,
/// `valuate` is a deterministic function of its arguments with no hidden
/// state. Bonds in a batch are independent, so the `parallel` cargo
/// feature may fan them out across rayon workers without changing any
/// result or its position.
#[derive(Debug, Clone, Copy)]
pub struct ValuationEngine<'a> {
    rates: &'a RateTable,
}

/// The outcome of one batch valuation.
///
/// `results` holds exactly one slot per input bond, in input order.
/// Failed records keep their slot as an error marker; siblings are never
/// disturbed.
#[derive(Debug, Clone)]
pub struct ValuationReport {
    /// The as-of date actually used (caller-supplied, or today).
    pub as_of_date: Date,
    /// Per-bond outcomes, positionally aligned with the input batch.
    pub results: Vec<ValuationResult<ValueRecord>>,
}

impl ValuationReport {
    /// Whether every record in the batch valuated successfully.
    #[must_use]
    pub fn all_ok(&self) -> bool {
        self.results.iter().all(Result::is_ok)
    }
}

impl<'a> ValuationEngine<'a> {
    /// Creates an engine over a loaded rate table.
    #[must_use]
    pub fn new(rates: &'a RateTable) -> Self {
        Self { rates }
    }

    /// Valuates a batch of bonds as of `as_of_date`, defaulting to today.
    ///
    /// Returns the effective as-of date together with one result slot per
    /// bond, in input order.
    #[must_use]
    pub fn valuate(
        &self,
        bonds: &[BondRecord],
        as_of_date: Option<Date>,
    ) -> ValuationReport {
        let as_of = as_of_date.unwrap_or_else(Date::today);
        debug!("valuating {} bonds as of {as_of}", bonds.len());

        #[cfg(feature = "parallel")]
        let results = {
            use rayon::prelude::*;
            bonds
                .par_iter()
                .map(|bond| self.valuate_bond(bond, as_of))
                .collect()
        };

        #[cfg(not(feature = "parallel"))]
        let results = bonds
            .iter()
            .map(|bond| self.valuate_bond(bond, as_of))
            .collect();

        ValuationReport {
            as_of_date: as_of,
            results,
        }
    }

    /// Valuates a single bond as of `as_of_date`.
    ///
    /// # Errors
    ///
    /// - `ValuationError::InvalidBond` for a non-positive denomination
    /// - `ValuationError::InvalidDateRange` when the as-of date precedes
    ///   the issue date
    /// - `ValuationError::Rate` when a compounding interval has no
    ///   published rate
    pub fn valuate_bond(
        &self,
        bond: &BondRecord,
        as_of_date: Date,
    ) -> ValuationResult<ValueRecord> {
        if bond.denomination <= Decimal::ZERO {
            return Err(ValuationError::invalid_bond(format!(
                "denomination must be positive, got {}",
                bond.denomination
            )));
        }
        if as_of_date < bond.issue_date {
            return Err(ValuationError::InvalidDateRange {
                issue_date: bond.issue_date,
                as_of_date,
            });
        }

        // Interest stops at final maturity; later as-of dates reuse the
        // value computed there.
        let horizon = as_of_date.min(bond.maturity_date()?);

        let periods = CompoundingSchedule::new(
            bond.issue_date,
            horizon,
            bond.series.compounding_months(),
        )
        .map(|span| {
            let entry = self.rates.lookup(bond.series, span.start)?;
            Ok(ValuationPeriod {
                start: span.start,
                end: span.end,
                complete: span.complete,
                entry: entry.clone(),
            })
        })
        .collect::<ValuationResult<Vec<_>>>()?;

        let accrued_interest = accrue(bond.denomination, &periods);
        Ok(ValueRecord::from_bond(bond, as_of_date, accrued_interest))
    }
}
