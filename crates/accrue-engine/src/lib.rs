//! # Accrue Engine
//!
//! Accrual calculation and batch valuation for U.S. savings bonds.
//!
//! Given a bond's static attributes and a loaded
//! [`RateTable`](accrue_rates::RateTable), the engine decomposes the span
//! from issue date to as-of date into compounding intervals, resolves the
//! rate entry in force over each, and compounds interest with cent
//! rounding at every interval boundary:
//!
//! - [`BondRecord`] / [`ValueRecord`]: batch input and output shapes
//! - [`CompoundingSchedule`]: issue-anchored interval decomposition
//! - [`accrue`]: the running-balance accrual walk
//! - [`ValuationEngine`]: per-batch orchestration with per-record error
//!   markers
//!
//! ## Example
//!
//! ```rust
//! use accrue_core::types::{Date, Series};
//! use accrue_engine::{BondRecord, ValuationEngine};
//! use accrue_rates::RateTable;
//! use rust_decimal_macros::dec;
//!
//! let table = RateTable::builtin();
//! let engine = ValuationEngine::new(table);
//! let bond = BondRecord::new(Series::I, Date::from_ymd(2021, 11, 1).unwrap(), dec!(100));
//! let report = engine.valuate(&[bond], Some(Date::from_ymd(2023, 11, 1).unwrap()));
//! assert!(report.all_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_wrap)]

mod accrual;
mod engine;
mod error;
mod record;
mod schedule;

pub use accrual::{accrue, ValuationPeriod};
pub use engine::{ValuationEngine, ValuationReport};
pub use error::{ValuationError, ValuationResult};
pub use record::{BondRecord, ValueRecord};
pub use schedule::{CompoundingSchedule, PeriodSpan};
