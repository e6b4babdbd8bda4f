//! # Accrue Rates
//!
//! The rate table store for the Accrue savings bond valuation library.
//!
//! Holds the published historical and current interest-rate parameters
//! needed to compute accrual for any supported issue date and series:
//!
//! - [`RateTableEntry`]: one published rate row with its effective window
//! - [`RateTable`]: validated, immutable per-series timeline with
//!   containment lookup
//! - A built-in versioned dataset ([`RateTable::builtin`]) plus CSV
//!   loading for substitute tables
//!
//! Tables are pure lookup structures: validated once at load, read-only
//! afterwards, safe for concurrent reads.
//!
//! ## Example
//!
//! ```rust
//! use accrue_core::types::{Date, Series};
//! use accrue_rates::RateTable;
//!
//! let table = RateTable::builtin();
//! let entry = table
//!     .lookup(Series::I, Date::from_ymd(2022, 6, 1).unwrap())
//!     .unwrap();
//! assert!(entry.inflation_rate_percent.is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod dataset;
mod entry;
mod error;
mod table;

pub use dataset::DATASET_VERSION;
pub use entry::RateTableEntry;
pub use error::{RateError, RateResult};
pub use table::RateTable;
