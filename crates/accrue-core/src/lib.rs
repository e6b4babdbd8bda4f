//! # Accrue Core
//!
//! Core types for the Accrue savings bond valuation library.
//!
//! This crate provides the foundational building blocks used throughout
//! Accrue:
//!
//! - **Types**: Domain-specific types like `Date` and `Series`
//! - **Rounding**: Cent-exact rounding rules shared by every accrual path
//! - **Errors**: Structured error handling with context
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing incompatible values
//! - **Explicit Over Implicit**: Clear, self-documenting APIs
//! - **No Floats**: All monetary and rate arithmetic uses `rust_decimal`
//!
//! ## Example
//!
//! ```rust
//! use accrue_core::types::{Date, Series};
//!
//! let issue = Date::from_ymd(2020, 1, 1).unwrap();
//! let series: Series = "EE".parse().unwrap();
//! assert_eq!(series.compounding_months(), 6);
//! assert_eq!(issue.add_months(6).unwrap(), Date::from_ymd(2020, 7, 1).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod rounding;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Date, Series};
