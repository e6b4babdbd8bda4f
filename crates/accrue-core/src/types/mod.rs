//! Domain types for savings bond valuation.
//!
//! - [`Date`]: Calendar date with month arithmetic
//! - [`Series`]: Savings bond series and its rate-combination rule

mod date;
mod series;

pub use date::Date;
pub use series::Series;
