//! Bond input and valuation output records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use accrue_core::error::CoreResult;
use accrue_core::types::{Date, Series};

/// One savings bond as supplied by the caller.
///
/// Immutable once constructed. `serial_number` and `registration` are
/// passthrough identifying fields: the engine never interprets them and
/// copies them unchanged onto the output record for correlation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondRecord {
    /// Savings bond series.
    pub series: Series,
    /// Issue date printed on the bond.
    pub issue_date: Date,
    /// Face value in dollars.
    pub denomination: Decimal,
    /// Optional serial number, carried through unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    /// Optional registration (owner) text, carried through unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration: Option<String>,
}

impl BondRecord {
    /// Creates a bond record with no passthrough fields.
    #[must_use]
    pub fn new(series: Series, issue_date: Date, denomination: Decimal) -> Self {
        Self {
            series,
            issue_date,
            denomination,
            serial_number: None,
            registration: None,
        }
    }

    /// Attaches a serial number.
    #[must_use]
    pub fn with_serial_number(mut self, serial: impl Into<String>) -> Self {
        self.serial_number = Some(serial.into());
        self
    }

    /// Attaches a registration.
    #[must_use]
    pub fn with_registration(mut self, registration: impl Into<String>) -> Self {
        self.registration = Some(registration.into());
        self
    }

    /// Final maturity date, after which the bond stops earning interest.
    pub fn maturity_date(&self) -> CoreResult<Date> {
        self.issue_date
            .add_months(self.series.final_maturity_months() as i32)
    }
}

/// The computed value of one bond as of a given date.
///
/// Carries the original record's fields unchanged, plus the accrued
/// interest and redemption value. Constructed once per bond per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRecord {
    /// Savings bond series.
    pub series: Series,
    /// Issue date from the input record.
    pub issue_date: Date,
    /// Face value from the input record.
    pub denomination: Decimal,
    /// Serial number from the input record, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    /// Registration from the input record, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration: Option<String>,
    /// The as-of date the value was computed for.
    pub as_of_date: Date,
    /// Total interest accrued from issue through the as-of date.
    pub accrued_interest: Decimal,
    /// Denomination plus accrued interest.
    pub redemption_value: Decimal,
}

impl ValueRecord {
    /// Builds the output record for a bond and its computed interest.
    #[must_use]
    pub fn from_bond(bond: &BondRecord, as_of_date: Date, accrued_interest: Decimal) -> Self {
        Self {
            series: bond.series,
            issue_date: bond.issue_date,
            denomination: bond.denomination,
            serial_number: bond.serial_number.clone(),
            registration: bond.registration.clone(),
            as_of_date,
            accrued_interest,
            redemption_value: bond.denomination + accrued_interest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_maturity_date() {
        let bond = BondRecord::new(
            Series::EE,
            Date::from_ymd(2020, 1, 1).unwrap(),
            dec!(100),
        );
        assert_eq!(
            bond.maturity_date().unwrap(),
            Date::from_ymd(2050, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_passthrough_fields() {
        let bond = BondRecord::new(Series::I, Date::from_ymd(2021, 5, 1).unwrap(), dec!(50))
            .with_serial_number("C123456789I")
            .with_registration("Jane Q. Public");
        let value = ValueRecord::from_bond(&bond, Date::from_ymd(2022, 5, 1).unwrap(), dec!(3.50));
        assert_eq!(value.serial_number.as_deref(), Some("C123456789I"));
        assert_eq!(value.registration.as_deref(), Some("Jane Q. Public"));
        assert_eq!(value.redemption_value, dec!(53.50));
    }
}
