//! The accrual calculator.

use rust_decimal::Decimal;

use accrue_core::rounding::round_cents;
use accrue_core::types::Date;
use accrue_rates::RateTableEntry;

/// One compounding interval tagged with the rate entry in force at its
/// start date. Ephemeral; built per valuation and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuationPeriod {
    /// First day of the interval.
    pub start: Date,
    /// Day after the last day of the interval.
    pub end: Date,
    /// Whether the interval runs its full compounding length.
    pub complete: bool,
    /// The rate entry in force during the interval.
    pub entry: RateTableEntry,
}

/// Computes total accrued interest over an ordered interval sequence.
///
/// Walks the intervals from issue toward the as-of date, applying each
/// interval's periodic rate to the running principal-plus-interest
/// balance. Every interval's interest is rounded to cents at the interval
/// boundary before it compounds, matching published redemption tables.
/// Incomplete trailing intervals earn nothing: interest is credited only
/// for completed compounding periods.
#[must_use]
pub fn accrue(denomination: Decimal, periods: &[ValuationPeriod]) -> Decimal {
    let mut balance = denomination;
    let mut accrued = Decimal::ZERO;

    for period in periods {
        if !period.complete {
            continue;
        }
        let interest = round_cents(balance * period.entry.periodic_rate());
        balance += interest;
        accrued += interest;
    }

    accrued
}

#[cfg(test)]
mod tests {
    use super::*;
    use accrue_core::types::Series;
    use rust_decimal_macros::dec;

    fn period(start: &str, end: &str, complete: bool, fixed: Decimal) -> ValuationPeriod {
        let start = Date::parse(start).unwrap();
        ValuationPeriod {
            start,
            end: Date::parse(end).unwrap(),
            complete,
            entry: RateTableEntry {
                series: Series::EE,
                effective_from: start,
                effective_to: None,
                fixed_rate_percent: fixed,
                inflation_rate_percent: None,
                compounding_months: 6,
            },
        }
    }

    #[test]
    fn test_single_interval_hand_computed() {
        // $100 at 2% annual fixed -> 1% per interval -> exactly $1.00
        let periods = vec![period("2020-01-01", "2020-07-01", true, dec!(2.0))];
        assert_eq!(accrue(dec!(100.00), &periods), dec!(1.00));
    }

    #[test]
    fn test_compounding_carries_balance() {
        // Second interval earns on 101.00: 1.01, total 2.01
        let periods = vec![
            period("2020-01-01", "2020-07-01", true, dec!(2.0)),
            period("2020-07-01", "2021-01-01", true, dec!(2.0)),
        ];
        assert_eq!(accrue(dec!(100.00), &periods), dec!(2.01));
    }

    #[test]
    fn test_interval_interest_rounds_to_cents() {
        // 33.33 * 0.01 = 0.3333 -> 0.33, then (33.66) * 0.01 = 0.3366 -> 0.34
        let periods = vec![
            period("2020-01-01", "2020-07-01", true, dec!(2.0)),
            period("2020-07-01", "2021-01-01", true, dec!(2.0)),
        ];
        assert_eq!(accrue(dec!(33.33), &periods), dec!(0.67));
    }

    #[test]
    fn test_incomplete_interval_earns_nothing() {
        let periods = vec![
            period("2020-01-01", "2020-07-01", true, dec!(2.0)),
            period("2020-07-01", "2020-10-15", false, dec!(2.0)),
        ];
        assert_eq!(accrue(dec!(100.00), &periods), dec!(1.00));
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(accrue(dec!(100.00), &[]), Decimal::ZERO);
    }
}
