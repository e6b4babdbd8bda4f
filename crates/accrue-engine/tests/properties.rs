//! Property tests for the valuation invariants: accrued interest never
//! decreases with the as-of date, redemption value never drops below
//! face value, and batch order is preserved.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use accrue_core::types::{Date, Series};
use accrue_engine::{BondRecord, ValuationEngine};
use accrue_rates::{RateTable, RateTableEntry};

/// A two-segment EE timeline so rate resets participate in the properties.
fn fixture_table() -> RateTable {
    RateTable::from_entries(vec![
        RateTableEntry {
            series: Series::EE,
            effective_from: Date::from_ymd(1990, 1, 1).unwrap(),
            effective_to: Some(Date::from_ymd(2010, 1, 1).unwrap()),
            fixed_rate_percent: dec!(3.40),
            inflation_rate_percent: None,
            compounding_months: 6,
        },
        RateTableEntry {
            series: Series::EE,
            effective_from: Date::from_ymd(2010, 1, 1).unwrap(),
            effective_to: None,
            fixed_rate_percent: dec!(0.10),
            inflation_rate_percent: None,
            compounding_months: 6,
        },
    ])
    .unwrap()
}

/// Denominations from one cent to $10,000, cent-exact.
fn denomination() -> impl Strategy<Value = Decimal> {
    (1i64..=1_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Issue dates inside the fixture's coverage.
fn issue_date() -> impl Strategy<Value = Date> {
    (0i32..360).prop_map(|months| {
        Date::from_ymd(1990, 1, 1)
            .unwrap()
            .add_months(months)
            .unwrap()
    })
}

proptest! {
    #[test]
    fn accrued_interest_is_monotone_in_as_of(
        denom in denomination(),
        issue in issue_date(),
        elapsed_a in 0i32..500,
        extra in 0i32..200,
    ) {
        let table = fixture_table();
        let engine = ValuationEngine::new(&table);
        let bond = BondRecord::new(Series::EE, issue, denom);

        let earlier = issue.add_months(elapsed_a).unwrap();
        let later = earlier.add_months(extra).unwrap();

        let at_earlier = engine.valuate_bond(&bond, earlier).unwrap();
        let at_later = engine.valuate_bond(&bond, later).unwrap();
        prop_assert!(at_later.accrued_interest >= at_earlier.accrued_interest);
    }

    #[test]
    fn redemption_value_never_below_face(
        denom in denomination(),
        issue in issue_date(),
        elapsed in 0i32..900,
    ) {
        let table = fixture_table();
        let engine = ValuationEngine::new(&table);
        let bond = BondRecord::new(Series::EE, issue, denom);
        let as_of = issue.add_months(elapsed).unwrap();

        let value = engine.valuate_bond(&bond, as_of).unwrap();
        prop_assert!(value.redemption_value >= denom);
        prop_assert!(value.accrued_interest >= Decimal::ZERO);
    }

    #[test]
    fn valuation_is_deterministic(
        denom in denomination(),
        issue in issue_date(),
        elapsed in 0i32..500,
    ) {
        let table = fixture_table();
        let engine = ValuationEngine::new(&table);
        let bond = BondRecord::new(Series::EE, issue, denom);
        let as_of = issue.add_months(elapsed).unwrap();

        let first = engine.valuate_bond(&bond, as_of).unwrap();
        let second = engine.valuate_bond(&bond, as_of).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn batch_order_is_preserved(denoms in prop::collection::vec(denomination(), 0..20)) {
        let table = fixture_table();
        let engine = ValuationEngine::new(&table);
        let issue = Date::from_ymd(2000, 3, 1).unwrap();

        let bonds: Vec<_> = denoms
            .iter()
            .enumerate()
            .map(|(i, denom)| {
                BondRecord::new(Series::EE, issue, *denom)
                    .with_serial_number(format!("SN{i:05}"))
            })
            .collect();

        let report = engine.valuate(&bonds, Some(Date::from_ymd(2005, 3, 1).unwrap()));
        prop_assert_eq!(report.results.len(), bonds.len());
        for (i, slot) in report.results.iter().enumerate() {
            let value = slot.as_ref().unwrap();
            prop_assert_eq!(value.serial_number.clone(), Some(format!("SN{i:05}")));
            prop_assert_eq!(value.denomination, denoms[i]);
        }
    }
}
