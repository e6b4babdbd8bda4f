//! Savings bond series.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// The named class of U.S. savings bond.
///
/// The series determines which rate rule applies: Series EE and the legacy
/// Series E accrue at their fixed rate alone, while Series I combines a
/// fixed component with a semiannual inflation component. The set is
/// closed; each variant carries its own rate-combination rule rather than
/// dispatching through user-supplied code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Series {
    /// Series EE: fixed-rate bond sold since 1980.
    EE,
    /// Series I: inflation-linked bond sold since 1998.
    I,
    /// Series E: legacy fixed-rate bond, predecessor of Series EE.
    E,
}

impl Series {
    /// Length of one compounding interval, in months.
    ///
    /// All supported series compound semiannually.
    #[must_use]
    pub fn compounding_months(&self) -> u32 {
        6
    }

    /// Months from issue to final maturity, after which interest stops.
    #[must_use]
    pub fn final_maturity_months(&self) -> u32 {
        // 30 years for every supported series
        360
    }

    /// Whether this series combines a semiannual inflation component
    /// into its rate.
    #[must_use]
    pub fn uses_inflation_component(&self) -> bool {
        matches!(self, Series::I)
    }

    /// Computes the periodic (per-compounding-interval) rate as a decimal
    /// fraction.
    ///
    /// `fixed_rate_percent` is the published annual fixed rate in percent;
    /// `inflation_rate_percent` is the published semiannual inflation rate
    /// in percent, ignored by fixed-only series.
    ///
    /// For inflation-linked series the semiannual composite is
    /// `f + 2i + f*i` with `f` and `i` the semiannual fractions of the two
    /// components. A deflationary component can push the composite below
    /// zero; the result is floored at zero because savings bonds never
    /// lose value.
    #[must_use]
    pub fn periodic_rate(
        &self,
        fixed_rate_percent: Decimal,
        inflation_rate_percent: Decimal,
    ) -> Decimal {
        let fixed = fixed_rate_percent / dec!(200);
        let rate = match self {
            Series::EE | Series::E => fixed,
            Series::I => {
                let inflation = inflation_rate_percent / dec!(100);
                fixed + dec!(2) * inflation + fixed * inflation
            }
        };
        rate.max(Decimal::ZERO)
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Series::EE => "EE",
            Series::I => "I",
            Series::E => "E",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Series {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EE" => Ok(Series::EE),
            "I" => Ok(Series::I),
            "E" => Ok(Series::E),
            other => Err(CoreError::unknown_series(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("EE".parse::<Series>().unwrap(), Series::EE);
        assert_eq!(" i ".parse::<Series>().unwrap(), Series::I);
        assert_eq!("e".parse::<Series>().unwrap(), Series::E);
        assert!("HH".parse::<Series>().is_err());
        assert_eq!(Series::EE.to_string(), "EE");
    }

    #[test]
    fn test_fixed_periodic_rate() {
        // 2% annual fixed -> 1% per semiannual interval
        let rate = Series::EE.periodic_rate(dec!(2.0), Decimal::ZERO);
        assert_eq!(rate, dec!(0.01));
    }

    #[test]
    fn test_composite_periodic_rate() {
        // f = 0.005 (1.0% annual), i = 0.0148
        // composite = 0.005 + 2*0.0148 + 0.005*0.0148 = 0.034674
        let rate = Series::I.periodic_rate(dec!(1.0), dec!(1.48));
        assert_eq!(rate, dec!(0.034674));
    }

    #[test]
    fn test_composite_rate_floor() {
        // Deflation large enough to drive the composite negative
        let rate = Series::I.periodic_rate(dec!(0.0), dec!(-2.78));
        assert_eq!(rate, Decimal::ZERO);
    }

    #[test]
    fn test_inflation_ignored_for_fixed_series() {
        let with = Series::EE.periodic_rate(dec!(3.5), dec!(1.48));
        let without = Series::EE.periodic_rate(dec!(3.5), Decimal::ZERO);
        assert_eq!(with, without);
    }

    #[test]
    fn test_maturity_terms() {
        for series in [Series::EE, Series::I, Series::E] {
            assert_eq!(series.final_maturity_months(), 360);
            assert_eq!(series.compounding_months(), 6);
        }
    }
}
