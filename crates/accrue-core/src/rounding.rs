//! Cent-exact rounding shared by every accrual path.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to the currency's minor unit (cents).
///
/// Redemption tables round half away from zero, so $0.005 becomes $0.01.
/// Every compounding interval's interest passes through this before it is
/// added to the running balance.
#[must_use]
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_cents(dec!(1.005)), dec!(1.01));
        assert_eq!(round_cents(dec!(1.004)), dec!(1.00));
    }

    #[test]
    fn test_round_is_idempotent() {
        assert_eq!(round_cents(dec!(102.01)), dec!(102.01));
        assert_eq!(round_cents(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_round_negative_half_away() {
        assert_eq!(round_cents(dec!(-0.005)), dec!(-0.01));
    }
}
