//! Shared helpers for payment calculations.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up
/// rounding (midpoint away from zero), the standard financial convention.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use mortgage_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(2022.614)), dec!(2022.61));
/// assert_eq!(round_half_up(dec!(2022.615)), dec!(2022.62));
/// assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Computes `(1 + rate)^periods` by repeated multiplication.
///
/// Loan terms cap out at a few hundred monthly periods, so the loop is
/// cheap and avoids pulling in a power function for fractional exponents.
pub fn compound(
    rate: Decimal,
    periods: u32,
) -> Decimal {
    let base = Decimal::ONE + rate;
    let mut acc = Decimal::ONE;
    for _ in 0..periods {
        acc *= base;
    }
    acc
}
