//! Shared arithmetic helpers used across the calculation modules.

use rust_decimal::Decimal;
use tracing::warn;

/// Rounds a monetary value to two decimal places, half-up (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use finlit_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(8341.005)), dec!(8341.01));
/// assert_eq!(round_half_up(dec!(8341.004)), dec!(8341.00));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a plain percentage (`7.5` meaning 7.5%) to a fractional rate.
///
/// Percentages are stored as plain numbers throughout the models and only
/// converted at the point of use.
pub fn fraction(percent: Decimal) -> Decimal {
    percent / Decimal::ONE_HUNDRED
}

/// Clamps a negative monetary input to zero.
///
/// Invalid inputs are never rejected; they are normalized with an advisory
/// warning so the calculation always proceeds.
pub fn clamp_non_negative(value: Decimal, field: &str) -> Decimal {
    if value < Decimal::ZERO {
        warn!(field, %value, "negative input clamped to zero");
        Decimal::ZERO
    } else {
        value
    }
}

/// Returns the larger of two decimal values.
pub fn max(a: Decimal, b: Decimal) -> Decimal {
    if a > b { a } else { b }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_half_up_rounds_midpoint_away_from_zero() {
        assert_eq!(round_half_up(dec!(0.005)), dec!(0.01));
        assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01));
    }

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
    }

    #[test]
    fn round_half_up_preserves_rounded_values() {
        assert_eq!(round_half_up(dec!(123.45)), dec!(123.45));
    }

    #[test]
    fn fraction_converts_plain_percentages() {
        assert_eq!(fraction(dec!(7.5)), dec!(0.075));
        assert_eq!(fraction(dec!(100)), dec!(1));
        assert_eq!(fraction(dec!(0)), dec!(0));
    }

    #[test]
    fn clamp_non_negative_zeroes_negative_values() {
        assert_eq!(clamp_non_negative(dec!(-500), "income"), dec!(0));
    }

    #[test]
    fn clamp_non_negative_passes_through_valid_values() {
        assert_eq!(clamp_non_negative(dec!(500), "income"), dec!(500));
        assert_eq!(clamp_non_negative(dec!(0), "income"), dec!(0));
    }

    #[test]
    fn max_returns_larger_value() {
        assert_eq!(max(dec!(100), dec!(200)), dec!(200));
        assert_eq!(max(dec!(-50), dec!(50)), dec!(50));
        assert_eq!(max(dec!(150), dec!(150)), dec!(150));
    }
}
