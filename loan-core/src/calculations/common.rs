//! Currency helpers shared by the payment and affordability calculations.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero, and the result always
/// carries a scale of two so it displays as a currency amount.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use loan_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(460.585)), dec!(460.59));
/// assert_eq!(round_half_up(dec!(416.664)), dec!(416.66));
/// assert_eq!(round_half_up(dec!(0)).to_string(), "0.00");
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Converts a floating-point currency amount into a two-place [`Decimal`].
///
/// Rounding starts from the exact binary value of `value`, so an amount
/// stored just below a half cent rounds down.
///
/// Returns `None` when the amount is NaN or infinite, which only happens
/// when the calculation was fed input outside its valid domain.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use loan_core::calculations::common::currency_from_f64;
///
/// assert_eq!(currency_from_f64(416.6666666666667), Some(dec!(416.67)));
/// assert_eq!(currency_from_f64(3.0 / 40.0), Some(dec!(0.07)));
/// assert_eq!(currency_from_f64(f64::INFINITY), None);
/// ```
pub fn currency_from_f64(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64_retain(value).map(round_half_up)
}

/// Converts a [`Decimal`] to `f64` for comparison against computed payments.
///
/// Every `Decimal` fits in an `f64` range-wise, so the NaN fallback is never
/// reached in practice. NaN compares false against everything, which makes
/// any rule using it fail closed.
pub(crate) fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(460.584));

        assert_eq!(result, dec!(460.58));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(460.585));

        assert_eq!(result, dec!(460.59));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        let result = round_half_up(dec!(-12.345));

        assert_eq!(result, dec!(-12.35)); // Away from zero
    }

    #[test]
    fn round_half_up_pads_whole_amounts_to_two_places() {
        let result = round_half_up(dec!(500));

        assert_eq!(result.to_string(), "500.00");
    }

    #[test]
    fn round_half_up_handles_zero() {
        let result = round_half_up(Decimal::ZERO);

        assert_eq!(result.to_string(), "0.00");
    }

    // =========================================================================
    // currency_from_f64 tests
    // =========================================================================

    #[test]
    fn currency_from_f64_rounds_payment_to_cents() {
        let result = currency_from_f64(460.5858714129317);

        assert_eq!(result, Some(dec!(460.59)));
    }

    #[test]
    fn currency_from_f64_rounds_stored_value_below_half_cent_down() {
        // Each of these is stored as ...4999... in binary
        assert_eq!(currency_from_f64(3.0 / 40.0), Some(dec!(0.07)));
        assert_eq!(currency_from_f64(7.0 / 40.0), Some(dec!(0.17)));
        assert_eq!(currency_from_f64(17.0 / 40.0), Some(dec!(0.42)));
    }

    #[test]
    fn currency_from_f64_rounds_exact_half_cent_up() {
        // 0.125 is exactly representable
        assert_eq!(currency_from_f64(0.125), Some(dec!(0.13)));
    }

    #[test]
    fn currency_from_f64_rejects_nan() {
        assert_eq!(currency_from_f64(f64::NAN), None);
    }

    #[test]
    fn currency_from_f64_rejects_infinity() {
        assert_eq!(currency_from_f64(f64::NEG_INFINITY), None);
    }

    // =========================================================================
    // decimal_to_f64 tests
    // =========================================================================

    #[test]
    fn decimal_to_f64_converts_exact_budget() {
        assert_eq!(decimal_to_f64(dec!(500.00)), 500.0);
    }
}
