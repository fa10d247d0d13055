//! Conversions between the floating-point figures produced by the
//! calculators and the decimal amounts used for display and export.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use irpf_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a computed amount to centavos, always carrying two decimal places.
///
/// Returns `None` for NaN and infinite values, which have no decimal form.
///
/// ```
/// use rust_decimal_macros::dec;
/// use irpf_core::calculations::common::to_currency;
///
/// assert_eq!(to_currency(1854.0), Some(dec!(1854.00)));
/// assert_eq!(to_currency(f64::NAN), None);
/// ```
pub fn to_currency(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value).map(|d| {
        let mut rounded = round_half_up(d);
        rounded.rescale(2);
        rounded
    })
}

/// Converts a parsed decimal amount to the floating-point form the
/// calculators take. Values outside the `f64` range become NaN.
pub fn to_amount(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
