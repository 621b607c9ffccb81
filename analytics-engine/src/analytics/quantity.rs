//! Quantity and money rounding
//!
//! Uses rust_decimal for precise intermediate arithmetic, stores as f64.
//! Stock quantities round to one decimal place, currency amounts to two.

use rust_decimal::prelude::*;

/// Rounding precision for stock quantities (1 decimal place, half-up)
pub const QUANTITY_PLACES: u32 = 1;
/// Rounding precision for monetary values (2 decimal places, half-up)
pub const MONEY_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to quantity precision
#[inline]
pub fn quantity_to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(QUANTITY_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to money precision
#[inline]
pub fn money_to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(MONEY_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Round a raw quantity to one decimal place
#[inline]
pub fn round_quantity(value: f64) -> f64 {
    quantity_to_f64(to_decimal(value))
}
