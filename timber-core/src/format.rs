//! Display formatting for board-footage values.
//!
//! Stored values are never rounded; everything here is presentation only.

use chrono::{DateTime, Local, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::CalculationRecord;

/// Rounds a value to exactly two decimal places using half-up rounding
/// on its exact binary value.
///
/// Returns `None` when the value is outside the range a [`Decimal`] can
/// hold. A result that rounds to zero is always positive zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use timber_core::format::round_for_display;
///
/// assert_eq!(round_for_display(120.0 / 144.0), Some(dec!(0.83)));
/// assert_eq!(round_for_display(-0.001), Some(dec!(0.00)));
/// ```
pub fn round_for_display(value: f64) -> Option<Decimal> {
    let exact = Decimal::from_f64_retain(value)?;
    let mut rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(2);
    Some(rounded)
}

/// Formats a single result with two decimals, e.g. `0.83`.
pub fn format_units(value: f64) -> String {
    match round_for_display(value) {
        Some(d) => d.to_string(),
        None => format!("{value:.2}"),
    }
}

/// Formats the running total with two decimals and thousands separators,
/// e.g. `1,234.57`.
pub fn format_total(value: f64) -> String {
    group_thousands(&format_units(value))
}

/// Inserts `,` between every three digits of the integer part.
fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(formatted.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Local wall-clock time of a record, e.g. `14:05`.
pub fn format_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M").to_string()
}

/// The operands of a record as shown in the history, e.g. `2 × 6 × 1 × 10`.
pub fn format_operands(record: &CalculationRecord) -> String {
    format!(
        "{} × {} × {} × {}",
        record.length(),
        record.width(),
        record.thickness(),
        record.quantity()
    )
}
