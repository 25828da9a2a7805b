//! The board-footage formula and the parsing that feeds it.

use thiserror::Error;
use tracing::debug;

use crate::models::Dimension;

/// Cubic inches in one board foot (12 × 12 × 1).
pub const BOARD_FOOT_DIVISOR: f64 = 144.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    /// A measurement was empty, not a number, or not finite.
    #[error("invalid {dimension}: '{input}' is not a finite number")]
    InvalidInput { dimension: Dimension, input: String },
}

/// Four finite measurements.
///
/// Every constructor checks finiteness, so a [`CalculationRecord`] built
/// from these always has a finite result.
///
/// [`CalculationRecord`]: crate::models::CalculationRecord
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    length: f64,
    width: f64,
    thickness: f64,
    quantity: f64,
}

impl Measurements {
    /// Fails on the first value, in [`Dimension::ALL`] order, that is `NaN`
    /// or infinite.
    pub fn new(
        length: f64,
        width: f64,
        thickness: f64,
        quantity: f64,
    ) -> Result<Self, CalculationError> {
        Ok(Self {
            length: check_finite(Dimension::Length, length)?,
            width: check_finite(Dimension::Width, width)?,
            thickness: check_finite(Dimension::Thickness, thickness)?,
            quantity: check_finite(Dimension::Quantity, quantity)?,
        })
    }

    /// Parses the four raw input strings in [`Dimension::ALL`] order.
    ///
    /// Fails on the first field that is not a finite number.
    pub fn parse(inputs: [&str; 4]) -> Result<Self, CalculationError> {
        let [length, width, thickness, quantity] = inputs;

        Ok(Self {
            length: parse_measurement(Dimension::Length, length)?,
            width: parse_measurement(Dimension::Width, width)?,
            thickness: parse_measurement(Dimension::Thickness, thickness)?,
            quantity: parse_measurement(Dimension::Quantity, quantity)?,
        })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }
}

fn check_finite(
    dimension: Dimension,
    value: f64,
) -> Result<f64, CalculationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        debug!(%dimension, value, "rejected measurement");
        Err(CalculationError::InvalidInput {
            dimension,
            input: value.to_string(),
        })
    }
}

/// Computes `(length × width × thickness × quantity) / 144`.
///
/// No rounding is applied; negative and zero values pass straight through.
///
/// # Examples
///
/// ```
/// use timber_core::calculations::board_feet;
///
/// assert_eq!(board_feet(12.0, 12.0, 1.0, 1.0), 1.0);
/// assert_eq!(board_feet(96.0, 6.0, 1.0, 4.0), 16.0);
/// ```
pub fn board_feet(
    length: f64,
    width: f64,
    thickness: f64,
    quantity: f64,
) -> f64 {
    (length * width * thickness * quantity) / BOARD_FOOT_DIVISOR
}

/// Normalizes input for parsing: trims whitespace and removes commas (thousands separator).
fn normalize_measurement_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses one measurement field into a finite `f64`.
///
/// Handles comma as thousands separator (e.g. `"1,200"`). Empty input,
/// non-numeric text, `NaN` and infinities are rejected.
pub fn parse_measurement(
    dimension: Dimension,
    s: &str,
) -> Result<f64, CalculationError> {
    let invalid = || CalculationError::InvalidInput {
        dimension,
        input: s.to_string(),
    };

    let normalized = normalize_measurement_input(s);
    if normalized.is_empty() {
        return Err(invalid());
    }

    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) | Err(_) => {
            debug!(%dimension, input = %s, "rejected measurement");
            Err(invalid())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // board_feet tests
    // =========================================================================

    #[test]
    fn board_feet_one_foot_square_inch_thick() {
        assert_eq!(board_feet(12.0, 12.0, 1.0, 1.0), 1.0);
    }

    #[test]
    fn board_feet_is_not_rounded() {
        let result = board_feet(2.0, 6.0, 1.0, 10.0);

        assert!((result - 120.0 / 144.0).abs() < 1e-12);
        assert!(result > 0.8333 && result < 0.8334);
    }

    #[test]
    fn board_feet_allows_zero_and_negative() {
        assert_eq!(board_feet(0.0, 6.0, 1.0, 10.0), 0.0);
        assert_eq!(board_feet(-12.0, 12.0, 1.0, 1.0), -1.0);
    }

    // =========================================================================
    // parse_measurement tests
    // =========================================================================

    #[test]
    fn parse_measurement_accepts_plain_numbers() {
        assert_eq!(parse_measurement(Dimension::Length, "96").unwrap(), 96.0);
        assert_eq!(parse_measurement(Dimension::Width, "5.5").unwrap(), 5.5);
        assert_eq!(parse_measurement(Dimension::Thickness, "-1").unwrap(), -1.0);
    }

    #[test]
    fn parse_measurement_trims_and_strips_commas() {
        assert_eq!(
            parse_measurement(Dimension::Length, "  1,200.5 ").unwrap(),
            1200.5
        );
    }

    #[test]
    fn parse_measurement_rejects_empty() {
        assert_eq!(
            parse_measurement(Dimension::Quantity, "   "),
            Err(CalculationError::InvalidInput {
                dimension: Dimension::Quantity,
                input: "   ".to_string(),
            })
        );
    }

    #[test]
    fn parse_measurement_rejects_text() {
        assert!(parse_measurement(Dimension::Length, "abc").is_err());
        assert!(parse_measurement(Dimension::Length, "12ft").is_err());
    }

    #[test]
    fn parse_measurement_rejects_non_finite() {
        for input in ["NaN", "inf", "-inf", "infinity", "1e400"] {
            assert!(
                parse_measurement(Dimension::Width, input).is_err(),
                "{input} should be rejected"
            );
        }
    }

    // =========================================================================
    // Measurements tests
    // =========================================================================

    #[test]
    fn measurements_parse_all_fields() {
        let m = Measurements::parse(["2", "6", "1", "10"]).unwrap();

        assert_eq!(m, Measurements::new(2.0, 6.0, 1.0, 10.0).unwrap());
        assert_eq!(m.length(), 2.0);
        assert_eq!(m.quantity(), 10.0);
    }

    #[test]
    fn measurements_new_accepts_zero_and_negative() {
        let m = Measurements::new(0.0, -6.0, 1.0, 10.0).unwrap();

        assert_eq!(m.width(), -6.0);
    }

    #[test]
    fn measurements_new_rejects_non_finite() {
        assert_eq!(
            Measurements::new(f64::NAN, 1.0, 1.0, 1.0),
            Err(CalculationError::InvalidInput {
                dimension: Dimension::Length,
                input: "NaN".to_string(),
            })
        );
        assert_eq!(
            Measurements::new(1.0, 1.0, f64::INFINITY, 1.0),
            Err(CalculationError::InvalidInput {
                dimension: Dimension::Thickness,
                input: "inf".to_string(),
            })
        );
        assert!(Measurements::new(1.0, 1.0, 1.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn measurements_parse_reports_first_bad_field() {
        let err = Measurements::parse(["2", "x", "", "10"]).unwrap_err();

        assert_eq!(
            err,
            CalculationError::InvalidInput {
                dimension: Dimension::Width,
                input: "x".to_string(),
            }
        );
        assert_eq!(err.to_string(), "invalid Width: 'x' is not a finite number");
    }
}
