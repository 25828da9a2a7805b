//! Board-footage calculation.
//!
//! Parsing of raw measurement text and the `(L × W × T × Qty) / 144`
//! formula. Everything here is pure; storing results is the job of
//! [`crate::history`].

pub mod board_feet;

pub use board_feet::{
    BOARD_FOOT_DIVISOR, CalculationError, Measurements, board_feet, parse_measurement,
};
