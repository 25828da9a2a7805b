//! Running total over the calculation history.

use crate::models::CalculationRecord;

/// Sums `result` over `records`.
///
/// Always a fresh fold over the whole slice, so removals and clears can
/// never leave stale contributions behind. Folds from `+0.0`: an empty
/// history totals exactly `0.0` rather than `-0.0`.
pub fn total(records: &[CalculationRecord]) -> f64 {
    records.iter().fold(0.0, |sum, record| sum + record.result())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::calculations::Measurements;

    fn record(
        l: f64,
        w: f64,
        t: f64,
        q: f64,
    ) -> CalculationRecord {
        CalculationRecord::new(Measurements::new(l, w, t, q).unwrap())
    }

    #[test]
    fn empty_total_is_positive_zero() {
        let sum = total(&[]);

        assert_eq!(sum, 0.0);
        assert!(sum.is_sign_positive());
    }

    #[test]
    fn total_sums_every_result() {
        let records = vec![record(12.0, 12.0, 1.0, 1.0), record(96.0, 6.0, 1.0, 4.0)];

        assert_eq!(total(&records), 17.0);
    }

    #[test]
    fn total_can_go_negative() {
        let records = vec![record(12.0, 12.0, 1.0, 1.0), record(-24.0, 12.0, 1.0, 1.0)];

        assert_eq!(total(&records), -1.0);
    }

    proptest! {
        #[test]
        fn total_is_order_independent(
            dims in prop::collection::vec(
                (-500.0f64..500.0, -50.0f64..50.0, -10.0f64..10.0, 0.0f64..100.0),
                0..40,
            )
        ) {
            let mut records: Vec<_> = dims
                .iter()
                .map(|&(l, w, t, q)| record(l, w, t, q))
                .collect();
            let expected: f64 = dims.iter().map(|&(l, w, t, q)| l * w * t * q / 144.0).sum();

            let forward = total(&records);
            records.reverse();
            let backward = total(&records);

            prop_assert!((forward - expected).abs() < 1e-6);
            prop_assert!((forward - backward).abs() < 1e-6);
        }
    }
}
