use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::calculations::{Measurements, board_feet};

/// Opaque identifier for a [`CalculationRecord`], only used for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// One completed calculation.
///
/// Fields are private so a record cannot change after creation; `result`
/// is computed once from the measurements it was built with.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRecord {
    id: RecordId,
    measurements: Measurements,
    result: f64,
    created_at: DateTime<Utc>,
}

impl CalculationRecord {
    /// Builds a record stamped with a fresh id and the current time.
    pub fn new(measurements: Measurements) -> Self {
        Self::at(measurements, Utc::now())
    }

    /// Builds a record with an explicit creation time.
    pub fn at(
        measurements: Measurements,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: RecordId::new(),
            measurements,
            result: board_feet(
                measurements.length(),
                measurements.width(),
                measurements.thickness(),
                measurements.quantity(),
            ),
            created_at,
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn length(&self) -> f64 {
        self.measurements.length()
    }

    pub fn width(&self) -> f64 {
        self.measurements.width()
    }

    pub fn thickness(&self) -> f64 {
        self.measurements.thickness()
    }

    pub fn quantity(&self) -> f64 {
        self.measurements.quantity()
    }

    /// Board feet for this entry, unrounded.
    pub fn result(&self) -> f64 {
        self.result
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::{assert_eq, assert_ne};

    use super::*;

    #[test]
    fn new_record_computes_result_from_measurements() {
        let record = CalculationRecord::new(Measurements::new(12.0, 6.0, 2.0, 3.0).unwrap());

        assert_eq!(record.result(), 3.0);
        assert_eq!(record.length(), 12.0);
        assert_eq!(record.quantity(), 3.0);
    }

    #[test]
    fn records_get_distinct_ids() {
        let m = Measurements::new(1.0, 1.0, 1.0, 1.0).unwrap();
        let a = CalculationRecord::new(m);
        let b = CalculationRecord::new(m);

        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn record_id_displays_without_hyphens() {
        let id = RecordId::new();

        assert_eq!(id.to_string().len(), 32);
        assert!(!id.to_string().contains('-'));
    }
}
