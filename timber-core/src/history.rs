//! In-memory calculation history, newest first.
//!
//! Nothing here is persisted: a new [`History`] starts empty every time
//! the application starts.

use tracing::debug;

use crate::aggregate;
use crate::models::{CalculationRecord, RecordId};

#[derive(Debug, Clone, Default)]
pub struct History {
    records: Vec<CalculationRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record` at the front.
    pub fn append(
        &mut self,
        record: CalculationRecord,
    ) {
        debug!(id = %record.id(), result = record.result(), "appending record");
        self.records.insert(0, record);
    }

    /// Removes the record with `id`, returning it.
    ///
    /// Unknown ids are ignored, so removing twice is harmless.
    pub fn remove(
        &mut self,
        id: RecordId,
    ) -> Option<CalculationRecord> {
        let position = self.records.iter().position(|r| r.id() == id)?;
        debug!(%id, "removing record");
        Some(self.records.remove(position))
    }

    /// Drops every record. Callers own any confirmation step.
    pub fn clear(&mut self) {
        debug!(count = self.records.len(), "clearing history");
        self.records.clear();
    }

    /// Records in display order, newest first.
    pub fn list(&self) -> &[CalculationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Running total, recomputed from the current records.
    pub fn total(&self) -> f64 {
        aggregate::total(&self.records)
    }
}
