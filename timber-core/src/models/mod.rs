mod calculation_record;
mod dimension;

pub use calculation_record::{CalculationRecord, RecordId};
pub use dimension::Dimension;
