pub mod advisory;
pub mod aggregate;
pub mod calculations;
pub mod format;
pub mod history;
pub mod models;

pub use advisory::{
    Advisor, AdvisorConfig, AdvisoryError, GeneratorFactory, GeneratorRegistry, TextGenerator,
};
pub use calculations::{CalculationError, Measurements};
pub use history::History;
pub use models::*;
