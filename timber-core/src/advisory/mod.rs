//! Advisory client: turns the running total into a short piece of advice
//! from an external text-generation service.
//!
//! The boundary is deliberately narrow. [`Advisor::request_advice`] takes a
//! total and always returns displayable text; every failure is turned into
//! one of the fixed fallback strings below.

pub mod factory;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::format::format_units;

pub use factory::{AdvisorConfig, GeneratorFactory, GeneratorRegistry};

/// Shown when the service answers but produces no text.
pub const EMPTY_ADVICE_FALLBACK: &str = "Unable to generate advice at this time.";

/// Shown when the request fails for any reason.
pub const OFFLINE_ADVICE_FALLBACK: &str =
    "The wood expert is currently offline. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdvisoryError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("No API key configured for backend '{0}'")]
    MissingCredential(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Decode(String),
}

/// A text-generation backend.
///
/// `Ok(None)` means the service answered without any text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Name of the backend, for logging.
    fn backend_name(&self) -> &'static str;

    async fn generate(
        &self,
        prompt: &str,
    ) -> Result<Option<String>, AdvisoryError>;
}

/// Builds the prompt sent to the text-generation service for `total`.
pub fn build_prompt(total: f64) -> String {
    format!(
        "I have a total of {} board feet of lumber, calculated with the \
         (L × W × T × Qty) / 144 formula.\n\
         Based on this volume, please give concise, professional advice:\n\
         1. What furniture or other projects could be built with this much wood?\n\
         2. Roughly how much would this volume weigh in red oak?\n\
         3. One practical tip for a woodworker working with this volume.\n\
         Keep the tone helpful and professional.",
        format_units(total)
    )
}

/// Requests advice from a [`TextGenerator`], never failing.
pub struct Advisor {
    generator: Box<dyn TextGenerator>,
}

impl Advisor {
    pub fn new(generator: Box<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub fn backend_name(&self) -> &'static str {
        self.generator.backend_name()
    }

    /// Asks the backend for advice about `total` board feet.
    ///
    /// Issues exactly one request. Returns the generated text verbatim,
    /// [`EMPTY_ADVICE_FALLBACK`] when the text is empty, or
    /// [`OFFLINE_ADVICE_FALLBACK`] when the request fails.
    pub async fn request_advice(
        &self,
        total: f64,
    ) -> String {
        let backend = self.generator.backend_name();
        info!(backend, total, "requesting wood advice");

        match self.generator.generate(&build_prompt(total)).await {
            Ok(Some(text)) if !text.is_empty() => text,
            Ok(_) => {
                warn!(backend, "advisory service returned no text");
                EMPTY_ADVICE_FALLBACK.to_string()
            }
            Err(error) => {
                error!(backend, %error, "advisory request failed");
                OFFLINE_ADVICE_FALLBACK.to_string()
            }
        }
    }
}
