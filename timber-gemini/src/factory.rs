use async_trait::async_trait;
use timber_core::{AdvisorConfig, AdvisoryError, GeneratorFactory, TextGenerator};
use tracing::warn;

use crate::GeminiGenerator;

/// [`GeneratorFactory`] for Gemini.
///
/// Register this with a [`timber_core::GeneratorRegistry`] to make the
/// `"gemini"` backend available:
///
/// ```rust
/// use timber_core::GeneratorRegistry;
/// use timber_gemini::GeminiFactory;
///
/// let mut registry = GeneratorRegistry::new();
/// registry.register(Box::new(GeminiFactory));
/// assert_eq!(registry.available_backends(), vec!["gemini"]);
/// ```
pub struct GeminiFactory;

#[async_trait]
impl GeneratorFactory for GeminiFactory {
    fn backend_name(&self) -> &'static str {
        "gemini"
    }

    /// Builds a [`GeminiGenerator`].
    ///
    /// A missing API key only produces a warning: requests will fail and
    /// the advisor shows its offline text.
    async fn create(
        &self,
        config: &AdvisorConfig,
    ) -> Result<Box<dyn TextGenerator>, AdvisoryError> {
        if config.model.trim().is_empty() {
            return Err(AdvisoryError::Configuration(
                "gemini backend requires a model name".to_string(),
            ));
        }
        if config.api_key.is_none() {
            warn!("no Gemini API key configured; advice requests will fail");
        }

        Ok(Box::new(GeminiGenerator::new(config)))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn creates_generator_without_key() {
        let generator = GeminiFactory
            .create(&AdvisorConfig::default())
            .await
            .expect("factory should not require a key");

        assert_eq!(generator.backend_name(), "gemini");
    }

    #[tokio::test]
    async fn rejects_blank_model() {
        let config = AdvisorConfig {
            model: "  ".to_string(),
            ..AdvisorConfig::default()
        };

        assert!(matches!(
            GeminiFactory.create(&config).await,
            Err(AdvisoryError::Configuration(_))
        ));
    }
}
