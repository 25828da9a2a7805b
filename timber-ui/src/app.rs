//! Wiring between configuration and the advisory backends.

use timber_core::{Advisor, AdvisorConfig, GeneratorRegistry};
use timber_gemini::GeminiFactory;

/// Registry with every backend compiled into this binary.
pub fn build_registry() -> GeneratorRegistry {
    let mut registry = GeneratorRegistry::new();
    registry.register(Box::new(GeminiFactory));
    registry
}

/// Resolves `config.backend` and wraps the generator in an [`Advisor`].
pub async fn build_advisor(config: &AdvisorConfig) -> anyhow::Result<Advisor> {
    let generator = build_registry().create(config).await?;
    Ok(Advisor::new(generator))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use timber_core::advisory::OFFLINE_ADVICE_FALLBACK;

    use super::*;

    #[test]
    fn registry_knows_gemini() {
        assert_eq!(build_registry().available_backends(), vec!["gemini"]);
    }

    #[tokio::test]
    async fn default_config_builds_gemini_advisor() {
        let advisor = build_advisor(&AdvisorConfig::default()).await.unwrap();

        assert_eq!(advisor.backend_name(), "gemini");
    }

    #[tokio::test]
    async fn unknown_backend_is_an_error() {
        let config = AdvisorConfig {
            backend: "carrier-pigeon".to_string(),
            ..AdvisorConfig::default()
        };

        let error = build_advisor(&config).await.err().expect("should fail");

        assert!(error.to_string().contains("carrier-pigeon"));
    }

    #[tokio::test]
    async fn advisor_without_key_reports_offline() {
        let advisor = build_advisor(&AdvisorConfig::default()).await.unwrap();

        assert_eq!(advisor.request_advice(12.5).await, OFFLINE_ADVICE_FALLBACK);
    }
}
