use std::collections::HashMap;

use async_trait::async_trait;

use super::{AdvisoryError, TextGenerator};

/// Default text-generation backend.
pub const DEFAULT_BACKEND: &str = "gemini";
/// Default model requested from the backend.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
/// Default base URL of the Gemini REST API.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Backend-agnostic advisory configuration.
///
/// `backend` must match the [`GeneratorFactory::backend_name`] of a
/// registered factory. The remaining fields are forwarded to that factory;
/// a backend is free to ignore the ones it has no use for.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorConfig {
    /// Lowercase identifier matching a registered factory (e.g. `"gemini"`).
    pub backend: String,
    pub model: String,
    /// Base URL of the service.
    pub endpoint: String,
    pub temperature: f32,
    /// Credential for the service. `None` is not an error here; the
    /// backend reports it when a request is attempted.
    pub api_key: Option<String>,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            backend: DEFAULT_BACKEND.to_string(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            api_key: None,
        }
    }
}

/// One implementation per text-generation backend. Each backend crate
/// exports a unit struct implementing this trait, registered with a
/// [`GeneratorRegistry`] at startup.
#[async_trait]
pub trait GeneratorFactory: Send + Sync {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    /// Build a ready-to-use generator from `config`.
    async fn create(
        &self,
        config: &AdvisorConfig,
    ) -> Result<Box<dyn TextGenerator>, AdvisoryError>;
}

/// Registry of [`GeneratorFactory`] instances, keyed by backend name.
pub struct GeneratorRegistry {
    factories: HashMap<&'static str, Box<dyn GeneratorFactory>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a backend factory, replacing any factory with the same name.
    pub fn register(
        &mut self,
        factory: Box<dyn GeneratorFactory>,
    ) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Names of every registered backend, sorted alphabetically.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch to the factory that matches `config.backend`.
    ///
    /// # Errors
    /// * [`AdvisoryError::Configuration`] when no factory is registered for
    ///   the requested backend name.
    /// * Any error the chosen factory itself returns.
    pub async fn create(
        &self,
        config: &AdvisorConfig,
    ) -> Result<Box<dyn TextGenerator>, AdvisoryError> {
        let factory = self
            .factories
            .get(config.backend.as_str())
            .ok_or_else(|| {
                AdvisoryError::Configuration(format!(
                    "unknown advisory backend '{}'; available: {:?}",
                    config.backend,
                    self.available_backends()
                ))
            })?;

        factory.create(config).await
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
