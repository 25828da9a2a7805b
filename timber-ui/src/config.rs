//! Configuration for the TimberTrack binary.
//!
//! Values come from three places, later ones winning:
//! 1. Built-in defaults.
//! 2. An optional TOML file passed with `--config`.
//! 3. Command-line flags.
//!
//! ```toml
//! [advisor]
//! backend = "gemini"
//! model = "gemini-3-flash-preview"
//! temperature = 0.7
//! api_key_env = "GEMINI_API_KEY"
//!
//! [logging]
//! level = "debug"
//! file = "timbertrack.log"
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use timber_core::AdvisorConfig;
use timber_core::advisory::factory::{
    DEFAULT_BACKEND, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};

/// Environment variable consulted for the API key by default.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Checked when the configured variable is unset.
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub advisor: AdvisorSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdvisorSection {
    pub backend: String,
    pub model: String,
    pub endpoint: String,
    pub temperature: f32,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
}

impl Default for AdvisorSection {
    fn default() -> Self {
        Self {
            backend: DEFAULT_BACKEND.to_string(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    /// Any `EnvFilter` directive; `RUST_LOG` applies when unset.
    pub level: Option<String>,
    /// Append log records to this file.
    pub file: Option<PathBuf>,
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub backend: Option<String>,
    pub model: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Reads settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults, or the contents of `path` when one is given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn apply_overrides(
        mut self,
        overrides: CliOverrides,
    ) -> Self {
        if let Some(backend) = overrides.backend {
            self.advisor.backend = backend;
        }
        if let Some(model) = overrides.model {
            self.advisor.model = model;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = Some(level);
        }
        if let Some(file) = overrides.log_file {
            self.logging.file = Some(file);
        }
        self
    }

    /// Builds the advisory configuration, looking the API key up through
    /// `lookup` (normally [`std::env::var`]).
    pub fn advisor_config(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> AdvisorConfig {
        let api_key = lookup(&self.advisor.api_key_env)
            .or_else(|| lookup(FALLBACK_API_KEY_ENV))
            .filter(|key| !key.trim().is_empty());

        AdvisorConfig {
            backend: self.advisor.backend.clone(),
            model: self.advisor.model.clone(),
            endpoint: self.advisor.endpoint.clone(),
            temperature: self.advisor.temperature,
            api_key,
        }
    }
}

/// [`Settings::advisor_config`] lookup backed by the process environment.
pub fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
