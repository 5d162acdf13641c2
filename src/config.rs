//! Runtime configuration.
//!
//! Settings are layered from an optional file and `TASKBOARD_*` environment
//! variables (nested keys separated by `__`, for example
//! `TASKBOARD_BACKEND__MODE=remote`). Only one backend is active at a time.

use crate::board::adapters::memory::{
    DEFAULT_MAX_LATENCY_MS, DEFAULT_MIN_LATENCY_MS, SimulatedLatency,
};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Prefix of environment variables read by [`Settings::load`].
pub const ENV_PREFIX: &str = "TASKBOARD";

/// Errors raised while loading or validating settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error(transparent)]
    Source(#[from] config::ConfigError),

    /// Remote mode was selected without a `backend.remote` section.
    #[error("backend mode is 'remote' but no remote settings were provided")]
    MissingRemoteSettings,

    /// A setting holds an unusable value.
    #[error("invalid setting '{key}': {reason}")]
    Invalid {
        /// Dotted setting key.
        key: &'static str,
        /// Description of the problem.
        reason: &'static str,
    },
}

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Backend selection.
    #[serde(default)]
    pub backend: BackendSettings,
}

/// Which backend serves the entity services.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendMode {
    /// In-memory collections seeded from fixtures.
    #[default]
    Local,
    /// The hosted record store.
    Remote,
}

/// Backend section of the settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BackendSettings {
    /// Selected backend.
    #[serde(default)]
    pub mode: BackendMode,
    /// Options for the in-memory backend.
    #[serde(default)]
    pub local: LocalSettings,
    /// Options for the hosted record store.
    #[serde(default)]
    pub remote: Option<RemoteSettings>,
}

/// Options for the in-memory backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocalSettings {
    /// Lower bound of the simulated round trip.
    #[serde(default = "default_min_latency_ms")]
    pub latency_min_ms: u64,
    /// Upper bound of the simulated round trip.
    #[serde(default = "default_max_latency_ms")]
    pub latency_max_ms: u64,
    /// Whether to start from the bundled demo data.
    #[serde(default = "default_seed_fixtures")]
    pub seed_fixtures: bool,
}

const fn default_min_latency_ms() -> u64 {
    DEFAULT_MIN_LATENCY_MS
}

const fn default_max_latency_ms() -> u64 {
    DEFAULT_MAX_LATENCY_MS
}

const fn default_seed_fixtures() -> bool {
    true
}

impl Default for LocalSettings {
    fn default() -> Self {
        Self {
            latency_min_ms: DEFAULT_MIN_LATENCY_MS,
            latency_max_ms: DEFAULT_MAX_LATENCY_MS,
            seed_fixtures: true,
        }
    }
}

impl LocalSettings {
    /// Returns the configured latency range.
    #[must_use]
    pub const fn latency(&self) -> SimulatedLatency {
        SimulatedLatency::between_millis(self.latency_min_ms, self.latency_max_ms)
    }
}

/// Connection details for the hosted record store.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteSettings {
    /// Base URL of the record API.
    pub base_url: String,
    /// Hosted project identifier.
    pub project_id: String,
    /// Public API key.
    pub public_key: String,
}

impl std::fmt::Debug for RemoteSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteSettings")
            .field("base_url", &self.base_url)
            .field("project_id", &self.project_id)
            .field("public_key", &"<redacted>")
            .finish()
    }
}

/// Validated backend choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// Serve from memory.
    Local(LocalSettings),
    /// Serve from the hosted record store.
    Remote(RemoteSettings),
}

impl Settings {
    /// Loads settings from an optional file overlaid with environment
    /// variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Source`] when the file is missing or any value
    /// cannot be deserialized.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(file) = path {
            builder = builder.add_source(config::File::from(file));
        }
        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;
        Ok(settings.try_deserialize::<Self>()?)
    }

    /// Parses settings from TOML text, ignoring the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Source`] when the text is not valid settings.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()?;
        Ok(settings.try_deserialize::<Self>()?)
    }

    /// Resolves the selected backend and checks its options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRemoteSettings`] when remote mode lacks
    /// connection details, or [`ConfigError::Invalid`] when they are blank.
    pub fn backend(&self) -> Result<Backend, ConfigError> {
        match self.backend.mode {
            BackendMode::Local => Ok(Backend::Local(self.backend.local.clone())),
            BackendMode::Remote => {
                let remote = self
                    .backend
                    .remote
                    .clone()
                    .ok_or(ConfigError::MissingRemoteSettings)?;
                if remote.base_url.trim().is_empty() {
                    return Err(ConfigError::Invalid {
                        key: "backend.remote.base_url",
                        reason: "must not be empty",
                    });
                }
                if remote.project_id.trim().is_empty() {
                    return Err(ConfigError::Invalid {
                        key: "backend.remote.project_id",
                        reason: "must not be empty",
                    });
                }
                Ok(Backend::Remote(remote))
            }
        }
    }
}
