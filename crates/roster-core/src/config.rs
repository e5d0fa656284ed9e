//! Configuration for the roster client.
//!
//! Settings come from an optional YAML file with defaults for everything,
//! then environment overrides on top. Only the catalog endpoint and the
//! per-request timeout are configurable; the fetch contract itself has no
//! knobs.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::RosterError;

/// Catalog endpoint used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

const ENV_BASE_URL: &str = "ROSTER_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the character catalog.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub api: ApiConfig,
}

impl RosterConfig {
    /// Load configuration from a YAML file, then apply environment
    /// overrides.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let mut config: RosterConfig = serde_yaml::from_str(&raw)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Defaults plus environment overrides, for running without a file.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            if !url.is_empty() {
                self.api.base_url = url;
            }
        }
    }

    fn validate(&self) -> Result<(), RosterError> {
        if self.api.base_url.is_empty() {
            return Err(RosterError::Config("api.base_url must not be empty".to_string()));
        }
        if self.api.timeout_secs == 0 {
            return Err(RosterError::Config("api.timeout_secs must be at least 1".to_string()));
        }
        Ok(())
    }
}
