//! Immutable runtime configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_UPLOAD_INTERVAL_MS: u64 = 30_000;
const DEFAULT_REFRESH_INTERVAL_MS: u64 = 2_000;

/// Runtime configuration, fixed at startup.
///
/// Loaded from an optional YAML file with `TASKRELAY_*` environment
/// overrides on top, then passed by value into the components that need it.
/// Nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Collector endpoint for snapshot uploads. Empty disables uploading.
    pub upload_url: String,
    /// Milliseconds between timer-triggered passes.
    pub upload_interval_ms: u64,
    /// Master switch for the upload path.
    pub enabled: bool,
    /// Milliseconds between page-source refreshes in `run`.
    pub refresh_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upload_url: String::new(),
            upload_interval_ms: DEFAULT_UPLOAD_INTERVAL_MS,
            enabled: true,
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
        }
    }
}

impl Config {
    /// Loads configuration: the YAML file when given, defaults otherwise,
    /// then environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or an override
    /// variable does not parse.
    pub fn load(path: Option<&Path>) -> Result<Self, String> {
        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;
                serde_yaml::from_str(&content)
                    .map_err(|e| format!("Failed to parse config file {}: {e}", path.display()))?
            }
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<(), String> {
        if let Ok(url) = std::env::var("TASKRELAY_UPLOAD_URL") {
            self.upload_url = url;
        }
        if let Ok(raw) = std::env::var("TASKRELAY_UPLOAD_INTERVAL_MS") {
            self.upload_interval_ms =
                raw.parse().map_err(|e| format!("Invalid TASKRELAY_UPLOAD_INTERVAL_MS {raw:?}: {e}"))?;
        }
        if let Ok(raw) = std::env::var("TASKRELAY_ENABLED") {
            self.enabled =
                raw.parse().map_err(|e| format!("Invalid TASKRELAY_ENABLED {raw:?}: {e}"))?;
        }
        if let Ok(raw) = std::env::var("TASKRELAY_REFRESH_INTERVAL_MS") {
            self.refresh_interval_ms = raw
                .parse()
                .map_err(|e| format!("Invalid TASKRELAY_REFRESH_INTERVAL_MS {raw:?}: {e}"))?;
        }
        Ok(())
    }

    /// Whether uploads can actually happen: the flag is on and a collector
    /// URL is configured.
    #[must_use]
    pub fn upload_enabled(&self) -> bool {
        self.enabled && !self.upload_url.is_empty()
    }

    /// Timer period between passes.
    #[must_use]
    pub fn upload_interval(&self) -> Duration {
        Duration::from_millis(self.upload_interval_ms)
    }

    /// Period between page-source refreshes.
    #[must_use]
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }
}
