//! Application settings (API endpoint, retry tuning, data directory).
//!
//! The settings file is `~/.config/dextrack/settings.toml`. Every field is
//! optional; environment variables override the file:
//!
//! - `DEXTRACK_API_BASE` → `api.base_url`
//! - `DEXTRACK_DATA_DIR` → `storage.data_dir`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Canonical path to the settings file: `~/.config/dextrack/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("dextrack").join("settings.toml")
}

/// Default location for persisted state: `~/.local/share/dextrack` (or the
/// platform equivalent).
pub fn default_data_dir() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("dextrack")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub storage: StorageSettings,
}

/// Remote API and fetch-layer tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-attempt timeout for entry requests
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Per-attempt timeout for the (larger) name index request
    #[serde(default = "default_index_timeout_ms")]
    pub index_timeout_ms: u64,

    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Linear backoff base: the wait after attempt `i` is `backoff_ms * (i + 1)`
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u64,

    /// Maximum concurrent requests when fetching many entries
    #[serde(default = "default_fan_out")]
    pub fan_out: usize,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_index_timeout_ms() -> u64 {
    15_000
}

fn default_max_attempts() -> u32 {
    3
}

fn default_backoff_ms() -> u64 {
    1_000
}

fn default_fan_out() -> usize {
    16
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            index_timeout_ms: default_index_timeout_ms(),
            max_attempts: default_max_attempts(),
            backoff_ms: default_backoff_ms(),
            fan_out: default_fan_out(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Directory for the response cache and collection. Defaults to
    /// [`default_data_dir`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Settings {
    /// Load settings from the default path plus environment overrides.
    ///
    /// A missing file yields defaults; an unreadable or invalid one is
    /// reported with a warning and also yields defaults.
    pub fn load() -> Self {
        let path = settings_path();
        let settings = if path.exists() {
            match Self::load_from(&path) {
                Ok(s) => s,
                Err(e) => {
                    log::warn!("Ignoring {}: {e}", path.display());
                    Self::default()
                }
            }
        } else {
            Self::default()
        };
        settings.with_env_overrides(|name| std::env::var(name).ok())
    }

    /// Parse a specific settings file.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml_string(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Apply environment overrides using `lookup` to read variables.
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(base) = lookup("DEXTRACK_API_BASE").filter(|v| !v.trim().is_empty()) {
            self.api.base_url = base.trim().to_string();
        }
        if let Some(dir) = lookup("DEXTRACK_DATA_DIR").filter(|v| !v.trim().is_empty()) {
            self.storage.data_dir = Some(PathBuf::from(dir.trim()));
        }
        self
    }

    /// Resolved data directory.
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(default_data_dir)
    }

    /// Write settings atomically to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let serialized = self.to_toml_string()?;
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, &serialized)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
