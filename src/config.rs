//! Configuration handling
//!
//! Settings are read from `config.toml` in the platform config directory.
//! Missing files and missing keys fall back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::keys::{KeySet, Platform};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Which platform's key table to use
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlatformSetting {
    /// Detect from the compile target
    #[default]
    Auto,
    Win,
    Ix,
    Mac,
}

impl PlatformSetting {
    pub fn resolve(&self) -> Platform {
        match self {
            PlatformSetting::Auto => Platform::current(),
            PlatformSetting::Win => Platform::Windows,
            PlatformSetting::Ix => Platform::Unix,
            PlatformSetting::Mac => Platform::Mac,
        }
    }
}

/// Key binding settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeysConfig {
    pub platform: PlatformSetting,

    /// Label for the Control modifier (ignored on Mac)
    pub modifier_label: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            platform: PlatformSetting::Auto,
            modifier_label: "Ctrl".to_string(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub keys: KeysConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Loads configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Returns the config directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("org", "novx", "novx-clipboard")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Loads configuration from a file, defaulting if it does not exist
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse config")
    }

    /// Writes the configuration, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }

    pub fn platform(&self) -> Platform {
        self.keys.platform.resolve()
    }

    /// Key set for the configured platform and modifier label
    pub fn key_set(&self) -> KeySet {
        KeySet::for_platform(self.platform(), &self.keys.modifier_label)
    }
}
