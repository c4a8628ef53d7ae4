//! `AppConfig` struct and TOML read/write.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Top-level application configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Output defaults.
    #[serde(default)]
    pub output: OutputConfig,
    /// Response cache settings.
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Output defaults, overridable per invocation via CLI flags.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Format used when `--output` is not given.
    #[serde(default)]
    pub format: OutputFormat,
    /// Result limit used when `--limit` is not given.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            limit: default_limit(),
        }
    }
}

/// Response cache settings.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheConfig {
    /// Whether responses are cached at all.
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,
    /// Cache entry time-to-live in seconds.
    #[serde(default = "default_cache_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            ttl_secs: default_cache_ttl_secs(),
        }
    }
}

/// Default result limit.
const fn default_limit() -> i64 {
    25
}

/// Caching defaults to enabled.
const fn default_cache_enabled() -> bool {
    true
}

/// Default cache TTL (5 minutes).
const fn default_cache_ttl_secs() -> u64 {
    300
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Saves config to a TOML file, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config to TOML")?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
    }
}
