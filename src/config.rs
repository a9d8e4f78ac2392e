//! Configuration management for Rollcall
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS, ENV_BASE_URL, STATUS_MESSAGE_TTL,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Roster service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the roster service, e.g. "http://127.0.0.1:8000"
    pub base_url: String,
    /// Upper bound for a single request, in seconds
    pub request_timeout_secs: u64,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long status messages stay visible, in seconds
    pub status_message_secs: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in the user data directory
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            status_message_secs: STATUS_MESSAGE_TTL.as_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl UiConfig {
    pub fn status_message_ttl(&self) -> Duration {
        Duration::from_secs(self.status_message_secs)
    }
}

impl LoggingConfig {
    /// Parsed log level
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        log::LevelFilter::from_str(&self.level).map_err(|_| anyhow::anyhow!("Invalid log level '{}'", self.level))
    }
}

impl Config {
    /// Resolve the active configuration: first config file found (or
    /// defaults), then `ROLLCALL_BASE_URL`, then validation.
    pub fn load() -> Result<Self> {
        let path = Self::find_config_file();
        Self::resolve(path.as_deref(), std::env::var(ENV_BASE_URL).ok())
    }

    /// Read `path` (or start from defaults), apply the base URL override and
    /// validate the result once.
    pub fn resolve(path: Option<&Path>, base_url: Option<String>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                log::debug!("Using config file {}", path.display());
                Self::read_file(path)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides(base_url);
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a TOML config file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::read_file(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Override the base URL, typically from `ROLLCALL_BASE_URL`
    pub fn apply_env_overrides(&mut self, base_url: Option<String>) {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
    }

    /// `./rollcall.toml` wins over the per-user file
    fn find_config_file() -> Option<PathBuf> {
        let local = PathBuf::from("rollcall.toml");
        let per_user = Self::get_default_config_path().ok();

        std::iter::once(local).chain(per_user).find(|candidate| candidate.is_file())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.api.base_url)
            .with_context(|| format!("Invalid base_url '{}'", self.api.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("base_url must use http or https, got '{}'", url.scheme());
        }
        if url.cannot_be_a_base() {
            anyhow::bail!("base_url '{}' cannot carry a path", self.api.base_url);
        }

        if !(1..=300).contains(&self.api.request_timeout_secs) {
            anyhow::bail!(
                "request_timeout_secs must be between 1 and 300, got {}",
                self.api.request_timeout_secs
            );
        }

        if !(1..=60).contains(&self.ui.status_message_secs) {
            anyhow::bail!(
                "status_message_secs must be between 1 and 60, got {}",
                self.ui.status_message_secs
            );
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Write the defaults to `path` as a TOML file, creating parent directories
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        let body = toml::to_string_pretty(&Self::default()).context("Failed to serialize default config")?;
        let contents = format!(
            "# Rollcall Configuration File\n# Generated on {}\n# {} overrides [api].base_url\n\n{}",
            chrono::Local::now().format("%Y-%m-%d"),
            ENV_BASE_URL,
            body
        );

        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }
        std::fs::write(path, contents).with_context(|| format!("Failed to write config file: {}", path.display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.display());
        Ok(())
    }

    /// Per-user config directory (`$XDG_CONFIG_HOME/rollcall`)
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("rollcall"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
