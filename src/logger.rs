//! Logging setup.
//!
//! Code logs through the `log` macros. [`Logger::install`] routes those records
//! through `fern` into an in-memory buffer (rendered by the log panel) and,
//! when enabled in the config, into a log file. Nothing goes to stdout since
//! the terminal belongs to the UI.

use crate::config::LoggingConfig;
use crate::constants::MAX_LOG_ENTRIES;
use anyhow::{Context, Result};
use chrono::Local;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Shared log buffer that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    level: log::LevelFilter,
    file_path: Option<PathBuf>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            level: log::LevelFilter::Info,
            file_path: None,
        }
    }

    /// Build a logger from the `[logging]` config section
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let level = config.level_filter()?;
        let file_path = if config.enabled {
            let path = Self::get_log_file_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            Some(path)
        } else {
            None
        };

        Ok(Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            level,
            file_path,
        })
    }

    /// Install this logger as the global `log` backend
    pub fn install(&self) -> Result<()> {
        let buffer = self.clone();
        let mut dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    Local::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(self.level)
            // reqwest/hyper internals are noise at debug
            .level_for("hyper", log::LevelFilter::Warn)
            .level_for("hyper_util", log::LevelFilter::Warn)
            .level_for("reqwest", log::LevelFilter::Warn)
            .level_for("rustls", log::LevelFilter::Warn)
            .chain(fern::Output::call(move |record| buffer.log(record.args().to_string())));

        if let Some(path) = &self.file_path {
            let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(file);
        }

        dispatch
            .apply()
            .map_err(|e| anyhow::anyhow!("A global logger is already installed: {}", e))?;
        Ok(())
    }

    /// Add a log entry, dropping the oldest one past the buffer limit
    pub fn log(&self, message: String) {
        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() == MAX_LOG_ENTRIES {
                logs.pop_front();
            }
            logs.push_back(message);
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Whether records are also written to a file
    pub fn is_enabled(&self) -> bool {
        self.file_path.is_some()
    }

    pub fn level(&self) -> log::LevelFilter {
        self.level
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// Location of the log file in the user data directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("rollcall").join("rollcall.log"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
