//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME, DEFAULT_LONG_PRESS_MS};
use crate::engine::KeyboardSettings;
use crate::models::LayoutId;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Keyboard behavior settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardConfig {
    /// Layout shown when the keyboard opens
    #[serde(default)]
    pub layout: LayoutId,
    /// Hold time before a key's accent menu opens
    #[serde(default = "default_long_press_ms")]
    pub long_press_ms: u64,
}

/// Default long-press threshold (500 ms)
fn default_long_press_ms() -> u64 {
    DEFAULT_LONG_PRESS_MS
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            layout: LayoutId::default(),
            long_press_ms: default_long_press_ms(),
        }
    }
}

impl KeyboardConfig {
    /// Engine settings derived from this configuration.
    #[must_use]
    pub fn settings(&self) -> KeyboardSettings {
        KeyboardSettings {
            long_press: Duration::from_millis(self.long_press_ms),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - `$VKBD_CONFIG_DIR/config.toml` when the variable is set
/// - Linux: `~/.config/vkbd/config.toml`
/// - macOS: `~/Library/Application Support/vkbd/config.toml`
/// - Windows: `%APPDATA%\vkbd\config.toml`
///
/// # Validation
///
/// - `long_press_ms` must be greater than zero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Keyboard behavior
    #[serde(default)]
    pub keyboard: KeyboardConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// `VKBD_CONFIG_DIR` wins over the platform directory so tests and
    /// scripts can isolate their configuration.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &std::path::Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.keyboard.long_press_ms == 0 {
            anyhow::bail!("long_press_ms must be greater than zero");
        }

        Ok(())
    }
}
