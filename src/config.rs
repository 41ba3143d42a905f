//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::GraphModel;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display help on startup
    pub show_help_on_startup: bool,
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Default lifetime of toast notifications in milliseconds
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

/// Default toast lifetime (2 seconds)
const fn default_toast_duration_ms() -> u64 {
    2000
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: true,
            theme_mode: ThemeMode::default(),
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

/// Map source configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MapConfig {
    /// Custom map file (TOML). The built-in reference map is used when unset.
    pub path: Option<PathBuf>,
}

impl MapConfig {
    /// Loads the configured map, or the reference map when none is set.
    pub fn load_graph(&self) -> Result<GraphModel> {
        match &self.path {
            Some(path) => GraphModel::load(path),
            None => Ok(GraphModel::reference()),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive (overridden by `RUST_LOG`)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/MapColoring/config.toml`
/// - macOS: `~/Library/Application Support/MapColoring/config.toml`
/// - Windows: `%APPDATA%\MapColoring\config.toml`
///
/// # Validation
///
/// - `map.path` must exist if set
/// - `ui.toast_duration_ms` must be positive
/// - `logging.level` must not be empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Map source
    #[serde(default)]
    pub map: MapConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
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

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/MapColoring/`
    /// - macOS: `~/Library/Application Support/MapColoring/`
    /// - Windows: `%APPDATA%\MapColoring\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("MapColoring");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`, falling back to defaults when it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if let Some(map_path) = &self.map.path {
            if !map_path.exists() {
                anyhow::bail!("Map file does not exist: {}", map_path.display());
            }
        }

        if self.ui.toast_duration_ms == 0 {
            anyhow::bail!("ui.toast_duration_ms must be greater than zero");
        }

        if self.logging.level.trim().is_empty() {
            anyhow::bail!("logging.level must not be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert!(config.ui.show_help_on_startup);
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert_eq!(config.ui.toast_duration_ms, 2000);
        assert_eq!(config.map.path, None);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Light;
        config.ui.toast_duration_ms = 3500;
        config.logging.level = "debug".to_string();
        config.save_to(&path).unwrap();

        assert!(!path.with_extension("toml.tmp").exists());
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[ui]\nshow_help_on_startup = false\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(!config.ui.show_help_on_startup);
        assert_eq!(config.ui.toast_duration_ms, 2000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_validate_missing_map_file() {
        let mut config = Config::new();
        config.map.path = Some(PathBuf::from("/definitely/not/here.toml"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_toast_duration() {
        let mut config = Config::new();
        config.ui.toast_duration_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_map_config_loads_custom_graph() {
        let temp_dir = TempDir::new().unwrap();
        let map_path = temp_dir.path().join("map.toml");
        fs::write(
            &map_path,
            "regions = [\"A\"]\n\n[[palette]]\nhex = \"#ff0000\"\n",
        )
        .unwrap();

        let map = MapConfig {
            path: Some(map_path),
        };
        let graph = map.load_graph().unwrap();
        assert_eq!(graph.regions().len(), 1);

        let reference = MapConfig::default().load_graph().unwrap();
        assert_eq!(reference, GraphModel::reference());
    }
}
