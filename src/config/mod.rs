// SPDX-License-Identifier: MPL-2.0
//! This module handles the editor's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[editor]` - Canvas budget, history capacity, crop sizing
//! - `[export]` - Where the host application writes saved images
//! - `[logging]` - Default `tracing` filter
//!
//! # Path Resolution
//!
//! 1. Explicit directory passed to [`load_from_dir`] (CLI `--config-dir`)
//! 2. `ICED_CROP_CONFIG_DIR` environment variable
//! 3. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_crop::config;
//!
//! let (mut config, _warning) = config::load();
//! config.editor.history_capacity = Some(100);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedCrop";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_CROP_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Editor behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorConfig {
    /// Fraction of the window width the canvas may use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport_width_fraction: Option<f32>,

    /// Fraction of the window height the canvas may use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport_height_fraction: Option<f32>,

    /// Number of undo snapshots kept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_capacity: Option<usize>,

    /// Minimum crop box side length in canvas pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_crop_size: Option<f32>,

    /// Corner handle size (and hit tolerance) in canvas pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_handle_size: Option<f32>,

    /// Aspect ratio used when neither template nor image provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_aspect: Option<String>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            viewport_width_fraction: Some(DEFAULT_VIEWPORT_WIDTH_FRACTION),
            viewport_height_fraction: Some(DEFAULT_VIEWPORT_HEIGHT_FRACTION),
            history_capacity: Some(DEFAULT_HISTORY_CAPACITY),
            min_crop_size: Some(DEFAULT_MIN_CROP_SIZE),
            crop_handle_size: Some(DEFAULT_CROP_HANDLE_SIZE),
            fallback_aspect: Some(FALLBACK_ASPECT.to_string()),
        }
    }
}

/// Export settings used by the host application.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExportConfig {
    /// Directory where saved images are written. Defaults to the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

/// Logging settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Resolved, range-checked editor settings.
///
/// Values outside the supported range fall back to their defaults so a
/// hand-edited config cannot produce a degenerate editor.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSettings {
    pub viewport_width_fraction: f32,
    pub viewport_height_fraction: f32,
    pub history_capacity: usize,
    pub min_crop_size: f32,
    pub crop_handle_size: f32,
    pub fallback_aspect: String,
}

impl Default for EditorSettings {
    fn default() -> Self {
        EditorConfig::default().resolve()
    }
}

impl EditorConfig {
    #[must_use]
    pub fn resolve(&self) -> EditorSettings {
        let fraction = |value: Option<f32>, default: f32| {
            value
                .filter(|v| v.is_finite() && *v > 0.0 && *v <= 1.0)
                .unwrap_or(default)
        };
        let positive = |value: Option<f32>, default: f32| {
            value
                .filter(|v| v.is_finite() && *v > 0.0)
                .unwrap_or(default)
        };

        EditorSettings {
            viewport_width_fraction: fraction(
                self.viewport_width_fraction,
                DEFAULT_VIEWPORT_WIDTH_FRACTION,
            ),
            viewport_height_fraction: fraction(
                self.viewport_height_fraction,
                DEFAULT_VIEWPORT_HEIGHT_FRACTION,
            ),
            history_capacity: self
                .history_capacity
                .map_or(DEFAULT_HISTORY_CAPACITY, |c| {
                    c.clamp(MIN_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY)
                }),
            min_crop_size: positive(self.min_crop_size, DEFAULT_MIN_CROP_SIZE),
            crop_handle_size: positive(self.crop_handle_size, DEFAULT_CROP_HANDLE_SIZE),
            fallback_aspect: self
                .fallback_aspect
                .clone()
                .unwrap_or_else(|| FALLBACK_ASPECT.to_string()),
        }
    }
}

// =============================================================================
// Path resolution and I/O
// =============================================================================

/// Returns the config directory, honoring the environment override.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns the config together with an optional warning when the file exists
/// but could not be read or parsed (defaults are used in that case).
#[must_use]
pub fn load() -> (Config, Option<String>) {
    match config_dir() {
        Some(dir) => load_from_dir(&dir),
        None => (Config::default(), None),
    }
}

/// Loads `settings.toml` from the given directory.
#[must_use]
pub fn load_from_dir(dir: &Path) -> (Config, Option<String>) {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!("Using default settings: {err}")),
        ),
    }
}

/// Saves the configuration to the default location.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    match config_dir() {
        Some(dir) => save_to_path(config, &dir.join(CONFIG_FILE)),
        None => Ok(()),
    }
}

/// Parses a config file.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read and [`Error::Config`]
/// when it is not valid TOML for [`Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))
}

/// Writes a config file, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(|e| Error::Config(e.to_string()))?;
    fs::write(path, content)?;
    Ok(())
}
