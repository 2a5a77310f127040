// SPDX-License-Identifier: MPL-2.0
//! Overlay configuration and its `settings.toml` persistence.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[playback]` - Values seeded into the playback state, plus surface props
//! - `[controls]` - Fullscreen toggling, inactivity delay, timer mode, title
//!
//! Every field has a default, so a partial (or empty) file is valid.
//!
//! # Examples
//!
//! ```no_run
//! use playback_overlay::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.controls.inactivity_delay_ms = 5_000;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Initial playback values and surface props.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Initial volume (0.0 to 1.0).
    pub volume: f32,
    /// Start paused.
    pub paused: bool,
    /// Start muted.
    pub muted: bool,
    /// Initial playback rate.
    pub rate: f64,
    /// Loop the source when it ends (surface prop).
    pub repeat: bool,
    /// Keep playing while the host is backgrounded (surface prop).
    pub play_in_background: bool,
    /// Keep playing while the host is inactive (surface prop).
    pub play_when_inactive: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: DEFAULT_VOLUME,
            paused: false,
            muted: false,
            rate: DEFAULT_PLAYBACK_RATE,
            repeat: false,
            play_in_background: false,
            play_when_inactive: false,
        }
    }
}

/// Controls behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ControlsConfig {
    /// Whether double tap and the fullscreen button may toggle fullscreen.
    pub fullscreen_toggle: bool,
    /// Start in fullscreen (cover) mode.
    pub fullscreen: bool,
    /// Delay before visible controls auto-hide.
    pub inactivity_delay_ms: u64,
    /// Show remaining time instead of elapsed time.
    pub show_time_remaining: bool,
    /// Title shown in the bottom bar; hidden when empty.
    pub title: String,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            fullscreen_toggle: true,
            fullscreen: false,
            inactivity_delay_ms: DEFAULT_INACTIVITY_DELAY_MS,
            show_time_remaining: true,
            title: String::new(),
        }
    }
}

/// Complete configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub playback: PlaybackConfig,
    pub controls: ControlsConfig,
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message key explaining what went wrong.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to load config, using defaults");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
