// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from an
//! optional `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[animation]` - Rotate-in duration and easing curve
//! - `[features]` - Which parts of the showcase screen are shown
//!
//! Every key is optional; missing keys and sections take their defaults.
//!
//! # Examples
//!
//! ```no_run
//! use iced_showcase::config;
//!
//! let (config, warning) = config::load();
//! if warning.is_none() {
//!     println!("sweep lasts {:?}", config.animation.rotation_duration());
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::presentation::Easing;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Rotate-in animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    /// Sweep length in milliseconds.
    #[serde(
        default = "default_rotation_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub rotation_duration_ms: Option<u64>,

    /// Easing curve applied to the sweep.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            rotation_duration_ms: default_rotation_duration_ms(),
            easing: Some(Easing::default()),
        }
    }
}

impl AnimationConfig {
    /// Returns the configured sweep length, clamped to the supported range.
    #[must_use]
    pub fn rotation_duration(&self) -> Duration {
        let ms = self
            .rotation_duration_ms
            .unwrap_or(DEFAULT_ROTATION_DURATION_MS)
            .clamp(MIN_ROTATION_DURATION_MS, MAX_ROTATION_DURATION_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing.unwrap_or_default()
    }
}

/// Toggles for the sections of the showcase screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FeaturesConfig {
    /// Greeting button (also drives the rotating image).
    pub greeting: bool,
    /// Click counter with "Add 1" and "Reset All".
    pub counter: bool,
    /// Compose-email form.
    pub email_compose: bool,
    /// Rotate-in image shown by the greeting button.
    pub rotating_image: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            greeting: true,
            counter: true,
            email_compose: true,
            rotating_image: true,
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub animation: AnimationConfig,

    #[serde(default)]
    pub features: FeaturesConfig,
}

fn default_rotation_duration_ms() -> Option<u64> {
    Some(DEFAULT_ROTATION_DURATION_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional directory override.
pub fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
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
/// the default config with an i18n key describing the problem.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded config");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), "falling back to default config: {err}");
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

/// Saves the configuration to a custom directory (or the default one).
///
/// Returns the path written, or `None` when no config directory is known.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<Option<PathBuf>> {
    match get_config_path_with_override(base_dir) {
        Some(path) => {
            save_to_path(config, &path)?;
            Ok(Some(path))
        }
        None => Ok(None),
    }
}

/// Saves configuration to a specific path, creating parent directories.
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
