//! Player settings loaded from a RON file.
//!
//! The core only reads these; the settings screen that writes the file is
//! an external collaborator. Any load failure falls back to defaults.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Path of the persisted settings file.
pub const SETTINGS_PATH: &str = "assets/settings.ron";

/// Frame-rate options the settings screen offers.
pub const FPS_OPTIONS: [u32; 3] = [60, 120, 240];

/// Default target frame rate.
pub const DEFAULT_FPS: u32 = 60;

/// Errors that can occur when loading the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// File could not be read.
    #[error("Failed to read settings file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in settings file '{path}': {details}")]
    ParseError { path: String, details: String },
}

/// Persisted player settings, read at startup.
#[derive(Resource, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Settings {
    /// Aimed skills target the nearest living enemy instead of the pointer.
    pub auto_aim: bool,
    /// Ready non-movement skills fire automatically every frame.
    pub auto_attack: bool,
    /// Target frame rate; must be one of `FPS_OPTIONS`.
    pub fps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_aim: true,
            auto_attack: true,
            fps: DEFAULT_FPS,
        }
    }
}

impl Settings {
    /// Load settings from a RON file, validating the fps option.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path).map_err(|e| SettingsError::ReadError {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;
        let mut settings: Settings =
            ron::from_str(&contents).map_err(|e| SettingsError::ParseError {
                path: path.display().to_string(),
                details: e.to_string(),
            })?;
        if !FPS_OPTIONS.contains(&settings.fps) {
            warn!(
                "Unsupported fps setting {}, falling back to {}",
                settings.fps, DEFAULT_FPS
            );
            settings.fps = DEFAULT_FPS;
        }
        Ok(settings)
    }
}

/// Load the settings file into the resource, keeping defaults on failure.
pub fn load_settings(mut settings: ResMut<Settings>) {
    match Settings::load(Path::new(SETTINGS_PATH)) {
        Ok(loaded) => {
            info!(
                "Loaded settings: auto_aim={} auto_attack={} fps={}",
                loaded.auto_aim, loaded.auto_attack, loaded.fps
            );
            *settings = loaded;
        }
        Err(e) => {
            warn!("Using default settings: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_settings_ron() {
        let settings: Settings =
            ron::from_str("(auto_aim: false, auto_attack: true, fps: 120)").unwrap();
        assert!(!settings.auto_aim);
        assert!(settings.auto_attack);
        assert_eq!(settings.fps, 120);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let settings: Settings = ron::from_str("(auto_aim: false)").unwrap();
        assert!(settings.auto_attack);
        assert_eq!(settings.fps, DEFAULT_FPS);
    }
}
