//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::config::BlobConfig;
use super::palette::{self, ColorScheme};

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Last saved showcase state
    #[serde(default)]
    pub showcase: ShowcaseSettings,
}

/// Display and interface settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
    /// Application language
    pub language: String,
    /// Pause every blob and drop the frame subscription
    #[serde(default)]
    pub reduce_motion: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            language: "en".to_string(),
            reduce_motion: false,
        }
    }
}

/// Showcase state restored on the next launch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowcaseSettings {
    #[serde(default)]
    pub config: BlobConfig,
    #[serde(default)]
    pub scheme: ColorScheme,
    #[serde(default = "default_custom_colors")]
    pub custom_colors: Vec<String>,
}

fn default_custom_colors() -> Vec<String> {
    palette::to_owned(palette::PURPLE)
}

impl Default for ShowcaseSettings {
    fn default() -> Self {
        Self {
            config: BlobConfig::default(),
            scheme: ColorScheme::Purple,
            custom_colors: default_custom_colors(),
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "morphblob", "Morphblob")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| match Self::load_from_file(&path) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    tracing::debug!("Using default settings: {}", e);
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::gradient::GradientType;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("morphblob-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn round_trips_through_file() {
        let path = temp_file("round_trip/settings.json");
        let mut settings = Settings::default();
        settings.display.reduce_motion = true;
        settings.showcase.scheme = ColorScheme::Custom;
        settings.showcase.custom_colors = vec!["#000000".into(), "#ffffff".into()];
        settings.showcase.config = BlobConfig::default()
            .size(320.0)
            .gradient_type(GradientType::Radial);

        settings.save_to_file(&path).expect("save should create parent dirs");
        let loaded = Settings::load_from_file(&path).expect("load");
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = Settings::load_from_file(&temp_file("does/not/exist.json"));
        assert!(matches!(result, Err(SettingsError::Io(_))));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let path = temp_file("malformed/settings.json");
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, "{ not json").unwrap();
        let result = Settings::load_from_file(&path);
        assert!(matches!(result, Err(SettingsError::Parse(_))), "{:?}", result);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"display": {"dark_mode": false, "language": "zh"}}"#)
                .unwrap();
        assert!(!settings.display.dark_mode);
        assert!(!settings.display.reduce_motion);
        assert_eq!(settings.showcase, ShowcaseSettings::default());
    }
}
