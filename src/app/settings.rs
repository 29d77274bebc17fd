use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{AppError, Result};

/// The applied color scheme. Serialized as `"light"` / `"dark"` in the
/// settings file, so hand-edited configs stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_light(self) -> bool {
        self == ThemePreference::Light
    }

    /// Glyph shown on the theme toggle button: sun while light is applied,
    /// moon while dark is applied.
    pub fn glyph(self) -> &'static str {
        match self {
            ThemePreference::Light => "\u{2600}",
            ThemePreference::Dark => "\u{263E}",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_theme")]
    pub theme: ThemePreference,
}

fn default_theme() -> ThemePreference {
    ThemePreference::Dark
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("foliodesk");
        path.push("settings.json");
        path
    }

    /// Flip the theme and persist the new value in one step.
    pub fn toggle_theme(&mut self) -> Result<()> {
        self.theme = self.theme.toggled();
        self.save()
            .map_err(|e| AppError::Settings(format!("could not persist theme: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme, ThemePreference::Dark);
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings {
            theme: ThemePreference::Light,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_theme_wire_values_are_lowercase() {
        let json = serde_json::to_string(&AppSettings {
            theme: ThemePreference::Light,
        })
        .unwrap();
        assert!(json.contains("\"light\""));

        let json = serde_json::to_string(&AppSettings::default()).unwrap();
        assert!(json.contains("\"dark\""));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        // Old or hand-trimmed config without the theme field
        let settings: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.theme, ThemePreference::Dark);
    }

    #[test]
    fn test_toggled_parity() {
        let start = ThemePreference::Dark;
        assert_eq!(start.toggled(), ThemePreference::Light);
        assert_eq!(start.toggled().toggled(), start);
    }

    #[test]
    fn test_glyph_matches_theme() {
        assert_eq!(ThemePreference::Light.glyph(), "\u{2600}");
        assert_eq!(ThemePreference::Dark.glyph(), "\u{263E}");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = AppSettings {
            theme: ThemePreference::Light,
        };
        settings.save_to(&path).unwrap();

        let loaded = AppSettings::load_from(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = AppSettings::load_from(&dir.path().join("absent.json"));
        assert_eq!(loaded, AppSettings::default());
    }

    #[test]
    fn test_load_corrupt_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }
}
