//! Persisted desktop settings
//!
//! A small JSON file under the platform config directory. Loading is
//! best-effort: a missing or unreadable file just yields the defaults,
//! so first launch and corrupted installs both work.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no config directory available on this platform")]
    NoConfigDir,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub dark_mode: bool,
    /// Coordinate the weather widget reports for.
    pub latitude: f64,
    pub longitude: f64,
    /// Label shown next to the temperature.
    pub place: String,
    /// Name shown in the user menu.
    pub user_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            // Florianópolis, home base.
            latitude: -27.5954,
            longitude: -48.548,
            place: "Florianópolis".to_owned(),
            user_name: "Ana Silveira".to_owned(),
        }
    }
}

impl Settings {
    fn path() -> Result<PathBuf, ConfigError> {
        let dirs = ProjectDirs::from("dev", "anasilveira", "foliodesk")
            .ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("settings.json"))
    }

    /// Load settings, falling back to defaults on any failure.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(settings) => settings,
            Err(err) => {
                tracing::debug!(%err, "settings not loaded, using defaults");
                Self::default()
            }
        }
    }

    fn load() -> Result<Self, ConfigError> {
        let text = fs::read_to_string(Self::path()?)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Write settings to disk, creating the config directory if needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_floripa() {
        let s = Settings::default();
        assert!(!s.dark_mode);
        assert_eq!(s.place, "Florianópolis");
        assert!((s.latitude - -27.5954).abs() < 1e-9);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let s: Settings = serde_json::from_str(r#"{"dark_mode": true}"#).unwrap();
        assert!(s.dark_mode);
        assert_eq!(s.user_name, "Ana Silveira");
    }

    #[test]
    fn round_trips_through_json() {
        let mut s = Settings::default();
        s.dark_mode = true;
        s.place = "Lisboa".to_owned();
        let text = serde_json::to_string(&s).unwrap();
        let back: Settings = serde_json::from_str(&text).unwrap();
        assert!(back.dark_mode);
        assert_eq!(back.place, "Lisboa");
    }
}
