//! Configuration settings for pomo.
//!
//! Settings are loaded from `~/.pomo/config.yaml`. The file provides the
//! initial timer durations and UI preferences; edits made in the running
//! app are session-local and are not written back.

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::error::PomoError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Timer durations and session count.
    pub timer: TimerSettings,
    /// UI preferences.
    pub ui: UiSettings,
}

/// Timer settings.
///
/// Values outside the valid ranges are accepted here and clamped when the
/// session machine's configuration is built from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerSettings {
    /// Work phase length in minutes.
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    /// Break phase length in minutes.
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
    /// Number of work sessions.
    #[serde(default = "default_total_sessions")]
    pub total_sessions: u32,
}

/// UI preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Play a sound cue on phase completion.
    #[serde(default = "default_true")]
    pub sound: bool,
    /// Color theme.
    #[serde(default)]
    pub theme: ThemeSetting,
}

/// Color theme setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSetting {
    /// Dark palette.
    #[default]
    Dark,
    /// Light palette.
    Light,
}

impl ThemeSetting {
    /// Flip between dark and light.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

impl std::fmt::Display for ThemeSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// Default value functions for serde
const fn default_work_minutes() -> u32 {
    25
}

const fn default_break_minutes() -> u32 {
    5
}

const fn default_total_sessions() -> u32 {
    4
}

const fn default_true() -> bool {
    true
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            break_minutes: default_break_minutes(),
            total_sessions: default_total_sessions(),
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            sound: default_true(),
            theme: ThemeSetting::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, PomoError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PomoError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomoError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            PomoError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.timer.work_minutes, 25);
        assert_eq!(config.timer.break_minutes, 5);
        assert_eq!(config.timer.total_sessions, 4);
        assert!(config.ui.sound);
        assert_eq!(config.ui.theme, ThemeSetting::Dark);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config.timer.work_minutes, 25);
        assert!(config.ui.sound);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        // Write a partial config (only some fields)
        let partial_yaml = r"
timer:
  work_minutes: 45
ui:
  theme: light
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        // Custom values should be loaded
        assert_eq!(config.timer.work_minutes, 45);
        assert_eq!(config.ui.theme, ThemeSetting::Light);
        // Defaults should be used for missing fields
        assert_eq!(config.timer.break_minutes, 5);
        assert!(config.ui.sound);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        std::fs::write(&config_path, "timer: [not, a, mapping]").unwrap();

        assert!(Config::load_from_path(&config_path).is_err());
    }

    #[test]
    fn test_theme_toggled() {
        assert_eq!(ThemeSetting::Dark.toggled(), ThemeSetting::Light);
        assert_eq!(ThemeSetting::Light.toggled(), ThemeSetting::Dark);
    }

    #[test]
    fn test_theme_display_name() {
        assert_eq!(ThemeSetting::Dark.to_string(), "Dark");
        assert_eq!(ThemeSetting::Light.to_string(), "Light");
    }
}
