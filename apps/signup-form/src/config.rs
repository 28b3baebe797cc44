//! Configuration for the sign-up form.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tui_theme::FieldOverrides;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Built-in theme name.
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Theme file that replaces the built-in theme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_file: Option<PathBuf>,
    /// Validate a field as soon as it loses focus.
    #[serde(default = "default_true")]
    pub validate_on_blur: bool,
    /// Field style overrides layered over the theme.
    #[serde(default, skip_serializing_if = "FieldOverrides::is_empty")]
    pub field: FieldOverrides,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            theme_file: None,
            validate_on_blur: true,
            field: FieldOverrides::default(),
        }
    }
}

fn default_theme() -> String {
    "default-dark".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from the default path.
    pub fn load() -> Self {
        Self::config_path()
            .map(|p| Self::load_from(&p))
            .unwrap_or_default()
    }

    /// Load configuration from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(err) => {
                    tracing::warn!(path = %path.display(), "invalid config, using defaults: {}", err);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "signup-form")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Get log file path.
    pub fn log_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "signup-form")
            .map(|d| d.data_dir().join("signup-form.log"))
    }
}
