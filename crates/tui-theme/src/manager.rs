//! Theme manager for loading and switching themes.

use crate::{FieldOverrides, FieldStyles, Theme};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Theme loading error.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Theme not found: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Manages built-in and user themes plus runtime field overrides.
pub struct ThemeManager {
    /// Built-in themes
    builtin: HashMap<String, Theme>,
    /// User-loaded themes
    user: HashMap<String, Theme>,
    /// Current theme name
    current: String,
    /// Runtime overrides
    overrides: FieldOverrides,
}

impl ThemeManager {
    /// Create a new theme manager with built-in themes.
    pub fn new() -> Self {
        Self {
            builtin: crate::presets::builtin_themes(),
            user: HashMap::new(),
            current: "default-dark".to_string(),
            overrides: FieldOverrides::default(),
        }
    }

    /// Names of every known theme, user themes first.
    pub fn theme_names(&self) -> Vec<&str> {
        let mut user: Vec<_> = self.user.keys().map(String::as_str).collect();
        let mut builtin: Vec<_> = self
            .builtin
            .keys()
            .map(String::as_str)
            .filter(|name| !self.user.contains_key(*name))
            .collect();
        user.sort_unstable();
        builtin.sort_unstable();
        user.extend(builtin);
        user
    }

    /// Look up a theme by name. User themes shadow built-ins.
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.user.get(name).or_else(|| self.builtin.get(name))
    }

    /// Switch to the named theme.
    pub fn set_theme(&mut self, name: &str) -> Result<(), ThemeError> {
        if self.get(name).is_none() {
            return Err(ThemeError::NotFound(name.to_string()));
        }
        self.current = name.to_string();
        Ok(())
    }

    /// Name of the current theme.
    pub fn current_name(&self) -> &str {
        &self.current
    }

    /// The current theme.
    pub fn current(&self) -> &Theme {
        // set_theme only accepts known names and themes are never removed
        self.get(&self.current)
            .or_else(|| self.builtin.get("default-dark"))
            .unwrap_or_else(|| unreachable!("default-dark preset is always registered"))
    }

    /// Load a user theme from a TOML file and register it under `name`.
    pub fn load_file(&mut self, name: impl Into<String>, path: &Path) -> Result<(), ThemeError> {
        let theme = Theme::load(path)?;
        self.user.insert(name.into(), theme);
        Ok(())
    }

    /// Register an already built theme.
    pub fn register(&mut self, name: impl Into<String>, theme: Theme) {
        self.user.insert(name.into(), theme);
    }

    /// Replace the runtime overrides.
    pub fn set_overrides(&mut self, overrides: FieldOverrides) {
        self.overrides = overrides;
    }

    /// Field styles of the current theme with overrides applied.
    pub fn field_styles(&self) -> FieldStyles {
        self.overrides.apply(&self.current().field)
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn test_switch_theme() {
        let mut manager = ThemeManager::new();
        assert_eq!(manager.current_name(), "default-dark");

        manager.set_theme("high-contrast").unwrap();
        assert_eq!(manager.current().name, "High Contrast");
    }

    #[test]
    fn test_unknown_theme() {
        let mut manager = ThemeManager::new();
        let err = manager.set_theme("missing").unwrap_err();
        assert!(matches!(err, ThemeError::NotFound(name) if name == "missing"));
        assert_eq!(manager.current_name(), "default-dark");
    }

    #[test]
    fn test_user_theme_shadows_builtin() {
        let mut manager = ThemeManager::new();
        manager.register("default-dark", Theme::new("Mine"));

        assert_eq!(manager.current().name, "Mine");
        assert_eq!(manager.theme_names()[0], "default-dark");
        assert_eq!(manager.theme_names().len(), 3);
    }

    #[test]
    fn test_overrides_layer_over_current() {
        let mut manager = ThemeManager::new();
        manager.set_overrides(FieldOverrides::new().border_error(Color::named("magenta")));

        let styles = manager.field_styles();
        assert_eq!(styles.border_error, Color::named("magenta"));
        assert_eq!(styles.border_active, manager.current().field.border_active);
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mine.toml");
        std::fs::write(&path, "name = \"Mine\"\n[field]\nborder = \"plain\"\n").unwrap();

        let mut manager = ThemeManager::new();
        manager.load_file("mine", &path).unwrap();
        manager.set_theme("mine").unwrap();
        assert_eq!(manager.field_styles().border, crate::BorderType::Plain);
    }
}
