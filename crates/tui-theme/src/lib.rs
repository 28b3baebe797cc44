//! # tui-theme
//!
//! Theming for error-labelled text fields.
//!
//! ## Features
//!
//! - Field colors for focused, unfocused and error states
//! - Colors written as hex, RGB tables, 256-color indices or ANSI names
//! - Built-in presets plus user themes loaded from TOML
//! - Partial overrides layered over any preset

mod colors;
mod manager;
mod presets;
mod styles;

pub use colors::Color;
pub use manager::{ThemeError, ThemeManager};
pub use presets::{builtin_themes, default_dark, default_light, high_contrast};
pub use styles::{BorderType, FieldOverrides, FieldStyles};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// A complete theme definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: String,
    /// Whether the theme targets dark terminals
    #[serde(default = "default_true")]
    pub is_dark: bool,
    /// Text field styles
    #[serde(default)]
    pub field: FieldStyles,
}

fn default_true() -> bool {
    true
}

impl Theme {
    /// Create a new theme with default field styles.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dark: true,
            field: FieldStyles::default(),
        }
    }

    /// Parse a theme from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(s)?)
    }

    /// Load a theme from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

impl Default for Theme {
    fn default() -> Self {
        presets::default_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::new("test-theme");
        assert_eq!(theme.name, "test-theme");
        assert_eq!(theme.field, FieldStyles::default());
    }

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert_eq!(theme.name, "Default Dark");
    }

    #[test]
    fn test_from_toml() {
        let theme = Theme::from_toml_str(
            r##"
            name = "Ocean"
            is_dark = false

            [field]
            border_error = "#ff0000"
            horizontal_margin = 3
            "##,
        )
        .unwrap();

        assert_eq!(theme.name, "Ocean");
        assert!(!theme.is_dark);
        assert_eq!(theme.field.border_error, Color::hex("#ff0000"));
        assert_eq!(theme.field.horizontal_margin, 3);
        assert_eq!(theme.field.line_height, 1);
    }

    #[test]
    fn test_bad_toml() {
        let err = Theme::from_toml_str("name = ").unwrap_err();
        assert!(matches!(err, ThemeError::TomlError(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Theme::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ThemeError::IoError(_)));
    }
}
