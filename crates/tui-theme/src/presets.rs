//! Built-in theme presets.

use crate::colors::Color;
use crate::styles::{BorderType, FieldStyles};
use crate::Theme;
use std::collections::HashMap;

/// Get all built-in themes, keyed by their lookup name.
pub fn builtin_themes() -> HashMap<String, Theme> {
    let mut themes = HashMap::new();

    themes.insert("default-dark".to_string(), default_dark());
    themes.insert("default-light".to_string(), default_light());
    themes.insert("high-contrast".to_string(), high_contrast());

    themes
}

/// Default dark theme.
pub fn default_dark() -> Theme {
    Theme {
        name: "Default Dark".to_string(),
        is_dark: true,
        field: FieldStyles {
            text: Color::hex("#c0caf5"),
            placeholder: Color::hex("#565f89"),
            error_label: Color::hex("#f7768e"),
            border_active: Color::hex("#7aa2f7"),
            border_inactive: Color::hex("#414868"),
            border_error: Color::hex("#f7768e"),
            background_active: Color::hex("#1f2335"),
            background_inactive: Color::clear(),
            ..FieldStyles::default()
        },
    }
}

/// Default light theme.
pub fn default_light() -> Theme {
    Theme {
        name: "Default Light".to_string(),
        is_dark: false,
        field: FieldStyles {
            text: Color::hex("#343b58"),
            placeholder: Color::hex("#9699a3"),
            error_label: Color::hex("#8c4351"),
            border_active: Color::hex("#34548a"),
            border_inactive: Color::hex("#9699a3"),
            border_error: Color::hex("#8c4351"),
            background_active: Color::hex("#e9e9ed"),
            background_inactive: Color::clear(),
            ..FieldStyles::default()
        },
    }
}

/// High contrast theme using only the 16 ANSI colors.
pub fn high_contrast() -> Theme {
    Theme {
        name: "High Contrast".to_string(),
        is_dark: true,
        field: FieldStyles {
            text: Color::named("white"),
            placeholder: Color::named("gray"),
            error_label: Color::named("lightred"),
            border_active: Color::named("yellow"),
            border_inactive: Color::named("white"),
            border_error: Color::named("lightred"),
            background_active: Color::named("black"),
            background_inactive: Color::named("black"),
            border: BorderType::Thick,
            ..FieldStyles::default()
        },
    }
}
