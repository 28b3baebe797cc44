//! Text field style definitions.

use crate::colors::Color;
use serde::{Deserialize, Serialize};

/// Border type of the field box.
///
/// Terminals cannot draw a corner radius, so `Rounded` stands in for any
/// non-zero radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderType {
    /// Simple single lines
    Plain,
    /// Rounded corners
    #[default]
    Rounded,
    /// Double lines
    Double,
    /// Thick lines
    Thick,
    /// No border
    None,
}

/// Colors and metrics of an error-labelled text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldStyles {
    /// Entered text
    pub text: Color,
    /// Placeholder shown while the field is empty
    pub placeholder: Color,
    /// Error label text
    pub error_label: Color,
    /// Border while focused
    pub border_active: Color,
    /// Border while not focused
    pub border_inactive: Color,
    /// Border while an error is shown (wins over focus)
    pub border_error: Color,
    /// Background while focused
    pub background_active: Color,
    /// Background while not focused
    pub background_inactive: Color,
    /// Border type of the backing view
    pub border: BorderType,
    /// Border thickness in cells (0 or 1)
    pub border_width: u16,
    /// Horizontal inset of the text area on each side
    pub horizontal_margin: u16,
    /// Height of one line of entered text
    pub line_height: u16,
    /// Width of the trailing accessory (clear button, label)
    pub accessory_width: u16,
}

impl Default for FieldStyles {
    fn default() -> Self {
        Self {
            text: Color::named("white"),
            placeholder: Color::named("darkgray"),
            error_label: Color::named("red"),
            border_active: Color::named("gray"),
            border_inactive: Color::named("gray"),
            border_error: Color::named("red"),
            background_active: Color::clear(),
            background_inactive: Color::clear(),
            border: BorderType::Rounded,
            border_width: 1,
            horizontal_margin: 2,
            line_height: 1,
            accessory_width: 3,
        }
    }
}

/// Partial field styles layered over a preset.
///
/// Every key is optional so a config file only needs to name what it changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_label: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_active: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_inactive: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_error: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_active: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_inactive: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_margin: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessory_width: Option<u16>,
}

impl FieldOverrides {
    /// Create empty overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no key is overridden.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Override the error border color.
    pub fn border_error(mut self, color: Color) -> Self {
        self.border_error = Some(color);
        self
    }

    /// Override the focused background color.
    pub fn background_active(mut self, color: Color) -> Self {
        self.background_active = Some(color);
        self
    }

    /// Override the horizontal text margin.
    pub fn horizontal_margin(mut self, margin: u16) -> Self {
        self.horizontal_margin = Some(margin);
        self
    }

    /// Layer these overrides over `base`.
    pub fn apply(&self, base: &FieldStyles) -> FieldStyles {
        fn pick<T: Clone>(over: &Option<T>, base: &T) -> T {
            over.clone().unwrap_or_else(|| base.clone())
        }

        FieldStyles {
            text: pick(&self.text, &base.text),
            placeholder: pick(&self.placeholder, &base.placeholder),
            error_label: pick(&self.error_label, &base.error_label),
            border_active: pick(&self.border_active, &base.border_active),
            border_inactive: pick(&self.border_inactive, &base.border_inactive),
            border_error: pick(&self.border_error, &base.border_error),
            background_active: pick(&self.background_active, &base.background_active),
            background_inactive: pick(&self.background_inactive, &base.background_inactive),
            border: pick(&self.border, &base.border),
            // Borders are a single cell at most.
            border_width: pick(&self.border_width, &base.border_width).min(1),
            horizontal_margin: pick(&self.horizontal_margin, &base.horizontal_margin),
            line_height: pick(&self.line_height, &base.line_height).max(1),
            accessory_width: pick(&self.accessory_width, &base.accessory_width),
        }
    }
}
