//! Resolved colors and metrics for a text field.

use ratatui::style::Color;
use tui_theme::{BorderType, FieldStyles};

/// Field styling resolved to terminal colors.
///
/// `None` colors leave the cell as it is (the "clear" color).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldStyle {
    pub text_color: Option<Color>,
    pub placeholder_color: Option<Color>,
    pub error_label_color: Option<Color>,
    pub border_color_active: Option<Color>,
    pub border_color_inactive: Option<Color>,
    pub border_color_error: Option<Color>,
    pub background_active: Option<Color>,
    pub background_inactive: Option<Color>,
    pub border_type: BorderType,
    pub border_width: u16,
    pub horizontal_margin: u16,
    pub line_height: u16,
    pub accessory_width: u16,
}

impl FieldStyle {
    /// Resolve theme styles.
    pub fn from_theme(styles: &FieldStyles) -> Self {
        Self {
            text_color: styles.text.to_ratatui(),
            placeholder_color: styles.placeholder.to_ratatui(),
            error_label_color: styles.error_label.to_ratatui(),
            border_color_active: styles.border_active.to_ratatui(),
            border_color_inactive: styles.border_inactive.to_ratatui(),
            border_color_error: styles.border_error.to_ratatui(),
            background_active: styles.background_active.to_ratatui(),
            background_inactive: styles.background_inactive.to_ratatui(),
            border_type: styles.border,
            border_width: if styles.border == BorderType::None {
                0
            } else {
                styles.border_width.min(1)
            },
            horizontal_margin: styles.horizontal_margin,
            line_height: styles.line_height.max(1),
            accessory_width: styles.accessory_width,
        }
    }

    /// Height of the field box without an error: one text line plus borders.
    pub fn text_height(&self) -> u16 {
        self.line_height.saturating_add(self.border_width.saturating_mul(2))
    }
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self::from_theme(&FieldStyles::default())
    }
}

impl From<&FieldStyles> for FieldStyle {
    fn from(styles: &FieldStyles) -> Self {
        Self::from_theme(styles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_theme::Color as ThemeColor;

    #[test]
    fn test_default_style() {
        let style = FieldStyle::default();
        assert_eq!(style.border_color_error, Some(Color::Red));
        assert_eq!(style.border_color_active, Some(Color::Gray));
        assert_eq!(style.background_inactive, None);
        assert_eq!(style.text_height(), 3);
    }

    #[test]
    fn test_borderless_height() {
        let styles = FieldStyles {
            border: BorderType::None,
            background_active: ThemeColor::named("blue"),
            ..FieldStyles::default()
        };
        let style = FieldStyle::from_theme(&styles);
        assert_eq!(style.border_width, 0);
        assert_eq!(style.text_height(), 1);
        assert_eq!(style.background_active, Some(Color::Blue));
    }
}
