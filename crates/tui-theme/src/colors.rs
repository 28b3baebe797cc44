//! Color values for field styles.

use ratatui::style::Color as RatatuiColor;
use serde::{Deserialize, Serialize};

/// A color value that can be written in a theme file in several formats.
///
/// ```toml
/// border_active = "#7aa2f7"
/// border_error = "red"
/// background_inactive = { r = 30, g = 30, b = 46 }
/// text = 250
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    /// Hex color (e.g., "#1a1b26")
    Hex(String),
    /// RGB values
    Rgb { r: u8, g: u8, b: u8 },
    /// 256-color index
    Index(u8),
    /// Named ANSI color, or "clear"/"none" for no color
    Named(String),
}

impl Default for Color {
    fn default() -> Self {
        Self::clear()
    }
}

impl Color {
    /// Create a hex color.
    pub fn hex(s: impl Into<String>) -> Self {
        Self::Hex(s.into())
    }

    /// Create an RGB color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Create a named color.
    pub fn named(s: impl Into<String>) -> Self {
        Self::Named(s.into())
    }

    /// The transparent color; the terminal default shows through.
    pub fn clear() -> Self {
        Self::Named("clear".to_string())
    }

    /// Whether this color leaves the underlying cell untouched.
    pub fn is_clear(&self) -> bool {
        self.to_ratatui().is_none()
    }

    /// Convert to a Ratatui color. `None` means "do not paint".
    pub fn to_ratatui(&self) -> Option<RatatuiColor> {
        match self {
            // Strings deserialize into `Hex` whatever they hold, so both
            // string variants accept either form.
            Self::Hex(s) | Self::Named(s) => named_color(s),
            Self::Rgb { r, g, b } => Some(RatatuiColor::Rgb(*r, *g, *b)),
            Self::Index(i) => Some(RatatuiColor::Indexed(*i)),
        }
    }
}

fn parse_hex(s: &str) -> Option<(u8, u8, u8)> {
    let digits = s.strip_prefix('#')?;
    match digits.len() {
        6 => {
            let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let expand = |i: usize| u8::from_str_radix(&digits[i..i + 1].repeat(2), 16).ok();
            Some((expand(0)?, expand(1)?, expand(2)?))
        }
        _ => None,
    }
}

fn named_color(name: &str) -> Option<RatatuiColor> {
    match name.to_lowercase().replace(['_', '-', ' '], "").as_str() {
        "black" => Some(RatatuiColor::Black),
        "red" => Some(RatatuiColor::Red),
        "green" => Some(RatatuiColor::Green),
        "yellow" => Some(RatatuiColor::Yellow),
        "blue" => Some(RatatuiColor::Blue),
        "magenta" => Some(RatatuiColor::Magenta),
        "cyan" => Some(RatatuiColor::Cyan),
        "white" => Some(RatatuiColor::White),
        "gray" | "grey" => Some(RatatuiColor::Gray),
        "darkgray" | "darkgrey" => Some(RatatuiColor::DarkGray),
        "lightred" => Some(RatatuiColor::LightRed),
        "lightgreen" => Some(RatatuiColor::LightGreen),
        "lightyellow" => Some(RatatuiColor::LightYellow),
        "lightblue" => Some(RatatuiColor::LightBlue),
        "lightmagenta" => Some(RatatuiColor::LightMagenta),
        "lightcyan" => Some(RatatuiColor::LightCyan),
        "reset" => Some(RatatuiColor::Reset),
        // "clear" / "none" / unknown names paint nothing
        _ => {
            if let Some((r, g, b)) = parse_hex(name) {
                Some(RatatuiColor::Rgb(r, g, b))
            } else {
                None
            }
        }
    }
}
