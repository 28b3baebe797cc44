//! TextField widget - a text input with an inline error label.
//!
//! # Example
//!
//! ```ignore
//! use tui_textfield::{Rule, TextField, TextFieldState};
//!
//! let mut email = TextFieldState::new()
//!     .placeholder("Email")
//!     .rule(Rule::Email);
//!
//! // after editing
//! let error = Rule::Email.validate(email.text()).err().map(|e| e.message);
//! email.set_error(error);
//!
//! frame.render_stateful_widget(TextField::new().title("Email"), area, &mut email);
//! ```

mod backing;
mod state;
mod style;
pub mod wrap;

pub use backing::BackingView;
pub use state::{Accessory, ErrorLabel, TextFieldState, SECURE_MASK};
pub use style::FieldStyle;

use state::text_row;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::StatefulWidget;
use unicode_width::UnicodeWidthChar;

/// Glyph drawn for the clear button. Ctrl+U is its key binding.
const CLEAR_GLYPH: &str = "\u{2715}";

/// Renders a [`TextFieldState`].
#[derive(Debug, Clone, Default)]
pub struct TextField<'a> {
    title: Option<Line<'a>>,
}

impl<'a> TextField<'a> {
    /// Create a new text field widget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Title drawn on the top border.
    pub fn title(mut self, title: impl Into<Line<'a>>) -> Self {
        self.title = Some(title.into());
        self
    }
}

fn fg(color: Option<ratatui::style::Color>) -> Style {
    match color {
        Some(color) => Style::default().fg(color),
        None => Style::default(),
    }
}

impl StatefulWidget for TextField<'_> {
    type State = TextFieldState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.layout(area);

        // Rects come from the full bounds; drawing is clipped to the buffer
        let bounds = area;
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }

        // Backing view: border and background above the error label
        state
            .backing_view()
            .render(state.field_rect(bounds), buf, self.title);

        // Text or placeholder
        let text_rect = state.text_rect(bounds).intersection(buf.area);
        if !text_rect.is_empty() {
            let row = text_row(text_rect);
            let accessory_width = if state.accessory_visible() {
                state.accessory_frame().width.saturating_add(1)
            } else {
                0
            };
            let width = text_rect.width.saturating_sub(accessory_width);

            if state.text().is_empty() {
                if let Some(placeholder) = state.placeholder_text() {
                    let style = fg(state.style().placeholder_color);
                    buf.set_stringn(text_rect.x, row, placeholder, usize::from(width), style);
                }
                state.scroll = 0;
            } else {
                state.scroll_to_cursor(usize::from(width));
                let visible: String = state.display_text().chars().skip(state.scroll).collect();
                let style = fg(state.style().text_color);
                buf.set_stringn(text_rect.x, row, visible, usize::from(width), style);
            }

            // Accessory
            if state.accessory_visible() {
                let frame = state.accessory_frame().intersection(buf.area);
                if !frame.is_empty() {
                    let (symbol, style) = match state.accessory_view() {
                        Some(Accessory::ClearButton) => {
                            (CLEAR_GLYPH.to_string(), fg(state.style().placeholder_color))
                        }
                        Some(Accessory::Label(label)) => {
                            (label.clone(), fg(state.style().text_color))
                        }
                        None => (String::new(), Style::default()),
                    };
                    let symbol_width: usize = symbol.chars().map(|c| c.width().unwrap_or(0)).sum();
                    let pad = usize::from(frame.width).saturating_sub(symbol_width);
                    let x = frame.x + u16::try_from(pad).unwrap_or(0);
                    buf.set_stringn(x, text_row(frame), symbol, usize::from(frame.width), style);
                }
            }
        }

        // Error label
        if let Some(error) = state.error_label().text.as_deref() {
            let frame = state.error_label().frame.intersection(buf.area);
            let style = fg(state.style().error_label_color);
            // same width the label frame was measured at
            for (i, line) in wrap::wrap(error, bounds.width)
                .iter()
                .take(usize::from(frame.height))
                .enumerate()
            {
                let y = frame.y + i as u16;
                buf.set_stringn(frame.x, y, line, usize::from(area.width), style);
            }
        }
    }
}
