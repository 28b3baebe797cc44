//! State for the TextField widget.

use super::backing::BackingView;
use super::style::FieldStyle;
use super::wrap;
use crate::validation::Rule;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::Color;
use std::fmt;
use tracing::debug;

/// Mask character for secure text entry.
pub const SECURE_MASK: char = '\u{2022}';

/// Trailing view shown at the end of the text area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accessory {
    /// Clear button, shown while focused with text. Ctrl+U triggers it.
    ClearButton,
    /// Static label (unit, hint, icon)
    Label(String),
}

/// The error label child.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorLabel {
    /// Displayed message
    pub text: Option<String>,
    /// Frame from the last layout pass
    pub frame: Rect,
}

/// State for an error-labelled text field.
#[derive(Debug, Clone)]
pub struct TextFieldState {
    text: String,
    /// Cursor position in characters
    cursor: usize,
    /// First visible character when text is wider than the field
    pub(crate) scroll: usize,
    error: Option<String>,
    focused: bool,
    disabled: bool,
    placeholder: Option<String>,
    secure_entry: bool,
    accessory: Option<Accessory>,
    validation_rule: Option<Rule>,
    style: FieldStyle,
    backing: BackingView,
    error_label: ErrorLabel,
    accessory_frame: Rect,
    bounds: Rect,
    intrinsic_size: Size,
}

impl TextFieldState {
    /// Create a field with the default style.
    pub fn new() -> Self {
        Self::with_style(FieldStyle::default())
    }

    /// Create a field with the given style.
    pub fn with_style(style: FieldStyle) -> Self {
        let mut state = Self {
            text: String::new(),
            cursor: 0,
            scroll: 0,
            error: None,
            focused: false,
            disabled: false,
            placeholder: None,
            secure_entry: false,
            accessory: None,
            validation_rule: None,
            backing: BackingView::new(style.border_type, style.border_width),
            style,
            error_label: ErrorLabel::default(),
            accessory_frame: Rect::default(),
            bounds: Rect::default(),
            intrinsic_size: Size::default(),
        };
        state.update_control();
        state
    }

    /// Set placeholder text.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Attach a validation rule. The field never runs it itself.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.validation_rule = Some(rule);
        self
    }

    /// Mask the entered text.
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure_entry = secure;
        self
    }

    /// Set the trailing accessory.
    pub fn accessory(mut self, accessory: Accessory) -> Self {
        self.accessory = Some(accessory);
        self
    }

    /// Set disabled state.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    /// Set initial text.
    pub fn text_value(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    // ---- text ----

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text and move the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
        self.scroll = 0;
    }

    /// Remove all text.
    pub fn clear(&mut self) {
        self.set_text(String::new());
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text as drawn: masked when secure entry is on.
    pub fn display_text(&self) -> String {
        if self.secure_entry {
            std::iter::repeat(SECURE_MASK).take(self.text.chars().count()).collect()
        } else {
            self.text.clone()
        }
    }

    /// Placeholder text.
    pub fn placeholder_text(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Whether text is masked.
    pub fn is_secure(&self) -> bool {
        self.secure_entry
    }

    /// Trailing accessory.
    pub fn accessory_view(&self) -> Option<&Accessory> {
        self.accessory.as_ref()
    }

    /// Set or remove the trailing accessory.
    pub fn set_accessory(&mut self, accessory: Option<Accessory>) {
        self.accessory = accessory;
        self.accessory_frame = self.accessory_rect(self.bounds);
    }

    /// Attached validation rule.
    pub fn validation_rule(&self) -> Option<Rule> {
        self.validation_rule
    }

    /// Whether the accessory should be drawn right now.
    pub fn accessory_visible(&self) -> bool {
        match &self.accessory {
            Some(Accessory::ClearButton) => self.focused && !self.text.is_empty(),
            Some(Accessory::Label(_)) => true,
            None => false,
        }
    }

    // ---- error ----

    /// Current error message.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a non-empty error is shown.
    pub fn has_error(&self) -> bool {
        self.error.as_deref().is_some_and(|e| !e.is_empty())
    }

    /// Set or clear the error message.
    ///
    /// This only changes what is displayed; no validation runs here. The
    /// intrinsic size, colors and error label are refreshed in the same call.
    pub fn set_error<S: Into<String>>(&mut self, error: Option<S>) {
        let error = error.map(Into::into);
        if error != self.error {
            debug!(error = ?error, "text field error changed");
        }
        self.error = error;
        self.update_control();
    }

    /// The error label child.
    pub fn error_label(&self) -> &ErrorLabel {
        &self.error_label
    }

    // ---- focus ----

    /// Whether the field has focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Give the field focus. Returns whether focus was taken.
    pub fn focus(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        if !self.focused {
            debug!(field = %self, "text field focused");
        }
        self.focused = true;
        self.update_control();
        true
    }

    /// Remove focus. Returns whether focus was given up.
    pub fn blur(&mut self) -> bool {
        if self.focused {
            debug!(field = %self, "text field lost focus");
        }
        self.focused = false;
        self.update_control();
        true
    }

    /// Whether the field is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enable or disable the field. Disabling drops focus.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled && self.focused {
            self.blur();
        }
    }

    // ---- style ----

    /// Resolved style.
    pub fn style(&self) -> &FieldStyle {
        &self.style
    }

    /// Replace the style and refresh.
    pub fn set_style(&mut self, style: FieldStyle) {
        self.backing = BackingView::new(style.border_type, style.border_width);
        self.style = style;
        self.update_control();
    }

    /// Background color, read from the backing view.
    pub fn background_color(&self) -> Option<Color> {
        self.backing.background
    }

    /// Set the background color on the backing view.
    ///
    /// The next focus or error change repaints it from the style.
    pub fn set_background_color(&mut self, color: Option<Color>) {
        self.backing.background = color;
    }

    /// Current border color.
    pub fn border_color(&self) -> Option<Color> {
        self.backing.border_color
    }

    /// The backing view.
    pub fn backing_view(&self) -> &BackingView {
        &self.backing
    }

    // ---- geometry ----

    /// Bounds from the last layout pass.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Height of the field without an error.
    pub fn text_height(&self) -> u16 {
        self.style.text_height()
    }

    /// Height of the wrapped error text at the current width, 0 without error.
    pub fn error_height(&self) -> u16 {
        self.error_height_for(self.bounds.width)
    }

    fn error_height_for(&self, width: u16) -> u16 {
        match self.error.as_deref() {
            Some(error) if !error.is_empty() => wrap::measure(error, width).height,
            _ => 0,
        }
    }

    /// Preferred height: text height plus room for the error label.
    pub fn compute_height(&self) -> u16 {
        self.text_height().saturating_add(self.error_height())
    }

    /// Preferred height if the field were laid out `width` cells wide.
    pub fn height_for_width(&self, width: u16) -> u16 {
        self.text_height().saturating_add(self.error_height_for(width))
    }

    /// Cached preferred size.
    pub fn intrinsic_size(&self) -> Size {
        self.intrinsic_size
    }

    /// Recompute the cached preferred size.
    pub fn invalidate_intrinsic_size(&mut self) {
        self.intrinsic_size = Size {
            width: self.bounds.width,
            height: self.compute_height(),
        };
    }

    /// Area for entered text: inset by the horizontal margin on both sides and
    /// shortened by the error label so the two never overlap.
    pub fn text_rect(&self, bounds: Rect) -> Rect {
        let margin = self.style.horizontal_margin;
        Rect {
            x: bounds.x.saturating_add(margin),
            y: bounds.y,
            width: bounds.width.saturating_sub(margin.saturating_mul(2)),
            height: bounds.height.saturating_sub(self.error_height_for(bounds.width)),
        }
    }

    /// Area used while editing.
    pub fn editing_rect(&self, bounds: Rect) -> Rect {
        self.text_rect(bounds)
    }

    /// Area for the placeholder.
    pub fn placeholder_rect(&self, bounds: Rect) -> Rect {
        self.text_rect(bounds)
    }

    /// Area of the field box (border and background), above the error label.
    pub fn field_rect(&self, bounds: Rect) -> Rect {
        Rect {
            height: bounds.height.saturating_sub(self.error_label_rect(bounds).height),
            ..bounds
        }
    }

    /// Area for the error label: zero without an error, otherwise the wrapped
    /// error text anchored at the bottom-left of `bounds`.
    pub fn error_label_rect(&self, bounds: Rect) -> Rect {
        let Some(error) = self.error.as_deref().filter(|e| !e.is_empty()) else {
            return Rect::default();
        };

        let size = wrap::measure(error, bounds.width);
        let height = size.height.min(bounds.height);
        Rect {
            x: bounds.x,
            y: bounds.bottom().saturating_sub(height),
            width: size.width.min(bounds.width),
            height,
        }
    }

    /// Area for the trailing accessory, at the end of the text rect.
    pub fn accessory_rect(&self, bounds: Rect) -> Rect {
        let text = self.text_rect(bounds);
        let width = self.style.accessory_width.min(text.width);
        Rect {
            x: text.right().saturating_sub(width),
            width,
            ..text
        }
    }

    /// Area for the clear button.
    pub fn clear_button_rect(&self, bounds: Rect) -> Rect {
        self.accessory_rect(bounds)
    }

    /// Frame of the accessory from the last layout pass.
    pub fn accessory_frame(&self) -> Rect {
        self.accessory_frame
    }

    /// Lay the field out in `bounds`.
    ///
    /// Re-derives the intrinsic size and repositions the error label and the
    /// accessory. The accessory frame is always set here so an accessory
    /// appearing for the first time draws at its final position.
    pub fn layout(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.invalidate_intrinsic_size();
        self.error_label.frame = self.error_label_rect(bounds);
        self.accessory_frame = self.accessory_rect(bounds);
    }

    /// Screen position of the cursor from the last layout, when focused.
    pub fn cursor_position(&self) -> Option<Position> {
        if !self.focused {
            return None;
        }
        let rect = self.text_rect(self.bounds);
        if rect.is_empty() {
            return None;
        }
        let visible = self.cursor.saturating_sub(self.scroll);
        let offset: usize = self
            .display_text()
            .chars()
            .skip(self.scroll)
            .take(visible)
            .map(|c| unicode_width::UnicodeWidthChar::width(c).unwrap_or(0))
            .sum();
        let x = rect.x.saturating_add(u16::try_from(offset).unwrap_or(u16::MAX));
        Some(Position {
            x: x.min(rect.right().saturating_sub(1)),
            y: text_row(rect),
        })
    }

    // ---- refresh ----

    fn update_control(&mut self) {
        self.invalidate_intrinsic_size();
        self.update_colors();
        self.update_error_label();
    }

    fn update_colors(&mut self) {
        let style = &self.style;
        self.backing.border_color = if self.has_error() {
            style.border_color_error
        } else if self.focused {
            style.border_color_active
        } else {
            style.border_color_inactive
        };
        self.backing.background = if self.focused {
            style.background_active
        } else {
            style.background_inactive
        };
    }

    fn update_error_label(&mut self) {
        self.error_label.text = self.error.clone();
        self.error_label.frame = self.error_label_rect(self.bounds);
    }

    // ---- editing ----

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.text.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let idx = self.byte_index(self.cursor);
        self.text.remove(idx);
        true
    }

    /// Delete the character under the cursor.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.text.chars().count() {
            return false;
        }
        let idx = self.byte_index(self.cursor);
        self.text.remove(idx);
        true
    }

    /// Move the cursor by `delta` characters, clamped to the text.
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.text.chars().count();
        self.cursor = self.cursor.saturating_add_signed(delta).min(len);
    }

    /// Handle a key event. Returns whether the key was consumed.
    ///
    /// Only a focused, enabled field consumes keys.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.disabled || !self.focused {
            return false;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('u') if ctrl => {
                self.clear();
                true
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                self.delete_backward();
                true
            }
            KeyCode::Delete => {
                self.delete_forward();
                true
            }
            KeyCode::Left => {
                self.move_cursor(-1);
                true
            }
            KeyCode::Right => {
                self.move_cursor(1);
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.text.chars().count();
                true
            }
            _ => false,
        }
    }

    /// Keep the cursor inside a window of `width` cells.
    ///
    /// The characters between `scroll` and the cursor must fit in `width - 1`
    /// cells so the cursor itself stays on screen.
    pub(crate) fn scroll_to_cursor(&mut self, width: usize) {
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        }
        let widths: Vec<usize> = self
            .display_text()
            .chars()
            .take(self.cursor)
            .map(|c| unicode_width::UnicodeWidthChar::width(c).unwrap_or(0))
            .collect();
        let limit = width.saturating_sub(1);
        let mut used: usize = widths[self.scroll.min(widths.len())..].iter().sum();
        while self.scroll < widths.len() && used > limit {
            used -= widths[self.scroll];
            self.scroll += 1;
        }
    }
}

/// Row the text line is drawn on: vertically centred in `rect`.
pub(crate) fn text_row(rect: Rect) -> u16 {
    rect.y + rect.height.saturating_sub(1) / 2
}

impl Default for TextFieldState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TextFieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[TextField({:?}) text:{:?}]",
            self.placeholder.as_deref().unwrap_or(""),
            if self.secure_entry { self.display_text() } else { self.text.clone() }
        )
    }
}
