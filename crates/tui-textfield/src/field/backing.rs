//! Backing view carrying the field's background and border.
//!
//! The field never paints its own background. Background color goes through
//! the backing view, which owns the border type and clips its fill to the
//! field box so the error label below stays unpainted.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType as RatatuiBorderType, Borders, Widget};
use tui_theme::BorderType;

/// Background and border of a text field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BackingView {
    /// Fill color, `None` for clear
    pub background: Option<Color>,
    /// Border color, `None` for the terminal default
    pub border_color: Option<Color>,
    /// Border type
    pub border_type: BorderType,
    /// Border thickness (0 or 1)
    pub border_width: u16,
}

impl BackingView {
    /// Create a backing view with the given border.
    pub fn new(border_type: BorderType, border_width: u16) -> Self {
        Self {
            background: None,
            border_color: None,
            border_type,
            border_width,
        }
    }

    fn has_border(&self) -> bool {
        self.border_width > 0 && self.border_type != BorderType::None
    }

    fn block<'a>(&self, title: Option<Line<'a>>) -> Block<'a> {
        let mut block = Block::default();

        if self.has_border() {
            let border_type = match self.border_type {
                BorderType::Plain | BorderType::None => RatatuiBorderType::Plain,
                BorderType::Rounded => RatatuiBorderType::Rounded,
                BorderType::Double => RatatuiBorderType::Double,
                BorderType::Thick => RatatuiBorderType::Thick,
            };
            let mut border_style = Style::default();
            if let Some(color) = self.border_color {
                border_style = border_style.fg(color);
            }
            block = block
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style);

            if let Some(title) = title {
                block = block.title(title);
            }
        }

        if let Some(bg) = self.background {
            block = block.style(Style::default().bg(bg));
        }

        block
    }

    /// Area inside the border.
    pub fn inner(&self, area: Rect) -> Rect {
        self.block(None).inner(area)
    }

    /// Paint the background and border into `area`.
    pub fn render(&self, area: Rect, buf: &mut Buffer, title: Option<Line<'_>>) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }
        self.block(title).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_with_border() {
        let view = BackingView::new(BorderType::Rounded, 1);
        assert_eq!(view.inner(Rect::new(0, 0, 10, 3)), Rect::new(1, 1, 8, 1));
    }

    #[test]
    fn test_inner_without_border() {
        let view = BackingView::new(BorderType::None, 1);
        assert_eq!(view.inner(Rect::new(0, 0, 10, 3)), Rect::new(0, 0, 10, 3));
    }

    #[test]
    fn test_render_rounded_corners_and_fill() {
        let mut view = BackingView::new(BorderType::Rounded, 1);
        view.background = Some(Color::Blue);
        view.border_color = Some(Color::Red);

        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 4));
        view.render(Rect::new(0, 0, 6, 3), &mut buf, None);

        assert_eq!(buf[(0, 0)].symbol(), "╭");
        assert_eq!(buf[(5, 2)].symbol(), "╯");
        assert_eq!(buf[(0, 0)].fg, Color::Red);
        assert_eq!(buf[(2, 1)].bg, Color::Blue);
        // clipped to its own rect
        assert_eq!(buf[(2, 3)].bg, Color::Reset);
    }

    #[test]
    fn test_render_outside_buffer_is_noop() {
        let view = BackingView::new(BorderType::Plain, 1);
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 4));
        view.render(Rect::new(10, 10, 4, 4), &mut buf, None);
        assert_eq!(buf, Buffer::empty(Rect::new(0, 0, 4, 4)));
    }
}
