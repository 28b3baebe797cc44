//! Virtual terminal for headless widget tests.

use ratatui::backend::TestBackend;
use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::{Position, Rect};
use ratatui::widgets::{StatefulWidget, Widget};
use ratatui::Terminal;

/// A virtual terminal backed by ratatui's `TestBackend`.
pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create terminal");
        Self { terminal }
    }

    /// Full terminal area.
    pub fn area(&self) -> Rect {
        self.buffer().area
    }

    /// Width of the terminal.
    pub fn width(&self) -> u16 {
        self.area().width
    }

    /// Height of the terminal.
    pub fn height(&self) -> u16 {
        self.area().height
    }

    /// Draw a frame.
    pub fn draw<F>(&mut self, f: F)
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f).expect("Failed to draw to terminal");
    }

    /// Render a widget into `area`.
    pub fn render<W: Widget>(&mut self, widget: W, area: Rect) {
        self.draw(|frame| frame.render_widget(widget, area));
    }

    /// Render a stateful widget into `area`.
    pub fn render_stateful<W: StatefulWidget>(&mut self, widget: W, area: Rect, state: &mut W::State) {
        self.draw(|frame| frame.render_stateful_widget(widget, area, state));
    }

    /// Current buffer.
    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Buffer content with rows joined by newlines.
    pub fn content(&self) -> String {
        (0..self.height())
            .map(|y| self.row(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Content of one row with trailing spaces removed.
    pub fn line(&self, y: u16) -> String {
        self.row(y).trim_end().to_string()
    }

    fn row(&self, y: u16) -> String {
        let buffer = self.buffer();
        let area = buffer.area;
        if y >= area.height {
            return String::new();
        }
        (area.x..area.x + area.width)
            .filter_map(|x| buffer.cell((x, area.y + y)))
            .map(Cell::symbol)
            .collect()
    }

    /// A single cell.
    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        self.buffer().cell((x, y))
    }

    /// Cursor position reported by the last frame.
    pub fn cursor(&mut self) -> Position {
        self.terminal.get_cursor_position().expect("Failed to read cursor position")
    }

    /// Assert that the buffer contains the given substring.
    pub fn assert_contains(&self, needle: &str) {
        let content = self.content();
        if !content.contains(needle) {
            panic!("Buffer does not contain \"{}\":\n{}", needle, content);
        }
    }

    /// Assert that the buffer does not contain the given substring.
    pub fn assert_not_contains(&self, needle: &str) {
        let content = self.content();
        if content.contains(needle) {
            panic!("Buffer unexpectedly contains \"{}\":\n{}", needle, content);
        }
    }

    /// Resize the terminal.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal.backend_mut().resize(width, height);
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new(80, 24)
    }
}
