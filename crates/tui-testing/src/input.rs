//! Key input simulation for testing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A sequence of key events for testing.
#[derive(Debug, Clone, Default)]
pub struct InputSequence {
    events: Vec<KeyEvent>,
}

impl InputSequence {
    /// Create a new empty input sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key event.
    pub fn key(&mut self, key: KeyCode) -> &mut Self {
        self.key_mod(key, KeyModifiers::NONE)
    }

    /// Add a key event with modifiers.
    pub fn key_mod(&mut self, key: KeyCode, modifiers: KeyModifiers) -> &mut Self {
        self.events.push(KeyEvent::new(key, modifiers));
        self
    }

    /// Add a character key event.
    pub fn char(&mut self, c: char) -> &mut Self {
        self.key(KeyCode::Char(c))
    }

    /// Add a text string as character events.
    pub fn text(&mut self, s: &str) -> &mut Self {
        for c in s.chars() {
            self.char(c);
        }
        self
    }

    /// Add a Ctrl+key event.
    pub fn ctrl(&mut self, c: char) -> &mut Self {
        self.key_mod(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Add an Enter key event.
    pub fn enter(&mut self) -> &mut Self {
        self.key(KeyCode::Enter)
    }

    /// Add an Escape key event.
    pub fn esc(&mut self) -> &mut Self {
        self.key(KeyCode::Esc)
    }

    /// Add a Tab key event.
    pub fn tab(&mut self) -> &mut Self {
        self.key(KeyCode::Tab)
    }

    /// Add a Shift+Tab key event.
    pub fn shift_tab(&mut self) -> &mut Self {
        self.key_mod(KeyCode::BackTab, KeyModifiers::SHIFT)
    }

    /// Add a Backspace key event.
    pub fn backspace(&mut self) -> &mut Self {
        self.key(KeyCode::Backspace)
    }

    /// Add `n` Backspace key events.
    pub fn backspaces(&mut self, n: usize) -> &mut Self {
        for _ in 0..n {
            self.backspace();
        }
        self
    }

    /// Add a Delete key event.
    pub fn delete(&mut self) -> &mut Self {
        self.key(KeyCode::Delete)
    }

    /// Add a Left key event.
    pub fn left(&mut self) -> &mut Self {
        self.key(KeyCode::Left)
    }

    /// Add a Right key event.
    pub fn right(&mut self) -> &mut Self {
        self.key(KeyCode::Right)
    }

    /// Add a Home key event.
    pub fn home(&mut self) -> &mut Self {
        self.key(KeyCode::Home)
    }

    /// Add an End key event.
    pub fn end(&mut self) -> &mut Self {
        self.key(KeyCode::End)
    }

    /// The key events in order.
    pub fn events(&self) -> &[KeyEvent] {
        &self.events
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Feed every event to `handler`, returning how many it consumed.
    pub fn feed<F>(&self, mut handler: F) -> usize
    where
        F: FnMut(KeyEvent) -> bool,
    {
        self.events.iter().filter(|event| handler(**event)).count()
    }
}
