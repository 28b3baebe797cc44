//! Testing utilities for TUI widgets.
//!
//! - [`TestTerminal`] renders widgets into an in-memory buffer
//! - [`InputSequence`] builds key input and feeds it to a handler

pub mod input;
pub mod terminal;

pub use input::InputSequence;
pub use terminal::TestTerminal;
