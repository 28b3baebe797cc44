//! UI rendering for the sign-up form.

use crate::app::{App, MessageType};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_textfield::TextField;

/// Draw the application.
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Status
        ])
        .split(f.area());

    draw_header(f, chunks[0]);
    draw_form(f, app, chunks[1]);
    draw_status(f, app, chunks[2]);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from("Create an account"))
        .block(Block::default().borders(Borders::ALL).title(" Sign up "))
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(header, area);
}

fn draw_form(f: &mut Frame, app: &mut App, area: Rect) {
    let area = Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    };

    // Each field gets the height its error label needs at this width
    let mut y = area.y;
    for field in &mut app.fields {
        let height = field.state.height_for_width(area.width);
        let bottom = area.bottom();
        if y >= bottom {
            break;
        }
        let rect = Rect::new(area.x, y, area.width, height.min(bottom - y));
        f.render_stateful_widget(
            TextField::new().title(format!(" {} ", field.label)),
            rect,
            &mut field.state,
        );
        y = y.saturating_add(height);
    }

    if let Some(position) = app.focused_field().state.cursor_position() {
        f.set_cursor_position(position);
    }
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let Some((message, kind)) = &app.message else {
        return;
    };
    let color = match kind {
        MessageType::Info => Color::Gray,
        MessageType::Success => Color::Green,
        MessageType::Error => Color::Red,
    };
    f.render_widget(
        Paragraph::new(message.as_str()).style(Style::default().fg(color)),
        area,
    );
}
