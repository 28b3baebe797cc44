//! End-to-end rendering of text fields driven by key input.

use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::Color;
use tui_testing::{InputSequence, TestTerminal};
use tui_textfield::{Accessory, Rule, TextField, TextFieldState};

fn validate(state: &mut TextFieldState) {
    if let Some(rule) = state.validation_rule() {
        let error = rule.validate(state.text()).err().map(|e| e.message);
        state.set_error(error);
    }
}

#[test]
fn typing_then_validating_shows_error_label() {
    let mut terminal = TestTerminal::new(30, 4);
    let mut email = TextFieldState::new().placeholder("Email").rule(Rule::Email);
    email.focus();
    terminal.render_stateful(TextField::new(), Rect::new(0, 0, 30, 3), &mut email);
    terminal.assert_contains("Email");

    let mut input = InputSequence::new();
    input.text("not-an-email");
    assert_eq!(input.feed(|key| email.handle_key(key)), 12);

    validate(&mut email);
    let area = Rect::new(0, 0, 30, email.intrinsic_size().height);
    terminal.render_stateful(TextField::new(), area, &mut email);

    assert_eq!(terminal.line(1), "│ not-an-email               │");
    assert_eq!(terminal.line(3), "Email is not valid.");
    assert_eq!(terminal.cell(0, 0).map(|c| c.fg), Some(Color::Red));
}

#[test]
fn fixing_input_clears_error_and_shrinks() {
    let mut terminal = TestTerminal::new(30, 4);
    let mut email = TextFieldState::new().rule(Rule::Email).text_value("a@b");
    email.focus();
    terminal.render_stateful(TextField::new(), terminal.area(), &mut email);

    validate(&mut email);
    assert_eq!(email.intrinsic_size().height, 4);

    let mut input = InputSequence::new();
    input.text(".com");
    input.feed(|key| email.handle_key(key));
    validate(&mut email);

    assert!(!email.has_error());
    assert_eq!(email.intrinsic_size().height, 3);

    terminal.render_stateful(TextField::new(), terminal.area(), &mut email);
    terminal.assert_not_contains("Email is not valid.");
}

#[test]
fn password_field_masks_and_reports_length_first() {
    let mut terminal = TestTerminal::new(50, 5);
    let mut password = TextFieldState::new().secure(true).rule(Rule::Password);
    password.focus();

    let mut input = InputSequence::new();
    input.text("abc");
    input.feed(|key| password.handle_key(key));
    validate(&mut password);

    terminal.render_stateful(TextField::new(), terminal.area(), &mut password);
    terminal.assert_contains("•••");
    terminal.assert_not_contains("abc");
    terminal.assert_contains("Password have to contain at least 8 symbols");
}

#[test]
fn narrow_field_wraps_error_over_several_lines() {
    let mut terminal = TestTerminal::new(20, 6);
    let mut username = TextFieldState::new().rule(Rule::Username).text_value("abc");
    terminal.render_stateful(TextField::new(), terminal.area(), &mut username);

    validate(&mut username);
    assert_eq!(username.error_height(), 3);
    assert_eq!(username.intrinsic_size().height, 6);

    terminal.render_stateful(TextField::new(), terminal.area(), &mut username);
    assert_eq!(terminal.line(3), "Username have to");
    assert_eq!(terminal.line(4), "contain at least 5");
    assert_eq!(terminal.line(5), "symbols");
}

#[test]
fn focused_field_places_cursor() {
    let mut terminal = TestTerminal::new(20, 3);
    let mut field = TextFieldState::new().text_value("abc");
    field.focus();

    terminal.draw(|frame| {
        frame.render_stateful_widget(TextField::new(), frame.area(), &mut field);
        if let Some(position) = field.cursor_position() {
            frame.set_cursor_position(position);
        }
    });

    assert_eq!(terminal.cursor(), Position { x: 5, y: 1 });
}

#[test]
fn stacked_fields_follow_intrinsic_height() {
    let mut terminal = TestTerminal::new(30, 8);
    let mut first = TextFieldState::new().accessory(Accessory::Label("@".into()));
    let mut second = TextFieldState::new().placeholder("second");
    first.set_error(Some("Email is not valid."));

    terminal.draw(|frame| {
        let [a, b] = Layout::vertical([
            Constraint::Length(first.height_for_width(30)),
            Constraint::Length(second.height_for_width(30)),
        ])
        .areas(frame.area());
        frame.render_stateful_widget(TextField::new(), a, &mut first);
        frame.render_stateful_widget(TextField::new(), b, &mut second);
    });

    assert_eq!(terminal.line(1), "│                          @ │");
    assert_eq!(terminal.line(3), "Email is not valid.");
    assert_eq!(terminal.line(5), "│ second                     │");
}
