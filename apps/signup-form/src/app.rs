//! Application state and logic.

use crate::config::Config;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};
use tui_textfield::{Accessory, FieldStyle, Rule, TextFieldState};
use tui_theme::ThemeManager;

/// One labelled input on the form.
#[derive(Debug)]
pub struct FormField {
    /// Title drawn on the field border.
    pub label: &'static str,
    /// Widget state.
    pub state: TextFieldState,
}

impl FormField {
    fn new(label: &'static str, state: TextFieldState) -> Self {
        Self { label, state }
    }

    /// Run the field's rule and show the first failure, if any.
    pub fn validate(&mut self) -> bool {
        let error = self
            .state
            .validation_rule()
            .and_then(|rule| rule.validate(self.state.text()).err())
            .map(|err| err.message);
        let valid = error.is_none();
        self.state.set_error(error);
        valid
    }
}

/// Status line kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Error,
}

/// Application state.
pub struct App {
    /// Configuration.
    pub config: Config,
    /// Form inputs in focus order.
    pub fields: Vec<FormField>,
    /// Index of the focused field.
    pub focused: usize,
    /// Message to display.
    pub message: Option<(String, MessageType)>,
    /// Set once the user asked to leave.
    pub should_quit: bool,
}

impl App {
    /// Create new application from the on-disk configuration.
    pub fn new() -> anyhow::Result<Self> {
        let config = Config::load();

        // Write a starter file on first run
        if Config::config_path().is_some_and(|path| !path.exists()) {
            if let Err(err) = config.save() {
                warn!("failed to write default config: {}", err);
            }
        }

        Ok(Self::with_config(config))
    }

    /// Create the application from an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        let style = resolve_style(&config);

        let mut fields = vec![
            FormField::new(
                "Username",
                TextFieldState::with_style(style.clone())
                    .placeholder("Username")
                    .rule(Rule::Username),
            ),
            FormField::new(
                "Email",
                TextFieldState::with_style(style.clone())
                    .placeholder("Email")
                    .rule(Rule::Email)
                    .accessory(Accessory::ClearButton),
            ),
            FormField::new(
                "Password",
                TextFieldState::with_style(style)
                    .placeholder("Password")
                    .rule(Rule::Password)
                    .secure(true),
            ),
        ];
        fields[0].state.focus();

        Self {
            config,
            fields,
            focused: 0,
            message: Some(("Tab to move, Enter to submit, Esc to quit".into(), MessageType::Info)),
            should_quit: false,
        }
    }

    /// The focused field.
    pub fn focused_field(&self) -> &FormField {
        &self.fields[self.focused]
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::Down => self.move_focus(1),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(-1),
            KeyCode::Enter => {
                if self.focused + 1 == self.fields.len() {
                    self.submit();
                } else {
                    self.move_focus(1);
                }
            }
            _ => {
                self.fields[self.focused].state.handle_key(key);
            }
        }
    }

    /// Move focus by `delta` fields, wrapping around.
    pub fn move_focus(&mut self, delta: isize) {
        let len = self.fields.len() as isize;
        let next = (self.focused as isize + delta).rem_euclid(len) as usize;
        self.focus_field(next);
    }

    fn focus_field(&mut self, index: usize) {
        if index == self.focused {
            return;
        }
        let validate_on_blur = self.config.validate_on_blur;
        let current = &mut self.fields[self.focused];
        current.state.blur();
        if validate_on_blur && !current.state.text().is_empty() {
            current.validate();
        }

        if self.fields[index].state.focus() {
            self.focused = index;
        }
    }

    /// Validate every field and report the outcome.
    pub fn submit(&mut self) -> bool {
        let mut first_invalid = None;
        for (i, field) in self.fields.iter_mut().enumerate() {
            if !field.validate() && first_invalid.is_none() {
                first_invalid = Some(i);
            }
        }

        match first_invalid {
            Some(index) => {
                let count = self.fields.iter().filter(|f| f.state.has_error()).count();
                self.message = Some((
                    format!("{} field(s) need attention", count),
                    MessageType::Error,
                ));
                self.focus_field(index);
                false
            }
            None => {
                let username = self.fields[0].state.text().to_string();
                info!(%username, "sign-up form submitted");
                self.message = Some((format!("Welcome, {}!", username), MessageType::Success));
                true
            }
        }
    }
}

/// Build the field style from the configured theme and overrides.
fn resolve_style(config: &Config) -> FieldStyle {
    let mut manager = ThemeManager::new();

    if let Some(path) = &config.theme_file {
        match manager.load_file("custom", path) {
            Ok(()) => {
                if let Err(err) = manager.set_theme("custom") {
                    warn!("custom theme unavailable: {}", err);
                }
            }
            Err(err) => warn!(path = %path.display(), "failed to load theme file: {}", err),
        }
    } else if let Err(err) = manager.set_theme(&config.theme) {
        warn!("{}, using {}", err, manager.current_name());
    }

    manager.set_overrides(config.field.clone());
    FieldStyle::from_theme(&manager.field_styles())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;
    use tui_testing::InputSequence;
    use tui_theme::{Color as ThemeColor, FieldOverrides};

    fn app() -> App {
        App::with_config(Config::default())
    }

    fn feed(app: &mut App, seq: &InputSequence) {
        for event in seq.events() {
            app.handle_key(*event);
        }
    }

    #[test]
    fn test_starts_on_username() {
        let app = app();
        assert_eq!(app.focused, 0);
        assert!(app.fields[0].state.is_focused());
        assert!(!app.fields[1].state.is_focused());
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut app = app();
        feed(&mut app, InputSequence::new().tab().tab().tab());
        assert_eq!(app.focused, 0);

        feed(&mut app, InputSequence::new().shift_tab());
        assert_eq!(app.focused, 2);
        assert!(app.fields[2].state.is_focused());
        assert_eq!(app.fields.iter().filter(|f| f.state.is_focused()).count(), 1);
    }

    #[test]
    fn test_blur_validates_non_empty_field() {
        let mut app = app();
        feed(&mut app, InputSequence::new().text("abc").tab());

        assert_eq!(
            app.fields[0].state.error(),
            Some("Username have to contain at least 5 symbols")
        );
        // empty fields are left alone until submit
        feed(&mut app, InputSequence::new().tab());
        assert!(!app.fields[1].state.has_error());
    }

    #[test]
    fn test_blur_validation_can_be_disabled() {
        let mut app = App::with_config(Config {
            validate_on_blur: false,
            ..Config::default()
        });
        feed(&mut app, InputSequence::new().text("abc").tab());
        assert!(!app.fields[0].state.has_error());
    }

    #[test]
    fn test_submit_focuses_first_invalid() {
        let mut app = app();
        feed(&mut app, InputSequence::new().text("alice").tab().text("alice@example.com").tab().text("secret"));
        feed(&mut app, InputSequence::new().enter());

        assert_eq!(app.focused, 2);
        assert_eq!(
            app.fields[2].state.error(),
            Some("Password have to contain at least 8 symbols")
        );
        assert!(matches!(app.message, Some((_, MessageType::Error))));
    }

    #[test]
    fn test_submit_success() {
        let mut app = app();
        feed(
            &mut app,
            InputSequence::new()
                .text("alice")
                .enter()
                .text("alice@example.com")
                .enter()
                .text("password1")
                .enter(),
        );

        assert!(app.fields.iter().all(|f| !f.state.has_error()));
        assert_eq!(
            app.message,
            Some(("Welcome, alice!".to_string(), MessageType::Success))
        );
    }

    #[test]
    fn test_fixing_input_clears_error_on_next_blur() {
        let mut app = app();
        feed(&mut app, InputSequence::new().tab().text("bob@").tab());
        assert!(app.fields[1].state.has_error());

        feed(&mut app, InputSequence::new().shift_tab().text("example.com").tab());
        assert!(!app.fields[1].state.has_error());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        feed(&mut app, InputSequence::new().esc());
        assert!(app.should_quit);

        let mut app = self::app();
        feed(&mut app, InputSequence::new().ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_config_overrides_reach_fields() {
        let app = App::with_config(Config {
            theme: "high-contrast".into(),
            field: FieldOverrides::new().border_error(ThemeColor::hex("#00ff00")),
            ..Config::default()
        });
        assert_eq!(
            app.fields[0].state.style().border_color_error,
            Some(Color::Rgb(0, 255, 0))
        );
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let app = App::with_config(Config {
            theme: "missing".into(),
            ..Config::default()
        });
        assert_eq!(app.fields.len(), 3);
        assert_eq!(
            app.fields[0].state.style().border_color_error,
            Some(Color::Rgb(0xf7, 0x76, 0x8e))
        );
    }
}
