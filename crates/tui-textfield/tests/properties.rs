//! Property tests for field geometry and validation rules.

use proptest::prelude::*;
use ratatui::layout::Rect;
use tui_textfield::{FieldStyle, Rule, TextFieldState};

fn field_in(width: u16) -> TextFieldState {
    let mut state = TextFieldState::new();
    state.layout(Rect::new(0, 0, width, 3));
    state
}

proptest! {
    #[test]
    fn error_always_adds_height(error in "\\PC{1,80}", width in 0u16..120) {
        let mut state = field_in(width);
        let without = state.compute_height();

        state.set_error(Some(error));
        prop_assert!(state.compute_height() > without);
    }

    #[test]
    fn clearing_error_restores_size(error in "\\PC{0,80}", width in 0u16..120) {
        let mut state = field_in(width);
        let before = state.intrinsic_size();

        state.set_error(Some(error));
        state.set_error(None::<String>);
        prop_assert_eq!(state.intrinsic_size(), before);
    }

    #[test]
    fn text_rect_is_inset_by_margin(
        x in 0u16..100,
        y in 0u16..100,
        width in 20u16..200,
        height in 0u16..20,
        margin in 0u16..10,
    ) {
        let style = FieldStyle { horizontal_margin: margin, ..FieldStyle::default() };
        let state = TextFieldState::with_style(style);
        let bounds = Rect::new(x, y, width, height);
        let rect = state.text_rect(bounds);

        prop_assert_eq!(rect.width, width - 2 * margin);
        prop_assert_eq!(rect.x, x + margin);
        prop_assert_eq!(rect.height, height);
    }

    #[test]
    fn error_label_sits_at_bottom(error in "[a-z ]{1,60}", width in 1u16..80) {
        let mut state = TextFieldState::new();
        state.set_error(Some(error));
        let bounds = Rect::new(0, 0, width, 40);
        let rect = state.error_label_rect(bounds);

        prop_assert_eq!(rect.bottom(), bounds.bottom());
        prop_assert!(rect.width <= width);
        prop_assert_eq!(rect.height, state.text_rect(bounds).height.abs_diff(bounds.height));
    }

    #[test]
    fn username_length_boundary(name in "[a-z]{0,12}") {
        let valid = Rule::Username.validate(&name).is_ok();
        prop_assert_eq!(valid, name.chars().count() >= 5);
    }

    #[test]
    fn password_reports_length_first(password in "[a-z0-9]{0,7}") {
        let err = Rule::Password.validate(&password).unwrap_err();
        prop_assert_eq!(err.message, "Password have to contain at least 8 symbols");
    }

    #[test]
    fn password_needs_a_digit(letters in "[a-z]{8,16}", digit in 0u8..10) {
        let err = Rule::Password.validate(&letters).unwrap_err();
        prop_assert_eq!(err.message, "Password have to contain at less one digit.");

        let with_digit = format!("{}{}", letters, digit);
        prop_assert!(Rule::Password.validate(&with_digit).is_ok());
    }
}
