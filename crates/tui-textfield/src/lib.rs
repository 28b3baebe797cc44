//! # tui-textfield
//!
//! A text input for terminal UIs that renders an inline error label beneath
//! itself, plus validation rules whose messages feed that label.
//!
//! ## Components
//!
//! - [`TextField`] / [`TextFieldState`] - the field widget and its state
//! - [`Rule`] - email, password and username validation rules
//!
//! ## Architecture
//!
//! The field is built by composition: a [`BackingView`] carries background and
//! border, the text area is inset inside it, and an [`ErrorLabel`] sits below.
//! Setting an error is a plain display setter; the field never validates on
//! its own. Callers run a [`Rule`] and pass the first failure to
//! [`TextFieldState::set_error`].

mod field;
mod validation;

pub use field::wrap;
pub use field::{
    Accessory, BackingView, ErrorLabel, FieldStyle, TextField, TextFieldState, SECURE_MASK,
};
pub use validation::{
    Check, Rule, ValidationError, ValidationResult, CONTAINS_DIGIT_PATTERN, EMAIL_PATTERN,
    PASSWORD_MIN_LENGTH, USERNAME_MIN_LENGTH,
};
