//! Validation rules that produce error messages for a text field.
//!
//! A [`Rule`] is a closed set of named rules. Each rule expands to an ordered
//! list of [`Check`]s; the first failing check supplies the message a caller
//! typically shows with [`TextFieldState::set_error`].
//!
//! [`TextFieldState::set_error`]: crate::TextFieldState::set_error

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Standard email pattern.
pub const EMAIL_PATTERN: &str = r"^[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$";

/// Matches input containing at least one digit.
pub const CONTAINS_DIGIT_PATTERN: &str = r"\d";

/// Minimum password length in characters.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Minimum username length in characters.
pub const USERNAME_MIN_LENGTH: usize = 5;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

static DIGIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CONTAINS_DIGIT_PATTERN).expect("digit pattern compiles"));

/// A failed check, carrying the message to display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Human-readable message
    pub message: String,
}

impl ValidationError {
    /// Create a validation error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Outcome of running every check of a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// All checks passed
    Valid,
    /// Failures in check order
    Invalid(Vec<ValidationError>),
}

impl ValidationResult {
    /// Whether every check passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// All failures, in check order.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// The failure a field should display.
    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors().first()
    }

    /// Merge another result into this one, keeping order.
    pub fn merge(self, other: ValidationResult) -> ValidationResult {
        match (self, other) {
            (Self::Valid, Self::Valid) => Self::Valid,
            (Self::Valid, invalid) | (invalid, Self::Valid) => invalid,
            (Self::Invalid(mut a), Self::Invalid(b)) => {
                a.extend(b);
                Self::Invalid(a)
            }
        }
    }
}

/// One atomic predicate within a rule.
#[derive(Clone)]
pub enum Check {
    /// Input must match the pattern
    Pattern { regex: Regex, message: String },
    /// Input must have at least `min` characters
    MinLength { min: usize, message: String },
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern { regex, message } => {
                write!(f, "Pattern({}, {:?})", regex.as_str(), message)
            }
            Self::MinLength { min, message } => write!(f, "MinLength({}, {:?})", min, message),
        }
    }
}

impl Check {
    /// Create a pattern check from a compiled regex.
    pub fn pattern(regex: Regex, message: impl Into<String>) -> Self {
        Self::Pattern {
            regex,
            message: message.into(),
        }
    }

    /// Create a minimum length check.
    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Self::MinLength {
            min,
            message: message.into(),
        }
    }

    /// The message reported when this check fails.
    pub fn message(&self) -> &str {
        match self {
            Self::Pattern { message, .. } | Self::MinLength { message, .. } => message,
        }
    }

    /// Run the check.
    pub fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let passed = match self {
            Self::Pattern { regex, .. } => regex.is_match(input),
            Self::MinLength { min, .. } => input.chars().count() >= *min,
        };

        if passed {
            Ok(())
        } else {
            Err(ValidationError::new(self.message()))
        }
    }
}

/// Named validation rules a field can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Well-formed email address
    Email,
    /// At least 8 characters, at least one digit
    Password,
    /// At least 5 characters
    Username,
}

impl Rule {
    /// Every rule.
    pub const ALL: [Rule; 3] = [Rule::Email, Rule::Password, Rule::Username];

    /// The ordered checks of this rule.
    pub fn checks(&self) -> Vec<Check> {
        match self {
            Self::Email => vec![Check::pattern(EMAIL_REGEX.clone(), "Email is not valid.")],
            Self::Password => vec![
                Check::min_length(
                    PASSWORD_MIN_LENGTH,
                    format!("Password have to contain at least {} symbols", PASSWORD_MIN_LENGTH),
                ),
                Check::pattern(DIGIT_REGEX.clone(), "Password have to contain at less one digit."),
            ],
            Self::Username => vec![Check::min_length(
                USERNAME_MIN_LENGTH,
                format!("Username have to contain at least {} symbols", USERNAME_MIN_LENGTH),
            )],
        }
    }

    /// Validate input, stopping at the first failing check.
    pub fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.checks().iter().try_for_each(|check| check.validate(input))
    }

    /// Validate input against every check, collecting failures in order.
    pub fn validate_all(&self, input: &str) -> ValidationResult {
        let errors: Vec<_> = self
            .checks()
            .iter()
            .filter_map(|check| check.validate(input).err())
            .collect();

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => write!(f, "email"),
            Self::Password => write!(f, "password"),
            Self::Username => write!(f, "username"),
        }
    }
}
