//! Signup form field rules.
//!
//! DESIGN
//! ======
//! Every rule is a pure function over a `FieldValues` snapshot. Rules are
//! checked in a fixed order and the first failure is reported, so each field
//! has at most one visible error. Display and clearing of errors belong to
//! `state::form`.
//!
//! Lengths count UTF-16 code units, the unit browsers report for input
//! values, so a character outside the Basic Multilingual Plane counts as two.
//! Trimming strips Unicode whitespace plus U+FEFF. Password characters outside
//! the four required classes are accepted and simply count toward length.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Minimum trimmed name length.
pub const NAME_MIN_CHARS: usize = 3;

/// Minimum password length.
pub const PASSWORD_MIN_CHARS: usize = 8;

/// Characters satisfying the password special-character rule.
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*";

// No whitespace (or U+FEFF) anywhere, one `@`, and a dot with text on both
// sides after it.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$").expect("email pattern is valid")
});

/// The four validated signup fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// All fields in submit-time validation order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Password, Self::ConfirmPassword];

    /// DOM id of the field's input. The error container is `{id}Error`.
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    /// HTML input type.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Name => "text",
            Self::Email => "email",
            Self::Password | Self::ConfirmPassword => "password",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Password => 2,
            Self::ConfirmPassword => 3,
        }
    }
}

/// Current text of every signup field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FieldValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
        }
    }

    /// Empty every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// First failing rule for a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    NameRequired,
    NameTooShort,
    EmailRequired,
    EmailInvalid,
    PasswordRequired,
    PasswordTooShort,
    PasswordMissingUppercase,
    PasswordMissingLowercase,
    PasswordMissingDigit,
    PasswordMissingSpecial,
    ConfirmRequired,
    PasswordMismatch,
}

impl FieldError {
    /// User-facing message shown in the field's error container.
    pub fn message(self) -> &'static str {
        match self {
            Self::NameRequired => "Name is required.",
            Self::NameTooShort => "Name must be at least 3 characters long.",
            Self::EmailRequired => "Email is required.",
            Self::EmailInvalid => "Please enter a valid email address.",
            Self::PasswordRequired => "Password is required.",
            Self::PasswordTooShort => "Password must be at least 8 characters long.",
            Self::PasswordMissingUppercase => "Password must contain at least one uppercase letter.",
            Self::PasswordMissingLowercase => "Password must contain at least one lowercase letter.",
            Self::PasswordMissingDigit => "Password must contain at least one number.",
            Self::PasswordMissingSpecial => "Password must contain at least one special character (!@#$%^&*).",
            Self::ConfirmRequired => "Please confirm your password.",
            Self::PasswordMismatch => "Passwords do not match.",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Run the rule set for `field` against the current snapshot.
pub fn check(field: Field, values: &FieldValues) -> Result<(), FieldError> {
    match field {
        Field::Name => check_name(&values.name),
        Field::Email => check_email(&values.email),
        Field::Password => check_password(&values.password),
        Field::ConfirmPassword => check_confirm_password(&values.confirm_password, &values.password),
    }
}

/// Strip leading and trailing whitespace, including the byte-order mark.
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Length as the browser counts it.
pub fn input_len(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn check_name(value: &str) -> Result<(), FieldError> {
    let trimmed = trim_input(value);
    if trimmed.is_empty() {
        return Err(FieldError::NameRequired);
    }
    if input_len(trimmed) < NAME_MIN_CHARS {
        return Err(FieldError::NameTooShort);
    }
    Ok(())
}

pub fn check_email(value: &str) -> Result<(), FieldError> {
    let trimmed = trim_input(value);
    if trimmed.is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !EMAIL_PATTERN.is_match(trimmed) {
        return Err(FieldError::EmailInvalid);
    }
    Ok(())
}

/// Password is checked untrimmed; surrounding spaces count toward length.
pub fn check_password(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::PasswordRequired);
    }
    if input_len(value) < PASSWORD_MIN_CHARS {
        return Err(FieldError::PasswordTooShort);
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(FieldError::PasswordMissingUppercase);
    }
    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(FieldError::PasswordMissingLowercase);
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Err(FieldError::PasswordMissingDigit);
    }
    if !value.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)) {
        return Err(FieldError::PasswordMissingSpecial);
    }
    Ok(())
}

pub fn check_confirm_password(value: &str, password: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::ConfirmRequired);
    }
    if value != password {
        return Err(FieldError::PasswordMismatch);
    }
    Ok(())
}
