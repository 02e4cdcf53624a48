//! Field validation rules
//!
//! Every rule runs on every call; the result only holds failing fields.

use super::field::{Field, FormData};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;

/// `local@domain.tld`: no whitespace or `@` in any part, exactly one required dot
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Optional `+`, then at least ten digits, ASCII spaces or hyphens.
/// Counts characters, not digits: ten hyphens pass.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9 \-]{10,}$").expect("phone pattern compiles"));

/// Why a field was rejected. `Display` is the inline message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("Enter a valid phone number (min 10 digits)")]
    InvalidPhone,
}

/// Failing fields and their messages. A missing key means the field is valid.
pub type ErrorMap = BTreeMap<Field, FieldError>;

/// Validate all three fields.
pub fn validate(form: &FormData) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if form.name.trim().is_empty() {
        errors.insert(Field::Name, FieldError::NameRequired);
    }
    if !EMAIL_PATTERN.is_match(&form.email) {
        errors.insert(Field::Email, FieldError::InvalidEmail);
    }
    if !PHONE_PATTERN.is_match(&form.phone) {
        errors.insert(Field::Phone, FieldError::InvalidPhone);
    }

    errors
}
