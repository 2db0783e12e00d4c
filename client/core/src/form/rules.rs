//! Per-field validation rules
//!
//! Every rule is a pure predicate over one value. A failing rule yields a
//! [`FieldError`] whose `Display` output is the message shown to the user.

use super::{FieldId, FieldValue};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

pub const NAME_MIN_CHARS: usize = 2;
pub const PHONE_MIN_DIGITS: usize = 10;
pub const MESSAGE_MIN_CHARS: usize = 10;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s'-]+$").expect("name pattern compiles"));

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.\S+$").expect("email pattern compiles"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s()+-]+$").expect("phone pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("First name is required")]
    FirstNameRequired,
    #[error("Please enter a valid first name")]
    InvalidFirstName,
    #[error("Last name is required")]
    LastNameRequired,
    #[error("Please enter a valid last name")]
    InvalidLastName,
    #[error("Email address is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Please select a subject")]
    SubjectRequired,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

impl FieldError {
    /// Field the error belongs to
    pub fn field(&self) -> FieldId {
        match self {
            FieldError::FirstNameRequired | FieldError::InvalidFirstName => FieldId::FirstName,
            FieldError::LastNameRequired | FieldError::InvalidLastName => FieldId::LastName,
            FieldError::EmailRequired | FieldError::InvalidEmail => FieldId::Email,
            FieldError::InvalidPhone => FieldId::Phone,
            FieldError::SubjectRequired => FieldId::Subject,
            FieldError::MessageRequired | FieldError::MessageTooShort => FieldId::Message,
        }
    }
}

/// Apply the rule registered for `id`
pub fn check(id: FieldId, value: &FieldValue) -> Result<(), FieldError> {
    let text = value.as_text();
    match id {
        FieldId::FirstName => ensure_valid_name(text, FieldError::FirstNameRequired, FieldError::InvalidFirstName),
        FieldId::LastName => ensure_valid_name(text, FieldError::LastNameRequired, FieldError::InvalidLastName),
        FieldId::Email => ensure_valid_email(text),
        FieldId::Phone => ensure_valid_phone(text),
        FieldId::Subject => ensure_subject_selected(text),
        FieldId::Message => ensure_valid_message(text),
        // Opt-in checkbox, either state is acceptable
        FieldId::Newsletter => Ok(()),
    }
}

fn ensure_valid_name(value: &str, required: FieldError, invalid: FieldError) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(required);
    }

    let len = value.chars().count();
    if len < NAME_MIN_CHARS || !NAME_PATTERN.is_match(value) {
        tracing::debug!(field = %invalid.field(), length = len, "Name validation failed");
        return Err(invalid);
    }
    Ok(())
}

pub fn ensure_valid_email(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::EmailRequired);
    }

    if !EMAIL_PATTERN.is_match(value) {
        tracing::debug!(
            has_at = value.contains('@'),
            has_whitespace = value.chars().any(char::is_whitespace),
            "Email validation failed"
        );
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

pub fn ensure_valid_phone(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }

    let digits = value.chars().filter(char::is_ascii_digit).count();
    if !PHONE_PATTERN.is_match(value) || digits < PHONE_MIN_DIGITS {
        tracing::debug!(digits = digits, "Phone validation failed");
        return Err(FieldError::InvalidPhone);
    }
    Ok(())
}

pub fn ensure_subject_selected(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::SubjectRequired);
    }
    Ok(())
}

pub fn ensure_valid_message(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::MessageRequired);
    }

    let len = value.chars().count();
    if len < MESSAGE_MIN_CHARS {
        tracing::debug!(length = len, "Message validation failed: too short");
        return Err(FieldError::MessageTooShort);
    }
    Ok(())
}
