//! Contact form model
//!
//! The contact form has a fixed set of fields. Fields are addressed through
//! [`FieldId`] rather than string keys, and read/written through the
//! [`FormSurface`] capability so the validation pipeline never depends on a
//! rendering surface.

pub mod rules;
pub mod surface;
pub mod validator;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use rules::FieldError;
pub use surface::{ContactForm, FormSurface};
pub use validator::{clear_field, validate_all, validate_field, ValidationResult};

/// Contact form field identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Phone,
    Subject,
    Message,
    Newsletter,
}

impl FieldId {
    /// Every field, in form order
    pub const ALL: [FieldId; 7] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Subject,
        FieldId::Message,
        FieldId::Newsletter,
    ];

    /// Wire / element identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::FirstName => "firstName",
            FieldId::LastName => "lastName",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Subject => "subject",
            FieldId::Message => "message",
            FieldId::Newsletter => "newsletter",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::FirstName => "First name",
            FieldId::LastName => "Last name",
            FieldId::Email => "Email address",
            FieldId::Phone => "Phone number",
            FieldId::Subject => "Subject",
            FieldId::Message => "Message",
            FieldId::Newsletter => "Newsletter",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current value of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    /// Text content; checkbox values read as empty
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Flag(_) => "",
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, FieldValue::Flag(true))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// Payload sent to `POST /api/contact`
///
/// Built only once every field has passed validation. Text values are the
/// trimmed form input, so leading and trailing whitespace is never sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub newsletter: bool,
}

impl ContactSubmission {
    /// Snapshot the surface's values, trimming text fields
    pub fn from_surface<S: FormSurface + ?Sized>(surface: &S) -> Self {
        let text = |id: FieldId| surface.field_value(id).as_text().trim().to_string();
        Self {
            first_name: text(FieldId::FirstName),
            last_name: text(FieldId::LastName),
            email: text(FieldId::Email),
            phone: text(FieldId::Phone),
            subject: text(FieldId::Subject),
            message: text(FieldId::Message),
            newsletter: surface.field_value(FieldId::Newsletter).is_checked(),
        }
    }
}
