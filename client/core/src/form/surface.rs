//! Form surface capability

use super::{FieldId, FieldValue};
use std::collections::BTreeMap;

/// Where field values are read from and error messages are written to.
///
/// A browser page, a terminal prompt and a test fixture are all surfaces.
pub trait FormSurface {
    /// Current value of a field
    fn field_value(&self, id: FieldId) -> FieldValue;

    /// Mark a field invalid and show `message` in its error slot
    fn set_field_error(&mut self, id: FieldId, message: &str);

    /// Remove any invalid marker and empty the field's error slot
    fn clear_field_error(&mut self, id: FieldId);

    /// Return the form to its initial state. The default only clears errors.
    fn reset(&mut self) {
        for id in FieldId::ALL {
            self.clear_field_error(id);
        }
    }
}

/// In-memory contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub newsletter: bool,
    errors: BTreeMap<FieldId, String>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a field's value. Text assigned to `newsletter` is ignored, as
    /// is a flag assigned to a text field.
    pub fn set_value(&mut self, id: FieldId, value: impl Into<FieldValue>) {
        match (id, value.into()) {
            (FieldId::Newsletter, FieldValue::Flag(checked)) => self.newsletter = checked,
            (FieldId::Newsletter, FieldValue::Text(_)) => {}
            (_, FieldValue::Flag(_)) => {}
            (id, FieldValue::Text(text)) => {
                if let Some(slot) = self.text_slot(id) {
                    *slot = text;
                }
            }
        }
    }

    /// Message currently shown for a field
    pub fn error(&self, id: FieldId) -> Option<&str> {
        self.errors.get(&id).map(String::as_str)
    }

    pub fn is_invalid(&self, id: FieldId) -> bool {
        self.errors.contains_key(&id)
    }

    /// All visible errors, in form order
    pub fn errors(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.errors.iter().map(|(id, msg)| (*id, msg.as_str()))
    }

    /// Empty every value and error slot
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn text_slot(&mut self, id: FieldId) -> Option<&mut String> {
        match id {
            FieldId::FirstName => Some(&mut self.first_name),
            FieldId::LastName => Some(&mut self.last_name),
            FieldId::Email => Some(&mut self.email),
            FieldId::Phone => Some(&mut self.phone),
            FieldId::Subject => Some(&mut self.subject),
            FieldId::Message => Some(&mut self.message),
            FieldId::Newsletter => None,
        }
    }
}

impl FormSurface for ContactForm {
    fn field_value(&self, id: FieldId) -> FieldValue {
        let text = match id {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Subject => &self.subject,
            FieldId::Message => &self.message,
            FieldId::Newsletter => return FieldValue::Flag(self.newsletter),
        };
        FieldValue::Text(text.clone())
    }

    fn set_field_error(&mut self, id: FieldId, message: &str) {
        self.errors.insert(id, message.to_string());
    }

    fn clear_field_error(&mut self, id: FieldId) {
        self.errors.remove(&id);
    }

    fn reset(&mut self) {
        self.clear();
    }
}
