//! Validation orchestrator

use super::{rules, FieldId, FormSurface};
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of validating one field or the whole form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: BTreeMap<FieldId, String>,
}

impl ValidationResult {
    fn valid() -> Self {
        Self { is_valid: true, errors: BTreeMap::new() }
    }

    fn record(&mut self, id: FieldId, outcome: Result<(), rules::FieldError>) {
        if let Err(err) = outcome {
            self.is_valid = false;
            self.errors.insert(id, err.to_string());
        }
    }

    /// Message for a failing field
    pub fn error(&self, id: FieldId) -> Option<&str> {
        self.errors.get(&id).map(String::as_str)
    }
}

/// Validate every field in one pass.
///
/// All rules run, so every applicable error is shown at once. Error slots are
/// cleared before the pass starts.
pub fn validate_all<S: FormSurface + ?Sized>(surface: &mut S) -> ValidationResult {
    for id in FieldId::ALL {
        surface.clear_field_error(id);
    }

    let mut result = ValidationResult::valid();
    for id in FieldId::ALL {
        let outcome = rules::check(id, &surface.field_value(id));
        if let Err(err) = &outcome {
            surface.set_field_error(id, &err.to_string());
        }
        result.record(id, outcome);
    }

    if !result.is_valid {
        tracing::debug!(
            failed = ?result.errors.keys().collect::<Vec<_>>(),
            "Contact form validation failed"
        );
    }
    result
}

/// Validate a single field, as when it loses focus
pub fn validate_field<S: FormSurface + ?Sized>(surface: &mut S, id: FieldId) -> ValidationResult {
    let outcome = rules::check(id, &surface.field_value(id));
    match &outcome {
        Ok(()) => surface.clear_field_error(id),
        Err(err) => surface.set_field_error(id, &err.to_string()),
    }

    let mut result = ValidationResult::valid();
    result.record(id, outcome);
    result
}

/// Drop a field's error state, as when the user starts typing in it
pub fn clear_field<S: FormSurface + ?Sized>(surface: &mut S, id: FieldId) {
    surface.clear_field_error(id);
}
