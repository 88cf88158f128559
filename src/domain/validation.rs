//! Input validation shared by every DTO.
//!
//! Rules are declared per field with `validator` attributes; this module
//! holds the custom rules and the single routine that evaluates them.

use validator::{Validate, ValidationError};

use crate::errors::{AppError, AppResult, FieldError};

const BLANK_CODE: &str = "not_blank";

/// Rejects values that are empty after trimming.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(BLANK_CODE));
    }
    Ok(())
}

/// Evaluate the declared rules of `input`.
///
/// Every failing field is reported (sorted by field name) with one message.
/// A blank value reports the blank rule's message ahead of any shape rule.
pub fn validate_input<T: Validate>(input: &T) -> AppResult<()> {
    input
        .validate()
        .map_err(|e| AppError::Validation(collect_field_errors(&e)))
}

fn collect_field_errors(errors: &validator::ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .filter_map(|(field, errs)| {
            let error = errs
                .iter()
                .find(|e| e.code == BLANK_CODE)
                .or_else(|| errs.first())?;
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid", field));
            Some(FieldError::new(field.to_string(), message))
        })
        .collect();

    fields.sort_by(|a, b| a.field.cmp(&b.field));
    fields
}
