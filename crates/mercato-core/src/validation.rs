//! Validation utilities.

use crate::MercatoError;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `MercatoError` on failure.
    fn validate_request(&self) -> Result<(), MercatoError> {
        self.validate().map_err(validation_errors_to_mercato_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to a `MercatoError`.
#[must_use]
pub fn validation_errors_to_mercato_error(errors: ValidationErrors) -> MercatoError {
    let message = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let detail = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string());
                format!("{}: {}", field, detail)
            })
        })
        .collect::<Vec<_>>()
        .join("; ");

    MercatoError::Validation(message)
}
