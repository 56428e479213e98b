//! Contact form payload and validation.
//!
//! Submission is simulated by the API layer; nothing here is stored or sent.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::CoreError;

/// Fixed delay of the simulated submission, in milliseconds.
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "not_blank"), email)]
    pub email: String,
    #[validate(custom(function = "not_blank"))]
    pub subject: String,
    #[validate(custom(function = "not_blank"))]
    pub message: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

impl ContactMessage {
    /// Validate every field, naming the offending ones in the error.
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate().map_err(|errors| {
            let mut fields: Vec<String> = errors
                .field_errors()
                .keys()
                .map(|field| field.to_string())
                .collect();
            fields.sort();
            CoreError::Validation(format!("Invalid contact form fields: {}", fields.join(", ")))
        })
    }
}
