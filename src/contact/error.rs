//! Validation findings

use super::field::FieldId;
use thiserror::Error;

/// A field failed its rule. The only failure the submission pipeline knows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct FieldInvalid {
    pub field: FieldId,
    pub message: String,
}

impl FieldInvalid {
    pub fn new(field: FieldId, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
