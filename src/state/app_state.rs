//! Application state definitions

use super::field_errors::FieldErrors;
use super::forms::ContactForm;
use crate::contact::StatusReporter;

/// Everything the UI renders
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Live field values and focus
    pub form: ContactForm,
    /// Error text and invalid markers from the last rejected attempt
    pub errors: FieldErrors,
    /// Outcome message of the last attempt
    pub status: StatusReporter,
    /// `mailto:` link of the last accepted attempt
    pub last_link: Option<String>,
}

impl AppState {
    pub fn new(form: ContactForm) -> Self {
        Self {
            form,
            ..Default::default()
        }
    }
}
