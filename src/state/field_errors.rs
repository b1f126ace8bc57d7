//! Per-field error display state
//!
//! This is what the form shows next to each input after a rejected attempt:
//! the message text, and whether the field is marked invalid.

use crate::contact::{FieldId, FormState};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    messages: BTreeMap<FieldId, String>,
}

impl FieldErrors {
    /// Remove every displayed error. Safe to call repeatedly.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Replace the displayed errors with the findings of `form_state`
    pub fn show(&mut self, form_state: &FormState) {
        self.clear();
        for error in form_state.errors() {
            self.messages.insert(error.field, error.message);
        }
    }

    pub fn message(&self, field: FieldId) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    pub fn is_invalid(&self, field: FieldId) -> bool {
        self.messages.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{FieldState, RawValue};

    fn state_with(invalid: &[(FieldId, &str)]) -> FormState {
        let mut state = FormState::new();
        for id in FieldId::ALL {
            state.insert(id, FieldState::valid(RawValue::default()));
        }
        for (id, message) in invalid {
            state.insert(*id, FieldState::invalid(RawValue::default(), *message));
        }
        state
    }

    #[test]
    fn test_show_marks_only_invalid_fields() {
        let mut errors = FieldErrors::default();
        errors.show(&state_with(&[(FieldId::Email, "bad email")]));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message(FieldId::Email), Some("bad email"));
        assert!(errors.is_invalid(FieldId::Email));
        assert!(!errors.is_invalid(FieldId::Name));
        assert!(errors.message(FieldId::Name).is_none());
    }

    #[test]
    fn test_show_does_not_accumulate() {
        let mut errors = FieldErrors::default();
        errors.show(&state_with(&[(FieldId::Name, "name"), (FieldId::Budget, "budget")]));
        errors.show(&state_with(&[(FieldId::Budget, "budget")]));

        assert_eq!(errors.len(), 1);
        assert!(!errors.is_invalid(FieldId::Name));
        assert!(errors.is_invalid(FieldId::Budget));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut errors = FieldErrors::default();
        errors.show(&state_with(&[(FieldId::Message, "short")]));
        errors.clear();
        errors.clear();
        assert!(errors.is_empty());
    }
}
