//! Aggregate validation result for one submission attempt

use super::error::FieldInvalid;
use super::field::{FieldId, FieldState};
use std::collections::BTreeMap;

/// Per-field results of one attempt. Built fresh for every attempt and
/// never carried over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: BTreeMap<FieldId, FieldState>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldId, state: FieldState) {
        self.fields.insert(field, state);
    }

    pub fn get(&self, field: FieldId) -> Option<&FieldState> {
        self.fields.get(&field)
    }

    /// Fields in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &FieldState)> {
        self.fields.iter().map(|(id, state)| (*id, state))
    }

    /// AND of every field's validity, derived on each call
    pub fn overall_valid(&self) -> bool {
        self.fields.values().all(|state| state.valid)
    }

    pub fn invalid_fields(&self) -> Vec<FieldId> {
        self.iter()
            .filter(|(_, state)| !state.valid)
            .map(|(id, _)| id)
            .collect()
    }

    /// Earliest invalid field in declaration order
    pub fn first_invalid(&self) -> Option<FieldId> {
        self.iter().find(|(_, state)| !state.valid).map(|(id, _)| id)
    }

    /// Findings for every invalid field, in declaration order
    pub fn errors(&self) -> Vec<FieldInvalid> {
        self.iter()
            .filter_map(|(id, state)| state.error(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::RawValue;
    use pretty_assertions::assert_eq;

    fn ok() -> FieldState {
        FieldState::valid(RawValue::from("ok"))
    }

    fn bad(message: &str) -> FieldState {
        FieldState::invalid(RawValue::default(), message)
    }

    #[test]
    fn test_empty_state_is_valid() {
        assert!(FormState::new().overall_valid());
        assert!(FormState::new().first_invalid().is_none());
    }

    #[test]
    fn test_overall_valid_tracks_fields() {
        let mut state = FormState::new();
        state.insert(FieldId::Name, ok());
        assert!(state.overall_valid());

        state.insert(FieldId::Email, bad("nope"));
        assert!(!state.overall_valid());

        state.insert(FieldId::Email, ok());
        assert!(state.overall_valid());
    }

    #[test]
    fn test_first_invalid_follows_declaration_order() {
        let mut state = FormState::new();
        // Inserted out of order on purpose
        state.insert(FieldId::Interests, bad("interests"));
        state.insert(FieldId::Message, bad("message"));
        state.insert(FieldId::Name, ok());
        state.insert(FieldId::Company, bad("company"));

        assert_eq!(state.first_invalid(), Some(FieldId::Company));
        assert_eq!(
            state.invalid_fields(),
            vec![FieldId::Company, FieldId::Message, FieldId::Interests]
        );
    }

    #[test]
    fn test_errors_keep_individual_messages() {
        let mut state = FormState::new();
        state.insert(FieldId::Budget, bad("budget missing"));
        state.insert(FieldId::Name, bad("name missing"));

        assert_eq!(
            state.errors(),
            vec![
                FieldInvalid::new(FieldId::Name, "name missing"),
                FieldInvalid::new(FieldId::Budget, "budget missing"),
            ]
        );
    }
}
