//! Contact form state and field navigation

use super::field::FormField;
use crate::config::ContactConfig;
use crate::contact::{FieldId, FieldSource, RawValue};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
}

/// Index of the Submit button row, after the six fields
pub const SUBMIT_ROW: usize = FieldId::ALL.len();

/// The live contact form. Owns the raw input; the submission pipeline only
/// ever reads it through [`FieldSource`].
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub company: FormField,
    pub budget: FormField,
    pub message: FormField,
    pub interests: FormField,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new(budget_options: Vec<String>, interest_options: Vec<String>) -> Self {
        Self {
            name: FormField::text(FieldId::Name, false),
            email: FormField::text(FieldId::Email, false),
            company: FormField::text(FieldId::Company, false),
            budget: FormField::choice(FieldId::Budget, budget_options),
            message: FormField::text(FieldId::Message, true),
            interests: FormField::checklist(FieldId::Interests, interest_options),
            active_field_index: 0,
        }
    }

    pub fn from_config(config: &ContactConfig) -> Self {
        Self::new(config.budget_options(), config.interest_options())
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Company => &self.company,
            FieldId::Budget => &self.budget,
            FieldId::Message => &self.message,
            FieldId::Interests => &self.interests,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Company => &mut self.company,
            FieldId::Budget => &mut self.budget,
            FieldId::Message => &mut self.message,
            FieldId::Interests => &mut self.interests,
        }
    }

    /// Field under focus, `None` on the Submit row
    pub fn active_field_id(&self) -> Option<FieldId> {
        FieldId::ALL.get(self.active_field_index).copied()
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    /// Move input focus to `id`
    pub fn focus(&mut self, id: FieldId) {
        self.active_field_index = id.index();
    }

    /// Clear every field to empty/unselected and focus the first one
    pub fn reset(&mut self) {
        for id in FieldId::ALL {
            self.field_mut(id).clear();
        }
        self.active_field_index = 0;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::from_config(&ContactConfig::default())
    }
}

impl FieldSource for ContactForm {
    fn raw_value(&self, field: FieldId) -> RawValue {
        self.field(field).raw_value()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        SUBMIT_ROW + 1 // six fields, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let id = self.active_field_id()?;
        Some(self.field_mut(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{FormOrchestrator, Outcome};

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.name.push_str("Al");
        form.email.push_str("al@x.com");
        form.company.push_str("Ex");
        form.budget.next_option();
        form.message
            .push_str("We need a full rebrand and new site within two months.");
        form.interests.toggle_at_cursor();
        form
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = ContactForm::default();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.active_field_id(), Some(FieldId::Name));
            assert!(form.message.is_multiline);
            assert!(!form.name.is_multiline);
        }

        #[test]
        fn test_field_count() {
            assert_eq!(ContactForm::default().field_count(), 7);
        }

        #[test]
        fn test_next_field_reaches_submit_and_wraps() {
            let mut form = ContactForm::default();
            for _ in 0..6 {
                form.next_field();
            }
            assert!(form.is_submit_row_active());
            assert!(form.active_field_id().is_none());
            assert!(form.get_active_field_mut().is_none());
            form.next_field();
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_cycles() {
            let mut form = ContactForm::default();
            form.prev_field();
            assert!(form.is_submit_row_active());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = ContactForm::default();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, SUBMIT_ROW);
        }

        #[test]
        fn test_active_field_follows_declaration_order() {
            let mut form = ContactForm::default();
            for id in FieldId::ALL {
                assert_eq!(form.get_active_field_mut().unwrap().id, id);
                form.next_field();
            }
            assert!(form.get_active_field_mut().is_none());
        }

        #[test]
        fn test_focus_moves_to_field() {
            let mut form = ContactForm::default();
            form.focus(FieldId::Message);
            assert_eq!(form.active_field_id(), Some(FieldId::Message));
            assert_eq!(form.get_active_field_mut().unwrap().id, FieldId::Message);
        }
    }

    mod source {
        use super::*;

        #[test]
        fn test_reads_live_values() {
            let form = filled();
            assert_eq!(form.raw_value(FieldId::Name), RawValue::from("Al"));
            assert_eq!(form.raw_value(FieldId::Budget), RawValue::from("<5k"));
            assert_eq!(
                form.raw_value(FieldId::Interests),
                RawValue::from(vec!["branding".to_string()])
            );
        }

        #[test]
        fn test_filled_form_is_accepted() {
            let outcome = FormOrchestrator::default().attempt_submit(&filled());
            assert!(matches!(outcome, Outcome::Accepted { .. }));
        }

        #[test]
        fn test_reset_clears_everything() {
            let mut form = filled();
            form.focus(FieldId::Interests);
            form.reset();

            for id in FieldId::ALL {
                let raw = form.raw_value(id);
                assert!(raw.as_text().is_empty(), "{id} not cleared");
                assert!(raw.selection().is_empty(), "{id} not cleared");
            }
            assert_eq!(form.active_field_index, 0);
        }
    }
}
