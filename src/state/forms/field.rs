//! Form field value objects

use crate::contact::{FieldId, RawValue};

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Single-select; `None` until the user picks an option
    Choice {
        options: Vec<String>,
        selected: Option<usize>,
    },
    /// Multi-select; `checked` holds option indices in the order they were ticked
    Checklist {
        options: Vec<String>,
        checked: Vec<usize>,
        cursor: usize,
    },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Input widget kind of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Choice,
    Checklist,
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub label: String,
    pub value: FieldValue,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(id: FieldId, is_multiline: bool) -> Self {
        Self {
            id,
            label: id.label().to_string(),
            value: FieldValue::Text(String::new()),
            is_multiline,
        }
    }

    /// Create a new single-select field
    pub fn choice(id: FieldId, options: Vec<String>) -> Self {
        Self {
            id,
            label: id.label().to_string(),
            value: FieldValue::Choice {
                options,
                selected: None,
            },
            is_multiline: false,
        }
    }

    /// Create a new multi-select field
    pub fn checklist(id: FieldId, options: Vec<String>) -> Self {
        Self {
            id,
            label: id.label().to_string(),
            value: FieldValue::Checklist {
                options,
                checked: Vec::new(),
                cursor: 0,
            },
            is_multiline: false,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self.value {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Choice { .. } => FieldKind::Choice,
            FieldValue::Checklist { .. } => FieldKind::Checklist,
        }
    }

    /// Get the text value (empty for select fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    /// Snapshot of the value the way the submission pipeline reads it
    pub fn raw_value(&self) -> RawValue {
        match &self.value {
            FieldValue::Text(s) => RawValue::Text(s.clone()),
            FieldValue::Choice { options, selected } => RawValue::Text(
                selected
                    .and_then(|i| options.get(i))
                    .cloned()
                    .unwrap_or_default(),
            ),
            FieldValue::Checklist {
                options, checked, ..
            } => RawValue::Selection(
                checked
                    .iter()
                    .filter_map(|i| options.get(*i).cloned())
                    .collect(),
            ),
        }
    }

    /// Append pasted text. Carriage returns are dropped, and single-line
    /// fields drop newlines as well.
    pub fn push_str(&mut self, text: &str) {
        for c in text.chars().filter(|c| *c != '\r') {
            self.push_char(c);
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            if c != '\n' || self.is_multiline {
                s.push(c);
            }
        }
    }

    /// Remove the last character, or drop the selection of a single-select
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Choice { selected, .. } => *selected = None,
            FieldValue::Checklist { .. } => {}
        }
    }

    /// Select the next option (single-select) or move the cursor down (multi-select)
    pub fn next_option(&mut self) {
        match &mut self.value {
            FieldValue::Choice { options, selected } if !options.is_empty() => {
                *selected = Some(match *selected {
                    Some(i) => (i + 1) % options.len(),
                    None => 0,
                });
            }
            FieldValue::Checklist {
                options, cursor, ..
            } if !options.is_empty() => {
                *cursor = (*cursor + 1) % options.len();
            }
            _ => {}
        }
    }

    /// Select the previous option (single-select) or move the cursor up (multi-select)
    pub fn prev_option(&mut self) {
        match &mut self.value {
            FieldValue::Choice { options, selected } if !options.is_empty() => {
                *selected = Some(match *selected {
                    Some(0) | None => options.len() - 1,
                    Some(i) => i - 1,
                });
            }
            FieldValue::Checklist {
                options, cursor, ..
            } if !options.is_empty() => {
                *cursor = if *cursor == 0 {
                    options.len() - 1
                } else {
                    *cursor - 1
                };
            }
            _ => {}
        }
    }

    /// Tick or untick the option under the cursor
    pub fn toggle_at_cursor(&mut self) {
        if let FieldValue::Checklist {
            options,
            checked,
            cursor,
        } = &mut self.value
        {
            if *cursor >= options.len() {
                return;
            }
            match checked.iter().position(|i| *i == *cursor) {
                Some(pos) => {
                    checked.remove(pos);
                }
                None => checked.push(*cursor),
            }
        }
    }

    /// Clear the field value back to empty/unselected
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice { selected, .. } => *selected = None,
            FieldValue::Checklist {
                checked, cursor, ..
            } => {
                checked.clear();
                *cursor = 0;
            }
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice { options, selected } => selected
                .and_then(|i| options.get(i))
                .map(|o| format!("◀ {o} ▶"))
                .unwrap_or_default(),
            FieldValue::Checklist {
                options, checked, ..
            } => checked
                .iter()
                .filter_map(|i| options.get(*i).map(String::as_str))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budgets() -> Vec<String> {
        vec!["<5k".to_string(), "5k-10k".to_string(), "10k-50k".to_string()]
    }

    fn interests() -> Vec<String> {
        vec!["branding".to_string(), "web".to_string(), "product".to_string()]
    }

    mod text {
        use super::*;

        #[test]
        fn test_push_and_pop() {
            let mut field = FormField::text(FieldId::Name, false);
            field.push_char('A');
            field.push_char('l');
            assert_eq!(field.as_text(), "Al");
            field.pop_char();
            assert_eq!(field.as_text(), "A");
        }

        #[test]
        fn test_single_line_ignores_newline() {
            let mut field = FormField::text(FieldId::Name, false);
            field.push_char('\n');
            assert_eq!(field.as_text(), "");
        }

        #[test]
        fn test_multiline_keeps_newline() {
            let mut field = FormField::text(FieldId::Message, true);
            field.push_char('a');
            field.push_char('\n');
            field.push_char('b');
            assert_eq!(field.raw_value(), RawValue::from("a\nb"));
        }

        #[test]
        fn test_paste_appends_and_normalizes_line_endings() {
            let mut message = FormField::text(FieldId::Message, true);
            message.push_char('>');
            message.push_str("one\r\ntwo");
            assert_eq!(message.as_text(), ">one\ntwo");

            let mut name = FormField::text(FieldId::Name, false);
            name.push_str("Al\r\n");
            assert_eq!(name.as_text(), "Al");
        }

        #[test]
        fn test_paste_into_select_is_ignored() {
            let mut budget = FormField::choice(FieldId::Budget, budgets());
            budget.push_str("10k");
            assert_eq!(budget.raw_value(), RawValue::from(""));
        }

        #[test]
        fn test_kind() {
            assert_eq!(FormField::text(FieldId::Name, false).kind(), FieldKind::Text);
            assert_eq!(FormField::choice(FieldId::Budget, budgets()).kind(), FieldKind::Choice);
            assert_eq!(
                FormField::checklist(FieldId::Interests, interests()).kind(),
                FieldKind::Checklist
            );
        }

        #[test]
        fn test_label_comes_from_field_id() {
            assert_eq!(FormField::text(FieldId::Message, true).label, "Project details");
        }
    }

    mod choice {
        use super::*;

        #[test]
        fn test_starts_unselected() {
            let field = FormField::choice(FieldId::Budget, budgets());
            assert_eq!(field.raw_value(), RawValue::from(""));
            assert_eq!(field.display_value(), "");
        }

        #[test]
        fn test_next_option_cycles() {
            let mut field = FormField::choice(FieldId::Budget, budgets());
            field.next_option();
            assert_eq!(field.raw_value(), RawValue::from("<5k"));
            field.next_option();
            field.next_option();
            assert_eq!(field.raw_value(), RawValue::from("10k-50k"));
            field.next_option();
            assert_eq!(field.raw_value(), RawValue::from("<5k"));
        }

        #[test]
        fn test_prev_option_from_unselected_picks_last() {
            let mut field = FormField::choice(FieldId::Budget, budgets());
            field.prev_option();
            assert_eq!(field.raw_value(), RawValue::from("10k-50k"));
            assert_eq!(field.display_value(), "◀ 10k-50k ▶");
        }

        #[test]
        fn test_pop_char_clears_selection() {
            let mut field = FormField::choice(FieldId::Budget, budgets());
            field.next_option();
            field.pop_char();
            assert_eq!(field.raw_value(), RawValue::from(""));
        }

        #[test]
        fn test_typing_is_ignored() {
            let mut field = FormField::choice(FieldId::Budget, budgets());
            field.push_char('x');
            assert_eq!(field.raw_value(), RawValue::from(""));
        }

        #[test]
        fn test_no_options_is_noop() {
            let mut field = FormField::choice(FieldId::Budget, vec![]);
            field.next_option();
            field.prev_option();
            assert_eq!(field.raw_value(), RawValue::from(""));
        }
    }

    mod checklist {
        use super::*;

        #[test]
        fn test_selection_order_is_kept() {
            let mut field = FormField::checklist(FieldId::Interests, interests());
            field.next_option(); // web
            field.toggle_at_cursor();
            field.prev_option(); // branding
            field.toggle_at_cursor();
            assert_eq!(
                field.raw_value(),
                RawValue::from(vec!["web".to_string(), "branding".to_string()])
            );
            assert_eq!(field.display_value(), "web, branding");
        }

        #[test]
        fn test_toggle_twice_unticks() {
            let mut field = FormField::checklist(FieldId::Interests, interests());
            field.toggle_at_cursor();
            field.toggle_at_cursor();
            assert_eq!(field.raw_value(), RawValue::Selection(vec![]));
        }

        #[test]
        fn test_cursor_wraps() {
            let mut field = FormField::checklist(FieldId::Interests, interests());
            field.prev_option();
            field.toggle_at_cursor();
            assert_eq!(field.raw_value(), RawValue::from(vec!["product".to_string()]));
        }

        #[test]
        fn test_clear_resets_everything() {
            let mut field = FormField::checklist(FieldId::Interests, interests());
            field.next_option();
            field.toggle_at_cursor();
            field.clear();
            assert_eq!(
                field.value,
                FieldValue::Checklist {
                    options: interests(),
                    checked: vec![],
                    cursor: 0,
                }
            );
        }
    }
}
