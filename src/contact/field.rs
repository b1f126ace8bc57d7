//! Field identities and per-field evaluation results

use super::error::FieldInvalid;

/// Identity of one contact form field.
///
/// Variants are declared in form order; the derived `Ord` is what focus
/// targeting and error ordering rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    Email,
    Company,
    Budget,
    Message,
    Interests,
}

impl FieldId {
    /// All fields in declaration order
    pub const ALL: [FieldId; 6] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Company,
        FieldId::Budget,
        FieldId::Message,
        FieldId::Interests,
    ];

    /// Stable machine key, matching the form's input names
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Budget => "budget",
            Self::Message => "message",
            Self::Interests => "interests",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Company => "Company",
            Self::Budget => "Budget",
            Self::Message => "Project details",
            Self::Interests => "Interests",
        }
    }

    /// Position of this field in declaration order
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw value of a field as read from the live form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// Free text or a single-select value (empty when nothing is selected)
    Text(String),
    /// Multi-select values in the order they were picked
    Selection(Vec<String>),
}

impl Default for RawValue {
    fn default() -> Self {
        RawValue::Text(String::new())
    }
}

impl RawValue {
    /// Text content (empty for selections)
    pub fn as_text(&self) -> &str {
        match self {
            RawValue::Text(s) => s,
            RawValue::Selection(_) => "",
        }
    }

    /// Selected values (empty for text)
    pub fn selection(&self) -> &[String] {
        match self {
            RawValue::Selection(values) => values,
            RawValue::Text(_) => &[],
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<Vec<String>> for RawValue {
    fn from(values: Vec<String>) -> Self {
        RawValue::Selection(values)
    }
}

/// Evaluated validity of one field for one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub value: RawValue,
    pub valid: bool,
    /// Empty when valid
    pub message: String,
}

impl FieldState {
    pub fn valid(value: RawValue) -> Self {
        Self {
            value,
            valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(value: RawValue, message: impl Into<String>) -> Self {
        Self {
            value,
            valid: false,
            message: message.into(),
        }
    }

    /// The finding for this field, if it failed its rule
    pub fn error(&self, field: FieldId) -> Option<FieldInvalid> {
        (!self.valid).then(|| FieldInvalid::new(field, self.message.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order() {
        let mut shuffled = vec![
            FieldId::Interests,
            FieldId::Budget,
            FieldId::Name,
            FieldId::Message,
            FieldId::Company,
            FieldId::Email,
        ];
        shuffled.sort();
        assert_eq!(shuffled, FieldId::ALL.to_vec());
    }

    #[test]
    fn test_index_matches_all() {
        for (i, field) in FieldId::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_display_uses_key() {
        assert_eq!(FieldId::Interests.to_string(), "interests");
    }

    #[test]
    fn test_raw_value_accessors() {
        let text = RawValue::from("hello");
        assert_eq!(text.as_text(), "hello");
        assert!(text.selection().is_empty());

        let picked = RawValue::from(vec!["web".to_string()]);
        assert_eq!(picked.as_text(), "");
        assert_eq!(picked.selection(), ["web".to_string()]);
    }

    #[test]
    fn test_field_state_error() {
        let ok = FieldState::valid(RawValue::from("Al"));
        assert!(ok.error(FieldId::Name).is_none());

        let bad = FieldState::invalid(RawValue::from(""), "Please enter your name.");
        let err = bad.error(FieldId::Name).unwrap();
        assert_eq!(err.field, FieldId::Name);
        assert_eq!(err.message, "Please enter your name.");
    }
}
