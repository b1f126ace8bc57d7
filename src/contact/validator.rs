//! Per-field validation rules

use super::field::{FieldId, FieldState, RawValue};
use once_cell::sync::Lazy;
use regex::Regex;

/// Characters a browser strips when trimming form input: the Unicode space
/// separators, the ASCII controls `\t` to `\r`, the line and paragraph
/// separators and the byte order mark. U+0085 is not among them.
const INPUT_WHITESPACE: &str =
    r"\t\n\x0B\f\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Loose structural email check: `local@domain.tld`, no whitespace or extra `@`.
/// Not an RFC 5322 grammar and must not become one.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^@{INPUT_WHITESPACE}]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("valid email regex")
});

/// Whitespace as form input sees it
pub fn is_input_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Strip leading and trailing input whitespace
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(is_input_whitespace)
}

/// Length of `value` in UTF-16 code units, the unit browsers count in
pub fn input_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// A validation rule. All text rules trim before checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Trimmed text is at least this long, in UTF-16 code units
    MinChars(usize),
    /// Trimmed text has the shape of an email address
    EmailShape,
    /// A single-select has a non-empty value
    Selected,
    /// A multi-select has at least this many values
    MinSelections(usize),
}

impl Rule {
    /// Returns true if `value` satisfies the rule
    pub fn check(&self, value: &RawValue) -> bool {
        match self {
            Rule::MinChars(min) => input_len(trim_input(value.as_text())) >= *min,
            Rule::EmailShape => EMAIL_SHAPE.is_match(trim_input(value.as_text())),
            Rule::Selected => !trim_input(value.as_text()).is_empty(),
            Rule::MinSelections(min) => value.selection().len() >= *min,
        }
    }
}

/// Rule and failure message for each field
pub fn rule_for(field: FieldId) -> (Rule, &'static str) {
    match field {
        FieldId::Name => (Rule::MinChars(2), "Please enter your name."),
        FieldId::Email => (Rule::EmailShape, "Please enter a valid email address."),
        FieldId::Company => (Rule::MinChars(2), "Please enter your company name."),
        FieldId::Budget => (Rule::Selected, "Please select a budget range."),
        FieldId::Message => (
            Rule::MinChars(20),
            "Please share a bit more detail (at least 20 characters).",
        ),
        FieldId::Interests => (
            Rule::MinSelections(1),
            "Please select at least one service interest.",
        ),
    }
}

/// Pure rule evaluation for contact form fields
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldValidator;

impl FieldValidator {
    /// Validate `value` against the built-in rule for `field`
    pub fn validate(field: FieldId, value: RawValue) -> FieldState {
        let (rule, message) = rule_for(field);
        Self::apply(rule, message, value)
    }

    /// Validate `value` against an explicit rule
    pub fn apply(rule: Rule, message: &str, value: RawValue) -> FieldState {
        if rule.check(&value) {
            FieldState::valid(value)
        } else {
            FieldState::invalid(value, message)
        }
    }
}
