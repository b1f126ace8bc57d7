//! Submission payload and its mailto serialization

use super::error::FieldInvalid;
use super::field::{FieldId, FieldState};
use super::form_state::FormState;
use super::validator::{rule_for, trim_input};

/// Fixed recipient of every inquiry
pub const RECIPIENT: &str = "hello@brivity.studio";

/// Separator used when joining interests
pub const INTEREST_SEPARATOR: &str = ", ";

/// Marks a mail client expects literally in a query component
const UNESCAPED_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Percent-encode a query component. Leaves `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
/// as they are and escapes every other UTF-8 byte.
pub fn encode_component(value: &str) -> String {
    // Every `%` in the encoded text starts an escape, so these only match
    // escapes of the marks themselves.
    UNESCAPED_MARKS
        .iter()
        .fold(urlencoding::encode(value).into_owned(), |encoded, (escape, mark)| {
            encoded.replace(escape, mark)
        })
}

/// Validated, structured form data ready for serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub company: String,
    pub budget: String,
    /// In selection order
    pub interests: Vec<String>,
    pub message: String,
}

fn checked(state: &FormState, field: FieldId) -> Result<&FieldState, FieldInvalid> {
    match state.get(field) {
        Some(field_state) if field_state.valid => Ok(field_state),
        Some(field_state) => Err(FieldInvalid::new(field, field_state.message.clone())),
        None => Err(FieldInvalid::new(field, rule_for(field).1)),
    }
}

impl TryFrom<&FormState> for SubmissionPayload {
    type Error = FieldInvalid;

    /// Fails with the first invalid (or missing) field in declaration order
    fn try_from(state: &FormState) -> Result<Self, Self::Error> {
        let trimmed = |field| -> Result<String, FieldInvalid> {
            Ok(trim_input(checked(state, field)?.value.as_text()).to_string())
        };

        let name = trimmed(FieldId::Name)?;
        let email = trimmed(FieldId::Email)?;
        let company = trimmed(FieldId::Company)?;
        let budget = checked(state, FieldId::Budget)?.value.as_text().to_string();
        let message = trimmed(FieldId::Message)?;
        let interests = checked(state, FieldId::Interests)?
            .value
            .selection()
            .to_vec();

        Ok(Self {
            name,
            email,
            company,
            budget,
            interests,
            message,
        })
    }
}

/// Serialized mail-composition request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    /// Plain subject line
    pub subject: String,
    /// Plain body text
    pub body: String,
    /// `mailto:` URI with percent-encoded subject and body
    pub uri: String,
}

/// Builds mailto requests from validated payloads
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadBuilder;

impl PayloadBuilder {
    pub fn subject(payload: &SubmissionPayload) -> String {
        format!("Brivity Inquiry — {}", payload.company)
    }

    pub fn body(payload: &SubmissionPayload) -> String {
        format!(
            "Name: {}\nEmail: {}\nCompany: {}\nBudget: {}\nInterests: {}\n\nMessage:\n{}",
            payload.name,
            payload.email,
            payload.company,
            payload.budget,
            payload.interests.join(INTEREST_SEPARATOR),
            payload.message,
        )
    }

    /// Serialize `payload` into a mailto request. Total: every payload
    /// produces a request.
    pub fn build(&self, payload: &SubmissionPayload) -> SubmissionRequest {
        let subject = Self::subject(payload);
        let body = Self::body(payload);
        let uri = format!(
            "mailto:{RECIPIENT}?subject={}&body={}",
            encode_component(&subject),
            encode_component(&body),
        );

        SubmissionRequest { subject, body, uri }
    }
}
