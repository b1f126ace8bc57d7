//! Form domain layer
//!
//! The live contact form: field values, focus and navigation.

mod field;
mod form_state;

pub use field::{FieldKind, FieldValue, FormField};
pub use form_state::{ContactForm, Form, SUBMIT_ROW};
