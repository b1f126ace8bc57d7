//! Contact form submission pipeline
//!
//! Validation, acceptance decision and mailto serialization for the
//! Brivity contact form. Nothing in here renders or performs I/O:
//! - `validator`: per-field rules
//! - `registry`: the fields, how they are read and where errors go
//! - `orchestrator`: one submission attempt, start to decision
//! - `payload`: accepted data and its `mailto:` request
//! - `status`: the single outcome message

mod error;
mod field;
mod form_state;
mod orchestrator;
mod payload;
mod registry;
mod status;
mod validator;

pub use error::FieldInvalid;
pub use field::{FieldId, FieldState, RawValue};
pub use form_state::FormState;
pub use orchestrator::{FormOrchestrator, Outcome};
pub use payload::{PayloadBuilder, SubmissionPayload, SubmissionRequest, RECIPIENT};
pub use registry::{DisplayTarget, FieldRegistry, FieldSource, FieldSpec};
pub use status::{Announcement, StatusLink, StatusMessage, StatusReporter, REJECTION_SUMMARY};
pub use validator::{FieldValidator, Rule};
