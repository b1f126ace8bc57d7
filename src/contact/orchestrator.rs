//! Submission attempt orchestration
//!
//! The orchestrator is the pure decision phase of a submission: it reads
//! every registered field, validates it, and decides whether the attempt is
//! accepted. Rendering the decision is left to the caller.

use super::field::FieldId;
use super::form_state::FormState;
use super::payload::SubmissionPayload;
use super::registry::{FieldRegistry, FieldSource};
use super::validator::FieldValidator;
use uuid::Uuid;

/// Result of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// At least one field failed. `focus` is the earliest invalid field.
    Rejected { form_state: FormState, focus: FieldId },
    Accepted { payload: SubmissionPayload },
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted { .. })
    }
}

/// Runs submission attempts against a fixed field registry
#[derive(Debug, Clone, Default)]
pub struct FormOrchestrator {
    registry: FieldRegistry,
}

impl FormOrchestrator {
    pub fn new(registry: FieldRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    /// Validate every registered field against `source`
    pub fn evaluate(&self, source: &dyn FieldSource) -> FormState {
        let mut form_state = FormState::new();
        for spec in self.registry.iter() {
            let state = FieldValidator::apply(spec.rule, spec.message, spec.read(source));
            form_state.insert(spec.id, state);
        }
        form_state
    }

    /// Evaluate the form and decide. Invalid input is a normal `Rejected`
    /// outcome; this never fails.
    pub fn attempt_submit(&self, source: &dyn FieldSource) -> Outcome {
        let attempt_id = Uuid::new_v4();
        let span = tracing::info_span!("submit_attempt", %attempt_id);
        let _guard = span.enter();

        let form_state = self.evaluate(source);

        match SubmissionPayload::try_from(&form_state) {
            Ok(payload) => {
                tracing::info!(interests = payload.interests.len(), "Submission accepted");
                Outcome::Accepted { payload }
            }
            Err(first) => {
                let invalid: Vec<&str> = form_state
                    .invalid_fields()
                    .iter()
                    .map(|field| field.key())
                    .collect();
                tracing::info!(?invalid, focus = %first.field, "Submission rejected");
                Outcome::Rejected {
                    form_state,
                    focus: first.field,
                }
            }
        }
    }
}
