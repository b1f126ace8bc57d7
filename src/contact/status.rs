//! Outcome status message

use super::form_state::FormState;
use super::payload::SubmissionRequest;

pub const REJECTION_SUMMARY: &str = "Please review the highlighted fields and try again.";
pub const ACCEPTANCE_SUMMARY: &str = "Thanks — your message is ready to send.";
pub const ACCEPTANCE_LINK_LABEL: &str = "Click here to email Brivity";

/// How urgently assistive technology should announce a status change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Announcement {
    /// Interrupting (`role="alert"`)
    Alert,
    /// Polite (`role="status"`)
    Status,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLink {
    pub label: String,
    pub href: String,
}

/// The single outcome message shown for the last attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub link: Option<StatusLink>,
    pub announcement: Announcement,
}

/// Holds at most one status message; every report replaces the previous one
#[derive(Debug, Clone, Default)]
pub struct StatusReporter {
    current: Option<StatusMessage>,
}

impl StatusReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-specific failure summary. Per-field messages are shown next to
    /// their fields, not here.
    pub fn report_rejection(&mut self, _form_state: &FormState) -> &StatusMessage {
        self.current.insert(StatusMessage {
            text: REJECTION_SUMMARY.to_string(),
            link: None,
            announcement: Announcement::Alert,
        })
    }

    pub fn report_acceptance(&mut self, request: &SubmissionRequest) -> &StatusMessage {
        self.current.insert(StatusMessage {
            text: ACCEPTANCE_SUMMARY.to_string(),
            link: Some(StatusLink {
                label: ACCEPTANCE_LINK_LABEL.to_string(),
                href: request.uri.clone(),
            }),
            announcement: Announcement::Status,
        })
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }
}
