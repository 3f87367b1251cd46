// File: src/lifecycle.rs
// Purpose: Submission state machine types

use std::fmt;

use crate::error::SubmitError;
use crate::feedback::HideTicket;
use crate::payload::WebhookRequest;

pub const INVALID_FORM_MESSAGE: &str = "Please correct the errors above";
pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";

/// Where the controller is in handling a submit
///
/// `Idle → Validating → Submitting → (Success | Failed) → Idle`, with
/// `Validating → Idle` when a field is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Failed,
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Validating => "validating",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Success => "success",
            SubmissionState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// How a submit ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// At least one field failed validation; nothing was sent
    Invalid,
    Success,
    Failed(SubmitError),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success)
    }
}

/// Finished submit plus the ticket for hiding its message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub outcome: SubmissionOutcome,
    pub hide: HideTicket,
}

/// Result of starting a submit
#[derive(Debug)]
pub enum SubmitStep {
    /// Validation passed; send this and hand the result to `finish_submit`
    Send(WebhookRequest),
    Aborted(Submission),
}
