//! Form controller
//!
//! Owns every piece of form state: field values and errors, the submit
//! control, and the response message. Hosts forward UI events to the handler
//! methods and then render from the accessors.
//!
//! A submit is split in two halves so a host holding the controller in a
//! `RefCell` can release it while the request is in flight:
//!
//! ```ignore
//! let step = controller.borrow_mut().begin_submit();
//! if let SubmitStep::Send(request) = step {
//!     let result = transport.send(&request).await;
//!     controller.borrow_mut().finish_submit(result);
//! }
//! ```

use contact_form_validation::{validate, FieldName};

use crate::config::FormConfig;
use crate::error::{SubmitError, TransportError};
use crate::feedback::{Feedback, HideTicket, MessageCategory, SubmitControl};
use crate::field_state::{FieldSet, FieldState};
use crate::lifecycle::{
    Submission, SubmissionOutcome, SubmissionState, SubmitStep, INVALID_FORM_MESSAGE,
    SUCCESS_MESSAGE,
};
use crate::payload::SubmissionPayload;
use crate::transport::{WebhookResponse, WebhookTransport};

#[derive(Debug, Clone, Default)]
pub struct FormController {
    config: FormConfig,
    fields: FieldSet,
    submit: SubmitControl,
    feedback: Feedback,
    state: SubmissionState,
}

impl FormController {
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn field(&self, name: FieldName) -> &FieldState {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    pub fn submit_control(&self) -> &SubmitControl {
        &self.submit
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Set a field's value without touching its error
    pub fn set_value(&mut self, name: FieldName, value: impl Into<String>) {
        self.fields.get_mut(name).set_value(value);
    }

    /// Input event: store the new value and clear the error, without re-validating
    pub fn handle_input(&mut self, name: FieldName, value: impl Into<String>) {
        let field = self.fields.get_mut(name);
        field.set_value(value);
        field.clear_error();
    }

    /// Blur event: validate the field
    pub fn handle_blur(&mut self, name: FieldName) -> bool {
        self.validate_field(name)
    }

    /// Validate one field and update its error display
    pub fn validate_field(&mut self, name: FieldName) -> bool {
        let field = self.fields.get_mut(name);
        let result = validate(name, field.value());
        field.apply(&result);
        result.valid
    }

    /// Validate every field so all errors show at once
    pub fn validate_all(&mut self) -> bool {
        FieldName::ALL
            .map(|name| self.validate_field(name))
            .into_iter()
            .all(|valid| valid)
    }

    pub fn clear_error(&mut self, name: FieldName) {
        self.fields.get_mut(name).clear_error();
    }

    pub fn clear_all_errors(&mut self) {
        self.fields.clear_errors();
    }

    /// Show a response message; expire the returned ticket to hide it again
    pub fn show_message(&mut self, text: impl Into<String>, category: MessageCategory) -> HideTicket {
        self.feedback.show(text, category)
    }

    /// Auto-hide callback for a previously shown message
    pub fn expire_message(&mut self, ticket: HideTicket) -> bool {
        self.feedback.expire(ticket)
    }

    /// Submit event, first half: validate and prepare the request
    pub fn begin_submit(&mut self) -> SubmitStep {
        if self.state == SubmissionState::Submitting {
            tracing::warn!("Submit started while a request is still in flight");
        }

        self.transition(SubmissionState::Validating);
        self.feedback.hide();
        self.fields.clear_errors();

        if !self.validate_all() {
            tracing::info!(
                errors = self.fields.error_count(),
                "Submission aborted by validation"
            );
            let hide = self.feedback.show(INVALID_FORM_MESSAGE, MessageCategory::Error);
            self.transition(SubmissionState::Idle);
            return SubmitStep::Aborted(Submission {
                outcome: SubmissionOutcome::Invalid,
                hide,
            });
        }

        let payload = SubmissionPayload::from_raw(
            self.fields.get(FieldName::Username).value(),
            self.fields.get(FieldName::Password).value(),
            self.fields.get(FieldName::Message).value(),
        );
        let request = payload.into_request(self.config.webhook_url.as_str());

        self.submit.set_loading(true);
        self.transition(SubmissionState::Submitting);
        SubmitStep::Send(request)
    }

    /// Submit event, second half: render the transport result
    ///
    /// Always leaves the submit control enabled and the controller idle.
    pub fn finish_submit(
        &mut self,
        result: Result<WebhookResponse, TransportError>,
    ) -> Submission {
        let failure = match result {
            Ok(response) if response.is_ok() => None,
            Ok(response) => Some(SubmitError::Http {
                status: response.status,
                status_text: response.status_text,
            }),
            Err(e) => Some(SubmitError::Transport(e)),
        };

        let submission = match failure {
            None => {
                self.transition(SubmissionState::Success);
                tracing::info!("Message sent");
                let hide = self.feedback.show(SUCCESS_MESSAGE, MessageCategory::Success);
                self.fields.reset();
                Submission {
                    outcome: SubmissionOutcome::Success,
                    hide,
                }
            }
            Some(err) => {
                self.transition(SubmissionState::Failed);
                tracing::warn!(error = %err, "Message not sent");
                let hide = self.feedback.show(err.user_message(), MessageCategory::Error);
                Submission {
                    outcome: SubmissionOutcome::Failed(err),
                    hide,
                }
            }
        };

        self.submit.set_loading(false);
        self.transition(SubmissionState::Idle);
        submission
    }

    /// Run a whole submit against `transport`
    pub async fn submit<T>(&mut self, transport: &T) -> Submission
    where
        T: WebhookTransport + ?Sized,
    {
        match self.begin_submit() {
            SubmitStep::Aborted(submission) => submission,
            SubmitStep::Send(request) => {
                let result = transport.send(&request).await;
                self.finish_submit(result)
            }
        }
    }

    fn transition(&mut self, next: SubmissionState) {
        tracing::debug!(from = %self.state, to = %next, "Submission state");
        self.state = next;
    }
}
