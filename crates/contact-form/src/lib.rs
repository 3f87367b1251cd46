// Contact Form - browser contact form controller
// Validates input, posts it to a webhook with Basic Auth, and tracks feedback state

pub mod auth;
pub mod config;
pub mod controller;
pub mod error;
pub mod feedback;
pub mod field_state;
pub mod lifecycle;
pub mod network;
pub mod payload;
pub mod transport;

#[cfg(not(target_arch = "wasm32"))]
pub mod timer;

pub use auth::basic_auth_header;
pub use config::FormConfig;
pub use controller::FormController;
pub use error::{SubmitError, TransportError};
pub use feedback::{Feedback, HideTicket, MessageCategory, ResponseMessage, SubmitControl};
pub use field_state::{BorderCue, FieldSet, FieldState};
pub use lifecycle::{Submission, SubmissionOutcome, SubmissionState, SubmitStep};
pub use network::NetworkStatus;
pub use payload::{SubmissionPayload, WebhookBody, WebhookRequest};
pub use transport::{ReqwestTransport, WebhookResponse, WebhookTransport};

#[cfg(not(target_arch = "wasm32"))]
pub use timer::schedule_auto_hide;

// Re-export the field rules so hosts need a single dependency
pub use contact_form_validation::{validate, FieldName, UnknownField, ValidationResult};
