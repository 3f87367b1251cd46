// File: src/payload.rs
// Purpose: Submission payload and the outbound webhook request built from it

use serde::{Deserialize, Serialize};
use std::fmt;

use contact_form_validation::js_trim;

use crate::auth::basic_auth_header;

/// Values captured at submit time
///
/// Username and message are trimmed; the password is taken verbatim.
#[derive(Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub username: String,
    pub password: String,
    pub message: String,
}

impl SubmissionPayload {
    pub fn from_raw(username: &str, password: &str, message: &str) -> Self {
        Self {
            username: js_trim(username).to_string(),
            password: password.to_string(),
            message: js_trim(message).to_string(),
        }
    }

    /// Turn the payload into the POST sent to `url`
    pub fn into_request(self, url: impl Into<String>) -> WebhookRequest {
        WebhookRequest {
            url: url.into(),
            authorization: basic_auth_header(&self.username, &self.password),
            body: WebhookBody { body: self.message },
        }
    }
}

impl fmt::Debug for SubmissionPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionPayload")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("message", &self.message)
            .finish()
    }
}

/// JSON body of the webhook call: `{"body": "<message>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookBody {
    pub body: String,
}

/// Fully prepared webhook call
#[derive(Clone, PartialEq, Eq)]
pub struct WebhookRequest {
    pub url: String,
    /// Value for the `Authorization` header
    pub authorization: String,
    pub body: WebhookBody,
}

impl WebhookRequest {
    pub const CONTENT_TYPE: &'static str = "application/json";

    pub fn body_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.body)
    }
}

impl fmt::Debug for WebhookRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookRequest")
            .field("url", &self.url)
            .field("authorization", &"Basic <redacted>")
            .field("body", &self.body)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_trims_username_and_message_only() {
        let payload = SubmissionPayload::from_raw("  bob_1 ", " secret ", "\n hello world! \n");
        assert_eq!(payload.username, "bob_1");
        assert_eq!(payload.password, " secret ");
        assert_eq!(payload.message, "hello world!");
    }

    #[test]
    fn test_trim_matches_browser_whitespace() {
        let payload =
            SubmissionPayload::from_raw("\u{FEFF}bob_1", "secret", "hello world!\u{0085}\u{3000}");
        assert_eq!(payload.username, "bob_1");
        assert_eq!(payload.message, "hello world!\u{0085}");
    }

    #[test]
    fn test_request_shape() {
        let request = SubmissionPayload::from_raw("bob_1", "secret", "this is a valid message")
            .into_request("https://example.com/hook");

        assert_eq!(request.url, "https://example.com/hook");
        assert_eq!(request.authorization, "Basic Ym9iXzE6c2VjcmV0");
        assert_eq!(
            request.body_json().unwrap(),
            r#"{"body":"this is a valid message"}"#
        );
    }

    #[test]
    fn test_debug_hides_credentials() {
        let payload = SubmissionPayload::from_raw("bob_1", "hunter22", "this is a valid message");
        let request = payload.clone().into_request("https://example.com/hook");

        assert!(!format!("{payload:?}").contains("hunter22"));
        assert!(!format!("{request:?}").contains(&request.authorization));
    }
}
