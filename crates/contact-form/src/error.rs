use thiserror::Error;

pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your internet connection and try again.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";
pub const UNAUTHORIZED_MESSAGE: &str =
    "Authentication failed. Please check your username and password.";
pub const BAD_REQUEST_MESSAGE: &str = "Invalid request. Please check your message format.";
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";

/// The request never produced an HTTP response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// DNS failure, refused connection, offline browser and the like
    #[error("network unreachable: {0}")]
    Connectivity(String),

    #[error("request failed: {0}")]
    Unexpected(String),
}

impl TransportError {
    pub fn is_connectivity(&self) -> bool {
        matches!(self, TransportError::Connectivity(_))
    }

    /// Classify a reqwest failure
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let connect = err.is_connect();
        #[cfg(target_arch = "wasm32")]
        let connect = false;

        if connect || err.is_timeout() || err.is_request() {
            TransportError::Connectivity(err.to_string())
        } else {
            TransportError::Unexpected(err.to_string())
        }
    }
}

/// Why a submission did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Endpoint answered outside the 2xx range
    #[error("HTTP {status} {status_text}")]
    Http { status: u16, status_text: String },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl SubmitError {
    /// Text shown to the user for this failure
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Http { status: 401, .. } => UNAUTHORIZED_MESSAGE.to_string(),
            SubmitError::Http { status: 400, .. } => BAD_REQUEST_MESSAGE.to_string(),
            SubmitError::Http { status: 500, .. } => SERVER_ERROR_MESSAGE.to_string(),
            SubmitError::Http {
                status,
                status_text,
            } => format!("Error: {status} - {status_text}"),
            SubmitError::Transport(e) if e.is_connectivity() => NETWORK_ERROR_MESSAGE.to_string(),
            SubmitError::Transport(_) => UNEXPECTED_ERROR_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn http(status: u16, status_text: &str) -> SubmitError {
        SubmitError::Http {
            status,
            status_text: status_text.to_string(),
        }
    }

    #[rstest]
    #[case(401, "Unauthorized", UNAUTHORIZED_MESSAGE)]
    #[case(400, "Bad Request", BAD_REQUEST_MESSAGE)]
    #[case(500, "Internal Server Error", SERVER_ERROR_MESSAGE)]
    #[case(404, "Not Found", "Error: 404 - Not Found")]
    #[case(503, "Service Unavailable", "Error: 503 - Service Unavailable")]
    #[case(302, "", "Error: 302 - ")]
    fn test_http_messages(#[case] status: u16, #[case] text: &str, #[case] expected: &str) {
        assert_eq!(http(status, text).user_message(), expected);
    }

    #[test]
    fn test_transport_messages() {
        let offline = SubmitError::from(TransportError::Connectivity("dns".into()));
        assert_eq!(offline.user_message(), NETWORK_ERROR_MESSAGE);

        let other = SubmitError::from(TransportError::Unexpected("bad body".into()));
        assert_eq!(other.user_message(), UNEXPECTED_ERROR_MESSAGE);
    }
}
