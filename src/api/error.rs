use std::fmt;

use thiserror::Error;

/// Upper bound the backend puts on a single generation request.
pub const MAX_PROCESSING_SECS: u64 = 60;

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("User is not authenticated")]
    Unauthenticated,

    #[error("Server returned an error: {status}")]
    Status { status: u16 },

    #[error("HTTP request failed: {0}")]
    Unreachable(String),

    #[error("Failed to read response body: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RequestError {
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status } => Some(*status),
            _ => None,
        }
    }

    /// Every call site reports failures through this, so the wording a user
    /// sees only depends on what went wrong, never on which endpoint failed.
    pub fn category(&self) -> ErrorCategory {
        match self {
            RequestError::Unauthenticated => ErrorCategory::NotSignedIn,
            RequestError::Status { status } => classify(Some(*status)),
            RequestError::Unreachable(_) => classify(None),
            RequestError::Io(_) | RequestError::Decode(_) => ErrorCategory::InvalidResponse,
        }
    }

    pub fn message(&self) -> String {
        self.category().message()
    }
}

/// User-facing failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    PayloadTooLarge,
    Unprocessable,
    UpstreamFailure,
    GatewayTimeout,
    /// no response was received at all
    Unreachable,
    Unexpected(u16),
    /// no identity was available, the request was never sent
    NotSignedIn,
    /// 2xx response whose body did not match the expected shape
    InvalidResponse,
}

/// Maps an HTTP status (or its absence) onto a category.
pub fn classify(status: Option<u16>) -> ErrorCategory {
    match status {
        Some(400) => ErrorCategory::BadRequest,
        Some(401) => ErrorCategory::Unauthorized,
        Some(403) => ErrorCategory::Forbidden,
        Some(404) => ErrorCategory::NotFound,
        Some(413) => ErrorCategory::PayloadTooLarge,
        Some(422) => ErrorCategory::Unprocessable,
        Some(500) => ErrorCategory::UpstreamFailure,
        Some(504) => ErrorCategory::GatewayTimeout,
        Some(other) => ErrorCategory::Unexpected(other),
        None => ErrorCategory::Unreachable,
    }
}

impl ErrorCategory {
    pub fn message(&self) -> String {
        match self {
            ErrorCategory::BadRequest => "Bad request. Please check your input.".to_string(),
            ErrorCategory::Unauthorized => "Unauthorized. Please log in.".to_string(),
            ErrorCategory::Forbidden => "Forbidden. You do not have access.".to_string(),
            ErrorCategory::NotFound => {
                "Not found. The requested resource could not be found.".to_string()
            }
            ErrorCategory::PayloadTooLarge => "Request entity too large.".to_string(),
            ErrorCategory::Unprocessable => "Unprocessable entity. The request was well-formed but unable to be followed due to semantic errors.".to_string(),
            ErrorCategory::UpstreamFailure => "Internal server error. Please try again later. Gemini API resource limit may have been reached.".to_string(),
            ErrorCategory::GatewayTimeout => {
                "Gateway timeout. The server took too long to respond.".to_string()
            }
            ErrorCategory::Unreachable => format!(
                "An unexpected error occurred. The request took too long to process. Please try again later. Note: The maximum duration allowed is {} seconds.",
                MAX_PROCESSING_SECS
            ),
            ErrorCategory::Unexpected(_) => {
                "An unexpected error occurred. Please try again later.".to_string()
            }
            ErrorCategory::NotSignedIn => "User is not authenticated.".to_string(),
            ErrorCategory::InvalidResponse => {
                "An error occurred while processing your request.".to_string()
            }
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_statuses_have_their_own_category() {
        let cases = [
            (400, ErrorCategory::BadRequest, "check your input"),
            (401, ErrorCategory::Unauthorized, "Please log in"),
            (403, ErrorCategory::Forbidden, "do not have access"),
            (404, ErrorCategory::NotFound, "could not be found"),
            (413, ErrorCategory::PayloadTooLarge, "too large"),
            (422, ErrorCategory::Unprocessable, "semantic errors"),
            (500, ErrorCategory::UpstreamFailure, "resource limit"),
            (504, ErrorCategory::GatewayTimeout, "took too long to respond"),
        ];

        for (status, category, fragment) in cases {
            let got = classify(Some(status));
            assert_eq!(got, category, "status {}", status);
            assert!(got.message().contains(fragment), "status {}", status);
        }
    }

    #[test]
    fn unmapped_status_is_unexpected() {
        assert_eq!(classify(Some(418)), ErrorCategory::Unexpected(418));
        assert_eq!(
            classify(Some(418)).message(),
            "An unexpected error occurred. Please try again later."
        );
        assert_ne!(classify(Some(418)).message(), classify(None).message());
    }

    #[test]
    fn missing_response_mentions_processing_limit() {
        let message = classify(None).message();
        assert_eq!(classify(None), ErrorCategory::Unreachable);
        assert!(message.contains("maximum duration allowed is 60 seconds"));
    }

    #[test]
    fn request_errors_route_through_classifier() {
        assert_eq!(
            RequestError::Status { status: 500 }.category(),
            ErrorCategory::UpstreamFailure
        );
        assert_eq!(
            RequestError::Unreachable("connection refused".into()).category(),
            ErrorCategory::Unreachable
        );
        assert_eq!(
            RequestError::Unauthenticated.message(),
            "User is not authenticated."
        );
        assert_eq!(RequestError::Status { status: 404 }.status(), Some(404));
        assert_eq!(RequestError::Unauthenticated.status(), None);
    }
}
