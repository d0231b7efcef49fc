use thiserror::Error;

/// Failure of a product fetch.
///
/// `Cancelled` is not a real error: the caller aborted the request and
/// should not show error UI for it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Request cancelled")]
    Cancelled,

    #[error("Network error: {message}")]
    Network {
        message: String,
        status: Option<u16>,
    },
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let mut end = MAX_ERROR_BODY_LENGTH;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
        }
    }

    pub fn network(message: impl Into<String>, status: Option<u16>) -> Self {
        ApiError::Network {
            message: message.into(),
            status,
        }
    }

    /// Non-success HTTP status.
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let message = if body.is_empty() {
            format!("Request failed with status {}", status)
        } else {
            format!("Request failed with status {}: {}", status, Self::truncate_body(body))
        };
        Self::network(message, Some(status.as_u16()))
    }

    /// Transport-level failure (DNS, connect, timeout, reset...).
    pub fn from_transport(err: reqwest::Error) -> Self {
        Self::network(
            format!("Network request failed: {}", err),
            err.status().map(|s| s.as_u16()),
        )
    }

    /// Body that could not be read or parsed as JSON.
    pub fn invalid_body(status: reqwest::StatusCode, detail: impl std::fmt::Display) -> Self {
        Self::network(format!("Invalid JSON response: {}", detail), Some(status.as_u16()))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }

    /// HTTP status carried by a network error, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Cancelled => None,
            ApiError::Network { status, .. } => *status,
        }
    }
}
