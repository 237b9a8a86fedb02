//! Error types for newsletter API operations.
//!
//! Failure responses carry an HTTP status, the status text, and, when the
//! server provides one, a structured `message`. Nothing beyond that shape
//! is assumed about the wire format.

use thiserror::Error;

/// Errors that can occur when talking to the newsletter backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Could not reach the backend at all.
    #[error("Connection failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout.
    #[error("Request timed out after {duration}s")]
    Timeout { duration: u64 },

    /// Backend answered with a non-success status.
    #[error("{status} {status_text}: {message}")]
    Status {
        status: u16,
        status_text: String,
        message: String,
    },

    /// Response body did not match the expected shape.
    #[error("Failed to decode response: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },

    /// Auth token environment variable is configured but not set.
    #[error("Environment variable {var} is not set")]
    MissingToken { var: String },
}

/// Server error payload; only `message` matters, anything else is ignored.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}

impl ApiError {
    /// Build a status error from a failed response, pulling the server's
    /// `message` out of the JSON body when one is present.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or("Unknown").to_string();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| "API request failed".to_string());

        ApiError::Status {
            status: status.as_u16(),
            status_text,
            message,
        }
    }

    /// True for failures worth retrying by hand (transport-level), as
    /// opposed to requests the server actively rejected.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Connection { .. } | ApiError::Timeout { .. })
    }
}
