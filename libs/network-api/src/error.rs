//! Error types for talking to the network backend
//!
//! Distinguishes failures that never reached the server from the ones the
//! server answered with a non-success status.

use thiserror::Error;

/// Result type alias for API calls
pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Connection refused, reset, DNS failure and similar
    #[error("Request failed: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("Server returned {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    Status {
        status: u16,
        /// `error` field of the response body, when it carried one
        message: Option<String>,
    },

    /// Success response whose body did not match the expected shape
    #[error("Parse failed: {0}")]
    Decode(String),

    /// Client could not be built from the supplied settings
    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Message the server reported for a rejected request
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// HTTP status code, when the server answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the server rejected the request (as opposed to a transport
    /// or decoding problem on our side)
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
