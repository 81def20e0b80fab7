/// Error types for network-client
use network_api::{ApiError, PostId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Validation error: {0}")]
    Validation(String),

    /// The control the action needs is not shown for this viewer/state
    #[error("Control not available: {0}")]
    ControlUnavailable(&'static str),

    #[error("Post {0} is not on the current page")]
    UnknownPost(PostId),
}

impl ClientError {
    /// True for failures the user has not been told about yet. Server and
    /// transport failures are only logged; validation failures were alerted
    /// where they happened.
    pub fn needs_reporting(&self) -> bool {
        matches!(self, Self::ControlUnavailable(_) | Self::UnknownPost(_))
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
