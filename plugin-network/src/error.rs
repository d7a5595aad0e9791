use thiserror::Error;

/// Errors raised by [`Network::data`](crate::Network::data).
///
/// Only transport- and auth-level failures raise. HTTP status codes are
/// delivered through [`ResponseMetadata`](crate::ResponseMetadata) on success;
/// [`NetworkError::Status`] exists for hosts that deliberately surface a server
/// error instead of masking it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Network operation failed: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, NetworkError>;
