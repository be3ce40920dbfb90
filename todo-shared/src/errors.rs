//! # Client Error Types
//!
//! Failures are split into the two classes the views care about: the request
//! never completed (transport), or the service answered with a non-success
//! status (rejection). Views collapse both into one generic message per
//! action; the distinction is kept for logging.

use thiserror::Error;

/// Result type alias for service and session operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Error type for calls against the user and todo services
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response
    #[error("Request failed: {message}")]
    Transport { message: String },

    /// The service answered with a non-success status
    #[error("Request rejected with status {status}")]
    Rejected { status: u16 },

    /// The response body did not match the expected shape
    #[error("Invalid response body: {message}")]
    Decode { message: String },

    /// Persisting session state failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ClientError {
    /// Create a new transport error
    pub fn transport<T: Into<String>>(message: T) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new rejection error
    #[must_use]
    pub const fn rejected(status: u16) -> Self {
        Self::Rejected { status }
    }

    /// Create a new decode error
    pub fn decode<T: Into<String>>(message: T) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// HTTP status of a rejection, if this is one
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::rejected(status.as_u16())
        } else if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::transport(err.to_string())
        }
    }
}

/// Failure reading or writing the persistent key/value store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Storage error for key '{key}': {message}")]
pub struct StorageError {
    /// Key that was being written
    pub key: String,
    /// Backend-specific description
    pub message: String,
}

impl StorageError {
    /// Failure writing `key`, with the backend's own description.
    pub fn new<K: Into<String>, M: Into<String>>(key: K, message: M) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}
