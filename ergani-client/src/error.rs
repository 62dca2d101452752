//! Error types for the Ergani client

use reqwest::StatusCode;
use std::fmt;
use thiserror::Error;

/// Errors that can occur when using the Ergani client
#[derive(Error, Debug)]
pub enum ErganiError {
    /// A value does not belong to the closed set of its enum family
    #[error("invalid {family} value: {value:?}")]
    InvalidEnumValue {
        /// Name of the enum family (e.g. `MovementType`)
        family: &'static str,
        /// The offending value as it was given
        value: String,
    },

    /// The underlying HTTP exchange failed (DNS, connect, timeout, ...)
    #[error("HTTP request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The API answered with a non-success status
    #[error("{0}")]
    Api(ApiFailure),

    /// Authentication returned 200 but no usable token
    #[error("authentication failed: {0}")]
    Auth(String),

    /// A success response could not be decoded
    #[error("failed to decode response: {message} (raw: {raw:?})")]
    Decode {
        /// What went wrong
        message: String,
        /// The offending raw text
        raw: String,
    },

    /// Client initialization failed
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl From<reqwest::Error> for ErganiError {
    fn from(err: reqwest::Error) -> Self {
        ErganiError::Transport(Box::new(err))
    }
}

/// A non-2xx response from the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    /// HTTP status code of the response
    pub status: StatusCode,
    /// Best-effort human-readable message
    pub message: String,
    /// The raw response body
    pub body: String,
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "API error (status {}): {}",
            self.status.as_u16(),
            self.message
        )
    }
}

impl ErganiError {
    /// The API failure carried by this error, if any
    pub fn api_failure(&self) -> Option<&ApiFailure> {
        match self {
            ErganiError::Api(failure) => Some(failure),
            _ => None,
        }
    }
}
