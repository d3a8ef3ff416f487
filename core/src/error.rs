//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant so logs can tell a stale id apart
//! from a server fault. The controller reports every variant to the user as
//! the same opaque notice; the detail only reaches the diagnostic log.

use thiserror::Error;

/// Errors produced while building requests, executing them, or parsing
/// responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// No response was received.
    #[error("transport failed: {0}")]
    Transport(String),
}
