//! Error types for the CRUD client.
//!
//! # Design
//! Every failure the front-end can see collapses into one user-visible
//! string, so the `Display` text of each variant is what lands in the page's
//! error slot. `NotFound` keeps its own variant because callers distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status".

use thiserror::Error;

/// Errors produced by request building, response parsing, transports and
/// local validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, TLS).
    #[error("network error: {0}")]
    Transport(String),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// Local validation rejected the input before any request was made.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
