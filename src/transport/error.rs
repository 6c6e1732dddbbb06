//! Error types for the places API transport.

use thiserror::Error;

/// Errors that can occur while talking to the places API.
///
/// Callers above the transport treat every variant as a plain failure;
/// the variants exist for logging and diagnostics.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The configured base URL cannot be used to build endpoints
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response (DNS, refused, timeout, ...)
    #[error("Request to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status
    #[error("Request to '{url}' returned status {status}")]
    Status { url: String, status: u16 },

    /// The response body was not the expected JSON shape
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The exchange task stopped before reporting an outcome
    #[error("Exchange aborted before completion")]
    Aborted,
}

impl TransportError {
    /// Short classification used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            TransportError::InvalidUrl { .. } => "invalid_url",
            TransportError::Client(_) => "client_error",
            TransportError::Connection { .. } => "connection_error",
            TransportError::Status { .. } => "status_error",
            TransportError::Decode { .. } => "decode_error",
            TransportError::Aborted => "aborted",
        }
    }
}
