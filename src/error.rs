//! The one error kind surfaced to callers of the places operations.

use thiserror::Error;

use crate::transport::TransportError;

/// A places operation did not complete.
///
/// `message` is user-facing and is what `Display` prints; the transport
/// failure that caused it is kept as the source for logs.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct OperationFailed {
    message: String,
    #[source]
    source: TransportError,
}

impl OperationFailed {
    pub fn new(message: impl Into<String>, source: TransportError) -> Self {
        Self {
            message: message.into(),
            source,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The underlying transport failure.
    pub fn transport_error(&self) -> &TransportError {
        &self.source
    }
}
