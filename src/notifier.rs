//! Application-wide error message channel.
//!
//! Holds at most one message. A new error replaces the previous one whether
//! or not anybody saw it; an empty string means "no error".

use std::sync::Arc;

use tokio::sync::watch;

/// Single-slot error channel shared by every consumer of the session.
///
/// Cloning yields another handle to the same slot.
#[derive(Clone)]
pub struct ErrorNotifier {
    slot: Arc<watch::Sender<String>>,
}

impl ErrorNotifier {
    pub fn new() -> Self {
        let (slot, _) = watch::channel(String::new());
        Self {
            slot: Arc::new(slot),
        }
    }

    /// Replace the current message and write it to the log.
    pub fn show_error(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(error = %message, "Error shown");
        self.slot.send_replace(message);
    }

    /// Reset to the empty message.
    pub fn clear_error(&self) {
        self.slot.send_replace(String::new());
    }

    /// The latest message; empty when no error is showing.
    pub fn current_message(&self) -> String {
        self.slot.borrow().clone()
    }

    pub fn has_error(&self) -> bool {
        !self.slot.borrow().is_empty()
    }

    /// Receiver that wakes on every `show_error`/`clear_error`.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.slot.subscribe()
    }
}

impl Default for ErrorNotifier {
    fn default() -> Self {
        Self::new()
    }
}
