//! Sink for failures that are swallowed instead of returned.
//!
//! Operations that never fail outward (such as the category listing) still
//! need somewhere to send what went wrong. The client holds a [`Reporter`]
//! so callers and tests can decide where those messages end up.

use std::sync::Mutex;

/// Receives error messages from operations that recover by returning an empty value.
pub trait Reporter: Send + Sync {
    fn error(&self, message: &str);
}

/// Forwards every message to `tracing` at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

/// Keeps every message in memory, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    messages: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the messages recorded so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Reporter for RecordingReporter {
    fn error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_string());
    }
}
