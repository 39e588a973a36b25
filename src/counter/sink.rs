//! Failure Sink Module
//!
//! Where the counting engine reports elements whose property check failed.

use parking_lot::Mutex;
use tracing::warn;

// == Failure Sink ==
/// Receives one message per element whose checker returned an error or panicked.
pub trait FailureSink: Send + Sync {
    /// Records a failure message.
    fn log(&self, message: &str);
}

// == Tracing Sink ==
/// Forwards failures to `tracing` at WARN level. The engine's default sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl FailureSink for TracingSink {
    fn log(&self, message: &str) {
        warn!("{}", message);
    }
}

// == Memory Sink ==
/// Keeps failure messages in memory so callers can inspect them.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every message recorded so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    /// Returns the number of recorded messages.
    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }
}

impl FailureSink for MemorySink {
    fn log(&self, message: &str) {
        self.messages.lock().push(message.to_owned());
    }
}
