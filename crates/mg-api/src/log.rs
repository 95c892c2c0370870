//! Debug sink for request diagnostics

use parking_lot::Mutex;

/// Consumer of diagnostic messages produced by failed or rejected requests
pub trait DebugLog: Send + Sync {
    fn debug(&self, message: &str);
}

/// Forwards to `tracing` at DEBUG level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl DebugLog for TracingLog {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "mg_api", "{}", message);
    }
}

/// Keeps every message in memory
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: Mutex<Vec<String>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded messages, oldest first
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl DebugLog for MemoryLog {
    fn debug(&self, message: &str) {
        self.entries.lock().push(message.to_string());
    }
}
