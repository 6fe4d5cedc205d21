use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::ports::outbound::ErrorSink;

/// Holds the most recent error message for display.
#[derive(Debug, Default)]
pub struct LastErrorStore {
    last: RwLock<Option<String>>,
    reported: AtomicU64,
}

impl LastErrorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> Option<String> {
        self.last.read().clone()
    }

    /// Take the message, leaving the store empty.
    pub fn take(&self) -> Option<String> {
        self.last.write().take()
    }

    pub fn clear(&self) {
        *self.last.write() = None;
    }

    /// Number of reports since creation.
    pub fn reported(&self) -> u64 {
        self.reported.load(Ordering::Relaxed)
    }
}

impl ErrorSink for LastErrorStore {
    fn report(&self, message: &str) {
        *self.last.write() = Some(message.to_string());
        self.reported.fetch_add(1, Ordering::Relaxed);
    }
}
