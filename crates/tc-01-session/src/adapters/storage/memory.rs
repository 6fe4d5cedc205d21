use parking_lot::Mutex;
use shared_types::PersistedSession;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::domain::errors::StoreError;
use crate::ports::outbound::SessionStore;

/// In-memory session store for tests and ephemeral hosts.
///
/// Can be switched into a failing mode to exercise the best-effort paths.
#[derive(Default)]
pub struct InMemorySessionStore {
    record: Mutex<Option<PersistedSession>>,
    saves: AtomicU64,
    fail: AtomicBool,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a record, as if a previous process saved it.
    pub fn with_record(record: PersistedSession) -> Self {
        Self {
            record: Mutex::new(Some(record)),
            ..Self::default()
        }
    }

    /// Make every subsequent load and save fail.
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// The currently stored record.
    pub fn record(&self) -> Option<PersistedSession> {
        self.record.lock().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> u64 {
        self.saves.load(Ordering::SeqCst)
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> Result<Option<PersistedSession>, StoreError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable);
        }
        Ok(self.record.lock().clone())
    }

    fn save(&self, record: &PersistedSession) -> Result<(), StoreError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable);
        }
        *self.record.lock() = Some(record.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
