//! # Outbound Ports (Driven Ports)
//!
//! Collaborators the session context needs from its host.

use shared_types::PersistedSession;

use crate::domain::errors::StoreError;

/// The persistence substrate for the session subset.
///
/// Production: `FileSessionStore`
/// Testing: `InMemorySessionStore`
pub trait SessionStore: Send + Sync {
    /// Load the stored record. `Ok(None)` when nothing was ever saved.
    fn load(&self) -> Result<Option<PersistedSession>, StoreError>;

    /// Replace the stored record.
    fn save(&self, record: &PersistedSession) -> Result<(), StoreError>;
}

/// Navigation side effects (the host's router).
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}
