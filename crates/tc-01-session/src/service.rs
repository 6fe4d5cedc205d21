//! # Session Context
//!
//! The injectable holder of the process session. The gateway client and the
//! route guard each hold an `Arc<SessionContext>`; nothing reaches session
//! state through a global.

use parking_lot::RwLock;
use shared_types::{Profile, Role};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::adapters::{InMemorySessionStore, RecordingNavigator};
use crate::domain::config::SessionConfig;
use crate::domain::state::SessionState;
use crate::ports::outbound::{Navigator, SessionStore};

pub struct SessionContext {
    state: RwLock<SessionState>,
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    config: SessionConfig,
    closed: AtomicBool,
}

impl SessionContext {
    /// Create the context, restoring the last persisted session.
    ///
    /// A missing or unreadable record yields an empty session.
    pub fn init(
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
        config: SessionConfig,
    ) -> Self {
        let state = match store.load() {
            Ok(Some(record)) => {
                let state = SessionState::from_persisted(record);
                info!(
                    authenticated = state.is_authenticated(),
                    role = ?state.role,
                    "Session restored"
                );
                state
            }
            Ok(None) => {
                debug!("No persisted session, starting empty");
                SessionState::default()
            }
            Err(e) => {
                warn!(error = %e, "Failed to restore session, starting empty");
                SessionState::default()
            }
        };

        Self {
            state: RwLock::new(state),
            store,
            navigator,
            config,
            closed: AtomicBool::new(false),
        }
    }

    /// Context backed by an in-memory store and a recording navigator.
    pub fn in_memory() -> Self {
        Self::init(
            Arc::new(InMemorySessionStore::new()),
            Arc::new(RecordingNavigator::new()),
            SessionConfig::default(),
        )
    }

    /// Consistent copy of the whole state, taken under one read lock.
    pub fn snapshot(&self) -> SessionState {
        self.state.read().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.state.read().token.clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.state.read().role.clone()
    }

    pub fn profile(&self) -> Profile {
        self.state.read().profile.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Login success handler: replace the identity and persist it.
    pub fn set_session(&self, token: impl Into<String>, role: Role, profile: Profile) {
        let mut state = self.state.write();
        *state = SessionState::new(token, role, profile);
        info!(
            authenticated = state.is_authenticated(),
            role = ?state.role,
            "Session established"
        );
        self.persist(&state);
    }

    /// Clear the identity, persist the cleared state and navigate to the
    /// authentication entry route.
    ///
    /// The display profile is cleared too, so the end state is always the
    /// default state. Calling it twice is the same as once, apart from the
    /// repeated navigation.
    pub fn logout(&self) {
        {
            let mut state = self.state.write();
            let was_authenticated = state.is_authenticated();
            *state = SessionState::default();
            info!(was_authenticated, "Session cleared");
            self.persist(&state);
        }
        self.navigator.navigate(&self.config.auth_entry_path);
    }

    /// Write a final snapshot and stop mirroring to storage.
    ///
    /// Mutations after teardown still apply in memory.
    pub fn teardown(&self) {
        let state = self.state.read();
        self.persist(&state);
        self.closed.store(true, Ordering::SeqCst);
        debug!("Session context torn down");
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Called with the state lock held so saves land in mutation order.
    fn persist(&self, state: &SessionState) {
        if self.is_closed() {
            return;
        }
        if let Err(e) = self.store.save(&state.to_persisted()) {
            warn!(error = %e, "Failed to persist session");
        }
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("SessionContext")
            .field("authenticated", &state.is_authenticated())
            .field("role", &state.role)
            .field("closed", &self.is_closed())
            .finish()
    }
}
