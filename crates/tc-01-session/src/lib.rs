//! # Session State (tc-01)
//!
//! Holds the operator identity (bearer token, role, display profile) for the
//! lifetime of the process and mirrors it to a persistence substrate on
//! every mutation.
//!
//! ## Lifecycle
//!
//! ```text
//!   init ──restore──→ [state] ──set_session──→ [state] ──logout──→ [empty]
//!                        │                        │                  │
//!                        └──────── save ──────────┴────── save ──────┘
//!                                                                    │
//!                                                        navigate(auth entry)
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Token gates identity | No token ⇒ unauthenticated, whatever role/profile say |
//! | 2 | Mirrored subset | {token, role, profile} saved after every mutation |
//! | 3 | Best-effort storage | Load/save failures are logged, never surfaced |
//! | 4 | Deterministic logout | Logout always ends in the default (empty) state |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Session state value, configuration, errors
//! - `ports/` - `SessionStore` and `Navigator` driven ports
//! - `adapters/` - In-memory and file-backed stores, recording navigator
//! - `service.rs` - `SessionContext`, the injectable session holder
//!
//! ## Usage
//!
//! ```ignore
//! use tc_01_session::{SessionConfig, SessionContext};
//! use tc_01_session::adapters::{FileSessionStore, RecordingNavigator};
//!
//! let session = SessionContext::init(
//!     Arc::new(FileSessionStore::new("session.json")),
//!     Arc::new(RecordingNavigator::new()),
//!     SessionConfig::default(),
//! );
//! session.set_session("jwt", Role::Admin, Profile::default());
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use domain::config::{ConfigError, SessionConfig};
pub use domain::errors::StoreError;
pub use domain::state::SessionState;
pub use ports::outbound::{Navigator, SessionStore};
pub use service::SessionContext;
