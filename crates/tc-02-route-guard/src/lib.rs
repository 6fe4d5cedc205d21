//! # Route Guard (tc-02)
//!
//! Decides, on every navigation attempt, whether the target route is
//! allowed or must redirect. The console is admin-only: a signed-in session
//! without the admin role never gets past the gate.
//!
//! ## Decision Table (first match wins)
//!
//! | Rule | Authenticated | Role | Target in auth area | Outcome |
//! |------|---------------|------|---------------------|---------|
//! | 1 | no | any | yes | allow |
//! | 2 | no | any | no | redirect → auth entry |
//! | 3 | yes | not admin | any | redirect → auth entry |
//! | 4 | yes | admin | yes | redirect → root |
//! | 5 | yes | admin | no | allow |
//!
//! The guard is stateless: each call reads one session snapshot and keeps
//! nothing between evaluations. A redirect is an ordinary outcome, not an
//! error.

pub mod domain;
pub mod service;

pub use domain::config::{GuardConfig, GuardConfigError};
pub use domain::decision::{decide, GuardDecision, GuardRule};
pub use domain::route::RouteTarget;
pub use service::RouteGuard;
