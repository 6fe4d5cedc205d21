//! # Trip Console Test Suite
//!
//! Cross-crate flows run against a real HTTP backend bound to
//! `127.0.0.1:0`.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── support/          # In-process axum backend and client wiring
//! └── integration/      # End-to-end flows
//!     ├── session_flow.rs   # login, persistence, logout
//!     ├── guard_flow.rs     # route decisions over a live session
//!     └── query_flow.rs     # headers, pagination, invalidation, errors
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p tc-tests
//! cargo test -p tc-tests integration::query_flow
//! ```

pub mod integration;
pub mod support;
