//! # Query Layer (tc-04)
//!
//! Resource-scoped functions that describe what to request and under which
//! cache key, plus the runtime that turns descriptors into live reads and
//! triggerable writes.
//!
//! ## Families
//!
//! | Module | Key | Reads | Writes |
//! |--------|-----|-------|--------|
//! | `auth` | `admin` / `logout` | | login, logout |
//! | `companies` | `company` | paginated list | create, update, delete |
//! | `countries` | `country` | paginated list | create, update, delete |
//! | `trips` | `trip` | paginated list | create, update, delete |
//! | `users` | `user` | paginated list | toggle block |
//! | `dashboard` | `dashboard` | overview | |
//!
//! ## Runtime
//!
//! - [`QueryClient::query`] registers a read with the invalidation
//!   coordinator and fetches it unless the descriptor is deferred.
//! - [`QueryClient::mutation`] builds a write that runs only on
//!   [`Mutation::execute`].
//! - Every completed response, success or failure, re-resolves the other
//!   live reads sharing its key before the call returns.

pub mod domain;
pub mod handle;
pub mod mutation;
pub mod resources;
pub mod service;

pub use domain::keys;
pub use domain::pagination::Pagination;
pub use domain::state::QueryState;
pub use handle::QueryHandle;
pub use mutation::Mutation;
pub use resources::{auth, companies, countries, dashboard, trips, users};
pub use service::QueryClient;
