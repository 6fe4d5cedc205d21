//! # Cache Invalidation (tc-05)
//!
//! Every completed response, success or failure, re-resolves all live read
//! subscriptions tagged with the response's cache key.
//!
//! ```text
//! response(K) ──► InvalidationCoordinator::on_response(K, origin)
//!                        │
//!                        ▼
//!                 CacheRegistry::live(K)   (prunes dropped reads)
//!                        │
//!          ┌─────────────┼─────────────┐
//!          ▼             ▼             ▼
//!      refetch()     refetch()     refetch()    (concurrently, awaited)
//! ```
//!
//! ## Rules
//!
//! - The subscription whose own fetch produced the response is skipped.
//! - Refetches started here never notify the coordinator again, so
//!   invalidation cannot cascade or loop.
//! - Once `on_response` returns, every live read under `K` has issued a
//!   request no earlier than the triggering response.

pub mod domain;
pub mod ports;
pub mod registry;
pub mod service;

pub use domain::stats::{CacheStats, CacheStatsSnapshot};
pub use ports::outbound::{Refetch, SubscriptionId};
pub use registry::CacheRegistry;
pub use service::InvalidationCoordinator;
pub use tc_03_gateway_client::CacheKey;
