//! # API Gateway Client (tc-03)
//!
//! Issues every outbound request against one configured base endpoint.
//!
//! ## Request Pipeline
//!
//! ```text
//! QueryDescriptor
//!       │
//!       ▼
//! ┌──────────────────┐   snapshot    ┌────────────────┐
//! │ pre-request hook │ ◄──────────── │ SessionContext │
//! │ (identity hdrs)  │               └────────────────┘
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐
//! │  HttpTransport   │  reqwest in production, scripted in tests
//! └────────┬─────────┘
//!          ▼
//!   2xx ──► HttpResponse
//!   else ─► post-error hook ──► ErrorSink ──► Err(GatewayError)
//! ```
//!
//! ## Headers
//!
//! | Header | Value |
//! |--------|-------|
//! | `Accept` | `application/json` |
//! | `Authorization` | `Bearer <token>` (empty token when signed out) |
//! | `role` | the session role, or `undefined` |
//!
//! The headers are built from the session at dispatch time, never cached
//! on the client. No request is retried.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use domain::config::{ApiTarget, ConfigError, GatewayConfig};
pub use domain::descriptor::{
    CacheKey, Endpoint, FormPayload, FormValue, Method, Payload, QueryDescriptor,
};
pub use domain::error::{GatewayError, TransportError};
pub use domain::request::{HttpRequest, HttpResponse, RequestBody};
pub use ports::outbound::{ErrorSink, HttpTransport};
pub use service::GatewayClient;
