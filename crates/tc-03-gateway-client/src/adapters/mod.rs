//! Adapters
//!
//! - `http`: production reqwest HTTP transport
//! - `scripted`: in-process transport answering from a closure
//! - `error_store`: last-error holder for the display layer

mod error_store;
mod http;
mod scripted;

pub use error_store::LastErrorStore;
pub use http::ReqwestTransport;
pub use scripted::ScriptedTransport;
