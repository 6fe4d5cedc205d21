//! Adapters
//!
//! Implementations of the session ports.

mod navigation;
pub mod storage;

pub use navigation::RecordingNavigator;
pub use storage::{FileSessionStore, InMemorySessionStore};
