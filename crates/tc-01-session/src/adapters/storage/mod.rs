//! Storage Adapters
//!
//! Implementations of the `SessionStore` trait.

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::InMemorySessionStore;
