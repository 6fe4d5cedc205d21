//! # Shared Types Crate
//!
//! Identity, session and resource record types shared across the console
//! crates.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: wire shapes of the catalogue REST service are
//!   defined once, here.
//! - **Identity is opaque**: the role travels as a string on the wire and is
//!   only interpreted through [`Role`]; unknown values never gain privileges.
//! - **Persisted subset**: [`PersistedSession`] is exactly what survives a
//!   process restart, nothing more.

pub mod entities;
pub mod envelope;
pub mod identity;

pub use entities::*;
pub use envelope::*;
pub use identity::*;
