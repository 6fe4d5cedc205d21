//! # Domain Layer
//!
//! Pure session state with no I/O.

pub mod config;
pub mod errors;
pub mod state;
