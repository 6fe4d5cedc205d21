//! # tc-admin
//!
//! Wires the session, guard, gateway, query layer and cache together against
//! a live backend. The session is kept in a JSON file between invocations.

pub mod cli;
pub mod commands;
pub mod paths;

pub use commands::run;
