//! # Ports Layer
//!
//! - `outbound.rs` - Driven ports (persistence substrate, navigation)

pub mod outbound;
