//! End-to-end flows across session, guard, gateway, query layer and cache.

pub mod guard_flow;
pub mod query_flow;
pub mod session_flow;
