//! Ports for the gateway client.

pub mod outbound;
