//! Domain layer for the gateway client.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod headers;
pub mod request;
pub mod url;
