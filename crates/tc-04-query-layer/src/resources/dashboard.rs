//! Dashboard overview, key `dashboard`.
//!
//! The overview payload has no fixed shape; read it as `serde_json::Value`.

use tc_03_gateway_client::QueryDescriptor;

use crate::domain::keys::DASHBOARD;

pub const PATH: &str = "/admin/dashboard";

pub fn overview() -> QueryDescriptor {
    QueryDescriptor::read(PATH, DASHBOARD)
}
