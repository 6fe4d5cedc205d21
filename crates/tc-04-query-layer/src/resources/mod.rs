//! Resource families. Every function builds exactly one descriptor.

pub mod auth;
pub mod companies;
pub mod countries;
pub mod dashboard;
pub mod trips;
pub mod users;

use tc_03_gateway_client::{Endpoint, Method, Payload, QueryDescriptor};

use crate::domain::pagination::Pagination;

/// Paginated list read whose parameters are read at dispatch time.
pub(crate) fn paged_list(path: &'static str, key: &'static str, pagination: &Pagination) -> QueryDescriptor {
    let pagination = pagination.clone();
    QueryDescriptor::read(
        Endpoint::deferred(move || format!("{path}{}", pagination.query_string())),
        key,
    )
}

pub(crate) fn create(path: &'static str, key: &'static str, payload: Payload) -> QueryDescriptor {
    QueryDescriptor::write(Method::Post, path, key, Some(payload))
}

pub(crate) fn update(
    path: &'static str,
    key: &'static str,
    id: &str,
    payload: Payload,
) -> QueryDescriptor {
    QueryDescriptor::write(Method::Put, format!("{path}/{id}"), key, Some(payload))
}

pub(crate) fn delete(path: &'static str, key: &'static str, id: &str) -> QueryDescriptor {
    QueryDescriptor::write(Method::Delete, format!("{path}/{id}"), key, None)
}
