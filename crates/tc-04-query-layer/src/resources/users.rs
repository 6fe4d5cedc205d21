//! User family, key `user`.

use shared_types::{ListEnvelope, User};
use tc_03_gateway_client::{Method, QueryDescriptor};

use crate::domain::keys::USER;
use crate::domain::pagination::Pagination;

pub const PATH: &str = "/admin/users";

/// Page size the user list opens with.
pub const DEFAULT_LIMIT: u32 = 50;

pub type UserList = ListEnvelope<User>;

pub fn default_pagination() -> Pagination {
    Pagination::new(1, DEFAULT_LIMIT)
}

/// `GET /admin/users?page&limit`
pub fn list(pagination: &Pagination) -> QueryDescriptor {
    super::paged_list(PATH, USER, pagination)
}

/// `PUT /admin/users/block/{id}`. The server flips the blocked flag.
pub fn toggle_block(id: &str) -> QueryDescriptor {
    QueryDescriptor::write(Method::Put, format!("{PATH}/block/{id}"), USER, None)
}
