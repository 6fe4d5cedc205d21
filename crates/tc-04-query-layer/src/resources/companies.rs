//! Company family, key `company`.

use shared_types::{Company, ListEnvelope};
use tc_03_gateway_client::{Payload, QueryDescriptor};

use crate::domain::keys::COMPANY;
use crate::domain::pagination::Pagination;

pub const PATH: &str = "/companies";

/// Response of [`list`].
pub type CompanyList = ListEnvelope<Company>;

/// `GET /companies?page&limit`
pub fn list(pagination: &Pagination) -> QueryDescriptor {
    super::paged_list(PATH, COMPANY, pagination)
}

/// `POST /companies` with a JSON record or a multipart form.
pub fn create(payload: impl Into<Payload>) -> QueryDescriptor {
    super::create(PATH, COMPANY, payload.into())
}

/// `PUT /companies/{id}`
pub fn update(id: &str, payload: impl Into<Payload>) -> QueryDescriptor {
    super::update(PATH, COMPANY, id, payload.into())
}

/// `DELETE /companies/{id}`
pub fn delete(id: &str) -> QueryDescriptor {
    super::delete(PATH, COMPANY, id)
}
