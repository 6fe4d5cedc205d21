//! Country family, key `country`.
//!
//! Country writes usually carry images, so callers tend to send a
//! multipart form rather than JSON.

use shared_types::{Country, ListEnvelope};
use tc_03_gateway_client::{Payload, QueryDescriptor};

use crate::domain::keys::COUNTRY;
use crate::domain::pagination::Pagination;

pub const PATH: &str = "/countries";

/// Response of [`list`].
pub type CountryList = ListEnvelope<Country>;

/// `GET /countries?page&limit`
pub fn list(pagination: &Pagination) -> QueryDescriptor {
    super::paged_list(PATH, COUNTRY, pagination)
}

/// `POST /countries` with a JSON record or a multipart form.
pub fn create(payload: impl Into<Payload>) -> QueryDescriptor {
    super::create(PATH, COUNTRY, payload.into())
}

/// `PUT /countries/{id}`
pub fn update(id: &str, payload: impl Into<Payload>) -> QueryDescriptor {
    super::update(PATH, COUNTRY, id, payload.into())
}

/// `DELETE /countries/{id}`
pub fn delete(id: &str) -> QueryDescriptor {
    super::delete(PATH, COUNTRY, id)
}
