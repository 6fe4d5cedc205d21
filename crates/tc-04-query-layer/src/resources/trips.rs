//! Trip family, key `trip`.

use shared_types::{ListEnvelope, Trip};
use tc_03_gateway_client::{Payload, QueryDescriptor};

use crate::domain::keys::TRIP;
use crate::domain::pagination::Pagination;

pub const PATH: &str = "/trip";

/// Response of [`list`].
pub type TripList = ListEnvelope<Trip>;

/// `GET /trip?page&limit`
pub fn list(pagination: &Pagination) -> QueryDescriptor {
    super::paged_list(PATH, TRIP, pagination)
}

/// `POST /trip` with a JSON record or a multipart form.
pub fn create(payload: impl Into<Payload>) -> QueryDescriptor {
    super::create(PATH, TRIP, payload.into())
}

/// `PUT /trip/{id}`
pub fn update(id: &str, payload: impl Into<Payload>) -> QueryDescriptor {
    super::update(PATH, TRIP, id, payload.into())
}

/// `DELETE /trip/{id}`
pub fn delete(id: &str) -> QueryDescriptor {
    super::delete(PATH, TRIP, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{LocalizedText, TripDetails};
    use tc_03_gateway_client::{FormPayload, Method};

    #[test]
    fn test_list_reads_pagination_late() {
        let pagination = Pagination::default();
        let descriptor = list(&pagination);
        pagination.set_page(2);
        assert_eq!(descriptor.endpoint.resolve(), "/trip?page=2&limit=10");
        assert_eq!(descriptor.cache_key.as_str(), "trip");
        assert!(!descriptor.defer_execution);
    }

    #[test]
    fn test_writes_share_the_read_key() {
        let details = TripDetails {
            name: LocalizedText::new("Coast", "الساحل"),
            ..Default::default()
        };
        let json_write = create(Payload::json(&details).unwrap());
        let form_write = update("t1", FormPayload::new().text("price", "100"));
        let removal = delete("t1");

        for descriptor in [&json_write, &form_write, &removal] {
            assert_eq!(descriptor.cache_key.as_str(), TRIP);
            assert!(descriptor.defer_execution);
        }
        assert_eq!(form_write.method, Method::Put);
        assert_eq!(form_write.endpoint.resolve(), "/trip/t1");
        assert!(form_write.payload.as_ref().unwrap().is_multipart());
        assert_eq!(
            json_write.payload,
            Some(Payload::Json(serde_json::to_value(&details).unwrap()))
        );
        assert_eq!(removal.method, Method::Delete);
    }
}
