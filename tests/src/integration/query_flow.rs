//! # Query Flows
//!
//! Identity headers on the wire, paginated reads, write-driven
//! invalidation, multipart uploads and error normalisation, all over real
//! HTTP.

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use shared_types::Credentials;
    use tc_03_gateway_client::domain::error::GENERIC_ERROR_MESSAGE;
    use tc_03_gateway_client::{FormPayload, Payload, QueryDescriptor};
    use tc_04_query_layer::{
        auth, countries, dashboard, trips, users, Pagination, QueryHandle, QueryState,
    };

    use crate::support::backend::{ADMIN_TOKEN, PASSWORD};
    use crate::support::{Console, MockBackend};

    async fn signed_in(backend: &MockBackend) -> Console {
        let console = Console::connect(backend);
        auth::login(
            &console.client,
            &console.session,
            &Credentials::new("ops@example.com", PASSWORD),
        )
        .await
        .unwrap();
        console
    }

    fn trip_names(handle: &QueryHandle<trips::TripList>) -> Vec<String> {
        handle
            .data()
            .map(|list| list.items().iter().map(|t| t.details.name.en.clone()).collect())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_identity_headers_on_the_wire() {
        let backend = MockBackend::spawn().await;
        let console = Console::connect(&backend);

        let anonymous: QueryHandle<trips::TripList> = console
            .client
            .query(trips::list(&Pagination::default()))
            .await;
        assert_eq!(anonymous.state(), QueryState::Failed("Unauthorized".into()));

        auth::login(
            &console.client,
            &console.session,
            &Credentials::new("ops@example.com", PASSWORD),
        )
        .await
        .unwrap();
        anonymous.refresh().await.unwrap();

        let reads = backend.state.seen_matching("GET", "/api/trip");
        let first = &reads[0];
        assert_eq!(first.authorization.as_deref(), Some("Bearer "));
        assert_eq!(first.role.as_deref(), Some("undefined"));
        assert_eq!(first.accept.as_deref(), Some("application/json"));

        let last = reads.last().unwrap();
        assert_eq!(
            last.authorization.as_deref(),
            Some(format!("Bearer {ADMIN_TOKEN}").as_str())
        );
        assert_eq!(last.role.as_deref(), Some("admin"));
        assert_eq!(trip_names(&anonymous).len(), 5);
    }

    #[tokio::test]
    async fn test_pagination_read_at_dispatch() {
        let backend = MockBackend::spawn().await;
        let console = signed_in(&backend).await;
        let pagination = Pagination::new(1, 2);

        let page: QueryHandle<trips::TripList> =
            console.client.query(trips::list(&pagination)).await;
        assert_eq!(trip_names(&page), vec!["Trip 1", "Trip 2"]);

        pagination.set_page(3);
        page.refresh().await.unwrap();

        assert_eq!(trip_names(&page), vec!["Trip 5"]);
        let info = page.data().unwrap().pagination();
        assert_eq!((info.page, info.limit, info.total_pages), (3, 2, 3));
        let third_page = backend.state.seen_matching("GET", "/api/trip?page=3&limit=2");
        assert_eq!(third_page.len(), 1);
    }

    #[tokio::test]
    async fn test_create_refreshes_every_trip_list() {
        let backend = MockBackend::spawn().await;
        let console = signed_in(&backend).await;

        let wide: QueryHandle<trips::TripList> = console
            .client
            .query(trips::list(&Pagination::new(1, 50)))
            .await;
        let narrow: QueryHandle<trips::TripList> = console
            .client
            .query(trips::list(&Pagination::new(1, 2)))
            .await;
        let overview: QueryHandle<Value> = console.client.query(dashboard::overview()).await;
        let overview_fetches = overview.fetch_count();

        let create = console.client.mutation::<Value>(trips::create(Payload::Json(json!({
            "name": {"en": "Desert Camp", "ar": "مخيم"},
            "description": {"en": "", "ar": ""}
        }))));
        create.execute().await.unwrap();

        assert_eq!(backend.state.trip_count(), 6);
        assert!(trip_names(&wide).contains(&"Desert Camp".to_string()));
        assert_eq!(narrow.data().unwrap().pagination().total, 6);
        assert_eq!(overview.fetch_count(), overview_fetches);
    }

    #[tokio::test]
    async fn test_repeated_writes_settle_once_per_handle() {
        let backend = MockBackend::spawn().await;
        let console = signed_in(&backend).await;
        let list: QueryHandle<trips::TripList> = console
            .client
            .query(trips::list(&Pagination::new(1, 50)))
            .await;

        for id in ["t1", "t2", "t3"] {
            console
                .client
                .mutation::<Value>(trips::delete(id))
                .execute()
                .await
                .unwrap();
        }

        assert_eq!(trip_names(&list), vec!["Trip 4", "Trip 5"]);
        assert!(matches!(list.state(), QueryState::Ready(_)));
    }

    #[tokio::test]
    async fn test_failed_delete_reports_and_still_invalidates() {
        let backend = MockBackend::spawn().await;
        let console = signed_in(&backend).await;
        let list: QueryHandle<trips::TripList> = console
            .client
            .query(trips::list(&Pagination::default()))
            .await;
        let before = list.fetch_count();

        let err = console
            .client
            .mutation::<Value>(trips::delete("missing"))
            .execute()
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert_eq!(console.errors.message().as_deref(), Some("Trip not found"));
        assert_eq!(list.fetch_count(), before + 1);
    }

    #[tokio::test]
    async fn test_multipart_upload_reaches_server_as_form() {
        let backend = MockBackend::spawn().await;
        let console = signed_in(&backend).await;

        let form = FormPayload::new()
            .text("name[en]", "Oman")
            .text("name[ar]", "عمان")
            .file("images", "muscat.png", Some("image/png".into()), vec![0u8; 64]);
        console
            .client
            .mutation::<Value>(countries::create(form))
            .execute()
            .await
            .unwrap();

        let upload_request = &backend.state.seen_matching("POST", "/api/countries")[0];
        assert!(upload_request
            .content_type
            .as_deref()
            .unwrap_or_default()
            .starts_with("multipart/form-data"));

        let uploads = backend.state.uploads();
        assert_eq!(uploads.len(), 1);
        assert_eq!(
            uploads[0].text_fields,
            vec![
                ("name[en]".to_string(), "Oman".to_string()),
                ("name[ar]".to_string(), "عمان".to_string())
            ]
        );
        assert_eq!(
            uploads[0].files,
            vec![("images".to_string(), "muscat.png".to_string(), 64)]
        );
    }

    #[tokio::test]
    async fn test_block_toggle_refreshes_user_list() {
        let backend = MockBackend::spawn().await;
        let console = signed_in(&backend).await;
        let list: QueryHandle<users::UserList> = console
            .client
            .query(users::list(&users::default_pagination()))
            .await;
        let blocked = |handle: &QueryHandle<users::UserList>| {
            handle
                .data()
                .and_then(|l| l.items().iter().find(|u| u.id == "u1").map(|u| u.is_blocked))
        };
        assert_eq!(blocked(&list), Some(false));

        console
            .client
            .mutation::<Value>(users::toggle_block("u1"))
            .execute()
            .await
            .unwrap();

        assert_eq!(backend.state.user_blocked("u1"), Some(true));
        assert_eq!(blocked(&list), Some(true));
    }

    #[tokio::test]
    async fn test_malformed_error_body_gets_generic_message() {
        let backend = MockBackend::spawn().await;
        let console = signed_in(&backend).await;

        let handle: QueryHandle<Value> = console
            .client
            .query(QueryDescriptor::read("/broken", "broken"))
            .await;

        assert_eq!(handle.state(), QueryState::Failed(GENERIC_ERROR_MESSAGE.into()));
        assert_eq!(console.errors.message().as_deref(), Some(GENERIC_ERROR_MESSAGE));
    }
}
