//! # Guard Flows
//!
//! Route decisions track the live session through login and logout.

#[cfg(test)]
mod tests {
    use shared_types::Credentials;
    use tc_02_route_guard::{GuardRule, RouteTarget};
    use tc_04_query_layer::auth;

    use crate::support::backend::PASSWORD;
    use crate::support::{Console, MockBackend};

    fn trips() -> RouteTarget {
        RouteTarget::new("trips", "/trips")
    }

    fn login_page() -> RouteTarget {
        RouteTarget::new("auth", "/auth")
    }

    #[tokio::test]
    async fn test_admin_lifecycle() {
        let backend = MockBackend::spawn().await;
        let console = Console::connect(&backend);

        assert_eq!(console.guard.check(&trips()).redirect_target(), Some("/auth"));
        assert!(console.guard.check(&login_page()).is_allowed());

        auth::login(
            &console.client,
            &console.session,
            &Credentials::new("ops@example.com", PASSWORD),
        )
        .await
        .unwrap();

        assert!(console.guard.check(&trips()).is_allowed());
        assert_eq!(console.guard.check(&login_page()).redirect_target(), Some("/"));

        auth::logout(&console.client, &console.session).await.unwrap();
        assert_eq!(
            console.guard.check(&trips()).rule(),
            GuardRule::LoginRequired
        );
    }

    #[tokio::test]
    async fn test_editor_never_gets_past_the_gate() {
        let backend = MockBackend::spawn().await;
        let console = Console::connect(&backend);

        auth::login(
            &console.client,
            &console.session,
            &Credentials::new("editor@example.com", PASSWORD),
        )
        .await
        .unwrap();

        assert!(console.session.is_authenticated());
        for target in [trips(), login_page(), RouteTarget::new("users", "/users")] {
            let decision = console.guard.check(&target);
            assert_eq!(decision.rule(), GuardRule::AdminOnly, "{target:?}");
        }
        assert_eq!(console.guard.check(&trips()).redirect_target(), Some("/auth"));
    }
}
