//! # Session Flows
//!
//! Login installs and persists the identity, a fresh process restores it,
//! and logout clears it on both sides.

#[cfg(test)]
mod tests {
    use shared_types::{Credentials, Role};
    use tc_04_query_layer::auth;

    use crate::support::backend::{ADMIN_TOKEN, PASSWORD};
    use crate::support::{Console, MockBackend};

    #[tokio::test]
    async fn test_login_persists_and_restores() {
        let backend = MockBackend::spawn().await;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        {
            let console = Console::with_session_file(&backend, &path);
            auth::login(
                &console.client,
                &console.session,
                &Credentials::new("ops@example.com", PASSWORD),
            )
            .await
            .unwrap();
            console.session.teardown();
        }

        let restored = Console::with_session_file(&backend, &path);
        assert_eq!(restored.session.token().as_deref(), Some(ADMIN_TOKEN));
        assert_eq!(restored.session.role(), Some(Role::Admin));
        assert_eq!(restored.session.profile().display_name, "Ops Lead");
        assert_eq!(restored.session.profile().email, "ops@example.com");
    }

    #[tokio::test]
    async fn test_wrong_password_reports_server_message() {
        let backend = MockBackend::spawn().await;
        let console = Console::connect(&backend);

        let err = auth::login(
            &console.client,
            &console.session,
            &Credentials::new("ops@example.com", "nope"),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert_eq!(console.errors.message().as_deref(), Some("Invalid credentials"));
        assert!(!console.session.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_clears_file_and_navigates() {
        let backend = MockBackend::spawn().await;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let console = Console::with_session_file(&backend, &path);
        auth::login(
            &console.client,
            &console.session,
            &Credentials::new("ops@example.com", PASSWORD),
        )
        .await
        .unwrap();

        auth::logout(&console.client, &console.session).await.unwrap();

        let logout_calls = backend.state.seen_matching("POST", "/api/auth/logout");
        assert_eq!(logout_calls.len(), 1);
        assert_eq!(
            logout_calls[0].authorization.as_deref(),
            Some(format!("Bearer {ADMIN_TOKEN}").as_str())
        );
        assert!(!console.session.is_authenticated());
        assert_eq!(console.navigator.last().as_deref(), Some("/auth"));

        let restored = Console::with_session_file(&backend, &path);
        assert!(!restored.session.is_authenticated());
        assert!(restored.session.profile().is_empty());
    }
}
