//! Shared test wiring.

pub mod backend;

use std::path::Path;
use std::sync::Arc;

use tc_01_session::adapters::{FileSessionStore, InMemorySessionStore, RecordingNavigator};
use tc_01_session::{SessionConfig, SessionContext, SessionStore};
use tc_02_route_guard::{GuardConfig, RouteGuard};
use tc_03_gateway_client::adapters::LastErrorStore;
use tc_03_gateway_client::{GatewayClient, GatewayConfig};
use tc_04_query_layer::QueryClient;

pub use backend::MockBackend;

/// A console wired to a backend over real HTTP.
pub struct Console {
    pub session: Arc<SessionContext>,
    pub navigator: Arc<RecordingNavigator>,
    pub client: QueryClient,
    pub errors: Arc<LastErrorStore>,
    pub guard: RouteGuard,
}

impl Console {
    pub fn connect(backend: &MockBackend) -> Self {
        Self::with_store(backend, Arc::new(InMemorySessionStore::new()))
    }

    /// Console whose session lives in a JSON file.
    pub fn with_session_file(backend: &MockBackend, path: &Path) -> Self {
        Self::with_store(backend, Arc::new(FileSessionStore::new(path)))
    }

    pub fn with_store(backend: &MockBackend, store: Arc<dyn SessionStore>) -> Self {
        let navigator = Arc::new(RecordingNavigator::new());
        let session = Arc::new(SessionContext::init(
            store,
            navigator.clone(),
            SessionConfig::default(),
        ));
        let errors = Arc::new(LastErrorStore::new());
        let gateway = GatewayClient::with_reqwest(
            GatewayConfig::with_base_url(backend.base_url()),
            session.clone(),
            errors.clone(),
        )
        .expect("build reqwest transport");

        Self {
            guard: RouteGuard::new(session.clone(), GuardConfig::default()),
            client: QueryClient::with_gateway(gateway),
            session,
            navigator,
            errors,
        }
    }
}
