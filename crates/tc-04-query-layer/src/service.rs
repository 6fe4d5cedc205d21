//! # Query Client
//!
//! Entry point of the query layer: the gateway plus the invalidation
//! coordinator.

use serde::de::DeserializeOwned;
use std::sync::Arc;
use tc_01_session::SessionContext;
use tc_03_gateway_client::{GatewayClient, QueryDescriptor};
use tc_05_cache::InvalidationCoordinator;

use crate::handle::QueryHandle;
use crate::mutation::Mutation;

#[derive(Clone)]
pub struct QueryClient {
    gateway: Arc<GatewayClient>,
    coordinator: Arc<InvalidationCoordinator>,
}

impl QueryClient {
    pub fn new(gateway: Arc<GatewayClient>, coordinator: Arc<InvalidationCoordinator>) -> Self {
        Self {
            gateway,
            coordinator,
        }
    }

    /// Client with its own coordinator.
    pub fn with_gateway(gateway: GatewayClient) -> Self {
        Self::new(Arc::new(gateway), InvalidationCoordinator::shared())
    }

    pub fn gateway(&self) -> &Arc<GatewayClient> {
        &self.gateway
    }

    pub fn coordinator(&self) -> &Arc<InvalidationCoordinator> {
        &self.coordinator
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        self.gateway.session()
    }

    /// Register a live read. Unless the descriptor is deferred, the first
    /// fetch has completed when this returns.
    pub async fn query<T>(&self, descriptor: QueryDescriptor) -> QueryHandle<T>
    where
        T: DeserializeOwned + Clone + Send + Sync + 'static,
    {
        let handle = QueryHandle::register(self.clone(), descriptor);
        if !handle.descriptor().defer_execution {
            // The outcome lands in the handle's state.
            let _ = handle.refresh().await;
        }
        handle
    }

    /// Build a write. Nothing is sent until [`Mutation::execute`].
    pub fn mutation<T>(&self, descriptor: QueryDescriptor) -> Mutation<T>
    where
        T: DeserializeOwned,
    {
        Mutation::new(self.clone(), descriptor)
    }
}

impl std::fmt::Debug for QueryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryClient")
            .field("gateway", &self.gateway)
            .field("coordinator", &self.coordinator)
            .finish()
    }
}
