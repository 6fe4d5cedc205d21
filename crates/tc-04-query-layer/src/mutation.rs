//! Triggerable writes.

use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use tc_03_gateway_client::{GatewayError, QueryDescriptor};
use tracing::debug;

use crate::service::QueryClient;

/// A write built from a deferred descriptor.
///
/// `execute` may be called any number of times; each call is one request
/// followed by invalidation of the descriptor's key.
pub struct Mutation<T> {
    client: QueryClient,
    descriptor: QueryDescriptor,
    executions: AtomicU64,
    _response: PhantomData<fn() -> T>,
}

impl<T> Mutation<T>
where
    T: DeserializeOwned,
{
    pub(crate) fn new(client: QueryClient, descriptor: QueryDescriptor) -> Self {
        Self {
            client,
            descriptor,
            executions: AtomicU64::new(0),
            _response: PhantomData,
        }
    }

    pub fn descriptor(&self) -> &QueryDescriptor {
        &self.descriptor
    }

    pub fn executions(&self) -> u64 {
        self.executions.load(Ordering::SeqCst)
    }

    /// Send the write, then re-resolve every live read under its key,
    /// whether the write succeeded or not.
    pub async fn execute(&self) -> Result<T, GatewayError> {
        self.executions.fetch_add(1, Ordering::SeqCst);
        let result = self.client.gateway().send_json::<T>(&self.descriptor).await;

        let refreshed = self
            .client
            .coordinator()
            .on_response(&self.descriptor.cache_key, None)
            .await;
        debug!(
            cache_key = %self.descriptor.cache_key,
            method = %self.descriptor.method,
            ok = result.is_ok(),
            refreshed,
            "Mutation settled"
        );

        result
    }
}
