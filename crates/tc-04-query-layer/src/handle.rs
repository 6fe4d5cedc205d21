//! # Query Handles
//!
//! A live read. The handle owns a subscription the coordinator holds
//! weakly; dropping the handle unregisters it and discards any result still
//! in flight.
//!
//! Fetches are stamped with an increasing generation. A result is applied
//! only if no newer one has been applied already, so overlapping refetches
//! settle on the newest request whatever order they finish in.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use tc_03_gateway_client::{GatewayError, QueryDescriptor};
use tc_05_cache::{Refetch, SubscriptionId};
use tokio::sync::watch;
use tracing::{debug, trace};

use crate::domain::state::QueryState;
use crate::service::QueryClient;

struct Subscription<T> {
    client: QueryClient,
    descriptor: QueryDescriptor,
    state: watch::Sender<QueryState<T>>,
    issued: AtomicU64,
    applied: Mutex<u64>,
    closed: AtomicBool,
}

impl<T> Subscription<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// One fetch against current session and parameters. Never notifies
    /// the coordinator.
    async fn fetch(&self) -> Result<(), GatewayError> {
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_if_modified(|state| {
            if matches!(state, QueryState::Idle) {
                *state = QueryState::Loading;
                true
            } else {
                false
            }
        });

        let result = self.client.gateway().send_json::<T>(&self.descriptor).await;
        self.apply(generation, &result);
        result.map(|_| ())
    }

    fn apply(&self, generation: u64, result: &Result<T, GatewayError>) {
        if self.closed.load(Ordering::SeqCst) {
            trace!(cache_key = %self.descriptor.cache_key, "Discarding result of dropped read");
            return;
        }

        let mut applied = self.applied.lock();
        if generation < *applied {
            debug!(
                cache_key = %self.descriptor.cache_key,
                generation,
                applied = *applied,
                "Dropping stale result"
            );
            return;
        }
        *applied = generation;

        let next = match result {
            Ok(value) => QueryState::Ready(value.clone()),
            Err(err) => QueryState::Failed(err.display_message()),
        };
        self.state.send_replace(next);
    }
}

#[async_trait]
impl<T> Refetch for Subscription<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    async fn refetch(&self) {
        // Failures are already in the state and the error sink.
        let _ = self.fetch().await;
    }
}

pub struct QueryHandle<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    inner: Arc<Subscription<T>>,
    id: SubscriptionId,
}

impl<T> QueryHandle<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    pub(crate) fn register(client: QueryClient, descriptor: QueryDescriptor) -> Self {
        let (state, _) = watch::channel(QueryState::Idle);
        let coordinator = client.coordinator().clone();
        let inner = Arc::new(Subscription {
            client,
            descriptor,
            state,
            issued: AtomicU64::new(0),
            applied: Mutex::new(0),
            closed: AtomicBool::new(false),
        });

        let target: Weak<dyn Refetch> = Arc::downgrade(&inner) as Weak<dyn Refetch>;
        let id = coordinator.register(&inner.descriptor.cache_key, target);
        Self { inner, id }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn descriptor(&self) -> &QueryDescriptor {
        &self.inner.descriptor
    }

    /// Latest state.
    pub fn state(&self) -> QueryState<T> {
        self.inner.state.borrow().clone()
    }

    pub fn data(&self) -> Option<T> {
        self.inner.state.borrow().data().cloned()
    }

    /// Receiver that is notified on every state change.
    pub fn watch(&self) -> watch::Receiver<QueryState<T>> {
        self.inner.state.subscribe()
    }

    /// Number of fetches issued so far.
    pub fn fetch_count(&self) -> u64 {
        self.inner.issued.load(Ordering::SeqCst)
    }

    /// Fetch now, then re-resolve the other reads under the same key.
    ///
    /// Also the trigger for a deferred read.
    pub async fn refresh(&self) -> Result<(), GatewayError> {
        let result = self.inner.fetch().await;
        self.inner
            .client
            .coordinator()
            .on_response(&self.inner.descriptor.cache_key, Some(self.id))
            .await;
        result
    }
}

impl<T> Drop for QueryHandle<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    fn drop(&mut self) {
        self.inner.closed.store(true, Ordering::SeqCst);
        self.inner
            .client
            .coordinator()
            .unregister(&self.inner.descriptor.cache_key, self.id);
    }
}

impl<T> std::fmt::Debug for QueryHandle<T>
where
    T: DeserializeOwned + Clone + Send + Sync + std::fmt::Debug + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryHandle")
            .field("id", &self.id)
            .field("cache_key", &self.inner.descriptor.cache_key)
            .field("state", &*self.inner.state.borrow())
            .finish()
    }
}
