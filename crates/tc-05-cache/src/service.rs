//! # Invalidation Coordinator
//!
//! Called by the query layer after every completed response.

use futures::future::join_all;
use std::sync::{Arc, Weak};
use tc_03_gateway_client::CacheKey;
use tracing::{debug, trace};

use crate::domain::stats::{CacheStats, CacheStatsSnapshot};
use crate::ports::outbound::{Refetch, SubscriptionId};
use crate::registry::CacheRegistry;

#[derive(Default)]
pub struct InvalidationCoordinator {
    registry: CacheRegistry,
    stats: CacheStats,
}

impl InvalidationCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn registry(&self) -> &CacheRegistry {
        &self.registry
    }

    pub fn register(&self, key: &CacheKey, target: Weak<dyn Refetch>) -> SubscriptionId {
        self.registry.register(key, target)
    }

    pub fn unregister(&self, key: &CacheKey, id: SubscriptionId) -> bool {
        self.registry.unregister(key, id)
    }

    /// Re-resolve every live read under `key` and wait for all of them.
    ///
    /// `origin` is the subscription whose own fetch produced the response,
    /// if any; it is not refetched. Returns the number of refetches run.
    pub async fn on_response(&self, key: &CacheKey, origin: Option<SubscriptionId>) -> usize {
        self.stats.record_notification();

        let (live, pruned) = self.registry.live(key);
        if pruned > 0 {
            self.stats.record_pruned(pruned as u64);
            trace!(cache_key = %key, pruned, "Pruned dropped reads");
        }

        let targets: Vec<_> = live
            .into_iter()
            .filter(|(id, _)| Some(*id) != origin)
            .map(|(_, target)| target)
            .collect();
        let count = targets.len();
        if count == 0 {
            return 0;
        }

        debug!(cache_key = %key, origin = ?origin, count, "Invalidating reads");
        self.stats.record_refetches(count as u64);
        join_all(targets.iter().map(|target| target.refetch())).await;
        count
    }

    pub fn stats(&self) -> CacheStatsSnapshot {
        self.stats.snapshot()
    }
}

impl std::fmt::Debug for InvalidationCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvalidationCoordinator")
            .field("keys", &self.registry.keys())
            .field("stats", &self.stats.snapshot())
            .finish()
    }
}
