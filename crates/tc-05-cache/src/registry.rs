//! # Cache Registry
//!
//! `cache key → live read subscriptions`. Entries hold weak references, so
//! the registry never keeps a dropped read alive; dead entries are pruned
//! whenever their key is looked up.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use tc_03_gateway_client::CacheKey;
use tracing::debug;

use crate::ports::outbound::{Refetch, SubscriptionId};

struct Entry {
    id: SubscriptionId,
    target: Weak<dyn Refetch>,
}

pub struct CacheRegistry {
    entries: DashMap<CacheKey, Vec<Entry>>,
    id_counter: AtomicU64,
}

impl Default for CacheRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheRegistry {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            id_counter: AtomicU64::new(1),
        }
    }

    pub fn register(&self, key: &CacheKey, target: Weak<dyn Refetch>) -> SubscriptionId {
        let id = SubscriptionId(self.id_counter.fetch_add(1, Ordering::SeqCst));
        self.entries
            .entry(key.clone())
            .or_default()
            .push(Entry { id, target });
        debug!(cache_key = %key, subscription = %id, "Registered read");
        id
    }

    /// Remove one subscription. Returns whether it was present.
    pub fn unregister(&self, key: &CacheKey, id: SubscriptionId) -> bool {
        let removed = match self.entries.get_mut(key) {
            Some(mut entries) => {
                let before = entries.len();
                entries.retain(|e| e.id != id);
                before != entries.len()
            }
            None => false,
        };
        self.entries.remove_if(key, |_, entries| entries.is_empty());
        if removed {
            debug!(cache_key = %key, subscription = %id, "Unregistered read");
        }
        removed
    }

    /// Live subscriptions under `key`, plus the number of dead entries
    /// pruned on the way.
    pub fn live(&self, key: &CacheKey) -> (Vec<(SubscriptionId, Arc<dyn Refetch>)>, usize) {
        let mut live = Vec::new();
        let mut pruned = 0;
        if let Some(mut entries) = self.entries.get_mut(key) {
            entries.retain(|entry| match entry.target.upgrade() {
                Some(target) => {
                    live.push((entry.id, target));
                    true
                }
                None => {
                    pruned += 1;
                    false
                }
            });
        }
        self.entries.remove_if(key, |_, entries| entries.is_empty());
        (live, pruned)
    }

    /// Registered entries under `key`, dead or alive.
    pub fn len(&self, key: &CacheKey) -> usize {
        self.entries.get(key).map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> Vec<CacheKey> {
        let mut keys: Vec<_> = self.entries.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        keys
    }
}
