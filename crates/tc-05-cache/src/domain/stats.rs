//! Invalidation counters.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct CacheStats {
    notifications: AtomicU64,
    refetches: AtomicU64,
    pruned: AtomicU64,
}

/// Point-in-time copy of [`CacheStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStatsSnapshot {
    /// `on_response` calls.
    pub notifications: u64,
    /// Refetches started by the coordinator.
    pub refetches: u64,
    /// Dead subscriptions removed from the registry.
    pub pruned: u64,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_notification(&self) {
        self.notifications.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_refetches(&self, count: u64) {
        self.refetches.fetch_add(count, Ordering::Relaxed);
    }

    pub fn record_pruned(&self, count: u64) {
        self.pruned.fetch_add(count, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> CacheStatsSnapshot {
        CacheStatsSnapshot {
            notifications: self.notifications.load(Ordering::Relaxed),
            refetches: self.refetches.load(Ordering::Relaxed),
            pruned: self.pruned.load(Ordering::Relaxed),
        }
    }
}
