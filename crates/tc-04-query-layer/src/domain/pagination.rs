//! Shared pagination parameters.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// `{page, limit}` shared between a caller and the deferred endpoints built
/// from it. Clones observe each other's updates; values below 1 are raised
/// to 1.
#[derive(Debug, Clone)]
pub struct Pagination {
    page: Arc<AtomicU32>,
    limit: Arc<AtomicU32>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

impl Pagination {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: Arc::new(AtomicU32::new(page.max(1))),
            limit: Arc::new(AtomicU32::new(limit.max(1))),
        }
    }

    pub fn page(&self) -> u32 {
        self.page.load(Ordering::SeqCst)
    }

    pub fn limit(&self) -> u32 {
        self.limit.load(Ordering::SeqCst)
    }

    pub fn set_page(&self, page: u32) {
        self.page.store(page.max(1), Ordering::SeqCst);
    }

    pub fn set_limit(&self, limit: u32) {
        self.limit.store(limit.max(1), Ordering::SeqCst);
    }

    /// Advance one page, stopping at `u32::MAX`.
    pub fn next_page(&self) {
        // The closure always returns Some, so the update cannot fail.
        let _ = self
            .page
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |page| {
                Some(page.saturating_add(1))
            });
    }

    /// `?page=P&limit=L`
    pub fn query_string(&self) -> String {
        format!("?page={}&limit={}", self.page(), self.limit())
    }
}
