//! Outbound port: the read subscriptions the coordinator drives.

use async_trait::async_trait;
use std::fmt;

/// Registry-assigned identity of one read subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// A live read that can be re-resolved.
#[async_trait]
pub trait Refetch: Send + Sync {
    /// Re-issue the read against current session state and parameters.
    ///
    /// Implementations must not call back into the coordinator.
    async fn refetch(&self);
}
