//! Observable state of one read.

/// Latest resolution of a read.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    /// Deferred and never run.
    Idle,
    /// First fetch in flight. Refetches keep the previous state visible.
    Loading,
    Ready(T),
    /// Last fetch failed with this message.
    Failed(String),
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        QueryState::Idle
    }
}

impl<T> QueryState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            QueryState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
