use parking_lot::Mutex;

use crate::ports::outbound::Navigator;

/// Navigator that records every requested path.
///
/// Hosts without a router (the CLI, tests) use it to observe where the
/// session wanted to go.
#[derive(Default)]
pub struct RecordingNavigator {
    history: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<String> {
        self.history.lock().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.history.lock().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        tracing::debug!(path, "Navigation requested");
        self.history.lock().push(path.to_string());
    }
}
