//! Navigation targets.

use serde::{Deserialize, Serialize};

/// A route identified by symbolic name and path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteTarget {
    pub name: String,
    pub path: String,
}

impl RouteTarget {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Whether the route belongs to the authentication area.
    ///
    /// Membership is by symbolic name prefix (`auth`, `auth-login`,
    /// `auth-reset`, ...). An empty prefix puts nothing in the area.
    pub fn in_auth_area(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.name.starts_with(prefix)
    }
}
