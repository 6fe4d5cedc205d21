//! Guard configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Symbolic-name prefix of the authentication area.
    pub auth_area_prefix: String,
    /// Where unauthenticated and non-admin sessions are sent.
    pub auth_entry_path: String,
    /// Where an authenticated admin is sent away from the auth area.
    pub root_path: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            auth_area_prefix: "auth".to_string(),
            auth_entry_path: "/auth".to_string(),
            root_path: "/".to_string(),
        }
    }
}

impl GuardConfig {
    pub fn validate(&self) -> Result<(), GuardConfigError> {
        if self.auth_area_prefix.is_empty() {
            return Err(GuardConfigError::EmptyAuthPrefix);
        }
        for path in [&self.auth_entry_path, &self.root_path] {
            if !path.starts_with('/') {
                return Err(GuardConfigError::RelativePath(path.clone()));
            }
        }
        if self.auth_entry_path == self.root_path {
            return Err(GuardConfigError::SameTargets);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum GuardConfigError {
    #[error("auth area prefix cannot be empty")]
    EmptyAuthPrefix,
    #[error("redirect path must start with '/': {0}")]
    RelativePath(String),
    #[error("auth entry and root must differ")]
    SameTargets,
}
