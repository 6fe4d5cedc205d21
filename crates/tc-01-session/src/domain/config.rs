//! Session configuration.

use serde::{Deserialize, Serialize};
use std::env;

/// Default authentication entry route.
pub const DEFAULT_AUTH_ENTRY_PATH: &str = "/auth";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Route `logout()` navigates to.
    pub auth_entry_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            auth_entry_path: DEFAULT_AUTH_ENTRY_PATH.to_string(),
        }
    }
}

impl SessionConfig {
    /// Read `TC_AUTH_ENTRY_PATH`, falling back to `/auth`.
    pub fn from_env() -> Self {
        Self {
            auth_entry_path: env::var("TC_AUTH_ENTRY_PATH")
                .unwrap_or_else(|_| DEFAULT_AUTH_ENTRY_PATH.to_string()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.auth_entry_path.starts_with('/') {
            return Err(ConfigError::InvalidPath(self.auth_entry_path.clone()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("route path must start with '/': {0}")]
    InvalidPath(String),
}
