//! Gateway configuration with validation.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::warn;

/// Base endpoint of the development backend.
pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:5000/api";

/// Which backend the console talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiTarget {
    #[default]
    Development,
    Production,
}

impl ApiTarget {
    /// Built-in base URL, if the target has one.
    pub fn default_base_url(self) -> Option<&'static str> {
        match self {
            ApiTarget::Development => Some(DEVELOPMENT_BASE_URL),
            ApiTarget::Production => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(ApiTarget::Development),
            "production" | "prod" => Some(ApiTarget::Production),
            _ => None,
        }
    }
}

/// Gateway client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub target: ApiTarget,
    /// Every request URL is joined onto this.
    pub base_url: String,
    /// Per-request timeout. `None` keeps the transport default.
    pub timeout_secs: Option<u64>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::for_target(ApiTarget::Development)
    }
}

impl GatewayConfig {
    pub fn for_target(target: ApiTarget) -> Self {
        Self {
            target,
            base_url: target.default_base_url().unwrap_or_default().to_string(),
            timeout_secs: None,
        }
    }

    /// Configuration pinned to an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Create configuration from environment variables.
    ///
    /// - `TC_API_TARGET`: `development` (default) or `production`
    /// - `TC_API_BASE_URL`: overrides the target's built-in URL
    /// - `TC_API_TIMEOUT_SECS`: per-request timeout in seconds
    ///
    /// Unparsable values are logged and ignored; call [`validate`](Self::validate)
    /// on the result.
    pub fn from_env() -> Self {
        let target = match env::var("TC_API_TARGET") {
            Ok(value) => ApiTarget::parse(&value).unwrap_or_else(|| {
                warn!(value = %value, "Unknown TC_API_TARGET, using development");
                ApiTarget::Development
            }),
            Err(_) => ApiTarget::Development,
        };

        let mut config = Self::for_target(target);

        if let Ok(url) = env::var("TC_API_BASE_URL") {
            config.base_url = url;
        }

        if let Ok(value) = env::var("TC_API_TIMEOUT_SECS") {
            match value.trim().parse::<u64>() {
                Ok(secs) => config.timeout_secs = Some(secs),
                Err(_) => warn!(value = %value, "Ignoring unparsable TC_API_TIMEOUT_SECS"),
            }
        }

        config
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::MissingBaseUrl(self.target));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("no base URL configured for the {0:?} target")]
    MissingBaseUrl(ApiTarget),
    #[error("base URL must be http(s): {0}")]
    InvalidBaseUrl(String),
    #[error("timeout must be greater than zero")]
    InvalidTimeout,
}
