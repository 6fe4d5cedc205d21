//! # Console Telemetry
//!
//! Structured logging for the trip console crates.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tc_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! let _guard = init_logging(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `TC_SERVICE_NAME` | `trip-console` | Service name recorded at startup |
//! | `TC_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `TC_JSON_LOGS` | `false` | Emit JSON lines instead of pretty output |
//! | `TC_CONSOLE_OUTPUT` | `true` | Write logs to stderr at all |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{init_logging, LoggingGuard};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter '{filter}': {reason}")]
    Filter { filter: String, reason: String },

    #[error("Failed to install subscriber: {0}")]
    Install(String),
}
