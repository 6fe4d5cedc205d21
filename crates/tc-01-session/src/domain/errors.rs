//! Persistence substrate errors.

use thiserror::Error;

/// Failure reading or writing the persisted session.
///
/// Never surfaced past `SessionContext`; a failed load degrades to an empty
/// session and a failed save leaves the in-memory state authoritative.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage I/O failed: {message}")]
    Io { message: String },

    #[error("stored session is corrupt: {message}")]
    Corrupt { message: String },

    #[error("session could not be serialized: {message}")]
    Serialize { message: String },

    #[error("storage unavailable")]
    Unavailable,
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io {
            message: e.to_string(),
        }
    }
}
