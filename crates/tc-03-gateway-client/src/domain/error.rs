//! Gateway error types and error-body message extraction.

use serde_json::Value;

/// Shown when a failed response carries no usable `message`.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong, please try again";

/// Error returned by every gateway dispatch.
///
/// None of these are retried; all of them go through the post-error hook.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response. `message` is what the server said, or a generic
    /// fallback.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The response, or the outgoing payload, could not be (de)serialised.
    #[error("decode error: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Text handed to the error-display collaborator. Network failures have
    /// no body to read a message from and get the generic one.
    pub fn display_message(&self) -> String {
        match self {
            GatewayError::Http { message, .. } => message.clone(),
            GatewayError::Network(_) => GENERIC_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<TransportError> for GatewayError {
    fn from(err: TransportError) -> Self {
        GatewayError::Network(err.to_string())
    }
}

/// Failures below HTTP: connection, timeout, request construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("request timed out")]
    Timeout,
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("{0}")]
    Other(String),
}

/// Pull a human-readable message out of an error body.
///
/// Accepts `{"message": "..."}` and `{"message": ["...", "..."]}` (joined
/// with `", "`). Anything else, including non-JSON bodies, yields
/// [`GENERIC_ERROR_MESSAGE`]. The result is never empty.
pub fn extract_message(body: &[u8]) -> String {
    let message = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| match value.get("message")? {
            Value::String(text) => Some(text.trim().to_string()),
            Value::Array(items) => Some(
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            _ => None,
        });

    match message {
        Some(text) if !text.is_empty() => text,
        _ => GENERIC_ERROR_MESSAGE.to_string(),
    }
}
