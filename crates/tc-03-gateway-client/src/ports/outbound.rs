//! Outbound ports for the gateway client.

use async_trait::async_trait;

use crate::domain::error::TransportError;
use crate::domain::request::{HttpRequest, HttpResponse};

/// Sends a prepared request and returns whatever the server answered.
///
/// Non-2xx statuses are responses, not transport errors.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// The error-display collaborator.
pub trait ErrorSink: Send + Sync {
    fn report(&self, message: &str);
}
