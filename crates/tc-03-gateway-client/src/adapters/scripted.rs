use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::error::TransportError;
use crate::domain::request::{HttpRequest, HttpResponse};
use crate::ports::outbound::HttpTransport;

type Responder =
    Box<dyn Fn(&HttpRequest) -> Result<HttpResponse, TransportError> + Send + Sync>;

/// Transport that answers from a closure and records every request.
///
/// Used by tests across the workspace in place of a live backend.
pub struct ScriptedTransport {
    responder: Responder,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&HttpRequest) -> Result<HttpResponse, TransportError> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answer every request with the same status and JSON body.
    pub fn always(status: u16, body: serde_json::Value) -> Self {
        Self::new(move |_| Ok(HttpResponse::json_value(status, &body)))
    }

    /// Fail every request below HTTP.
    pub fn unreachable() -> Self {
        Self::new(|_| Err(TransportError::Connect("connection refused".into())))
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let result = (self.responder)(&request);
        self.requests.lock().push(request);
        result
    }
}
