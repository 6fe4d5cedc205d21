//! # Gateway Client Service
//!
//! Owns the base endpoint, the transport and the error sink. Holds the
//! session by `Arc` and reads it once per dispatch.

use serde::de::DeserializeOwned;
use std::sync::Arc;
use tc_01_session::SessionContext;
use tracing::{debug, info_span, warn, Instrument};

use crate::adapters::{LastErrorStore, ReqwestTransport};
use crate::domain::config::GatewayConfig;
use crate::domain::descriptor::{Payload, QueryDescriptor};
use crate::domain::error::{extract_message, GatewayError};
use crate::domain::headers::{identity_headers, APPLICATION_JSON, CONTENT_TYPE};
use crate::domain::request::{HttpRequest, HttpResponse, RequestBody};
use crate::domain::url::join_url;
use crate::ports::outbound::{ErrorSink, HttpTransport};

pub struct GatewayClient {
    config: GatewayConfig,
    session: Arc<SessionContext>,
    transport: Arc<dyn HttpTransport>,
    error_sink: Arc<dyn ErrorSink>,
}

impl GatewayClient {
    pub fn new(
        config: GatewayConfig,
        session: Arc<SessionContext>,
        transport: Arc<dyn HttpTransport>,
        error_sink: Arc<dyn ErrorSink>,
    ) -> Self {
        Self {
            config,
            session,
            transport,
            error_sink,
        }
    }

    /// Client over reqwest, honouring the configured timeout.
    pub fn with_reqwest(
        config: GatewayConfig,
        session: Arc<SessionContext>,
        error_sink: Arc<dyn ErrorSink>,
    ) -> Result<Self, GatewayError> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Ok(Self::new(config, session, Arc::new(transport), error_sink))
    }

    /// Client with a fresh [`LastErrorStore`], returned alongside.
    pub fn with_error_store(
        config: GatewayConfig,
        session: Arc<SessionContext>,
        transport: Arc<dyn HttpTransport>,
    ) -> (Self, Arc<LastErrorStore>) {
        let store = Arc::new(LastErrorStore::new());
        (Self::new(config, session, transport, store.clone()), store)
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    /// Dispatch once. Non-2xx and transport failures are reported to the
    /// error sink and returned.
    pub async fn send(&self, descriptor: &QueryDescriptor) -> Result<HttpResponse, GatewayError> {
        let path = descriptor.endpoint.resolve();
        let span = info_span!(
            "gateway.send",
            method = %descriptor.method,
            path = %path,
            cache_key = %descriptor.cache_key,
        );

        async move {
            let result = self.dispatch(descriptor, &path).await;
            if let Err(err) = &result {
                self.report(err);
            }
            result
        }
        .instrument(span)
        .await
    }

    /// Dispatch and decode the body as `T`. Decode failures are reported
    /// like any other error.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        descriptor: &QueryDescriptor,
    ) -> Result<T, GatewayError> {
        let response = self.send(descriptor).await?;
        response.json().inspect_err(|err| self.report(err))
    }

    async fn dispatch(
        &self,
        descriptor: &QueryDescriptor,
        path: &str,
    ) -> Result<HttpResponse, GatewayError> {
        let request = self.prepare(descriptor, path)?;
        debug!(url = %request.url, "Dispatching request");

        let response = self.transport.execute(request).await?;
        if response.is_success() {
            debug!(status = response.status, "Request succeeded");
            return Ok(response);
        }

        Err(GatewayError::Http {
            status: response.status,
            message: extract_message(&response.body),
        })
    }

    /// Pre-request hook: URL, identity headers from a fresh snapshot and
    /// the encoded body.
    fn prepare(&self, descriptor: &QueryDescriptor, path: &str) -> Result<HttpRequest, GatewayError> {
        let mut headers = identity_headers(&self.session.snapshot());

        let body = match &descriptor.payload {
            None => RequestBody::Empty,
            Some(Payload::Json(value)) => {
                let bytes = serde_json::to_vec(value)
                    .map_err(|e| GatewayError::Decode(format!("request body: {e}")))?;
                headers.push((CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()));
                RequestBody::Json(bytes)
            }
            Some(Payload::Multipart(form)) => RequestBody::Multipart(form.clone()),
        };

        Ok(HttpRequest {
            method: descriptor.method,
            url: join_url(&self.config.base_url, path),
            headers,
            body,
        })
    }

    /// Post-error hook.
    fn report(&self, err: &GatewayError) {
        warn!(error = %err, "Request failed");
        self.error_sink.report(&err.display_message());
    }
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient")
            .field("config", &self.config)
            .finish()
    }
}
