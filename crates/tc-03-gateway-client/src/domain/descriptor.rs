//! # Query Descriptors
//!
//! A `QueryDescriptor` says what request to make and which cache family the
//! result belongs to. Descriptors are cheap to clone; deferred endpoints
//! share their closure.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Closure producing an endpoint path at dispatch time.
pub type EndpointFn = Arc<dyn Fn() -> String + Send + Sync>;

/// Request target, fixed or computed when the request is dispatched.
#[derive(Clone)]
pub enum Endpoint {
    Fixed(String),
    Deferred(EndpointFn),
}

impl Endpoint {
    pub fn fixed(path: impl Into<String>) -> Self {
        Endpoint::Fixed(path.into())
    }

    pub fn deferred<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Endpoint::Deferred(Arc::new(f))
    }

    /// The path to use right now.
    pub fn resolve(&self) -> String {
        match self {
            Endpoint::Fixed(path) => path.clone(),
            Endpoint::Deferred(f) => f(),
        }
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Fixed(path) => f.debug_tuple("Fixed").field(path).finish(),
            Endpoint::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl From<&str> for Endpoint {
    fn from(path: &str) -> Self {
        Endpoint::fixed(path)
    }
}

impl From<String> for Endpoint {
    fn from(path: String) -> Self {
        Endpoint::Fixed(path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name of a logical resource family (`"trip"`, `"company"`, ...).
///
/// Every read and write touching a family carries the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CacheKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// One field of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    File {
        file_name: String,
        content_type: Option<String>,
        bytes: Vec<u8>,
    },
}

/// An ordered multipart form. Field names may repeat (image lists).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    fields: Vec<(String, FormValue)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields
            .push((name.into(), FormValue::Text(value.into())));
        self
    }

    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: Option<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.fields.push((
            name.into(),
            FormValue::File {
                file_name: file_name.into(),
                content_type,
                bytes,
            },
        ));
        self
    }

    pub fn fields(&self) -> &[(String, FormValue)] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Request body of a write.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(serde_json::Value),
    Multipart(FormPayload),
}

impl Payload {
    pub fn json<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(Payload::Json)
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self, Payload::Multipart(_))
    }
}

impl From<FormPayload> for Payload {
    fn from(form: FormPayload) -> Self {
        Payload::Multipart(form)
    }
}

impl From<serde_json::Value> for Payload {
    fn from(value: serde_json::Value) -> Self {
        Payload::Json(value)
    }
}

/// What to request and under which cache key.
#[derive(Debug, Clone)]
pub struct QueryDescriptor {
    pub endpoint: Endpoint,
    pub method: Method,
    pub payload: Option<Payload>,
    pub cache_key: CacheKey,
    /// Mutations are deferred: nothing runs until explicitly triggered.
    pub defer_execution: bool,
}

impl QueryDescriptor {
    /// An eager `GET`.
    pub fn read(endpoint: impl Into<Endpoint>, cache_key: impl Into<CacheKey>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: Method::Get,
            payload: None,
            cache_key: cache_key.into(),
            defer_execution: false,
        }
    }

    /// A deferred write.
    pub fn write(
        method: Method,
        endpoint: impl Into<Endpoint>,
        cache_key: impl Into<CacheKey>,
        payload: Option<Payload>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            method,
            payload,
            cache_key: cache_key.into(),
            defer_execution: true,
        }
    }

    pub fn deferred(mut self, defer: bool) -> Self {
        self.defer_execution = defer;
        self
    }
}
