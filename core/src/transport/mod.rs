//! Transport boundary between the repositories and the network.
//!
//! Repositories describe a call as an [`ApiRequest`]; a [`Transport`]
//! implementation performs it and hands back the raw status and body. The
//! transport never interprets the body, that is the classifier's job.

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// HTTP method of a backend call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One backend call, described independently of the HTTP client
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Resource path relative to the versioned API prefix, e.g. `/cart/items`
    pub path: String,
    pub query: Vec<(String, String)>,
    /// Sent as `Authorization: Bearer <token>` when present
    pub bearer_token: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            bearer_token: None,
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Append a query parameter
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Append a query parameter when a value is present
    pub fn query_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Attach a JSON body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, serde_json::Error> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn is_authenticated(&self) -> bool {
        self.bearer_token.is_some()
    }
}

/// Completed HTTP exchange, before classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// Lowercased fragments seen in resolver and socket errors across platforms
const UNREACHABLE_MARKERS: [&str; 6] = [
    "unable to resolve host",
    "failed to lookup address",
    "dns error",
    "no address associated",
    "connection refused",
    "network is unreachable",
];

const TIMEOUT_MARKERS: [&str; 2] = ["timed out", "timeout"];

/// Failure before any HTTP response was received
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Host could not be resolved or connected to
    #[error("Host unreachable: {0}")]
    HostUnreachable(String),

    /// Connect, read or write deadline exceeded
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Any other transport failure
    #[error("Transport failure: {0}")]
    Other(String),
}

impl TransportError {
    /// Categorize a free-text failure message.
    ///
    /// Compatibility fallback for failures that carry no typed signal; the
    /// backend and platform error texts are not contractually stable, so
    /// transports should prefer constructing the variants directly.
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_lowercase();
        if UNREACHABLE_MARKERS.iter().any(|m| lower.contains(m)) {
            TransportError::HostUnreachable(message)
        } else if TIMEOUT_MARKERS.iter().any(|m| lower.contains(m)) {
            TransportError::Timeout(message)
        } else {
            TransportError::Other(message)
        }
    }

    /// Underlying failure detail
    pub fn detail(&self) -> &str {
        match self {
            TransportError::HostUnreachable(detail)
            | TransportError::Timeout(detail)
            | TransportError::Other(detail) => detail,
        }
    }
}

/// Executes backend calls
///
/// Implementations must be cheap to share across tasks; repositories hold
/// them behind an `Arc` and call them concurrently.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform the exchange and return the raw status and body.
    ///
    /// Non-2xx statuses are *not* errors at this level; only failures that
    /// prevent a response from arriving are.
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportError>;
}
