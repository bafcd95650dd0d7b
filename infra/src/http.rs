//! reqwest implementation of the transport boundary

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use sm_core::transport::{ApiRequest, HttpMethod, RawResponse, Transport, TransportError};
use sm_shared::ApiConfig;
use std::error::Error as StdError;
use uuid::Uuid;

use crate::InfrastructureError;

/// Header carrying the per-call correlation id
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// HTTP transport backed by a pooled reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    config: ApiConfig,
}

impl ReqwestTransport {
    /// Build a client with the configured timeouts and user agent
    pub fn new(config: ApiConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        tracing::info!(
            base_url = %config.base_url,
            api_prefix = %config.api_prefix,
            timeout_secs = config.request_timeout().as_secs(),
            "HTTP transport initialized"
        );

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

fn method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Error text including every source in the chain
fn describe(err: &reqwest::Error) -> String {
    let mut detail = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        detail.push_str(": ");
        detail.push_str(&cause.to_string());
        source = cause.source();
    }
    detail
}

/// Categorize a reqwest failure, preferring its typed kind
pub fn map_error(err: &reqwest::Error) -> TransportError {
    let detail = describe(err);
    if err.is_timeout() {
        TransportError::Timeout(detail)
    } else if err.is_connect() {
        TransportError::HostUnreachable(detail)
    } else {
        TransportError::from_message(detail)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let url = self.config.endpoint(&request.path);
        let request_id = Uuid::new_v4();

        let mut builder = self
            .client
            .request(method(request.method), &url)
            .header(ACCEPT, "application/json")
            .header(REQUEST_ID_HEADER, request_id.to_string());

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &request.bearer_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").json(body);
        }

        tracing::trace!(
            request_id = %request_id,
            method = %request.method,
            url = %url,
            "Sending request"
        );

        let response = builder.send().await.map_err(|err| map_error(&err))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|err| map_error(&err))?;

        tracing::trace!(
            request_id = %request_id,
            status = status,
            bytes = body.len(),
            "Response received"
        );

        Ok(RawResponse::new(status, body))
    }
}
