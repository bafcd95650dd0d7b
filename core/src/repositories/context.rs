//! Collaborators shared by every repository.

use serde::de::DeserializeOwned;
use serde::Serialize;
use sm_shared::{Language, MessageKey};
use std::sync::Arc;
use std::time::Instant;

use crate::classifier::{Classifier, StatusOverrides};
use crate::errors::Outcome;
use crate::session::SessionStore;
use crate::transport::{ApiRequest, RawResponse, Transport};

/// Transport, session store and classifier injected into each repository
#[derive(Clone)]
pub struct RepositoryContext {
    transport: Arc<dyn Transport>,
    session: Arc<dyn SessionStore>,
    classifier: Classifier,
}

impl RepositoryContext {
    pub fn new(
        transport: Arc<dyn Transport>,
        session: Arc<dyn SessionStore>,
        language: Language,
    ) -> Self {
        Self {
            transport,
            session,
            classifier: Classifier::new(language),
        }
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Access token of the signed-in account, or a not-logged-in error
    pub async fn require_token(&self) -> Outcome<String> {
        self.session
            .access_token()
            .await
            .ok_or_else(|| self.classifier.generic(MessageKey::NotLoggedIn))
    }

    /// Attach a JSON body
    pub fn encode<B: Serialize + ?Sized>(&self, request: ApiRequest, body: &B) -> Outcome<ApiRequest> {
        let path = request.path.clone();
        request.json(body).map_err(|err| {
            tracing::error!(
                path = %path,
                error = %err,
                event = "request_encode_failed",
                "Failed to encode request body"
            );
            self.classifier.generic(MessageKey::GenericError)
        })
    }

    /// Perform the exchange; transport failures are classified here
    pub async fn send(&self, request: ApiRequest) -> Outcome<RawResponse> {
        let method = request.method;
        let path = request.path.clone();
        let started = Instant::now();

        match self.transport.execute(request).await {
            Ok(response) => {
                tracing::debug!(
                    method = %method,
                    path = %path,
                    status = response.status,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    event = "api_exchange",
                    "Backend call completed"
                );
                Ok(response)
            }
            Err(err) => {
                tracing::warn!(
                    method = %method,
                    path = %path,
                    error = %err,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    event = "transport_failed",
                    "Backend call failed before a response arrived"
                );
                Err(self.classifier.transport_failure(&err))
            }
        }
    }

    /// Send a public request and classify its envelope
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        overrides: &StatusOverrides,
    ) -> Outcome<T> {
        let response = self.send(request).await?;
        self.classifier.classify(&response, overrides)
    }

    /// Send a request with the session's bearer token and classify its envelope.
    ///
    /// Without a token no request is sent.
    pub async fn fetch_authorized<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        overrides: &StatusOverrides,
    ) -> Outcome<T> {
        let token = self.require_token().await?;
        self.fetch(request.bearer(token), overrides).await
    }

    /// Send a public request of an operation without a payload
    pub async fn acknowledge(
        &self,
        request: ApiRequest,
        overrides: &StatusOverrides,
    ) -> Outcome<Option<String>> {
        let response = self.send(request).await?;
        self.classifier.acknowledge(&response, overrides)
    }

    /// Send an authorized request of an operation without a payload
    pub async fn acknowledge_authorized(
        &self,
        request: ApiRequest,
        overrides: &StatusOverrides,
    ) -> Outcome<Option<String>> {
        let token = self.require_token().await?;
        self.acknowledge(request.bearer(token), overrides).await
    }
}
