//! Error classifier: turns a raw HTTP exchange into an [`Outcome`].
//!
//! Every repository funnels its responses through a [`Classifier`]. The
//! policy, in order:
//!
//! 1. a 2xx envelope that is not marked failed and carries `data` succeeds;
//! 2. a 2xx envelope without `data` is a null-data error;
//! 3. a 2xx body that is not an envelope is an invalid-response error;
//! 4. everything else is a failure: 401 becomes [`RepoError::TokenExpired`],
//!    other statuses take the per-operation override message if one exists,
//!    otherwise the message extracted from the body.
//!
//! Login-family operations use [`Classifier::classify_login`] instead, which
//! additionally recognizes an account whose email is not verified yet.

pub mod rules;

pub use rules::{extract_from_value, extract_message, MAX_RAW_MESSAGE_CHARS, MESSAGE_RULES};

use serde::de::DeserializeOwned;
use serde_json::Value;
use sm_shared::{i18n, Envelope, Language, MessageKey};

use crate::errors::{Outcome, RepoError};
use crate::transport::{RawResponse, TransportError};

use rules::non_blank_str;

/// Lowercased fragments that mark an unverified account in login failures
const VERIFICATION_MARKERS: [&str; 4] = [
    "not verified",
    "requires verification",
    "belum diverifikasi",
    "email belum",
];

/// Per-operation table of status codes with a dedicated message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusOverrides(&'static [(u16, MessageKey)]);

impl StatusOverrides {
    /// No overrides
    pub const NONE: StatusOverrides = StatusOverrides(&[]);

    pub const fn new(table: &'static [(u16, MessageKey)]) -> Self {
        StatusOverrides(table)
    }

    pub fn lookup(&self, status: u16) -> Option<MessageKey> {
        self.0
            .iter()
            .find(|(code, _)| *code == status)
            .map(|(_, key)| *key)
    }
}

impl Default for StatusOverrides {
    fn default() -> Self {
        Self::NONE
    }
}

/// Classifies raw responses into outcomes with messages in one language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classifier {
    language: Language,
}

impl Classifier {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Localized message for `key`
    pub fn message(&self, key: MessageKey) -> String {
        i18n::message(key, self.language)
    }

    /// `Generic` error carrying the localized message for `key`
    pub fn generic(&self, key: MessageKey) -> RepoError {
        RepoError::generic(self.message(key))
    }

    /// Classify a response whose envelope carries a `T`
    pub fn classify<T: DeserializeOwned>(
        &self,
        response: &RawResponse,
        overrides: &StatusOverrides,
    ) -> Outcome<T> {
        if !response.is_success() {
            return Err(self.failure(response, overrides));
        }

        match serde_json::from_str::<Envelope<T>>(&response.body) {
            Ok(envelope) if !envelope.is_not_failed() => Err(self.failure(response, overrides)),
            Ok(envelope) => envelope
                .into_data()
                .ok_or_else(|| self.generic(MessageKey::NullData)),
            Err(err) => {
                tracing::debug!(
                    status = response.status,
                    error = %err,
                    event = "envelope_decode_failed",
                    "Response body does not match the expected envelope"
                );
                Err(self.undecodable_success(response, overrides))
            }
        }
    }

    /// Classify a response of an operation without a payload.
    ///
    /// Succeeds with the backend's message, if any. A 2xx body that is not an
    /// envelope succeeds without one.
    pub fn acknowledge(
        &self,
        response: &RawResponse,
        overrides: &StatusOverrides,
    ) -> Outcome<Option<String>> {
        if !response.is_success() {
            return Err(self.failure(response, overrides));
        }
        if response.body.trim().is_empty() {
            return Ok(None);
        }

        match serde_json::from_str::<Envelope<Value>>(&response.body) {
            Ok(envelope) if !envelope.is_not_failed() => Err(self.failure(response, overrides)),
            Ok(envelope) => Ok(envelope.message.filter(|m| !m.trim().is_empty())),
            Err(err) => {
                tracing::debug!(
                    status = response.status,
                    error = %err,
                    event = "ack_body_not_envelope",
                    "Acknowledged without an envelope"
                );
                Ok(None)
            }
        }
    }

    /// Classify a login-family response whose envelope carries a `T`
    pub fn classify_login_response<T: DeserializeOwned>(
        &self,
        response: &RawResponse,
        submitted_email: &str,
    ) -> Outcome<T> {
        if !response.is_success() {
            return Err(self.classify_login(response, submitted_email));
        }

        match serde_json::from_str::<Envelope<T>>(&response.body) {
            Ok(envelope) if !envelope.is_not_failed() => {
                Err(self.classify_login(response, submitted_email))
            }
            Ok(envelope) => envelope
                .into_data()
                .ok_or_else(|| self.generic(MessageKey::NullData)),
            Err(_) => match serde_json::from_str::<Envelope<Value>>(&response.body) {
                Ok(envelope) if !envelope.is_not_failed() => {
                    Err(self.classify_login(response, submitted_email))
                }
                _ => Err(self.generic(MessageKey::InvalidResponse)),
            },
        }
    }

    /// Failure of a login-family operation
    pub fn classify_login(&self, response: &RawResponse, submitted_email: &str) -> RepoError {
        let parsed = serde_json::from_str::<Value>(&response.body).ok();

        let structured = parsed
            .as_ref()
            .and_then(|body| self.structured_verification(body, submitted_email));
        if let Some(error) = structured {
            return error;
        }

        let message = extract_message(&response.body, self.language);

        if mentions_verification(&message) {
            tracing::info!(
                status = response.status,
                event = "email_verification_required",
                "Login rejected for an unverified account"
            );
            return RepoError::email_verification_required(submitted_email, message);
        }

        if response.status == 401 {
            RepoError::token_expired(message)
        } else {
            RepoError::generic(message)
        }
    }

    /// Map a transport failure to a user-facing error
    pub fn transport_failure(&self, error: &TransportError) -> RepoError {
        match error {
            TransportError::HostUnreachable(_) => self.generic(MessageKey::HostUnreachable),
            TransportError::Timeout(_) => self.generic(MessageKey::Timeout),
            TransportError::Other(detail) => RepoError::generic(i18n::message_with(
                MessageKey::NetworkError,
                self.language,
                &[("detail", detail.as_str())],
            )),
        }
    }

    /// Failure of a non-login operation
    pub fn failure(&self, response: &RawResponse, overrides: &StatusOverrides) -> RepoError {
        if response.status == 401 {
            return RepoError::token_expired(extract_message(&response.body, self.language));
        }

        let overridden = if response.is_success() {
            None
        } else {
            overrides.lookup(response.status)
        };

        match overridden {
            Some(key) => self.generic(key),
            None => RepoError::generic(extract_message(&response.body, self.language)),
        }
    }

    fn undecodable_success(&self, response: &RawResponse, overrides: &StatusOverrides) -> RepoError {
        match serde_json::from_str::<Envelope<Value>>(&response.body) {
            Ok(envelope) if !envelope.is_not_failed() => self.failure(response, overrides),
            _ => self.generic(MessageKey::InvalidResponse),
        }
    }

    fn structured_verification(&self, body: &Value, submitted_email: &str) -> Option<RepoError> {
        let error = body.get("error")?.as_object()?;
        if error.get("requires_verification").and_then(Value::as_bool) != Some(true) {
            return None;
        }

        let email = error
            .get("email")
            .and_then(non_blank_str)
            .unwrap_or_else(|| submitted_email.to_string());
        let message = error
            .get("message")
            .and_then(non_blank_str)
            .or_else(|| body.get("message").and_then(non_blank_str))
            .unwrap_or_else(|| self.message(MessageKey::VerificationRequired));

        Some(RepoError::email_verification_required(email, message))
    }
}

fn mentions_verification(text: &str) -> bool {
    let lower = text.to_lowercase();
    VERIFICATION_MARKERS.iter().any(|marker| lower.contains(marker))
}
