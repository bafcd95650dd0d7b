//! Session store trait: durable holder of the access token, refresh token
//! and account email.
//!
//! Repositories read the access token before every authenticated call and
//! write tokens after a classified login-family success. Implementations
//! must synchronize internally; they are shared behind an `Arc` by every
//! repository.

use async_trait::async_trait;

use crate::domain::entities::session::Session;
use crate::errors::SessionStoreError;

/// Storage for the signed-in session
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Snapshot of the stored session
    async fn session(&self) -> Session;

    /// Persist freshly issued tokens.
    ///
    /// `refresh_token` or `email` of `None` keeps the stored value.
    async fn save_tokens(
        &self,
        access_token: &str,
        refresh_token: Option<&str>,
        email: Option<&str>,
    ) -> Result<(), SessionStoreError>;

    /// Forget all tokens and the email
    async fn clear_tokens(&self) -> Result<(), SessionStoreError>;

    /// Non-blank access token
    async fn access_token(&self) -> Option<String> {
        non_blank(self.session().await.access_token)
    }

    /// Non-blank refresh token
    async fn refresh_token(&self) -> Option<String> {
        non_blank(self.session().await.refresh_token)
    }

    /// Email of the signed-in account
    async fn email(&self) -> Option<String> {
        non_blank(self.session().await.email)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
