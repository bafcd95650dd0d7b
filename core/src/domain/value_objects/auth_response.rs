//! Authentication payload returned by login-family endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::User;

/// Tokens and account data issued by login, OTP verification, email
/// verification, OAuth, token refresh and (optionally) registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthPayload {
    /// Bearer token for authenticated calls
    #[serde(default, alias = "token", alias = "accessToken")]
    pub access_token: Option<String>,

    /// Token exchanged for a new access token
    #[serde(default, alias = "refreshToken")]
    pub refresh_token: Option<String>,

    /// Access token lifetime in seconds
    #[serde(default)]
    pub expires_in: Option<i64>,

    /// Signed-in account
    #[serde(default)]
    pub user: Option<User>,
}

impl AuthPayload {
    /// Non-blank access token, if the payload carries one
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Whether this payload signs the account in
    pub fn has_tokens(&self) -> bool {
        self.access_token().is_some()
    }

    /// Account email from the payload, else the one the caller submitted
    pub fn email_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.user
            .as_ref()
            .map(|user| user.email.as_str())
            .filter(|email| !email.is_empty())
            .unwrap_or(fallback)
    }
}
