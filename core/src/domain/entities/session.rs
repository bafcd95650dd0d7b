//! Session entity holding the tokens of the signed-in account.

use serde::{Deserialize, Serialize};

/// Tokens and account email persisted between app launches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token for authenticated calls
    #[serde(default)]
    pub access_token: Option<String>,

    /// Token exchanged for a new access token
    #[serde(default)]
    pub refresh_token: Option<String>,

    /// Email of the signed-in account
    #[serde(default)]
    pub email: Option<String>,
}

impl Session {
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: Option<String>,
        email: Option<String>,
    ) -> Self {
        Self {
            access_token: Some(access_token.into()),
            refresh_token,
            email,
        }
    }

    /// A session is authenticated when it holds a non-blank access token
    pub fn is_authenticated(&self) -> bool {
        self.access_token
            .as_deref()
            .is_some_and(|token| !token.trim().is_empty())
    }

    /// Apply freshly issued tokens.
    ///
    /// A missing refresh token or email keeps the stored one, since token
    /// refresh responses usually carry only the new access token.
    pub fn apply(&mut self, access_token: &str, refresh_token: Option<&str>, email: Option<&str>) {
        self.access_token = Some(access_token.to_string());
        if let Some(refresh) = refresh_token.filter(|t| !t.is_empty()) {
            self.refresh_token = Some(refresh.to_string());
        }
        if let Some(email) = email.filter(|e| !e.is_empty()) {
            self.email = Some(email.to_string());
        }
    }
}
