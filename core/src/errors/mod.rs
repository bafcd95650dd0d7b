//! Error taxonomy returned across the repository boundary.
//!
//! Every repository operation resolves to an [`Outcome`]. Failures collapse
//! into three kinds; only the last two are distinguished because the UI
//! navigates on them (back to login, or on to OTP verification).

use thiserror::Error;

/// Classified failure of a repository operation
///
/// `Display` renders the user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Any failure without dedicated handling
    #[error("{message}")]
    Generic { message: String },

    /// The backend rejected the session (HTTP 401)
    #[error("{message}")]
    TokenExpired { message: String },

    /// Login-family call for an account whose email is not verified yet
    #[error("{message}")]
    EmailVerificationRequired { email: String, message: String },
}

impl RepoError {
    pub fn generic(message: impl Into<String>) -> Self {
        RepoError::Generic {
            message: message.into(),
        }
    }

    pub fn token_expired(message: impl Into<String>) -> Self {
        RepoError::TokenExpired {
            message: message.into(),
        }
    }

    pub fn email_verification_required(email: impl Into<String>, message: impl Into<String>) -> Self {
        RepoError::EmailVerificationRequired {
            email: email.into(),
            message: message.into(),
        }
    }

    /// User-facing message
    pub fn message(&self) -> &str {
        match self {
            RepoError::Generic { message }
            | RepoError::TokenExpired { message }
            | RepoError::EmailVerificationRequired { message, .. } => message,
        }
    }

    pub fn is_token_expired(&self) -> bool {
        matches!(self, RepoError::TokenExpired { .. })
    }

    pub fn requires_verification(&self) -> bool {
        matches!(self, RepoError::EmailVerificationRequired { .. })
    }

    /// Email the OTP screen should verify, when verification is required
    pub fn verification_email(&self) -> Option<&str> {
        match self {
            RepoError::EmailVerificationRequired { email, .. } => Some(email),
            _ => None,
        }
    }
}

/// Uniform result of every repository operation
pub type Outcome<T> = Result<T, RepoError>;

/// Failure reported by a session store implementation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionStoreError {
    #[error("Session storage error: {0}")]
    Storage(String),

    #[error("Session serialization error: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_message() {
        let err = RepoError::email_verification_required("a@b.com", "verify first");
        assert_eq!(err.to_string(), "verify first");
        assert_eq!(err.message(), "verify first");
    }

    #[test]
    fn test_kind_predicates() {
        assert!(RepoError::token_expired("x").is_token_expired());
        assert!(!RepoError::generic("x").is_token_expired());

        let err = RepoError::email_verification_required("a@b.com", "m");
        assert!(err.requires_verification());
        assert_eq!(err.verification_email(), Some("a@b.com"));
        assert_eq!(RepoError::generic("x").verification_email(), None);
    }
}
