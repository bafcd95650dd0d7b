//! Authentication repository trait.
//!
//! Covers the account lifecycle: registration, password and OTP login,
//! email verification, password reset, OAuth sign-in, token refresh and
//! logout. Login-family operations persist the issued tokens and the account
//! email in the session store before they return.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::domain::value_objects::{
    AuthPayload, ForgotPasswordRequest, LoginRequest, OAuthProvider, RegisterRequest,
    ResendOtpRequest, ResetPasswordRequest, VerifyEmailRequest, VerifyOtpRequest,
};
use crate::errors::Outcome;

/// Account operations against the backend
#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Create an account; signs in immediately when the backend issues tokens
    async fn register(&self, request: RegisterRequest) -> Outcome<AuthPayload>;

    /// Sign in with email and password.
    ///
    /// Fails with `EmailVerificationRequired` for an unverified account.
    async fn login(&self, request: LoginRequest) -> Outcome<AuthPayload>;

    /// Sign in with the one-time code mailed at registration
    async fn verify_otp(&self, request: VerifyOtpRequest) -> Outcome<AuthPayload>;

    /// Send a new one-time code
    async fn resend_otp(&self, request: ResendOtpRequest) -> Outcome<Option<String>>;

    /// Confirm the account email with a verification code
    async fn verify_email(&self, request: VerifyEmailRequest) -> Outcome<AuthPayload>;

    /// Request a password reset code
    async fn forgot_password(&self, request: ForgotPasswordRequest) -> Outcome<Option<String>>;

    /// Set a new password with a reset code
    async fn reset_password(&self, request: ResetPasswordRequest) -> Outcome<Option<String>>;

    /// Exchange a third-party ID token for a session
    async fn oauth_login(&self, provider: OAuthProvider, id_token: &str) -> Outcome<AuthPayload>;

    /// Profile of the signed-in account.
    ///
    /// A rejected session is cleared locally.
    async fn current_user(&self) -> Outcome<User>;

    /// Trade the stored refresh token for a new access token
    async fn refresh_session(&self) -> Outcome<AuthPayload>;

    /// Sign out; the local session is cleared even if the backend call fails
    async fn logout(&self) -> Outcome<Option<String>>;

    /// Whether an access token is stored
    async fn is_logged_in(&self) -> bool;
}
