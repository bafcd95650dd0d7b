//! HTTP implementation of the authentication repository

use async_trait::async_trait;
use sm_shared::validation::mask_email;
use sm_shared::MessageKey;

use crate::classifier::StatusOverrides;
use crate::domain::entities::user::User;
use crate::domain::value_objects::{
    AuthPayload, ForgotPasswordRequest, LoginRequest, OAuthLoginRequest, OAuthProvider,
    RefreshTokenRequest, RegisterRequest, ResendOtpRequest, ResetPasswordRequest,
    VerifyEmailRequest, VerifyOtpRequest,
};
use crate::errors::{Outcome, RepoError};
use crate::repositories::context::RepositoryContext;
use crate::transport::ApiRequest;

use super::r#trait::AuthRepository;

const FORGOT_PASSWORD: StatusOverrides =
    StatusOverrides::new(&[(404, MessageKey::EmailNotRegistered)]);
const RESET_PASSWORD: StatusOverrides =
    StatusOverrides::new(&[(400, MessageKey::InvalidResetCode)]);

/// Authentication repository backed by the REST API
#[derive(Clone)]
pub struct HttpAuthRepository {
    ctx: RepositoryContext,
}

impl HttpAuthRepository {
    pub fn new(ctx: RepositoryContext) -> Self {
        Self { ctx }
    }

    /// Login-family call: classify with verification detection, then persist
    async fn sign_in(&self, request: ApiRequest, submitted_email: &str) -> Outcome<AuthPayload> {
        let response = self.ctx.send(request).await?;
        let payload: AuthPayload = self
            .ctx
            .classifier()
            .classify_login_response(&response, submitted_email)?;

        if !payload.has_tokens() {
            tracing::warn!(
                email = %mask_email(submitted_email),
                event = "auth_payload_without_token",
                "Login succeeded but no access token was issued"
            );
            return Err(self.ctx.classifier().generic(MessageKey::InvalidResponse));
        }

        let email = payload.email_or(submitted_email).to_string();
        self.persist(&payload, Some(&email)).await?;
        Ok(payload)
    }

    async fn persist(&self, payload: &AuthPayload, email: Option<&str>) -> Outcome<()> {
        let Some(access_token) = payload.access_token() else {
            return Err(self.ctx.classifier().generic(MessageKey::InvalidResponse));
        };

        self.ctx
            .session()
            .save_tokens(access_token, payload.refresh_token.as_deref(), email)
            .await
            .map_err(|err| {
                tracing::error!(
                    error = %err,
                    event = "session_save_failed",
                    "Failed to persist session tokens"
                );
                self.ctx.classifier().generic(MessageKey::SessionSaveFailed)
            })
    }

    /// Clear the local session after the backend rejected it
    async fn expire_session(&self) {
        if let Err(err) = self.ctx.session().clear_tokens().await {
            tracing::error!(
                error = %err,
                event = "session_clear_failed",
                "Failed to clear rejected session"
            );
        }
    }
}

#[async_trait]
impl AuthRepository for HttpAuthRepository {
    #[tracing::instrument(skip(self, request), fields(email = %mask_email(&request.email)))]
    async fn register(&self, request: RegisterRequest) -> Outcome<AuthPayload> {
        let call = self.ctx.encode(ApiRequest::post("/auth/register"), &request)?;
        let payload: AuthPayload = self.ctx.fetch(call, &StatusOverrides::NONE).await?;

        if payload.has_tokens() {
            let email = payload.email_or(&request.email).to_string();
            self.persist(&payload, Some(&email)).await?;
            tracing::info!(event = "registered_and_signed_in", "Account registered and signed in");
        } else {
            tracing::info!(event = "registered", "Account registered, verification pending");
        }
        Ok(payload)
    }

    #[tracing::instrument(skip(self, request), fields(email = %mask_email(&request.email)))]
    async fn login(&self, request: LoginRequest) -> Outcome<AuthPayload> {
        let call = self.ctx.encode(ApiRequest::post("/auth/login"), &request)?;
        let payload = self.sign_in(call, &request.email).await?;
        tracing::info!(event = "login_success", "Signed in");
        Ok(payload)
    }

    #[tracing::instrument(skip(self, request), fields(email = %mask_email(&request.email)))]
    async fn verify_otp(&self, request: VerifyOtpRequest) -> Outcome<AuthPayload> {
        let call = self.ctx.encode(ApiRequest::post("/auth/verify-otp"), &request)?;
        self.sign_in(call, &request.email).await
    }

    #[tracing::instrument(skip(self, request), fields(email = %mask_email(&request.email)))]
    async fn resend_otp(&self, request: ResendOtpRequest) -> Outcome<Option<String>> {
        let call = self.ctx.encode(ApiRequest::post("/auth/resend-otp"), &request)?;
        self.ctx.acknowledge(call, &StatusOverrides::NONE).await
    }

    #[tracing::instrument(skip(self, request), fields(email = %mask_email(&request.email)))]
    async fn verify_email(&self, request: VerifyEmailRequest) -> Outcome<AuthPayload> {
        let call = self.ctx.encode(ApiRequest::post("/auth/verify-email"), &request)?;
        self.sign_in(call, &request.email).await
    }

    #[tracing::instrument(skip(self, request), fields(email = %mask_email(&request.email)))]
    async fn forgot_password(&self, request: ForgotPasswordRequest) -> Outcome<Option<String>> {
        let call = self.ctx.encode(ApiRequest::post("/auth/forgot-password"), &request)?;
        self.ctx.acknowledge(call, &FORGOT_PASSWORD).await
    }

    #[tracing::instrument(skip(self, request), fields(email = %mask_email(&request.email)))]
    async fn reset_password(&self, request: ResetPasswordRequest) -> Outcome<Option<String>> {
        let call = self.ctx.encode(ApiRequest::post("/auth/reset-password"), &request)?;
        self.ctx.acknowledge(call, &RESET_PASSWORD).await
    }

    #[tracing::instrument(skip(self, id_token))]
    async fn oauth_login(&self, provider: OAuthProvider, id_token: &str) -> Outcome<AuthPayload> {
        let body = OAuthLoginRequest {
            id_token: id_token.to_string(),
        };
        let call = self
            .ctx
            .encode(ApiRequest::post(format!("/auth/oauth/{}", provider)), &body)?;
        let payload: AuthPayload = self.ctx.fetch(call, &StatusOverrides::NONE).await?;

        let email = payload
            .user
            .as_ref()
            .map(|user| user.email.clone())
            .filter(|email| !email.is_empty());
        self.persist(&payload, email.as_deref()).await?;
        tracing::info!(event = "oauth_login_success", "Signed in with identity provider");
        Ok(payload)
    }

    #[tracing::instrument(skip(self))]
    async fn current_user(&self) -> Outcome<User> {
        let result = self
            .ctx
            .fetch_authorized(ApiRequest::get("/auth/me"), &StatusOverrides::NONE)
            .await;

        if matches!(result, Err(RepoError::TokenExpired { .. })) {
            tracing::info!(event = "session_expired", "Session rejected, clearing tokens");
            self.expire_session().await;
        }
        result
    }

    #[tracing::instrument(skip(self))]
    async fn refresh_session(&self) -> Outcome<AuthPayload> {
        let Some(refresh_token) = self.ctx.session().refresh_token().await else {
            return Err(self.ctx.classifier().generic(MessageKey::NoRefreshToken));
        };

        let body = RefreshTokenRequest { refresh_token };
        let call = self.ctx.encode(ApiRequest::post("/auth/refresh"), &body)?;
        let result: Outcome<AuthPayload> = self.ctx.fetch(call, &StatusOverrides::NONE).await;

        let payload = match result {
            Ok(payload) => payload,
            Err(err) => {
                if err.is_token_expired() {
                    tracing::info!(event = "refresh_rejected", "Refresh token rejected, clearing tokens");
                    self.expire_session().await;
                }
                return Err(err);
            }
        };

        let email = payload
            .user
            .as_ref()
            .map(|user| user.email.clone())
            .filter(|email| !email.is_empty());
        self.persist(&payload, email.as_deref()).await?;
        tracing::debug!(event = "session_refreshed", "Access token refreshed");
        Ok(payload)
    }

    #[tracing::instrument(skip(self))]
    async fn logout(&self) -> Outcome<Option<String>> {
        let acknowledged = match self.ctx.session().access_token().await {
            Some(token) => {
                let call = ApiRequest::post("/auth/logout").bearer(token);
                match self.ctx.acknowledge(call, &StatusOverrides::NONE).await {
                    Ok(message) => message,
                    Err(err) => {
                        tracing::warn!(
                            error = %err,
                            event = "logout_remote_failed",
                            "Backend logout failed, clearing local session anyway"
                        );
                        None
                    }
                }
            }
            None => None,
        };

        self.ctx.session().clear_tokens().await.map_err(|err| {
            tracing::error!(error = %err, event = "session_clear_failed", "Failed to clear session");
            self.ctx.classifier().generic(MessageKey::SessionSaveFailed)
        })?;
        tracing::info!(event = "logout", "Signed out");
        Ok(acknowledged)
    }

    async fn is_logged_in(&self) -> bool {
        self.ctx.session().access_token().await.is_some()
    }
}
