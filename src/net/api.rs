//! Typed service layer over the HTTP gateway.
//!
//! The [`AuthApi`] and [`UserApi`] traits are the seam between the session
//! store and the network: the real client is [`HttpApi`], tests substitute
//! an in-memory mock. Methods collapse the response envelope into a plain
//! `Result`, so callers never see a half-populated success.

// Single logical thread (browser event loop); no Send bounds wanted here.
#![allow(async_fn_in_trait)]

use super::error::ApiError;
use super::http;
use super::types::{
    CredentialsRequest, EmailRequest, Envelope, ResetCodeIssued, ResetPasswordRequest,
    UpdateUserRequest, User, VerifyEmailRequest,
};
use crate::config;

/// Auth actions (public endpoints).
pub trait AuthApi {
    async fn register(&self, email: &str, password: &str) -> Result<User, ApiError>;
    async fn login(&self, email: &str, password: &str) -> Result<User, ApiError>;
    async fn verify_email(&self, email: &str, code: &str) -> Result<(), ApiError>;
    async fn resend_verification_code(&self, email: &str) -> Result<(), ApiError>;
    async fn forgot_password(&self, email: &str) -> Result<ResetCodeIssued, ApiError>;
    async fn send_reset_code(&self, email: &str) -> Result<ResetCodeIssued, ApiError>;
    async fn reset_password(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> Result<(), ApiError>;
}

/// Account record CRUD (protected endpoints, bearer credential required).
pub trait UserApi {
    async fn fetch_user(&self, user_id: &str) -> Result<User, ApiError>;
    async fn update_user(
        &self,
        user_id: &str,
        changes: &UpdateUserRequest,
    ) -> Result<User, ApiError>;
    async fn delete_user(&self, user_id: &str) -> Result<(), ApiError>;
}

/// The real client, calling through the HTTP gateway.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

fn require_data<T>(data: Option<T>, fallback: &str) -> Result<T, ApiError> {
    data.ok_or_else(|| ApiError::message(fallback))
}

fn discard_data(result: Result<Option<serde_json::Value>, ApiError>) -> Result<(), ApiError> {
    result.map(|_| ())
}

impl AuthApi for HttpApi {
    async fn register(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let envelope: Envelope<User> =
            http::post(config::REGISTER, &CredentialsRequest { email, password }).await?;
        require_data(envelope.into_result()?, "Registration failed")
    }

    async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let envelope: Envelope<User> =
            http::post(config::LOGIN, &CredentialsRequest { email, password }).await?;
        require_data(envelope.into_result()?, "Login failed")
    }

    async fn verify_email(&self, email: &str, code: &str) -> Result<(), ApiError> {
        let envelope: Envelope<serde_json::Value> =
            http::post(config::VERIFY_EMAIL, &VerifyEmailRequest { email, code }).await?;
        discard_data(envelope.into_result())
    }

    async fn resend_verification_code(&self, email: &str) -> Result<(), ApiError> {
        let envelope: Envelope<serde_json::Value> =
            http::post(config::RESEND_VERIFICATION_CODE, &EmailRequest { email }).await?;
        discard_data(envelope.into_result())
    }

    async fn forgot_password(&self, email: &str) -> Result<ResetCodeIssued, ApiError> {
        let envelope: Envelope<ResetCodeIssued> =
            http::post(config::FORGOT_PASSWORD, &EmailRequest { email }).await?;
        require_data(envelope.into_result()?, "Failed to send reset code")
    }

    async fn send_reset_code(&self, email: &str) -> Result<ResetCodeIssued, ApiError> {
        let envelope: Envelope<ResetCodeIssued> =
            http::post(config::SEND_RESET_CODE, &EmailRequest { email }).await?;
        require_data(envelope.into_result()?, "Failed to resend reset code")
    }

    async fn reset_password(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        let envelope: Envelope<serde_json::Value> = http::post(
            config::RESET_PASSWORD,
            &ResetPasswordRequest {
                email,
                code,
                new_password,
            },
        )
        .await?;
        discard_data(envelope.into_result())
    }
}

impl UserApi for HttpApi {
    async fn fetch_user(&self, user_id: &str) -> Result<User, ApiError> {
        let envelope: Envelope<User> = http::get(&config::user_path(user_id)).await?;
        require_data(envelope.into_result()?, "Failed to load account")
    }

    async fn update_user(
        &self,
        user_id: &str,
        changes: &UpdateUserRequest,
    ) -> Result<User, ApiError> {
        let envelope: Envelope<User> =
            http::patch(&config::user_path(user_id), changes).await?;
        require_data(envelope.into_result()?, "Failed to update account")
    }

    async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        let envelope: Envelope<serde_json::Value> =
            http::delete(&config::user_path(user_id)).await?;
        discard_data(envelope.into_result())
    }
}
