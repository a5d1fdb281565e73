//! Wire types shared with the remote auth API.
//!
//! Every endpoint answers with the same envelope: `{ success, data?,
//! message? }` on the happy path and `{ success: false, error, errorCode }`
//! on failure. The envelope is decoded into a tagged union so exactly one
//! of data or error can exist after parsing.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// The authenticated account record as returned by the server.
///
/// Immutable once received; a re-fetch replaces the whole record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Serialize)]
pub struct CredentialsRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct EmailRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub struct VerifyEmailRequest<'a> {
    pub email: &'a str,
    pub code: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest<'a> {
    pub email: &'a str,
    pub code: &'a str,
    pub new_password: &'a str,
}

/// Partial update for the account record; absent fields are left unchanged
/// server-side.
#[derive(Clone, Debug, Default, Serialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Success payload of the forgot-password / send-reset-code endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetCodeIssued {
    pub expires_at: String,
}

/// Uniform response envelope.
///
/// `Failure` is listed first so untagged deserialization only falls through
/// to `Success` when the `error`/`errorCode` pair is absent.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Failure(ErrorBody),
    Success(SuccessBody<T>),
}

#[derive(Clone, Debug, Deserialize)]
pub struct SuccessBody<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub message: Option<String>,
    pub timestamp: Option<String>,
}

impl<T> Envelope<T> {
    /// Collapse the envelope into a result, keeping the server's structured
    /// error code when one was reported.
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        match self {
            Self::Failure(body) => Err(ApiError::from_body(body)),
            Self::Success(body) if body.success => Ok(body.data),
            Self::Success(body) => Err(ApiError::message(
                body.message
                    .unwrap_or_else(|| super::error::GENERIC_ERROR_MESSAGE.to_owned()),
            )),
        }
    }
}
