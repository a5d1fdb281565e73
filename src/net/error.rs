//! Error taxonomy for the network layer.
//!
//! Transport failures, timeouts, and server-reported domain errors are all
//! normalized into [`ApiError`] at the service boundary; view code only ever
//! sees the message string surfaced through the session store.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

use super::types::ErrorBody;

/// Fallback shown when neither the server nor the transport produced a
/// usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// A failed API call, normalized from any of the failure sources.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    /// User-facing message. Server `error` text wins over transport detail.
    pub message: String,
    /// Structured code from the server's error envelope, when present.
    pub code: Option<String>,
}

impl ApiError {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// A transport-level failure (network unreachable, bad JSON, non-JSON
    /// error page). Surfaced as a generic message when the detail is empty.
    pub fn transport(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self {
            message: if detail.is_empty() {
                GENERIC_ERROR_MESSAGE.to_owned()
            } else {
                detail
            },
            code: None,
        }
    }

    /// The client-side request bound elapsed before the server answered.
    pub fn timeout() -> Self {
        Self::message("Request timed out")
    }

    /// The call site only exists in the browser build.
    pub fn unavailable() -> Self {
        Self::message("not available on server")
    }

    pub(crate) fn from_body(body: ErrorBody) -> Self {
        let message = if body.error.is_empty() {
            body.message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_owned())
        } else {
            body.error
        };
        Self {
            message,
            code: Some(body.error_code),
        }
    }

    /// Translation key for the structured code, if it is one of the known
    /// backend codes.
    pub fn translation_key(&self) -> Option<&'static str> {
        self.code
            .as_deref()
            .and_then(ErrorCode::from_code)
            .map(ErrorCode::translation_key)
    }
}

/// The fixed set of error codes the backend reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    ValidationFailed,
    InvalidCredentials,
    UserNotFound,
    UserAlreadyExists,
    EmailAlreadyInUse,
    InvalidResetCode,
    ResetCodeExpired,
    ResetCodeNotFound,
    MissingRequiredField,
}

impl ErrorCode {
    /// Parse a wire code. Unknown codes yield `None` and fall back to the
    /// server-provided message text.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "VALIDATION_FAILED" => Some(Self::ValidationFailed),
            "INVALID_CREDENTIALS" => Some(Self::InvalidCredentials),
            "USER_NOT_FOUND" => Some(Self::UserNotFound),
            "USER_ALREADY_EXISTS" => Some(Self::UserAlreadyExists),
            "EMAIL_ALREADY_IN_USE" => Some(Self::EmailAlreadyInUse),
            "INVALID_RESET_CODE" => Some(Self::InvalidResetCode),
            "RESET_CODE_EXPIRED" => Some(Self::ResetCodeExpired),
            "RESET_CODE_NOT_FOUND" => Some(Self::ResetCodeNotFound),
            "MISSING_REQUIRED_FIELD" => Some(Self::MissingRequiredField),
            _ => None,
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::ValidationFailed => "VALIDATION_FAILED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::EmailAlreadyInUse => "EMAIL_ALREADY_IN_USE",
            Self::InvalidResetCode => "INVALID_RESET_CODE",
            Self::ResetCodeExpired => "RESET_CODE_EXPIRED",
            Self::ResetCodeNotFound => "RESET_CODE_NOT_FOUND",
            Self::MissingRequiredField => "MISSING_REQUIRED_FIELD",
        }
    }

    /// Key into the localized message table.
    pub fn translation_key(self) -> &'static str {
        match self {
            Self::ValidationFailed => "errors.validationFailed",
            Self::InvalidCredentials => "errors.invalidCredentials",
            Self::UserNotFound => "errors.userNotFound",
            Self::UserAlreadyExists => "errors.userAlreadyExists",
            Self::EmailAlreadyInUse => "errors.emailAlreadyInUse",
            Self::InvalidResetCode => "errors.invalidResetCode",
            Self::ResetCodeExpired => "errors.resetCodeExpired",
            Self::ResetCodeNotFound => "errors.resetCodeNotFound",
            Self::MissingRequiredField => "errors.missingRequiredField",
        }
    }
}

/// Translation key for a raw wire code, `None` when the code is unknown.
pub fn error_translation_key(code: Option<&str>) -> Option<&'static str> {
    code.and_then(ErrorCode::from_code)
        .map(ErrorCode::translation_key)
}
