//! Build-time configuration and API endpoint constants.
//!
//! Values are baked in at compile time via `option_env!` so the deployed
//! bundle carries no runtime configuration surface. Defaults match a local
//! development setup behind a dev-server proxy.

/// Base path prefixed to every API request.
pub const API_BASE_URL: &str = match option_env!("PTRACKER_API_BASE_URL") {
    Some(url) => url,
    None => "/api",
};

/// Bearer credential attached to protected endpoints, if configured.
pub const API_BEARER_TOKEN: Option<&str> = option_env!("PTRACKER_API_BEARER_TOKEN");

/// Display name shown in the page title and header.
pub const APP_NAME: &str = match option_env!("PTRACKER_APP_NAME") {
    Some(name) => name,
    None => "PTracker",
};

// Auth endpoints (public).
pub const REGISTER: &str = "/auth/register";
pub const LOGIN: &str = "/auth/login";
pub const VERIFY_EMAIL: &str = "/auth/verify-email";
pub const RESEND_VERIFICATION_CODE: &str = "/auth/resend-verification-code";
pub const FORGOT_PASSWORD: &str = "/auth/forgot-password";
pub const SEND_RESET_CODE: &str = "/auth/send-reset-code";
pub const RESET_PASSWORD: &str = "/auth/reset-password";

/// User endpoint (protected) for `GET`/`PATCH`/`DELETE`.
pub fn user_path(user_id: &str) -> String {
    format!("/user/{user_id}")
}

/// Whether a path requires the bearer credential.
pub fn is_protected_path(path: &str) -> bool {
    path.starts_with("/user")
}

// Validation constants.
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MIN_EMAIL_LENGTH: usize = 5;
pub const OTP_LENGTH: usize = 6;
pub const RESET_CODE_LENGTH: usize = 6;

/// Client-side bound on how long a request may stay in flight. A hung
/// remote call would otherwise leave the session loading forever.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;
