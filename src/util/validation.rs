//! Pre-flight form validation.
//!
//! These gates run client-side before any dispatch; the server remains
//! authoritative and may still reject input that passes here (duplicate
//! email, wrong credentials, expired code).

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::config::{MIN_EMAIL_LENGTH, MIN_PASSWORD_LENGTH, OTP_LENGTH};

/// A simple two-part `local@domain.tld` shape with a minimum length.
pub fn is_valid_email(email: &str) -> bool {
    if email.len() < MIN_EMAIL_LENGTH {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    if domain.is_empty() || domain.contains('@') || domain.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Minimum-length check only; strength rules live server-side.
pub fn is_valid_password(password: &str) -> bool {
    password.len() >= MIN_PASSWORD_LENGTH
}

/// Exactly `length` ASCII digits.
pub fn is_valid_code(code: &str, length: usize) -> bool {
    code.len() == length && code.bytes().all(|b| b.is_ascii_digit())
}

/// Six-digit OTP/reset code, the default used by both flows.
pub fn is_valid_otp(code: &str) -> bool {
    is_valid_code(code, OTP_LENGTH)
}

/// Byte equality; deliberately case-sensitive.
pub fn passwords_match(password: &str, confirm: &str) -> bool {
    password == confirm
}
