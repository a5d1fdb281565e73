//! In-memory `AuthApi`/`UserApi` double for native store and flow tests.

use std::cell::RefCell;
use std::future::Future;

use leptos::prelude::Owner;

use crate::net::api::{AuthApi, UserApi};
use crate::net::error::ApiError;
use crate::net::types::{ResetCodeIssued, UpdateUserRequest, User};

pub(crate) fn sample_user() -> User {
    User {
        user_id: "u-1".to_owned(),
        email: "test@example.com".to_owned(),
        created_at: "2026-01-01T00:00:00Z".to_owned(),
        updated_at: "2026-01-02T00:00:00Z".to_owned(),
    }
}

/// Run a test body under a reactive owner so signals can be created.
pub(crate) fn with_runtime<R>(f: impl FnOnce() -> R) -> R {
    let owner = Owner::new();
    owner.set();
    f()
}

/// Drive an immediately-ready action future to completion.
pub(crate) fn run<F: Future>(fut: F) -> F::Output {
    futures::executor::block_on(fut)
}

/// Scriptable API double: succeeds with a fixed user unless told to fail,
/// either wholesale or per method. Records every call it receives.
pub(crate) struct MockApi {
    pub user: User,
    fail_methods: Vec<&'static str>,
    fail_message: &'static str,
    pub calls: RefCell<Vec<String>>,
}

impl MockApi {
    pub fn succeeding() -> Self {
        Self {
            user: sample_user(),
            fail_methods: Vec::new(),
            fail_message: "",
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(message: &'static str) -> Self {
        Self {
            fail_methods: vec!["*"],
            fail_message: message,
            ..Self::succeeding()
        }
    }

    pub fn failing_on(method: &'static str, message: &'static str) -> Self {
        Self {
            fail_methods: vec![method],
            fail_message: message,
            ..Self::succeeding()
        }
    }

    pub fn with_user(user: User) -> Self {
        Self {
            user,
            ..Self::succeeding()
        }
    }

    pub fn call_log(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn note(&self, entry: String) {
        self.calls.borrow_mut().push(entry);
    }

    fn check(&self, method: &'static str) -> Result<(), ApiError> {
        if self
            .fail_methods
            .iter()
            .any(|m| *m == "*" || *m == method)
        {
            Err(ApiError::message(self.fail_message))
        } else {
            Ok(())
        }
    }
}

impl AuthApi for MockApi {
    async fn register(&self, email: &str, password: &str) -> Result<User, ApiError> {
        self.note(format!("register {email} {password}"));
        self.check("register")?;
        Ok(self.user.clone())
    }

    async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        self.note(format!("login {email} {password}"));
        self.check("login")?;
        Ok(self.user.clone())
    }

    async fn verify_email(&self, email: &str, code: &str) -> Result<(), ApiError> {
        self.note(format!("verify_email {email} {code}"));
        self.check("verify_email")
    }

    async fn resend_verification_code(&self, email: &str) -> Result<(), ApiError> {
        self.note(format!("resend_verification_code {email}"));
        self.check("resend_verification_code")
    }

    async fn forgot_password(&self, email: &str) -> Result<ResetCodeIssued, ApiError> {
        self.note(format!("forgot_password {email}"));
        self.check("forgot_password")?;
        Ok(ResetCodeIssued {
            expires_at: "2026-01-01T00:10:00Z".to_owned(),
        })
    }

    async fn send_reset_code(&self, email: &str) -> Result<ResetCodeIssued, ApiError> {
        self.note(format!("send_reset_code {email}"));
        self.check("send_reset_code")?;
        Ok(ResetCodeIssued {
            expires_at: "2026-01-01T00:10:00Z".to_owned(),
        })
    }

    async fn reset_password(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        self.note(format!("reset_password {email} {code} {new_password}"));
        self.check("reset_password")
    }
}

impl UserApi for MockApi {
    async fn fetch_user(&self, user_id: &str) -> Result<User, ApiError> {
        self.note(format!("fetch_user {user_id}"));
        self.check("fetch_user")?;
        Ok(self.user.clone())
    }

    async fn update_user(
        &self,
        user_id: &str,
        changes: &UpdateUserRequest,
    ) -> Result<User, ApiError> {
        self.note(format!(
            "update_user {user_id} email={:?}",
            changes.email.as_deref()
        ));
        self.check("update_user")?;
        Ok(self.user.clone())
    }

    async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        self.note(format!("delete_user {user_id}"));
        self.check("delete_user")
    }
}
