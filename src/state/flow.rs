//! Multi-step auth flow state machines.
//!
//! Each step gates on server-confirmed success of the previous one: a
//! failed action keeps the flow on its current step and surfaces the error
//! through the session store. The email (and, for signup, the password
//! needed for the follow-up sign-in) is captured once when the flow
//! advances and stays fixed for the rest of that flow instance, even if the
//! input field it came from is later edited.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use leptos::prelude::*;

use super::session;
use crate::net::api::AuthApi;
use crate::state::session::SessionState;

// =============================================================
// Signup: Collecting -> Verifying -> (signed in)
// =============================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignupStep {
    #[default]
    Collecting,
    Verifying,
}

/// Signup flow instance. Credentials are captured at the
/// Collecting→Verifying transition and are private to the flow.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupFlow {
    pub step: SignupStep,
    email: Option<String>,
    password: Option<String>,
}

impl SignupFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Email the verification code was sent to, once Verifying.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn can_resend(&self) -> bool {
        self.step == SignupStep::Verifying
    }

    fn registered(&mut self, email: String, password: String) {
        if self.step == SignupStep::Collecting {
            self.email = Some(email);
            self.password = Some(password);
            self.step = SignupStep::Verifying;
        }
    }

    fn credentials(&self) -> Option<(String, String)> {
        match (&self.email, &self.password) {
            (Some(email), Some(password)) => Some((email.clone(), password.clone())),
            _ => None,
        }
    }
}

/// Register the account. On success the flow advances to Verifying,
/// capturing the submitted credentials; on failure it stays Collecting.
pub async fn submit_signup(
    flow: RwSignal<SignupFlow>,
    session: RwSignal<SessionState>,
    api: &impl AuthApi,
    email: String,
    password: String,
) -> bool {
    if flow.with_untracked(|f| f.step != SignupStep::Collecting) {
        return false;
    }
    if !session::register(session, api, &email, &password).await {
        return false;
    }
    flow.update(|f| f.registered(email, password));
    true
}

/// Verify the emailed code, then sign in with the captured credentials.
/// Returns true only when both steps succeeded; the caller navigates home.
pub async fn submit_verification(
    flow: RwSignal<SignupFlow>,
    session: RwSignal<SessionState>,
    api: &impl AuthApi,
    code: &str,
) -> bool {
    let Some((email, password)) = flow.with_untracked(SignupFlow::credentials) else {
        return false;
    };
    if !session::verify_email(session, api, &email, code).await {
        return false;
    }
    session::login(session, api, &email, &password).await
}

/// Re-send the verification code. Only available while Verifying; the step
/// does not change.
pub async fn resend_signup_code(
    flow: RwSignal<SignupFlow>,
    session: RwSignal<SessionState>,
    api: &impl AuthApi,
) -> bool {
    let Some(email) = flow.with_untracked(|f| {
        if f.can_resend() {
            f.email.clone()
        } else {
            None
        }
    }) else {
        return false;
    };
    session::resend_verification_code(session, api, &email).await
}

// =============================================================
// Password reset: Idle -> AwaitingEmail -> AwaitingCode -> Idle
// =============================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResetStep {
    #[default]
    Idle,
    AwaitingEmail,
    AwaitingCode,
}

/// Password-reset flow instance. The email is captured when the reset code
/// is confirmed sent and reused for the final reset call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResetFlow {
    pub step: ResetStep,
    email: Option<String>,
}

impl ResetFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// User-initiated: show the email form. No I/O involved.
    pub fn open(&mut self) {
        if self.step == ResetStep::Idle {
            self.step = ResetStep::AwaitingEmail;
        }
    }

    /// User-initiated: abandon the flow from any step.
    pub fn cancel(&mut self) {
        *self = Self::new();
    }

    /// Email the reset code was sent to, once AwaitingCode.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn can_resend(&self) -> bool {
        self.step == ResetStep::AwaitingCode
    }

    fn code_sent(&mut self, email: String) {
        if self.step == ResetStep::AwaitingEmail {
            self.email = Some(email);
            self.step = ResetStep::AwaitingCode;
        }
    }

    fn completed(&mut self) {
        if self.step == ResetStep::AwaitingCode {
            *self = Self::new();
        }
    }
}

/// Request a reset code. On success the flow advances to AwaitingCode,
/// capturing the submitted email; on failure it stays AwaitingEmail.
pub async fn submit_reset_email(
    flow: RwSignal<ResetFlow>,
    session: RwSignal<SessionState>,
    api: &impl AuthApi,
    email: String,
) -> bool {
    if flow.with_untracked(|f| f.step != ResetStep::AwaitingEmail) {
        return false;
    }
    if !session::forgot_password(session, api, &email).await {
        return false;
    }
    flow.update(|f| f.code_sent(email));
    true
}

/// Submit the code and new password against the captured email. On success
/// the flow returns to Idle; the caller shows the confirmation notice.
pub async fn submit_new_password(
    flow: RwSignal<ResetFlow>,
    session: RwSignal<SessionState>,
    api: &impl AuthApi,
    code: &str,
    new_password: &str,
) -> bool {
    let Some(email) = flow.with_untracked(|f| {
        if f.step == ResetStep::AwaitingCode {
            f.email.clone()
        } else {
            None
        }
    }) else {
        return false;
    };
    if !session::reset_password(session, api, &email, code, new_password).await {
        return false;
    }
    flow.update(ResetFlow::completed);
    true
}

/// Re-send the reset code to the captured email. Only available while
/// AwaitingCode; the step does not change.
pub async fn resend_reset_code(
    flow: RwSignal<ResetFlow>,
    session: RwSignal<SessionState>,
    api: &impl AuthApi,
) -> bool {
    let Some(email) = flow.with_untracked(|f| {
        if f.can_resend() {
            f.email.clone()
        } else {
            None
        }
    }) else {
        return false;
    };
    session::send_reset_code(session, api, &email).await
}
