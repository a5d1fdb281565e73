use super::*;
use crate::state::test_api::{MockApi, run, with_runtime};

fn signals() -> (RwSignal<SignupFlow>, RwSignal<ResetFlow>, RwSignal<SessionState>) {
    (
        RwSignal::new(SignupFlow::new()),
        RwSignal::new(ResetFlow::new()),
        RwSignal::new(SessionState::default()),
    )
}

// =============================================================
// Signup flow
// =============================================================

#[test]
fn signup_success_advances_to_verifying() {
    with_runtime(|| {
        let (flow, _, session) = signals();
        let api = MockApi::succeeding();
        assert!(run(submit_signup(
            flow,
            session,
            &api,
            "test@example.com".to_owned(),
            "hunter2hunter2".to_owned(),
        )));
        flow.with_untracked(|f| {
            assert_eq!(f.step, SignupStep::Verifying);
            assert_eq!(f.email(), Some("test@example.com"));
        });
        assert_eq!(
            api.call_log(),
            vec!["register test@example.com hunter2hunter2".to_owned()]
        );
    });
}

#[test]
fn signup_failure_stays_collecting_with_error() {
    with_runtime(|| {
        let (flow, _, session) = signals();
        let api = MockApi::failing("Email already in use");
        assert!(!run(submit_signup(
            flow,
            session,
            &api,
            "test@example.com".to_owned(),
            "hunter2hunter2".to_owned(),
        )));
        assert_eq!(flow.with_untracked(|f| f.step), SignupStep::Collecting);
        assert_eq!(
            session.with_untracked(|s| s.error.clone()).as_deref(),
            Some("Email already in use")
        );
    });
}

#[test]
fn verification_uses_the_captured_credentials() {
    with_runtime(|| {
        let (flow, _, session) = signals();
        let api = MockApi::succeeding();
        assert!(run(submit_signup(
            flow,
            session,
            &api,
            "test@example.com".to_owned(),
            "hunter2hunter2".to_owned(),
        )));
        assert!(run(submit_verification(flow, session, &api, "123456")));
        assert_eq!(
            api.call_log(),
            vec![
                "register test@example.com hunter2hunter2".to_owned(),
                "verify_email test@example.com 123456".to_owned(),
                "login test@example.com hunter2hunter2".to_owned(),
            ]
        );
        assert!(session.with_untracked(|s| s.is_authenticated));
    });
}

#[test]
fn failed_verification_keeps_the_flow_verifying() {
    with_runtime(|| {
        let (flow, _, session) = signals();
        let ok = MockApi::succeeding();
        assert!(run(submit_signup(
            flow,
            session,
            &ok,
            "test@example.com".to_owned(),
            "hunter2hunter2".to_owned(),
        )));

        let api = MockApi::failing_on("verify_email", "Invalid reset code");
        assert!(!run(submit_verification(flow, session, &api, "000000")));
        assert_eq!(flow.with_untracked(|f| f.step), SignupStep::Verifying);
        assert!(!session.with_untracked(|s| s.is_authenticated));
    });
}

#[test]
fn verification_login_failure_does_not_authenticate() {
    with_runtime(|| {
        let (flow, _, session) = signals();
        let ok = MockApi::succeeding();
        assert!(run(submit_signup(
            flow,
            session,
            &ok,
            "test@example.com".to_owned(),
            "hunter2hunter2".to_owned(),
        )));

        let api = MockApi::failing_on("login", "Invalid email or password");
        assert!(!run(submit_verification(flow, session, &api, "123456")));
        assert!(!session.with_untracked(|s| s.is_authenticated));
        assert_eq!(flow.with_untracked(|f| f.step), SignupStep::Verifying);
    });
}

#[test]
fn verification_before_registration_is_rejected() {
    with_runtime(|| {
        let (flow, _, session) = signals();
        let api = MockApi::succeeding();
        assert!(!run(submit_verification(flow, session, &api, "123456")));
        assert!(api.call_log().is_empty());
    });
}

#[test]
fn resend_is_only_available_while_verifying() {
    with_runtime(|| {
        let (flow, _, session) = signals();
        let api = MockApi::succeeding();
        assert!(!run(resend_signup_code(flow, session, &api)));
        assert!(api.call_log().is_empty());

        assert!(run(submit_signup(
            flow,
            session,
            &api,
            "test@example.com".to_owned(),
            "hunter2hunter2".to_owned(),
        )));
        assert!(run(resend_signup_code(flow, session, &api)));
        assert_eq!(flow.with_untracked(|f| f.step), SignupStep::Verifying);
        assert_eq!(
            api.call_log().last().map(String::as_str),
            Some("resend_verification_code test@example.com")
        );
    });
}

// =============================================================
// Password-reset flow
// =============================================================

#[test]
fn reset_flow_open_and_cancel() {
    let mut flow = ResetFlow::new();
    assert_eq!(flow.step, ResetStep::Idle);
    flow.open();
    assert_eq!(flow.step, ResetStep::AwaitingEmail);
    flow.cancel();
    assert_eq!(flow.step, ResetStep::Idle);
    assert!(flow.email().is_none());
}

#[test]
fn reset_email_success_captures_the_email() {
    with_runtime(|| {
        let (_, flow, session) = signals();
        flow.update(ResetFlow::open);
        let api = MockApi::succeeding();
        assert!(run(submit_reset_email(
            flow,
            session,
            &api,
            "test@example.com".to_owned(),
        )));
        flow.with_untracked(|f| {
            assert_eq!(f.step, ResetStep::AwaitingCode);
            assert_eq!(f.email(), Some("test@example.com"));
        });
    });
}

#[test]
fn reset_email_failure_stays_awaiting_email() {
    with_runtime(|| {
        let (_, flow, session) = signals();
        flow.update(ResetFlow::open);
        let api = MockApi::failing("User not found");
        assert!(!run(submit_reset_email(
            flow,
            session,
            &api,
            "test@example.com".to_owned(),
        )));
        assert_eq!(flow.with_untracked(|f| f.step), ResetStep::AwaitingEmail);
        assert_eq!(
            session.with_untracked(|s| s.error.clone()).as_deref(),
            Some("User not found")
        );
    });
}

#[test]
fn reset_email_is_rejected_while_idle() {
    with_runtime(|| {
        let (_, flow, session) = signals();
        let api = MockApi::succeeding();
        assert!(!run(submit_reset_email(
            flow,
            session,
            &api,
            "test@example.com".to_owned(),
        )));
        assert!(api.call_log().is_empty());
    });
}

#[test]
fn new_password_uses_the_captured_email_and_completes() {
    with_runtime(|| {
        let (_, flow, session) = signals();
        flow.update(ResetFlow::open);
        let api = MockApi::succeeding();
        assert!(run(submit_reset_email(
            flow,
            session,
            &api,
            "test@example.com".to_owned(),
        )));
        assert!(run(submit_new_password(
            flow,
            session,
            &api,
            "123456",
            "hunter2new!",
        )));
        flow.with_untracked(|f| {
            assert_eq!(f.step, ResetStep::Idle);
            assert!(f.email().is_none());
        });
        assert_eq!(
            api.call_log().last().map(String::as_str),
            Some("reset_password test@example.com 123456 hunter2new!")
        );
    });
}

#[test]
fn failed_reset_keeps_the_flow_awaiting_code() {
    with_runtime(|| {
        let (_, flow, session) = signals();
        flow.update(ResetFlow::open);
        let ok = MockApi::succeeding();
        assert!(run(submit_reset_email(
            flow,
            session,
            &ok,
            "test@example.com".to_owned(),
        )));

        let api = MockApi::failing_on("reset_password", "Reset code expired");
        assert!(!run(submit_new_password(
            flow,
            session,
            &api,
            "123456",
            "hunter2new!",
        )));
        assert_eq!(flow.with_untracked(|f| f.step), ResetStep::AwaitingCode);
        assert_eq!(
            session.with_untracked(|s| s.error.clone()).as_deref(),
            Some("Reset code expired")
        );
    });
}

#[test]
fn resend_reset_code_only_while_awaiting_code() {
    with_runtime(|| {
        let (_, flow, session) = signals();
        let api = MockApi::succeeding();
        assert!(!run(resend_reset_code(flow, session, &api)));

        flow.update(ResetFlow::open);
        assert!(!run(resend_reset_code(flow, session, &api)));
        assert!(api.call_log().is_empty());

        assert!(run(submit_reset_email(
            flow,
            session,
            &api,
            "test@example.com".to_owned(),
        )));
        assert!(run(resend_reset_code(flow, session, &api)));
        assert_eq!(flow.with_untracked(|f| f.step), ResetStep::AwaitingCode);
        assert_eq!(
            api.call_log().last().map(String::as_str),
            Some("send_reset_code test@example.com")
        );
    });
}
