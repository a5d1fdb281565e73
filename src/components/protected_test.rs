use super::*;

// =============================================================
// Guard decision matrix
// =============================================================

#[test]
fn loading_sessions_render_nothing_and_never_redirect() {
    assert_eq!(decide(true, false), GuardDecision::Pending);
    assert_eq!(decide(true, true), GuardDecision::Pending);
}

#[test]
fn settled_unauthenticated_sessions_redirect() {
    assert_eq!(decide(false, false), GuardDecision::Redirect);
}

#[test]
fn settled_authenticated_sessions_render_the_view() {
    assert_eq!(decide(false, true), GuardDecision::Allow);
}
