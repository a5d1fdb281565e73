//! Route guard for views that require an authenticated session.

#[cfg(test)]
#[path = "protected_test.rs"]
mod protected_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Per-navigation guard outcome, re-evaluated on every session change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still hydrating or an action in flight: render nothing and
    /// never redirect, so an unauthenticated flash cannot occur.
    Pending,
    /// No session: send the user to the login view, replacing history so
    /// back-navigation cannot return to the guarded view.
    Redirect,
    Allow,
}

pub fn decide(is_loading: bool, is_authenticated: bool) -> GuardDecision {
    if is_loading {
        GuardDecision::Pending
    } else if is_authenticated {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect
    }
}

/// Renders its children only for an authenticated session.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let decision = session.with(|s| decide(s.is_loading, s.is_authenticated));
        if decision == GuardDecision::Redirect {
            navigate(
                "/login",
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    view! {
        <Show when=move || {
            session.with(|s| decide(s.is_loading, s.is_authenticated)) == GuardDecision::Allow
        }>{children()}</Show>
    }
}
