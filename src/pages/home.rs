//! Protected home page showing the signed-in account record.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::protected::ProtectedRoute;
use crate::config;
use crate::net::api::HttpApi;
use crate::state::session::{self, SessionState};

/// Home page — guarded; re-fetches the account record once per visit so a
/// server-side change replaces the stored copy wholesale.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    // The effect lives outside the guard so toggling visibility during the
    // refresh cannot re-trigger it.
    let refreshed = RwSignal::new(false);
    Effect::new(move || {
        let ready = session.with(|s| !s.is_loading && s.is_authenticated);
        if ready && !refreshed.get_untracked() {
            refreshed.set(true);
            leptos::task::spawn_local(async move {
                session::refresh_user(session, &HttpApi).await;
            });
        }
    });

    view! {
        <ProtectedRoute>
            <HomeContent/>
        </ProtectedRoute>
    }
}

#[component]
fn HomeContent() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session::logout(session);
        navigate("/login", NavigateOptions::default());
    };

    let email = move || {
        session.with(|s| s.user.as_ref().map(|u| u.email.clone()).unwrap_or_default())
    };

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1 class="home-page__brand">{config::APP_NAME}</h1>
                <div class="home-page__session">
                    <span class="home-page__email">{email}</span>
                    <button class="btn btn--outline" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </header>

            <main class="home-page__main">
                <div class="card account-card">
                    <header class="card__header">
                        <h2 class="card__title">
                            {move || format!("Welcome to {}!", config::APP_NAME)}
                        </h2>
                        <p class="card__description">
                            "You have successfully signed in to your account."
                        </p>
                    </header>

                    {move || {
                        session
                            .with(|s| s.user.clone())
                            .map(|user| {
                                view! {
                                    <div class="account-card__rows">
                                        <InfoRow label="Email" value=user.email/>
                                        <InfoRow label="User ID" value=user.user_id/>
                                        <InfoRow label="Created" value=user.created_at/>
                                        <InfoRow label="Updated" value=user.updated_at/>
                                    </div>
                                }
                            })
                    }}
                </div>
            </main>
        </div>
    }
}

#[component]
fn InfoRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="account-card__row">
            <span class="account-card__label">{label}</span>
            <span class="account-card__value">{value}</span>
        </div>
    }
}
