//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::alert_stack::AlertStack;
use crate::config;
use crate::pages::{home::HomePage, login::LoginPage, signup::SignupPage};
use crate::state::alerts::AlertState;
use crate::state::session::{self, SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and alert contexts, hydrates the session from
/// durable storage once, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let alerts = RwSignal::new(AlertState::default());

    provide_context(session);
    provide_context(alerts);

    session::initialize(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/ptracker-client.css"/>
        <Title text=config::APP_NAME/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("home") view=HomePage/>
                <Route path=StaticSegment("") view=HomeRedirect/>
            </Routes>
        </Router>

        <AlertStack/>
    }
}

/// Index route — forwards to the guarded home view, replacing history.
#[component]
fn HomeRedirect() -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        navigate(
            "/home",
            NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            },
        );
    });
}
