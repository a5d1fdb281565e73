//! Signup page: collect credentials, then verify the emailed code.
//!
//! On a verified code the flow signs the user in with the credentials
//! captured at registration and navigates home. Any failure keeps the
//! current step and shows the store error.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpApi;
use crate::state::alerts::{AlertState, AlertVariant, show_alert};
use crate::state::flow::{self, SignupFlow, SignupStep};
use crate::state::session::{self, SessionState};
use crate::util::validation::{is_valid_email, is_valid_otp, is_valid_password, passwords_match};

/// Signup page — switches between the credentials card and the verify card.
#[component]
pub fn SignupPage() -> impl IntoView {
    let signup = RwSignal::new(SignupFlow::new());

    view! {
        <div class="auth-page">
            {move || match signup.get().step {
                SignupStep::Collecting => view! { <SignupCard signup=signup/> }.into_any(),
                SignupStep::Verifying => view! { <VerifyCard signup=signup/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn SignupCard(signup: RwSignal<SignupFlow>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);
    let confirm_error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get();
        let password_value = password.get();
        let confirm_value = confirm.get();
        email_error.set((!is_valid_email(&email_value)).then_some("Enter a valid email address."));
        password_error.set(
            (!is_valid_password(&password_value))
                .then_some("Password must be at least 8 characters."),
        );
        confirm_error.set(
            (!passwords_match(&password_value, &confirm_value))
                .then_some("Passwords do not match."),
        );
        if email_error.get().is_some()
            || password_error.get().is_some()
            || confirm_error.get().is_some()
        {
            return;
        }

        leptos::task::spawn_local(async move {
            session::clear_error(session);
            flow::submit_signup(signup, session, &HttpApi, email_value, password_value).await;
        });
    };

    let is_loading = move || session.get().is_loading;

    view! {
        <div class="card auth-card">
            <header class="card__header">
                <h1 class="card__title">"Create an account"</h1>
                <p class="card__description">"Enter your email below to create your account"</p>
            </header>

            <form class="auth-form" on:submit=on_submit>
                <div class="auth-form__field">
                    <label class="auth-form__label" for="signup-email">
                        "Email"
                    </label>
                    <input
                        id="signup-email"
                        class="auth-form__input"
                        type="email"
                        placeholder="m@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    {move || {
                        email_error.get().map(|msg| view! { <p class="auth-form__error">{msg}</p> })
                    }}
                </div>

                <div class="auth-form__field">
                    <label class="auth-form__label" for="signup-password">
                        "Password"
                    </label>
                    <input
                        id="signup-password"
                        class="auth-form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    {move || {
                        password_error
                            .get()
                            .map(|msg| view! { <p class="auth-form__error">{msg}</p> })
                    }}
                </div>

                <div class="auth-form__field">
                    <label class="auth-form__label" for="signup-confirm">
                        "Confirm password"
                    </label>
                    <input
                        id="signup-confirm"
                        class="auth-form__input"
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    {move || {
                        confirm_error
                            .get()
                            .map(|msg| view! { <p class="auth-form__error">{msg}</p> })
                    }}
                </div>

                {move || {
                    session
                        .get()
                        .error
                        .map(|msg| {
                            view! { <p class="auth-form__error auth-form__error--flow">{msg}</p> }
                        })
                }}

                <button class="btn btn--primary auth-form__submit" type="submit" disabled=is_loading>
                    {move || if is_loading() { "Creating account..." } else { "Create account" }}
                </button>
            </form>

            <p class="auth-card__footer">
                "Already have an account? " <A href="/login">"Sign in"</A>
            </p>
        </div>
    }
}

#[component]
fn VerifyCard(signup: RwSignal<SignupFlow>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let alerts = expect_context::<RwSignal<AlertState>>();
    let navigate = use_navigate();

    let code = RwSignal::new(String::new());
    let code_error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let code_value = code.get();
        code_error.set((!is_valid_otp(&code_value)).then_some("Enter the 6-digit code."));
        if code_error.get().is_some() {
            return;
        }

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            session::clear_error(session);
            if flow::submit_verification(signup, session, &HttpApi, &code_value).await {
                navigate("/home", NavigateOptions::default());
            }
        });
    };

    let on_resend = move |_| {
        leptos::task::spawn_local(async move {
            session::clear_error(session);
            if flow::resend_signup_code(signup, session, &HttpApi).await {
                show_alert(
                    alerts,
                    "A new verification code has been sent to your email.",
                    None,
                    AlertVariant::Success,
                );
            }
        });
    };

    let is_loading = move || session.get().is_loading;
    let sent_to = move || {
        signup.with(|f| f.email().map(str::to_owned)).unwrap_or_default()
    };

    view! {
        <div class="card auth-card">
            <header class="card__header">
                <h1 class="card__title">"Check your email"</h1>
                <p class="card__description">
                    {move || format!("We sent a 6-digit code to {}", sent_to())}
                </p>
            </header>

            <form class="auth-form" on:submit=on_submit>
                <div class="auth-form__field">
                    <label class="auth-form__label" for="verify-code">
                        "Verification code"
                    </label>
                    <input
                        id="verify-code"
                        class="auth-form__input auth-form__input--code"
                        type="text"
                        inputmode="numeric"
                        maxlength="6"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                    {move || {
                        code_error.get().map(|msg| view! { <p class="auth-form__error">{msg}</p> })
                    }}
                </div>

                {move || {
                    session
                        .get()
                        .error
                        .map(|msg| {
                            view! { <p class="auth-form__error auth-form__error--flow">{msg}</p> }
                        })
                }}

                <button class="btn btn--primary auth-form__submit" type="submit" disabled=is_loading>
                    {move || if is_loading() { "Verifying..." } else { "Verify" }}
                </button>
            </form>

            <button class="link-button" type="button" on:click=on_resend disabled=is_loading>
                "Resend code"
            </button>

            <p class="auth-card__footer">
                <A href="/login">"Back to login"</A>
            </p>
        </div>
    }
}
