//! Login page, including the embedded password-reset flow.
//!
//! The reset flow replaces the login card while active: an email form
//! first, then the code + new password form once the server confirms the
//! code was sent. Validation gates run before any dispatch; flow-level
//! errors surface from the session store below the fields.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpApi;
use crate::state::alerts::{AlertState, AlertVariant, show_alert};
use crate::state::flow::{self, ResetFlow, ResetStep};
use crate::state::session::{self, SessionState};
use crate::util::validation::{is_valid_email, is_valid_otp, is_valid_password, passwords_match};

/// Login page — switches between the login card and the reset-flow cards.
#[component]
pub fn LoginPage() -> impl IntoView {
    let reset = RwSignal::new(ResetFlow::new());

    view! {
        <div class="auth-page">
            {move || match reset.get().step {
                ResetStep::Idle => view! { <LoginCard reset=reset/> }.into_any(),
                ResetStep::AwaitingEmail => view! { <ResetEmailCard reset=reset/> }.into_any(),
                ResetStep::AwaitingCode => view! { <ResetCodeCard reset=reset/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn LoginCard(reset: RwSignal<ResetFlow>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get();
        let password_value = password.get();
        email_error.set((!is_valid_email(&email_value)).then_some("Enter a valid email address."));
        password_error.set(
            (!is_valid_password(&password_value))
                .then_some("Password must be at least 8 characters."),
        );
        if email_error.get().is_some() || password_error.get().is_some() {
            return;
        }

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            session::clear_error(session);
            if session::login(session, &HttpApi, &email_value, &password_value).await {
                navigate("/home", NavigateOptions::default());
            }
        });
    };

    let is_loading = move || session.get().is_loading;

    view! {
        <div class="card auth-card">
            <header class="card__header">
                <h1 class="card__title">"Welcome back"</h1>
                <p class="card__description">"Enter your email and password to sign in"</p>
            </header>

            <form class="auth-form" on:submit=on_submit>
                <div class="auth-form__field">
                    <label class="auth-form__label" for="login-email">
                        "Email"
                    </label>
                    <input
                        id="login-email"
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
                    <label class="auth-form__label" for="login-password">
                        "Password"
                    </label>
                    <input
                        id="login-password"
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

                {move || {
                    session
                        .get()
                        .error
                        .map(|msg| {
                            view! { <p class="auth-form__error auth-form__error--flow">{msg}</p> }
                        })
                }}

                <button class="btn btn--primary auth-form__submit" type="submit" disabled=is_loading>
                    {move || if is_loading() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>

            <button
                class="link-button"
                type="button"
                on:click=move |_| {
                    session::clear_error(session);
                    reset.update(ResetFlow::open);
                }
            >
                "Forgot password?"
            </button>

            <p class="auth-card__footer">
                "Don't have an account? " <A href="/signup">"Sign up"</A>
            </p>
        </div>
    }
}

#[component]
fn ResetEmailCard(reset: RwSignal<ResetFlow>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let email = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get();
        email_error.set((!is_valid_email(&email_value)).then_some("Enter a valid email address."));
        if email_error.get().is_some() {
            return;
        }

        leptos::task::spawn_local(async move {
            session::clear_error(session);
            flow::submit_reset_email(reset, session, &HttpApi, email_value).await;
        });
    };

    let on_cancel = move |_| {
        session::clear_error(session);
        reset.update(ResetFlow::cancel);
    };

    let is_loading = move || session.get().is_loading;

    view! {
        <div class="card auth-card">
            <header class="card__header">
                <h1 class="card__title">"Reset password"</h1>
                <p class="card__description">
                    "Enter your email and we will send you a reset code"
                </p>
            </header>

            <form class="auth-form" on:submit=on_submit>
                <div class="auth-form__field">
                    <label class="auth-form__label" for="reset-email">
                        "Email"
                    </label>
                    <input
                        id="reset-email"
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

                {move || {
                    session
                        .get()
                        .error
                        .map(|msg| {
                            view! { <p class="auth-form__error auth-form__error--flow">{msg}</p> }
                        })
                }}

                <div class="auth-form__actions">
                    <button class="btn btn--primary" type="submit" disabled=is_loading>
                        {move || if is_loading() { "Sending code..." } else { "Send code" }}
                    </button>
                    <button class="btn btn--outline" type="button" on:click=on_cancel>
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn ResetCodeCard(reset: RwSignal<ResetFlow>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let alerts = expect_context::<RwSignal<AlertState>>();

    let code = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let code_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);
    let confirm_error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let code_value = code.get();
        let password_value = new_password.get();
        let confirm_value = confirm.get();
        code_error.set((!is_valid_otp(&code_value)).then_some("Enter the 6-digit code."));
        password_error.set(
            (!is_valid_password(&password_value))
                .then_some("Password must be at least 8 characters."),
        );
        confirm_error.set(
            (!passwords_match(&password_value, &confirm_value))
                .then_some("Passwords do not match."),
        );
        if code_error.get().is_some()
            || password_error.get().is_some()
            || confirm_error.get().is_some()
        {
            return;
        }

        leptos::task::spawn_local(async move {
            session::clear_error(session);
            if flow::submit_new_password(reset, session, &HttpApi, &code_value, &password_value)
                .await
            {
                show_alert(
                    alerts,
                    "Your password has been reset. You can now sign in.",
                    None,
                    AlertVariant::Success,
                );
            }
        });
    };

    let on_resend = move |_| {
        leptos::task::spawn_local(async move {
            session::clear_error(session);
            if flow::resend_reset_code(reset, session, &HttpApi).await {
                show_alert(
                    alerts,
                    "A new reset code has been sent to your email.",
                    None,
                    AlertVariant::Success,
                );
            }
        });
    };

    let on_cancel = move |_| {
        session::clear_error(session);
        reset.update(ResetFlow::cancel);
    };

    let is_loading = move || session.get().is_loading;
    let sent_to = move || {
        reset.with(|f| f.email().map(str::to_owned)).unwrap_or_default()
    };

    view! {
        <div class="card auth-card">
            <header class="card__header">
                <h1 class="card__title">"Reset password"</h1>
                <p class="card__description">
                    {move || format!("Enter the code we sent to {} and your new password", sent_to())}
                </p>
            </header>

            <form class="auth-form" on:submit=on_submit>
                <div class="auth-form__field">
                    <label class="auth-form__label" for="reset-code">
                        "Verification code"
                    </label>
                    <input
                        id="reset-code"
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

                <div class="auth-form__field">
                    <label class="auth-form__label" for="reset-new-password">
                        "New password"
                    </label>
                    <input
                        id="reset-new-password"
                        class="auth-form__input"
                        type="password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                    {move || {
                        password_error
                            .get()
                            .map(|msg| view! { <p class="auth-form__error">{msg}</p> })
                    }}
                </div>

                <div class="auth-form__field">
                    <label class="auth-form__label" for="reset-confirm-password">
                        "Confirm password"
                    </label>
                    <input
                        id="reset-confirm-password"
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

                <div class="auth-form__actions">
                    <button class="btn btn--primary" type="submit" disabled=is_loading>
                        {move || if is_loading() { "Resetting..." } else { "Reset password" }}
                    </button>
                    <button class="btn btn--outline" type="button" on:click=on_cancel>
                        "Cancel"
                    </button>
                </div>
            </form>

            <button class="link-button" type="button" on:click=on_resend disabled=is_loading>
                "Resend code"
            </button>
        </div>
    }
}
