//! The session store: the single owner of authenticated-session state.
//!
//! Every asynchronous action follows the same discipline: `begin` marks the
//! store loading and clears the previous error, the network call runs, and
//! `settle_*` finalizes. Both settle arms clear the loading flag, so no
//! action can leave the store loading forever.
//!
//! OVERLAPPING ACTIONS
//! ===================
//! `begin` stamps each action with a generation number. A completion whose
//! generation is no longer current (a newer action began, or a logout
//! happened) is discarded entirely instead of racing last-write-wins into
//! the store.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::{AuthApi, UserApi};
use crate::net::error::ApiError;
use crate::net::types::User;
use crate::util::storage;

/// Authenticated-session state, provided via context as
/// `RwSignal<SessionState>`.
///
/// Invariant once loading completes: `is_authenticated` iff `user` is set.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Current request generation; stale completions are discarded.
    generation: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        // Loading until `initialize` has read the durable record, so route
        // guards never redirect before hydration settles.
        Self {
            user: None,
            is_authenticated: false,
            is_loading: true,
            error: None,
            generation: 0,
        }
    }
}

/// What `initialize` found in durable storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HydrationOutcome {
    Empty,
    Restored,
    Corrupt,
}

impl SessionState {
    fn begin(&mut self) -> u64 {
        self.is_loading = true;
        self.error = None;
        self.generation += 1;
        self.generation
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    fn apply_hydration(&mut self, raw: Option<&str>) -> HydrationOutcome {
        match raw {
            None => HydrationOutcome::Empty,
            Some(raw) => match storage::parse_record(raw) {
                Some(user) => {
                    self.user = Some(user);
                    self.is_authenticated = true;
                    HydrationOutcome::Restored
                }
                None => HydrationOutcome::Corrupt,
            },
        }
    }
}

fn begin(session: RwSignal<SessionState>) -> u64 {
    let mut generation = 0;
    session.update(|state| generation = state.begin());
    generation
}

/// Finalize an action that yields the account record. Returns whether the
/// result was applied and successful.
fn settle_user(
    session: RwSignal<SessionState>,
    generation: u64,
    result: Result<User, ApiError>,
    persist: bool,
) -> bool {
    let mut succeeded = false;
    session.update(|state| {
        if !state.is_current(generation) {
            return;
        }
        state.is_loading = false;
        match result {
            Ok(user) => {
                // The durable record and the in-memory record change in the
                // same reducer step, never across a suspension point.
                if persist {
                    storage::save(&user);
                }
                state.user = Some(user);
                state.is_authenticated = true;
                state.error = None;
                succeeded = true;
            }
            Err(error) => {
                state.error = Some(error.message);
            }
        }
    });
    succeeded
}

/// Finalize an action with no payload. Returns whether the result was
/// applied and successful.
fn settle_unit(
    session: RwSignal<SessionState>,
    generation: u64,
    result: Result<(), ApiError>,
) -> bool {
    let mut succeeded = false;
    session.update(|state| {
        if !state.is_current(generation) {
            return;
        }
        state.is_loading = false;
        match result {
            Ok(()) => {
                state.error = None;
                succeeded = true;
            }
            Err(error) => {
                state.error = Some(error.message);
            }
        }
    });
    succeeded
}

/// Hydrate the session from the durable record. Run exactly once at start.
///
/// A record that fails to parse is purged and the session stays empty; the
/// user never sees this self-heal. Always terminates the loading state.
pub fn initialize(session: RwSignal<SessionState>) {
    let raw = storage::load_raw();
    session.update(|state| {
        if state.apply_hydration(raw.as_deref()) == HydrationOutcome::Corrupt {
            storage::clear();
        }
        state.is_loading = false;
    });
}

/// Sign in. On success the record is stored durably and the session becomes
/// authenticated; on failure only `error` changes.
pub async fn login(
    session: RwSignal<SessionState>,
    api: &impl AuthApi,
    email: &str,
    password: &str,
) -> bool {
    let generation = begin(session);
    let result = api.login(email, password).await;
    settle_user(session, generation, result, true)
}

/// Create an account. Never touches `user` or `is_authenticated`; the
/// signup flow verifies and then signs in explicitly.
pub async fn register(
    session: RwSignal<SessionState>,
    api: &impl AuthApi,
    email: &str,
    password: &str,
) -> bool {
    let generation = begin(session);
    let result = api.register(email, password).await;
    settle_unit(session, generation, result.map(|_| ()))
}

pub async fn verify_email(
    session: RwSignal<SessionState>,
    api: &impl AuthApi,
    email: &str,
    code: &str,
) -> bool {
    let generation = begin(session);
    let result = api.verify_email(email, code).await;
    settle_unit(session, generation, result)
}

pub async fn resend_verification_code(
    session: RwSignal<SessionState>,
    api: &impl AuthApi,
    email: &str,
) -> bool {
    let generation = begin(session);
    let result = api.resend_verification_code(email).await;
    settle_unit(session, generation, result)
}

pub async fn forgot_password(
    session: RwSignal<SessionState>,
    api: &impl AuthApi,
    email: &str,
) -> bool {
    let generation = begin(session);
    let result = api.forgot_password(email).await;
    settle_unit(session, generation, result.map(|_| ()))
}

pub async fn send_reset_code(
    session: RwSignal<SessionState>,
    api: &impl AuthApi,
    email: &str,
) -> bool {
    let generation = begin(session);
    let result = api.send_reset_code(email).await;
    settle_unit(session, generation, result.map(|_| ()))
}

pub async fn reset_password(
    session: RwSignal<SessionState>,
    api: &impl AuthApi,
    email: &str,
    code: &str,
    new_password: &str,
) -> bool {
    let generation = begin(session);
    let result = api.reset_password(email, code, new_password).await;
    settle_unit(session, generation, result)
}

/// Re-fetch the signed-in account record and replace it wholesale. The
/// durable record is not rewritten; it belongs to login/logout.
pub async fn refresh_user(session: RwSignal<SessionState>, api: &impl UserApi) -> bool {
    let Some(user_id) = session.with_untracked(|s| s.user.as_ref().map(|u| u.user_id.clone()))
    else {
        return false;
    };
    let generation = begin(session);
    let result = api.fetch_user(&user_id).await;
    settle_user(session, generation, result, false)
}

/// Sign out: synchronous, unconditional, idempotent. Clears the session,
/// purges the durable record, and invalidates in-flight completions.
pub fn logout(session: RwSignal<SessionState>) {
    session.update(|state| {
        state.user = None;
        state.is_authenticated = false;
        state.error = None;
        state.is_loading = false;
        state.generation += 1;
        storage::clear();
    });
}

/// Replace the in-memory account record (e.g. after a profile update).
pub fn set_user(session: RwSignal<SessionState>, user: User) {
    session.update(|state| {
        state.user = Some(user);
        state.is_authenticated = true;
        state.error = None;
    });
}

/// Idempotent; only clears the error field.
pub fn clear_error(session: RwSignal<SessionState>) {
    session.update(|state| state.error = None);
}
