//! Transient user-facing notifications.
//!
//! Alerts stack in arrival order and are removed either by the auto-dismiss
//! timer or by an explicit dismissal matching the alert's identity,
//! independent of its position in the stack.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

use leptos::prelude::*;
use uuid::Uuid;

/// How long an alert stays visible unless dismissed.
pub const ALERT_TIMEOUT_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertVariant {
    #[default]
    Default,
    Destructive,
    Success,
    Info,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: String,
    pub variant: AlertVariant,
}

/// Alert queue, provided via context as `RwSignal<AlertState>`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlertState {
    pub alerts: Vec<Alert>,
}

impl AlertState {
    /// Append an alert and return its identity.
    pub fn push(
        &mut self,
        description: impl Into<String>,
        title: Option<String>,
        variant: AlertVariant,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.alerts.push(Alert {
            id,
            title,
            description: description.into(),
            variant,
        });
        id
    }

    /// Remove the alert with the given identity, wherever it sits.
    pub fn dismiss(&mut self, id: Uuid) {
        self.alerts.retain(|alert| alert.id != id);
    }
}

/// Show an alert and schedule its auto-dismiss.
pub fn show_alert(
    alerts: RwSignal<AlertState>,
    description: impl Into<String>,
    title: Option<String>,
    variant: AlertVariant,
) {
    let mut id = Uuid::nil();
    alerts.update(|state| id = state.push(description, title, variant));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(ALERT_TIMEOUT_MS).await;
        alerts.update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}
