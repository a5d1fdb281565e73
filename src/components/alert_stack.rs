//! Stacked transient alerts rendered above all pages.

use leptos::prelude::*;

use crate::state::alerts::{AlertState, AlertVariant};

fn variant_class(variant: AlertVariant) -> &'static str {
    match variant {
        AlertVariant::Default => "alert alert--default",
        AlertVariant::Destructive => "alert alert--destructive",
        AlertVariant::Success => "alert alert--success",
        AlertVariant::Info => "alert alert--info",
    }
}

/// Fixed overlay showing active alerts in arrival order, each with its own
/// close button.
#[component]
pub fn AlertStack() -> impl IntoView {
    let alerts = expect_context::<RwSignal<AlertState>>();

    view! {
        <div class="alert-stack">
            <For
                each=move || alerts.get().alerts
                key=|alert| alert.id
                children=move |alert| {
                    let id = alert.id;
                    view! {
                        <div class=variant_class(alert.variant) role="alert">
                            {alert
                                .title
                                .map(|title| view! { <p class="alert__title">{title}</p> })}
                            <p class="alert__description">{alert.description}</p>
                            <button
                                class="alert__close"
                                aria-label="Close"
                                on:click=move |_| alerts.update(|state| state.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
