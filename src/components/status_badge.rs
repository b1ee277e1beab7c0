use leptos::prelude::*;

use crate::format::status_class;

/// Booking status as sent by the server, styled by its `status-*` class.
#[component]
pub fn StatusBadge(
    /// The raw status, e.g. "CONFIRMED"
    #[prop(into)]
    status: String,
) -> impl IntoView {
    let class = format!("status-badge {}", status_class(&status));
    view! { <span class=class>{status}</span> }
}
