use leptos::prelude::*;

use crate::notify::NotificationCenter;

/// Renders the notices queued on the [`NotificationCenter`] in context.
#[component]
pub fn NotificationStack() -> impl IntoView {
    let center = expect_context::<NotificationCenter>();

    view! {
        <div class="notification-stack">
            <For
                each=move || center.notices()
                key=|notice| (notice.id, notice.leaving)
                let:notice
            >
                {
                    let id = notice.id;
                    let class = if notice.leaving {
                        format!("{} leaving", notice.kind.css_class())
                    } else {
                        notice.kind.css_class().to_string()
                    };
                    view! {
                        <div class=class role="alert">
                            <span class="notification-icon">{notice.kind.icon()}</span>
                            <span class="notification-message">{notice.message}</span>
                            <button
                                class="notification-close"
                                aria-label="Dismiss"
                                on:click=move |_| center.dismiss(id)
                            >
                                "\u{00d7}"
                            </button>
                        </div>
                    }
                }
            </For>
        </div>
    }
}
