use leptos::prelude::*;
use tracing::{error, warn};
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiClient;
use crate::components::booking_item::BookingItem;
use crate::dom;
use crate::error::DomError;
use crate::history::{BookingHistory, HistoryState, TICKET_FAILED_MESSAGE};
use crate::notify::{NotificationCenter, Notify};

const POPUP_BLOCKED_MESSAGE: &str = "Please allow pop-ups to print your ticket";

#[component]
pub fn MyBookingsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notifier = expect_context::<NotificationCenter>();

    let (state, set_state) = signal(HistoryState::default());
    let history = BookingHistory::new(api, notifier).with_listener(move |s: &HistoryState| {
        set_state.try_set(s.clone());
    });

    {
        let history = history.clone();
        spawn_local(async move { history.activate().await });
    }
    {
        let history = history.clone();
        on_cleanup(move || history.teardown());
    }

    let refresh = {
        let history = history.clone();
        move |_| {
            let history = history.clone();
            spawn_local(async move { history.refresh().await });
        }
    };

    let on_print = Callback::new(move |booking_id: String| {
        let history = history.clone();
        spawn_local(async move {
            let Some(ticket) = history.print_ticket(&booking_id).await else {
                return;
            };
            match dom::open_document_window(&ticket.html) {
                Ok(()) => {}
                Err(DomError::PopupBlocked) => {
                    warn!("Pop-up blocked for ticket {}", ticket.booking_id);
                    notifier.warning(POPUP_BLOCKED_MESSAGE);
                }
                Err(e) => {
                    error!("Failed to open ticket {}: {}", ticket.booking_id, e);
                    notifier.error(TICKET_FAILED_MESSAGE);
                }
            }
        });
    });

    view! {
        <div class="page my-bookings-page">
            <style>{include_str!("my_bookings.css")}</style>
            <div class="page-header">
                <h2>"My Bookings"</h2>
                <button class="btn btn-secondary" on:click=refresh>"Refresh"</button>
            </div>

            <div
                class="bookings-list"
                style:display=move || if state.with(|s| s.list_visible()) { "block" } else { "none" }
            >
                {move || match state.get() {
                    HistoryState::Loading => {
                        view! { <p class="loading">"Loading bookings..."</p> }.into_any()
                    }
                    HistoryState::Failed => {
                        view! {
                            <div class="error-message">
                                <p>"Failed to load bookings. Please try again later."</p>
                            </div>
                        }
                            .into_any()
                    }
                    HistoryState::Empty => ().into_any(),
                    HistoryState::Loaded(cards) => {
                        cards
                            .into_iter()
                            .map(|card| view! { <BookingItem card=card on_print=on_print /> })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
            </div>

            <div
                class="empty-state"
                style:display=move || if state.with(|s| s.empty_visible()) { "block" } else { "none" }
            >
                <h3>"No bookings yet"</h3>
                <p>"Your booked tickets will show up here."</p>
                <a href="/movies" class="btn btn-primary">"Browse Movies"</a>
            </div>
        </div>
    }
}
