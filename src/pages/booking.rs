//! The four-step booking wizard page.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiClient;
use crate::booking::{BookingWizard, ContactDetails, WizardState, WizardStep};
use crate::components::movie_option::MovieOption;
use crate::components::seat_map::SeatMap;
use crate::components::status_badge::StatusBadge;
use crate::components::step_indicator::StepIndicator;
use crate::format::{format_currency, seat_labels};
use crate::models::LoadState;
use crate::nav::NavParams;
use crate::notify::NotificationCenter;
use crate::tooltip::refresh_tooltips;

type Wizard = BookingWizard<ApiClient, NotificationCenter>;

/// Contact fields, kept at page level so they survive stepping back to the seat map.
#[derive(Clone, Copy)]
struct ContactFields {
    name: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
}

impl ContactFields {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
        }
    }

    fn details(&self) -> ContactDetails {
        ContactDetails::new(
            self.name.get_untracked(),
            self.email.get_untracked(),
            self.phone.get_untracked(),
        )
    }
}

#[component]
pub fn BookingPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notifier = expect_context::<NotificationCenter>();

    let (state, set_state) = signal(WizardState::default());
    let wizard = BookingWizard::new(api, notifier).with_listener(move |s: &WizardState| {
        set_state.try_set(s.clone());
    });
    let contact = ContactFields::new();

    {
        let wizard = wizard.clone();
        let nav = NavParams::current();
        spawn_local(async move { wizard.activate(nav).await });
    }
    {
        let wizard = wizard.clone();
        on_cleanup(move || wizard.teardown());
    }

    let step = Memo::new(move |_| state.with(|s| s.step));

    view! {
        <div class="page booking-page">
            <style>{include_str!("booking.css")}</style>
            <h2>"Book Tickets"</h2>
            <StepIndicator current=step />

            {move || {
                let wizard = wizard.clone();
                match step.get() {
                    WizardStep::Movie => view! { <MovieStep wizard=wizard state=state /> }.into_any(),
                    WizardStep::Seats => view! { <SeatsStep wizard=wizard state=state /> }.into_any(),
                    WizardStep::Review => {
                        view! { <ReviewStep wizard=wizard state=state contact=contact /> }.into_any()
                    }
                    WizardStep::Confirmation => view! { <ConfirmationStep state=state /> }.into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn MovieStep(wizard: Wizard, state: ReadSignal<WizardState>) -> impl IntoView {
    let movies = Memo::new(move |_| state.with(|s| s.movies.clone()));
    let selected_id = Memo::new(move |_| state.with(|s| s.movie.as_ref().map(|m| m.id)));

    let on_select = {
        let wizard = wizard.clone();
        Callback::new(move |id: u32| {
            wizard.select_movie(id);
        })
    };

    let next = move |_| {
        let wizard = wizard.clone();
        spawn_local(async move { wizard.next_step().await });
    };

    view! {
        <section class="wizard-panel">
            <h3>"Select a Movie"</h3>
            {move || match movies.get() {
                LoadState::Idle | LoadState::Loading => {
                    view! { <p class="loading">"Loading movies..."</p> }.into_any()
                }
                LoadState::Failed => {
                    view! { <p class="error-message">"Failed to load movies. Please try again later."</p> }
                        .into_any()
                }
                LoadState::Ready(list) => {
                    view! {
                        <div class="movie-options">
                            {list
                                .into_iter()
                                .map(|movie| {
                                    let id = movie.id;
                                    let selected = Signal::derive(move || selected_id.get() == Some(id));
                                    view! { <MovieOption movie=movie selected=selected on_select=on_select /> }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
            <div class="wizard-actions">
                <button class="btn btn-primary" on:click=next>"Next"</button>
            </div>
        </section>
    }
}

#[component]
fn SeatsStep(wizard: Wizard, state: ReadSignal<WizardState>) -> impl IntoView {
    let seats = Memo::new(move |_| state.with(|s| s.seats.clone()));
    let selection = Memo::new(move |_| state.with(|s| s.selection.clone()));
    let title = move || state.with(|s| s.movie.as_ref().map(|m| m.title.clone()).unwrap_or_default());
    let total = move || state.with(|s| format_currency(s.running_total()));

    let on_toggle = {
        let wizard = wizard.clone();
        Callback::new(move |id: u32| {
            wizard.toggle_seat(id);
        })
    };

    Effect::new(move |_| {
        seats.track();
        refresh_tooltips();
    });

    let back = {
        let wizard = wizard.clone();
        move |_| {
            let wizard = wizard.clone();
            spawn_local(async move { wizard.previous_step().await });
        }
    };
    let next = move |_| {
        let wizard = wizard.clone();
        spawn_local(async move { wizard.next_step().await });
    };

    view! {
        <section class="wizard-panel">
            <h3>"Select Seats for " {title}</h3>
            {move || match seats.get() {
                LoadState::Idle | LoadState::Loading => {
                    view! { <p class="loading">"Loading seats..."</p> }.into_any()
                }
                LoadState::Failed => {
                    view! { <p class="error-message">"Failed to load seats. Please try again later."</p> }
                        .into_any()
                }
                LoadState::Ready(list) => {
                    view! { <SeatMap seats=list selection=selection on_toggle=on_toggle /> }.into_any()
                }
            }}
            <div class="selection-summary">
                <span>"Selected: " {move || selection.with(|s| s.labels())}</span>
                <span>"Seats: " {move || selection.with(|s| s.len())}</span>
                <span class="selection-total">"Total: " {total}</span>
            </div>
            <div class="wizard-actions">
                <button class="btn btn-secondary" on:click=back>"Back"</button>
                <button class="btn btn-primary" on:click=next>"Next"</button>
            </div>
        </section>
    }
}

#[component]
fn ReviewStep(
    wizard: Wizard,
    state: ReadSignal<WizardState>,
    contact: ContactFields,
) -> impl IntoView {
    let review = Memo::new(move |_| state.with(|s| s.review()));
    let submitting = Memo::new(move |_| state.with(|s| s.submitting));

    let back = {
        let wizard = wizard.clone();
        move |_| {
            let wizard = wizard.clone();
            spawn_local(async move { wizard.previous_step().await });
        }
    };
    let confirm = move |_| {
        let wizard = wizard.clone();
        let details = contact.details();
        spawn_local(async move { wizard.submit(&details).await });
    };

    view! {
        <section class="wizard-panel">
            <h3>"Your Details"</h3>
            {move || {
                review
                    .get()
                    .map(|r| {
                        view! {
                            <div class="booking-summary">
                                <div class="summary-row">
                                    <span>"Movie"</span>
                                    <span>{r.movie_title}</span>
                                </div>
                                <div class="summary-row">
                                    <span>"Seats"</span>
                                    <span>{r.seat_labels}</span>
                                </div>
                                <div class="summary-row">
                                    <span>"Number of seats"</span>
                                    <span>{r.seat_count}</span>
                                </div>
                                <div class="summary-row">
                                    <span>"Price per seat"</span>
                                    <span>{format_currency(r.unit_price)}</span>
                                </div>
                                <div class="summary-row summary-total">
                                    <span>"Total"</span>
                                    <span>{format_currency(r.total)}</span>
                                </div>
                            </div>
                        }
                    })
            }}

            <div class="contact-form">
                <label class="form-field">
                    <span>"Full Name"</span>
                    <input
                        type="text"
                        class="input"
                        prop:value=move || contact.name.get()
                        on:input=move |ev| contact.name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        class="input"
                        prop:value=move || contact.email.get()
                        on:input=move |ev| contact.email.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span>"Phone"</span>
                    <input
                        type="tel"
                        class="input"
                        prop:value=move || contact.phone.get()
                        on:input=move |ev| contact.phone.set(event_target_value(&ev))
                    />
                </label>
            </div>

            <div class="wizard-actions">
                <button
                    class="btn btn-secondary"
                    on:click=back
                    disabled=move || submitting.get()
                >
                    "Back"
                </button>
                <button
                    class="btn btn-primary"
                    on:click=confirm
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Processing..." } else { "Confirm Booking" }}
                </button>
            </div>
        </section>
    }
}

#[component]
fn ConfirmationStep(state: ReadSignal<WizardState>) -> impl IntoView {
    let confirmation = state.with_untracked(|s| {
        s.confirmation.clone().map(|booking| {
            let title = s
                .movie
                .as_ref()
                .map(|m| m.title.clone())
                .unwrap_or_default();
            (booking, title)
        })
    });

    view! {
        <section class="wizard-panel confirmation">
            {confirmation
                .map(|(booking, title)| {
                    view! {
                        <div class="confirmation-icon">"\u{2713}"</div>
                        <h3>"Booking Confirmed!"</h3>
                        <div class="booking-summary">
                            <div class="summary-row">
                                <span>"Booking ID"</span>
                                <span class="booking-id">{booking.booking_id.clone()}</span>
                            </div>
                            <div class="summary-row">
                                <span>"Movie"</span>
                                <span>{title}</span>
                            </div>
                            <div class="summary-row">
                                <span>"Seats"</span>
                                <span>{seat_labels(&booking.seat_numbers)}</span>
                            </div>
                            <div class="summary-row">
                                <span>"Customer"</span>
                                <span>{booking.customer_name.clone()}</span>
                            </div>
                            <div class="summary-row">
                                <span>"Email"</span>
                                <span>{booking.customer_email.clone()}</span>
                            </div>
                            <div class="summary-row summary-total">
                                <span>"Total"</span>
                                <span>{format_currency(booking.total_amount)}</span>
                            </div>
                            <div class="summary-row">
                                <span>"Status"</span>
                                <StatusBadge status=booking.status.clone() />
                            </div>
                        </div>
                    }
                })}
            <div class="wizard-actions">
                <a href="/my-bookings" class="btn btn-primary">"View My Bookings"</a>
                <a href="/movies" class="btn btn-secondary">"Browse Movies"</a>
            </div>
        </section>
    }
}
