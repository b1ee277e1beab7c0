use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::history::BookingCard;

/// One entry in the booking history list.
#[component]
pub fn BookingItem(
    card: BookingCard,
    /// Invoked with the booking id when "Print Ticket" is clicked.
    on_print: Callback<String>,
) -> impl IntoView {
    let id = card.booking_id.clone();

    view! {
        <div class="booking-card">
            <div class="booking-card-header">
                <span class="booking-id">{card.booking_id.clone()}</span>
                <StatusBadge status=card.status.clone() />
            </div>
            <div class="booking-card-body">
                <h3 class="booking-movie">{card.movie_title}</h3>
                <div class="booking-detail">
                    <span class="booking-detail-label">"Seats"</span>
                    <span>{card.seats}</span>
                </div>
                <div class="booking-detail">
                    <span class="booking-detail-label">"Customer"</span>
                    <span>{card.customer_name}</span>
                </div>
                <div class="booking-detail">
                    <span class="booking-detail-label">"Booked"</span>
                    <span>{card.booked_at}</span>
                </div>
                <div class="booking-detail booking-total">
                    <span class="booking-detail-label">"Total"</span>
                    <span>{card.total}</span>
                </div>
            </div>
            <div class="booking-card-actions">
                <button class="btn btn-secondary" on:click=move |_| on_print.run(id.clone())>
                    "Print Ticket"
                </button>
            </div>
        </div>
    }
}
