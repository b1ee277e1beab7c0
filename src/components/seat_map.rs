use leptos::prelude::*;

use crate::booking::SeatSelection;
use crate::format::seat_label;
use crate::models::Seat;

/// Seat layout for the active movie. Booked seats are rendered but inert.
#[component]
pub fn SeatMap(
    seats: Vec<Seat>,
    /// Current selection, used for highlighting.
    #[prop(into)]
    selection: Signal<SeatSelection>,
    on_toggle: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="seat-map">
            <div class="screen">"SCREEN"</div>
            <div class="seat-grid">
                {seats
                    .into_iter()
                    .map(|seat| {
                        let id = seat.id;
                        let available = seat.available;
                        let label = seat.seat_number.clone().unwrap_or_else(|| seat_label(id));
                        let tip = if available {
                            format!("Seat {} - Available", label)
                        } else {
                            format!("Seat {} - Booked", label)
                        };
                        view! {
                            <button
                                class="seat"
                                class:booked=!available
                                class:selected=move || selection.with(|s| s.contains(id))
                                disabled=!available
                                data-tooltip=tip
                                on:click=move |_| {
                                    if available {
                                        on_toggle.run(id);
                                    }
                                }
                            >
                                {id}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="seat-legend">
                <span class="legend-item"><span class="seat sample"></span>"Available"</span>
                <span class="legend-item"><span class="seat sample selected"></span>"Selected"</span>
                <span class="legend-item"><span class="seat sample booked"></span>"Booked"</span>
            </div>
        </div>
    }
}
