use leptos::prelude::*;

use crate::format::format_currency;
use crate::models::Movie;

/// Selectable movie tile on the first wizard step.
#[component]
pub fn MovieOption(
    movie: Movie,
    /// Whether this is the wizard's active movie.
    #[prop(into)]
    selected: Signal<bool>,
    /// Invoked with the movie id when the tile is clicked.
    on_select: Callback<u32>,
) -> impl IntoView {
    let id = movie.id;
    let details = format!(
        "{} \u{2022} {} min \u{2022} \u{2605} {:.1}",
        movie.genre, movie.duration, movie.rating
    );
    let price = format!("{} per seat", format_currency(movie.price));

    view! {
        <div
            class="movie-option"
            class:selected=move || selected.get()
            on:click=move |_| on_select.run(id)
        >
            <div class="movie-option-poster">{movie.initials()}</div>
            <div class="movie-option-info">
                <h4>{movie.title}</h4>
                <p class="movie-option-details">{details}</p>
                <p class="movie-option-price">{price}</p>
            </div>
        </div>
    }
}
