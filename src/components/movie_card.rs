use leptos::prelude::*;

use crate::format::{format_currency, format_date};
use crate::models::Movie;
use crate::nav::NavParams;

/// Catalog card for one movie, linking into the booking wizard.
#[component]
pub fn MovieCard(movie: Movie) -> impl IntoView {
    let href = NavParams::booking_href(movie.id);
    let rating = format!("\u{2605} {:.1}", movie.rating);
    let rating_tip = format!("Rated {:.1} out of 5", movie.rating);
    let duration = format!("{} min", movie.duration);
    let price = format_currency(movie.price);

    let director = movie.director.clone().filter(|d| !d.is_empty());
    let cast = (!movie.cast.is_empty()).then(|| movie.cast.join(", "));
    let release = movie.release_date.as_deref().map(format_date);
    let certificate = (!movie.certificate.is_empty()).then(|| movie.certificate.clone());

    view! {
        <div class="movie-card">
            <div class="movie-poster">{movie.initials()}</div>
            <div class="movie-card-body">
                <h3 class="movie-title">{movie.title.clone()}</h3>
                <div class="movie-meta">
                    <span class="movie-genre">{movie.genre.clone()}</span>
                    <span class="movie-duration">{duration}</span>
                    <span class="movie-language">{movie.language.clone()}</span>
                    {certificate.map(|c| {
                        let tip = format!("Certificate {}", c);
                        view! {
                            <span class="movie-certificate" data-tooltip=tip>{c}</span>
                        }
                    })}
                </div>
                <p class="movie-description">{movie.description.clone()}</p>
                {director.map(|d| view! { <p class="movie-credit">"Director: " {d}</p> })}
                {cast.map(|c| view! { <p class="movie-credit">"Cast: " {c}</p> })}
                {release.map(|r| view! { <p class="movie-credit">"Released: " {r}</p> })}
                <div class="movie-card-footer">
                    <span class="movie-rating" data-tooltip=rating_tip>{rating}</span>
                    <span class="movie-price">{price}</span>
                    <a href=href class="btn btn-primary">"Book Now"</a>
                </div>
            </div>
        </div>
    }
}
