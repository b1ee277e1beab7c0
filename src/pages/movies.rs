use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiClient;
use crate::catalog::{CatalogFilter, CatalogState, CatalogView, SortOrder};
use crate::components::movie_card::MovieCard;
use crate::tooltip::refresh_tooltips;

#[component]
pub fn MoviesPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let (state, set_state) = signal(CatalogState::default());
    let (genre, set_genre) = signal(String::new());
    let (sort, set_sort) = signal(String::new());

    let catalog = CatalogView::new(api).with_listener(move |s: &CatalogState| {
        set_state.try_set(s.clone());
    });

    // Load the catalog on mount
    {
        let catalog = catalog.clone();
        spawn_local(async move { catalog.activate().await });
    }
    {
        let catalog = catalog.clone();
        on_cleanup(move || catalog.teardown());
    }

    // Re-derive the visible list whenever a control changes
    Effect::new(move |_| {
        let filter = CatalogFilter::from_values(&genre.get(), &sort.get());
        catalog.apply_filters(filter);
    });

    Effect::new(move |_| {
        state.track();
        refresh_tooltips();
    });

    let genres = Memo::new(move |_| state.with(|s| s.genres()));

    view! {
        <div class="page movies-page">
            <style>{include_str!("movies.css")}</style>
            <h2>"Now Showing"</h2>

            <div class="filters">
                <select
                    class="input filter-select"
                    on:change=move |ev| set_genre.set(event_target_value(&ev))
                    prop:value=move || genre.get()
                >
                    <option value="">"All Genres"</option>
                    <For each=move || genres.get() key=|g| g.clone() let:g>
                        {
                            let label = g.clone();
                            view! { <option value=g>{label}</option> }
                        }
                    </For>
                </select>
                <select
                    class="input filter-select"
                    on:change=move |ev| set_sort.set(event_target_value(&ev))
                    prop:value=move || sort.get()
                >
                    <option value="">"Sort By"</option>
                    {SortOrder::ALL
                        .iter()
                        .map(|order| view! { <option value=order.value()>{order.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            {move || match state.get() {
                CatalogState::Loading => {
                    view! { <p class="loading">"Loading movies..."</p> }.into_any()
                }
                CatalogState::LoadError => {
                    view! {
                        <div class="error-message">
                            <h3>"Unable to load movies"</h3>
                            <p>"Please try again later."</p>
                        </div>
                    }
                        .into_any()
                }
                CatalogState::Loaded { visible, .. } if visible.is_empty() => {
                    view! {
                        <div class="no-movies">
                            <h3>"No Movies Available"</h3>
                            <p>"Try a different genre."</p>
                        </div>
                    }
                        .into_any()
                }
                CatalogState::Loaded { visible, .. } => {
                    view! {
                        <div class="movies-grid">
                            {visible
                                .into_iter()
                                .map(|movie| view! { <MovieCard movie=movie /> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
