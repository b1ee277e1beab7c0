use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::api::ApiClient;
use crate::components::nav_bar::NavBar;
use crate::components::notification_stack::NotificationStack;
use crate::notify::NotificationCenter;
use crate::pages::booking::BookingPage;
use crate::pages::home::HomePage;
use crate::pages::movies::MoviesPage;
use crate::pages::my_bookings::MyBookingsPage;

#[component]
pub fn App(
    /// Backend client shared with every page.
    api: ApiClient,
) -> impl IntoView {
    provide_context(api);
    provide_context(NotificationCenter::new());

    view! {
        <Router>
            <style>{include_str!("app.css")}</style>
            <div class="app-layout">
                <NavBar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/movies") view=MoviesPage />
                        <Route path=path!("/booking") view=BookingPage />
                        <Route path=path!("/my-bookings") view=MyBookingsPage />
                    </Routes>
                </main>
            </div>
            <NotificationStack />
        </Router>
    }
}
