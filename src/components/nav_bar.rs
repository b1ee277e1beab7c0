use leptos::prelude::*;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar-header">
                <a href="/" class="navbar-title">"MovieTickets"</a>
                <p class="navbar-subtitle">"Your Ticket to Entertainment"</p>
            </div>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/" class="nav-link">"Home"</a>
                </li>
                <li class="nav-item">
                    <a href="/movies" class="nav-link">"Movies"</a>
                </li>
                <li class="nav-item">
                    <a href="/booking" class="nav-link">"Book Tickets"</a>
                </li>
                <li class="nav-item">
                    <a href="/my-bookings" class="nav-link">"My Bookings"</a>
                </li>
            </ul>
        </nav>
    }
}
