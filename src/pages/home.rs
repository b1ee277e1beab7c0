use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home-page">
            <h2>"Welcome to MovieTickets"</h2>
            <p class="page-description">
                "Browse what's showing, pick your seats and keep track of your tickets."
            </p>

            <div class="card-grid">
                <div class="card">
                    <h3>"Browse Movies"</h3>
                    <p>"See everything now showing, filtered by genre and sorted your way"</p>
                    <a href="/movies" class="btn btn-primary">"View Movies"</a>
                </div>
                <div class="card">
                    <h3>"Book Tickets"</h3>
                    <p>"Choose a movie and the seats you want in a few steps"</p>
                    <a href="/booking" class="btn btn-primary">"Book Now"</a>
                </div>
                <div class="card">
                    <h3>"My Bookings"</h3>
                    <p>"Review past bookings and print your tickets"</p>
                    <a href="/my-bookings" class="btn btn-primary">"View Bookings"</a>
                </div>
            </div>

            <div class="how-it-works">
                <h3>"How It Works"</h3>
                <div class="steps">
                    <div class="step">
                        <span class="step-number">"1"</span>
                        <div class="step-content">
                            <strong>"Pick a movie"</strong>
                            <p>"Find something you like in the catalog"</p>
                        </div>
                    </div>
                    <div class="step">
                        <span class="step-number">"2"</span>
                        <div class="step-content">
                            <strong>"Choose seats"</strong>
                            <p>"Select any available seats on the map"</p>
                        </div>
                    </div>
                    <div class="step">
                        <span class="step-number">"3"</span>
                        <div class="step-content">
                            <strong>"Confirm"</strong>
                            <p>"Enter your details and get your booking confirmation"</p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
