//! Booking history: list past bookings and print tickets.

pub mod ticket;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{error, info, warn};

pub use ticket::{render_ticket, TicketDocument};

use crate::api::BookingApi;
use crate::format::{format_currency, format_date_time, seat_labels, status_class};
use crate::models::{Booking, Movie};
use crate::notify::Notify;
use crate::observe::Listener;

pub const UNKNOWN_MOVIE: &str = "Unknown Movie";
pub const TICKET_FAILED_MESSAGE: &str = "Failed to load ticket. Please try again.";

/// One booking, joined with its movie title and formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingCard {
    pub booking_id: String,
    pub status: String,
    pub status_class: String,
    pub movie_title: String,
    pub seats: String,
    pub customer_name: String,
    pub booked_at: String,
    pub total: String,
}

impl BookingCard {
    pub fn new(booking: &Booking, movies: &[Movie]) -> Self {
        let movie_title = movies
            .iter()
            .find(|m| m.id == booking.movie_id)
            .map(|m| m.title.clone())
            .unwrap_or_else(|| UNKNOWN_MOVIE.to_string());
        Self {
            booking_id: booking.booking_id.clone(),
            status: booking.status.clone(),
            status_class: status_class(&booking.status),
            movie_title,
            seats: seat_labels(&booking.seat_numbers),
            customer_name: booking.customer_name.clone(),
            booked_at: format_date_time(&booking.booking_date),
            total: format_currency(booking.total_amount),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum HistoryState {
    #[default]
    Loading,
    Empty,
    Loaded(Vec<BookingCard>),
    Failed,
}

impl HistoryState {
    /// The list container shows cards, the loading text or the error.
    pub fn list_visible(&self) -> bool {
        !self.empty_visible()
    }

    pub fn empty_visible(&self) -> bool {
        matches!(self, HistoryState::Empty)
    }

    pub fn cards(&self) -> &[BookingCard] {
        match self {
            HistoryState::Loaded(cards) => cards,
            _ => &[],
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    state: HistoryState,
    active: bool,
}

/// Controller behind the "my bookings" page.
#[derive(Debug, Clone)]
pub struct BookingHistory<A, N> {
    api: A,
    notifier: N,
    inner: Arc<Mutex<Inner>>,
    listener: Listener<HistoryState>,
}

impl<A: BookingApi, N: Notify> BookingHistory<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            inner: Arc::new(Mutex::new(Inner::default())),
            listener: Listener::default(),
        }
    }

    pub fn with_listener(mut self, f: impl Fn(&HistoryState) + Send + Sync + 'static) -> Self {
        self.listener = Listener::new(f);
        self
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> HistoryState {
        self.lock().state.clone()
    }

    pub fn teardown(&self) {
        self.lock().active = false;
    }

    pub async fn activate(&self) {
        self.lock().active = true;
        self.refresh().await;
    }

    /// Fetch bookings, then the catalog for titles. A catalog failure still
    /// renders the list, with every title unknown.
    pub async fn refresh(&self) {
        self.apply(HistoryState::Loading);

        let bookings = match self.api.list_bookings().await {
            Ok(bookings) => bookings,
            Err(e) => {
                error!("Error loading bookings: {}", e);
                self.apply(HistoryState::Failed);
                return;
            }
        };

        if bookings.is_empty() {
            self.apply(HistoryState::Empty);
            return;
        }

        let movies = match self.api.list_movies().await {
            Ok(movies) => movies,
            Err(e) => {
                error!("Error loading movies: {}", e);
                Vec::new()
            }
        };

        info!("Loaded {} bookings", bookings.len());
        let cards = bookings
            .iter()
            .map(|b| BookingCard::new(b, &movies))
            .collect();
        self.apply(HistoryState::Loaded(cards));
    }

    fn apply(&self, state: HistoryState) {
        let applied = {
            let mut inner = self.lock();
            if inner.active {
                inner.state = state;
            }
            inner.active
        };
        if applied {
            self.listener.emit(&self.snapshot());
        }
    }

    /// Re-fetch the booking and its movie and render a printable ticket.
    /// Failures are reported through the notifier and yield `None`.
    pub async fn print_ticket(&self, booking_id: &str) -> Option<TicketDocument> {
        let booking = match self.api.list_bookings().await {
            Ok(bookings) => bookings.into_iter().find(|b| b.booking_id == booking_id),
            Err(e) => {
                error!("Error loading bookings for ticket {}: {}", booking_id, e);
                self.notifier.error(TICKET_FAILED_MESSAGE);
                return None;
            }
        };

        let Some(booking) = booking else {
            warn!("Booking {} not found", booking_id);
            self.notifier.error(TICKET_FAILED_MESSAGE);
            return None;
        };

        let movies = match self.api.list_movies().await {
            Ok(movies) => movies,
            Err(e) => {
                error!("Error loading movies for ticket {}: {}", booking_id, e);
                self.notifier.error(TICKET_FAILED_MESSAGE);
                return None;
            }
        };

        let movie = movies.iter().find(|m| m.id == booking.movie_id);
        Some(render_ticket(&booking, movie))
    }
}
