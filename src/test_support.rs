//! In-memory fakes for controller tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::api::BookingApi;
use crate::error::ApiError;
use crate::models::{Booking, BookingRequest, Movie, Seat};
use crate::notify::{NotificationKind, Notify};

pub fn movie(id: u32, title: &str, genre: &str, rating: f64, price: f64) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        genre: genre.to_string(),
        description: format!("About {}", title),
        duration: 120,
        language: "English".to_string(),
        certificate: "PG-13".to_string(),
        rating,
        price,
        director: None,
        cast: Vec::new(),
        release_date: None,
    }
}

pub fn sample_movies() -> Vec<Movie> {
    vec![
        movie(1, "Avengers: Endgame", "Action", 4.8, 12.99),
        movie(2, "The Batman", "Action/Crime", 4.5, 11.99),
        movie(3, "Dune: Part Two", "Sci-Fi/Adventure", 4.7, 13.99),
        movie(4, "Elemental", "Animation/Comedy", 4.3, 9.99),
        movie(5, "Mission: Impossible", "Action/Thriller", 4.6, 12.49),
    ]
}

pub fn seats(range: std::ops::RangeInclusive<u32>, booked: &[u32]) -> Vec<Seat> {
    range
        .map(|id| Seat {
            id,
            seat_number: Some(format!("A{}", id)),
            available: !booked.contains(&id),
        })
        .collect()
}

pub fn booking(id: &str, movie_id: u32, seats: &[u32], total: f64, status: &str) -> Booking {
    Booking {
        booking_id: id.to_string(),
        movie_id,
        seat_numbers: seats.to_vec(),
        customer_name: "Bob".to_string(),
        customer_email: "bob@example.com".to_string(),
        customer_phone: "+14155551234".to_string(),
        total_amount: total,
        status: status.to_string(),
        booking_date: "2026-10-19T10:15:30Z".to_string(),
    }
}

#[derive(Debug, Default)]
struct BackendState {
    movies: Vec<Movie>,
    seats: HashMap<u32, Vec<Seat>>,
    bookings: Vec<Booking>,
    created: Option<Booking>,
    failing: Vec<&'static str>,
    calls: Vec<String>,
    requests: Vec<BookingRequest>,
}

/// Scriptable [`BookingApi`] that records every call.
#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<BackendState>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movies(self, movies: Vec<Movie>) -> Self {
        self.state.lock().unwrap().movies = movies;
        self
    }

    pub fn with_seats(self, movie_id: u32, seats: Vec<Seat>) -> Self {
        self.state.lock().unwrap().seats.insert(movie_id, seats);
        self
    }

    pub fn with_bookings(self, bookings: Vec<Booking>) -> Self {
        self.state.lock().unwrap().bookings = bookings;
        self
    }

    /// Record returned by the next `create_booking`.
    pub fn with_created(self, booking: Booking) -> Self {
        self.state.lock().unwrap().created = Some(booking);
        self
    }

    /// Make the named operation (`movies`, `seats`, `bookings`, `create`) fail.
    pub fn failing(self, operation: &'static str) -> Self {
        self.state.lock().unwrap().failing.push(operation);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn count_calls(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    pub fn requests(&self) -> Vec<BookingRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    fn record(&self, call: String, operation: &str) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if state.failing.iter().any(|f| *f == operation) {
            return Err(ApiError::Status {
                status: 500,
                path: operation.to_string(),
            });
        }
        Ok(())
    }
}

impl BookingApi for FakeBackend {
    async fn list_movies(&self) -> Result<Vec<Movie>, ApiError> {
        self.record("GET movies".to_string(), "movies")?;
        Ok(self.state.lock().unwrap().movies.clone())
    }

    async fn list_seats(&self, movie_id: u32) -> Result<Vec<Seat>, ApiError> {
        self.record(format!("GET seats/{}", movie_id), "seats")?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .seats
            .get(&movie_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.record("GET bookings".to_string(), "bookings")?;
        Ok(self.state.lock().unwrap().bookings.clone())
    }

    async fn create_booking(&self, request: &BookingRequest) -> Result<Booking, ApiError> {
        self.record("POST bookings".to_string(), "create")?;
        let mut state = self.state.lock().unwrap();
        state.requests.push(request.clone());
        state
            .created
            .clone()
            .ok_or_else(|| ApiError::Network("no scripted booking".to_string()))
    }
}

/// [`Notify`] host that keeps every message.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<(NotificationKind, String)>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(NotificationKind, String)> {
        self.messages.lock().unwrap().clone()
    }

    pub fn count(&self, kind: NotificationKind) -> usize {
        self.messages().iter().filter(|(k, _)| *k == kind).count()
    }

    pub fn last(&self) -> Option<(NotificationKind, String)> {
        self.messages().last().cloned()
    }
}

impl Notify for RecordingNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        self.messages
            .lock()
            .unwrap()
            .push((kind, message.to_string()));
    }
}
