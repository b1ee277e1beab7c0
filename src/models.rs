use serde::{Deserialize, Serialize};

/// A movie as served by `GET /api/movies`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: u32,
    pub title: String,
    pub genre: String,
    #[serde(default)]
    pub description: String,
    pub duration: u32,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub certificate: String,
    pub rating: f64,
    pub price: f64,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub cast: Vec<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

impl Movie {
    /// Two-letter poster placeholder.
    pub fn initials(&self) -> String {
        self.title.chars().take(2).collect()
    }
}

/// A seat in the layout for one movie. Availability is decided by the server.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub id: u32,
    #[serde(default)]
    pub seat_number: Option<String>,
    pub available: bool,
}

/// A booking record created by the server.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub booking_id: String,
    pub movie_id: u32,
    pub seat_numbers: Vec<u32>,
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: String,
    pub total_amount: f64,
    pub status: String,
    #[serde(default)]
    pub booking_date: String,
}

/// Body of `POST /api/bookings`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub movie_id: u32,
    pub seat_numbers: Vec<u32>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
}

/// Progress of a remote fetch backing part of a view.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed,
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed)
    }
}
