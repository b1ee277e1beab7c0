//! Typed calls to the booking backend.

use serde::de::DeserializeOwned;
use tracing::{debug, error};
use url::Url;

use crate::error::ApiError;
use crate::models::{Booking, BookingRequest, Movie, Seat};

pub const MOVIES_PATH: &str = "api/movies";
pub const SEATS_PATH: &str = "api/seats";
pub const BOOKINGS_PATH: &str = "api/bookings";

/// The backend operations the views depend on.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single UI thread through `spawn_local`.
#[allow(async_fn_in_trait)]
pub trait BookingApi {
    async fn list_movies(&self) -> Result<Vec<Movie>, ApiError>;

    async fn list_seats(&self, movie_id: u32) -> Result<Vec<Seat>, ApiError>;

    async fn list_bookings(&self) -> Result<Vec<Booking>, ApiError>;

    async fn create_booking(&self, request: &BookingRequest) -> Result<Booking, ApiError>;
}

/// HTTP implementation of [`BookingApi`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// `base` is the location the `api/...` paths are resolved against.
    pub fn new(mut base: Url) -> Self {
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path)
            .map_err(|e| ApiError::Url(format!("{}: {}", path, e)))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(path, response).await
    }
}

async fn decode<T: DeserializeOwned>(path: &str, response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        error!("{} returned {}", path, status);
        return Err(ApiError::Status {
            status: status.as_u16(),
            path: path.to_string(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| {
        error!("Failed to decode {} response: {}", path, e);
        ApiError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        }
    })
}

impl BookingApi for ApiClient {
    async fn list_movies(&self) -> Result<Vec<Movie>, ApiError> {
        self.get_json(MOVIES_PATH).await
    }

    async fn list_seats(&self, movie_id: u32) -> Result<Vec<Seat>, ApiError> {
        self.get_json(&format!("{}/{}", SEATS_PATH, movie_id)).await
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get_json(BOOKINGS_PATH).await
    }

    async fn create_booking(&self, request: &BookingRequest) -> Result<Booking, ApiError> {
        let url = self.endpoint(BOOKINGS_PATH)?;
        debug!("POST {} for movie {}", url, request.movie_id);
        let response = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(BOOKINGS_PATH, response).await
    }
}
