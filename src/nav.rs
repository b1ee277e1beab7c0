//! Query-string handling and the navigation contract between pages.

use std::collections::HashMap;

/// Query key carrying a movie id from the catalog to the booking wizard.
pub const MOVIE_PARAM: &str = "movie";

pub const BOOKING_PATH: &str = "/booking";

/// Parse a query string (with or without the leading `?`). Later duplicates win.
pub fn parse_query(search: &str) -> HashMap<String, String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    let mut params = HashMap::new();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        params.insert(key.into_owned(), value.into_owned());
    }
    params
}

/// Parameters of the current page's URL.
pub fn get_url_params() -> HashMap<String, String> {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    parse_query(&search)
}

/// Typed navigation parameters accepted by the booking page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavParams {
    pub movie_id: Option<u32>,
}

impl NavParams {
    /// An absent or non-numeric movie id means no preselection.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let movie_id = params
            .get(MOVIE_PARAM)
            .and_then(|raw| raw.trim().parse::<u32>().ok());
        Self { movie_id }
    }

    /// Read from the browser location. The router has already pushed the new
    /// URL by the time a routed page is built.
    pub fn current() -> Self {
        Self::from_params(&get_url_params())
    }

    pub fn booking_href(movie_id: u32) -> String {
        format!("{}?{}={}", BOOKING_PATH, MOVIE_PARAM, movie_id)
    }
}
