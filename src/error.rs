use thiserror::Error;

/// Failure talking to the booking backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("Server returned {status} for {path}")]
    Status { status: u16, path: String },

    #[error("Invalid response from {path}: {message}")]
    Decode { path: String, message: String },

    #[error("Invalid endpoint URL: {0}")]
    Url(String),
}

/// Local validation failure in the booking flow. The message is shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Please select a movie first")]
    NoMovieSelected,

    #[error("Please select at least one seat")]
    NoSeatsSelected,

    #[error("Please select seats first")]
    IncompleteSelection,

    #[error("Please fill all required fields")]
    MissingContactDetails,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a valid phone number")]
    InvalidPhone,

    #[error("Movie {0} is not in the catalog")]
    UnknownMovie(u32),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid page origin '{0}'")]
    InvalidOrigin(String),

    #[error("Invalid API base '{value}': {message}")]
    InvalidApiBase { value: String, message: String },
}

#[derive(Debug, Error)]
pub enum DomError {
    #[error("No browser window available")]
    NoWindow,

    #[error("No document available")]
    NoDocument,

    #[error("Pop-up window was blocked")]
    PopupBlocked,

    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        DomError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}
