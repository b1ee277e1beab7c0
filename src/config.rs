use url::Url;

use crate::error::{ConfigError, DomError};

/// `<meta>` tag overriding the backend location, relative to the page origin.
pub const API_BASE_META: &str = "movie-tickets:api-base";
/// `<meta>` tag holding the log filter directive.
pub const LOG_FILTER_META: &str = "movie-tickets:log";

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Application settings, resolved once at startup from the hosting page.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL every `api/...` endpoint is joined onto. Always ends with `/`.
    pub api_base: Url,
    pub log_filter: String,
}

impl AppConfig {
    pub fn resolve(
        origin: &str,
        api_base: Option<&str>,
        log_filter: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let origin =
            Url::parse(origin).map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))?;

        let mut api_base = match api_base.map(str::trim).filter(|s| !s.is_empty()) {
            Some(value) => origin
                .join(value)
                .map_err(|e| ConfigError::InvalidApiBase {
                    value: value.to_string(),
                    message: e.to_string(),
                })?,
            None => origin,
        };
        if !api_base.path().ends_with('/') {
            let path = format!("{}/", api_base.path());
            api_base.set_path(&path);
        }

        let log_filter = log_filter
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_LOG_FILTER)
            .to_string();

        Ok(Self {
            api_base,
            log_filter,
        })
    }

    /// Read settings from the current document's origin and `<meta>` tags.
    pub fn from_document() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        let origin = window.location().origin()?;

        let meta = |name: &str| -> Option<String> {
            document
                .query_selector(&format!("meta[name=\"{}\"]", name))
                .ok()
                .flatten()
                .and_then(|el| el.get_attribute("content"))
        };

        Self::resolve(
            &origin,
            meta(API_BASE_META).as_deref(),
            meta(LOG_FILTER_META).as_deref(),
        )
        .map_err(|e| DomError::Js(e.to_string()))
    }
}
