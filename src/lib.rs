#![recursion_limit = "256"]

pub mod api;
pub mod app;
pub mod booking;
pub mod catalog;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod format;
pub mod history;
pub mod logging;
pub mod models;
pub mod nav;
pub mod notify;
pub mod observe;
pub mod pages;
pub mod tooltip;

#[cfg(test)]
pub(crate) mod test_support;

use leptos::prelude::*;
use tracing::info;

use crate::api::ApiClient;
use crate::app::App;
use crate::config::AppConfig;

/// Resolve configuration, install logging and mount the app.
pub fn run() {
    let config = match AppConfig::from_document() {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::error_1(&format!("movie-tickets: {}", e).into());
            return;
        }
    };

    logging::init(&config.log_filter);
    info!("Starting movie-tickets against {}", config.api_base);

    let api = ApiClient::new(config.api_base);
    leptos::mount::mount_to_body(move || view! { <App api=api.clone() /> });
}
