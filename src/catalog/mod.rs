//! Movie catalog: fetch once, then filter and sort locally.

pub mod filter;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{error, info};

pub use filter::{apply_filters, genre_options, CatalogFilter, SortOrder};

use crate::api::BookingApi;
use crate::models::Movie;
use crate::observe::Listener;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    #[default]
    Loading,
    Loaded {
        all: Vec<Movie>,
        visible: Vec<Movie>,
        filter: CatalogFilter,
    },
    LoadError,
}

impl CatalogState {
    pub fn visible(&self) -> &[Movie] {
        match self {
            CatalogState::Loaded { visible, .. } => visible,
            _ => &[],
        }
    }

    pub fn genres(&self) -> Vec<String> {
        match self {
            CatalogState::Loaded { all, .. } => genre_options(all),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    state: CatalogState,
    /// Last filter chosen, kept while the catalog is still loading.
    filter: CatalogFilter,
    active: bool,
}

/// Controller behind the movies page.
#[derive(Debug, Clone)]
pub struct CatalogView<A> {
    api: A,
    inner: Arc<Mutex<Inner>>,
    listener: Listener<CatalogState>,
}

impl<A: BookingApi> CatalogView<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            inner: Arc::new(Mutex::new(Inner::default())),
            listener: Listener::default(),
        }
    }

    /// Register the callback told about every state change.
    pub fn with_listener(mut self, f: impl Fn(&CatalogState) + Send + Sync + 'static) -> Self {
        self.listener = Listener::new(f);
        self
    }

    fn publish(&self) {
        self.listener.emit(&self.snapshot());
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Load the catalog. A failure leaves the view in `LoadError`; there is no retry.
    pub async fn activate(&self) {
        {
            let mut inner = self.lock();
            inner.active = true;
            inner.state = CatalogState::Loading;
        }
        self.publish();

        let result = self.api.list_movies().await;

        {
            let mut inner = self.lock();
            if !inner.active {
                return;
            }
            inner.state = match result {
                Ok(movies) => {
                    info!("Loaded {} movies", movies.len());
                    CatalogState::Loaded {
                        visible: apply_filters(&movies, &inner.filter),
                        all: movies,
                        filter: inner.filter.clone(),
                    }
                }
                Err(e) => {
                    error!("Error loading movies: {}", e);
                    CatalogState::LoadError
                }
            };
        }
        self.publish();
    }

    /// Re-derive the visible list from the cached catalog. Before the catalog
    /// has loaded the filter is only remembered and applied once it lands.
    pub fn apply_filters(&self, new_filter: CatalogFilter) {
        let changed = {
            let mut inner = self.lock();
            inner.filter = new_filter.clone();
            match &mut inner.state {
                CatalogState::Loaded {
                    all,
                    visible,
                    filter,
                } => {
                    *visible = apply_filters(all, &new_filter);
                    *filter = new_filter;
                    true
                }
                _ => false,
            }
        };
        if changed {
            self.publish();
        }
    }

    pub fn snapshot(&self) -> CatalogState {
        self.lock().state.clone()
    }

    /// Drop interest in any fetch still in flight.
    pub fn teardown(&self) {
        self.lock().active = false;
    }
}
