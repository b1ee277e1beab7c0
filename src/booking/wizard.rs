use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, error, info, warn};

use super::selection::SeatSelection;
use super::validation::{validate_contact, ContactDetails};
use crate::api::BookingApi;
use crate::error::BookingError;
use crate::models::{Booking, BookingRequest, LoadState, Movie, Seat};
use crate::nav::NavParams;
use crate::notify::Notify;
use crate::observe::Listener;

pub const BOOKING_FAILED_MESSAGE: &str = "Booking failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum WizardStep {
    #[default]
    Movie,
    Seats,
    Review,
    Confirmation,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Movie,
        WizardStep::Seats,
        WizardStep::Review,
        WizardStep::Confirmation,
    ];

    pub fn number(self) -> u8 {
        match self {
            WizardStep::Movie => 1,
            WizardStep::Seats => 2,
            WizardStep::Review => 3,
            WizardStep::Confirmation => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Movie => "Select Movie",
            WizardStep::Seats => "Select Seats",
            WizardStep::Review => "Your Details",
            WizardStep::Confirmation => "Confirmation",
        }
    }
}

/// Read-only summary shown on the review step.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSummary {
    pub movie_title: String,
    pub seat_labels: String,
    pub seat_count: usize,
    pub unit_price: f64,
    pub total: f64,
}

/// Everything the booking page renders. Pure data; transitions never do I/O.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WizardState {
    pub step: WizardStep,
    pub movies: LoadState<Vec<Movie>>,
    pub movie: Option<Movie>,
    pub seats: LoadState<Vec<Seat>>,
    pub selection: SeatSelection,
    pub submitting: bool,
    pub confirmation: Option<Booking>,
}

impl WizardState {
    pub fn unit_price(&self) -> f64 {
        self.movie.as_ref().map(|m| m.price).unwrap_or(0.0)
    }

    pub fn running_total(&self) -> f64 {
        self.selection.total(self.unit_price())
    }

    /// Make `movie_id` the active movie. Any seat selection is dropped.
    pub fn select_movie(&mut self, movie_id: u32) -> Result<&Movie, BookingError> {
        let movie = self
            .movies
            .ready()
            .and_then(|movies| movies.iter().find(|m| m.id == movie_id))
            .cloned()
            .ok_or(BookingError::UnknownMovie(movie_id))?;
        self.selection.clear();
        Ok(self.movie.insert(movie))
    }

    /// Flip an available seat. Booked or unknown seats are inert and return `None`.
    pub fn toggle_seat(&mut self, seat_id: u32) -> Option<bool> {
        let available = self
            .seats
            .ready()
            .and_then(|seats| seats.iter().find(|s| s.id == seat_id))
            .is_some_and(|s| s.available);
        if !available {
            return None;
        }
        Some(self.selection.toggle(seat_id))
    }

    pub fn review(&self) -> Option<ReviewSummary> {
        let movie = self.movie.as_ref()?;
        if self.selection.is_empty() {
            return None;
        }
        Some(ReviewSummary {
            movie_title: movie.title.clone(),
            seat_labels: self.selection.labels(),
            seat_count: self.selection.len(),
            unit_price: movie.price,
            total: self.running_total(),
        })
    }

    /// Build the POST body, enforcing the movie-and-seats invariant.
    pub fn booking_request(&self, contact: &ContactDetails) -> Result<BookingRequest, BookingError> {
        let movie = self.movie.as_ref().ok_or(BookingError::IncompleteSelection)?;
        if self.selection.is_empty() {
            return Err(BookingError::IncompleteSelection);
        }
        Ok(BookingRequest {
            movie_id: movie.id,
            seat_numbers: self.selection.ids().to_vec(),
            customer_name: contact.name.clone(),
            customer_email: contact.email.clone(),
            customer_phone: contact.phone.clone(),
        })
    }
}

#[derive(Debug, Default)]
struct Inner {
    state: WizardState,
    active: bool,
}

/// Controller for the four-step booking flow.
///
/// Cheap to clone; clones share state. The lock is only held between awaits,
/// never across one.
#[derive(Debug, Clone)]
pub struct BookingWizard<A, N> {
    api: A,
    notifier: N,
    inner: Arc<Mutex<Inner>>,
    listener: Listener<WizardState>,
}

impl<A: BookingApi, N: Notify> BookingWizard<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            inner: Arc::new(Mutex::new(Inner::default())),
            listener: Listener::default(),
        }
    }

    /// Register the callback the page uses to mirror state into its signals.
    pub fn with_listener(mut self, f: impl Fn(&WizardState) + Send + Sync + 'static) -> Self {
        self.listener = Listener::new(f);
        self
    }

    // Never call with the lock held.
    fn publish(&self) {
        self.listener.emit(&self.snapshot());
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> WizardState {
        self.lock().state.clone()
    }

    pub fn teardown(&self) {
        self.lock().active = false;
    }

    /// Load the movie list and preselect the movie named in `nav`, if any.
    pub async fn activate(&self, nav: NavParams) {
        {
            let mut inner = self.lock();
            inner.active = true;
            inner.state = WizardState {
                movies: LoadState::Loading,
                ..WizardState::default()
            };
        }
        self.publish();

        let result = self.api.list_movies().await;

        {
            let mut inner = self.lock();
            if !inner.active {
                return;
            }
            inner.state.movies = match result {
                Ok(movies) => {
                    info!("Loaded {} movies for booking", movies.len());
                    LoadState::Ready(movies)
                }
                Err(e) => {
                    error!("Error loading movies: {}", e);
                    LoadState::Failed
                }
            };
        }
        self.publish();

        if let Some(movie_id) = nav.movie_id {
            if self.lock().state.movies.ready().is_some() {
                self.select_movie(movie_id);
            }
        }
    }

    /// Returns whether the movie is now active.
    pub fn select_movie(&self, movie_id: u32) -> bool {
        let selected = {
            let mut inner = self.lock();
            if inner.state.step != WizardStep::Movie {
                return false;
            }
            inner.state.select_movie(movie_id).map(|m| m.title.clone())
        };
        match selected {
            Ok(title) => {
                self.publish();
                self.notifier.success(&format!("{} selected!", title));
                true
            }
            Err(e) => {
                warn!("{}", e);
                false
            }
        }
    }

    /// Move forward one step if the current step's guard passes.
    pub async fn next_step(&self) {
        let step = self.lock().state.step;
        match step {
            WizardStep::Movie => {
                if self.lock().state.movie.is_none() {
                    self.notifier.error(&BookingError::NoMovieSelected.to_string());
                    return;
                }
                self.enter_seats().await;
            }
            WizardStep::Seats => {
                let mut inner = self.lock();
                if inner.state.selection.is_empty() {
                    drop(inner);
                    self.notifier.error(&BookingError::NoSeatsSelected.to_string());
                    return;
                }
                inner.state.step = WizardStep::Review;
                drop(inner);
                self.publish();
            }
            WizardStep::Review | WizardStep::Confirmation => {}
        }
    }

    /// Step back. Returning to the seat map reloads it and clears the selection.
    pub async fn previous_step(&self) {
        let step = self.lock().state.step;
        match step {
            WizardStep::Seats => {
                self.lock().state.step = WizardStep::Movie;
                self.publish();
            }
            WizardStep::Review => {
                if self.lock().state.submitting {
                    return;
                }
                self.enter_seats().await;
            }
            WizardStep::Movie | WizardStep::Confirmation => {}
        }
    }

    async fn enter_seats(&self) {
        let movie_id = {
            let mut inner = self.lock();
            let Some(movie_id) = inner.state.movie.as_ref().map(|m| m.id) else {
                return;
            };
            inner.state.step = WizardStep::Seats;
            inner.state.selection.clear();
            inner.state.seats = LoadState::Loading;
            movie_id
        };
        self.publish();

        let result = self.api.list_seats(movie_id).await;

        {
            let mut inner = self.lock();
            if !inner.active || inner.state.movie.as_ref().map(|m| m.id) != Some(movie_id) {
                return;
            }
            inner.state.seats = match result {
                Ok(seats) => LoadState::Ready(seats),
                Err(e) => {
                    error!("Error loading seats for movie {}: {}", movie_id, e);
                    LoadState::Failed
                }
            };
        }
        self.publish();
    }

    /// Returns whether the seat is selected afterwards; `None` if the click was ignored.
    pub fn toggle_seat(&self, seat_id: u32) -> Option<bool> {
        let result = {
            let mut inner = self.lock();
            if inner.state.step != WizardStep::Seats {
                return None;
            }
            let result = inner.state.toggle_seat(seat_id)?;
            debug!(
                "Seat {} toggled: {} selected, total {:.2}",
                seat_id,
                inner.state.selection.len(),
                inner.state.running_total()
            );
            result
        };
        self.publish();
        Some(result)
    }

    /// Validate locally, then POST the booking. Every failure leaves the wizard on the review step.
    pub async fn submit(&self, contact: &ContactDetails) {
        let request = {
            let mut inner = self.lock();
            if inner.state.step != WizardStep::Review || inner.state.submitting {
                return;
            }

            let contact = match validate_contact(contact) {
                Ok(contact) => contact,
                Err(e) => {
                    drop(inner);
                    self.notifier.error(&e.to_string());
                    return;
                }
            };

            let built = inner.state.booking_request(&contact);
            match built {
                Ok(request) => {
                    inner.state.submitting = true;
                    request
                }
                Err(e) => {
                    drop(inner);
                    self.notifier.error(&e.to_string());
                    self.enter_seats().await;
                    return;
                }
            }
        };
        self.publish();

        info!(
            "Submitting booking for movie {} ({} seats)",
            request.movie_id,
            request.seat_numbers.len()
        );
        let result = self.api.create_booking(&request).await;

        let failed = {
            let mut inner = self.lock();
            if !inner.active {
                return;
            }
            inner.state.submitting = false;
            match result {
                Ok(booking) => {
                    info!("Booking {} {}", booking.booking_id, booking.status);
                    inner.state.confirmation = Some(booking);
                    inner.state.step = WizardStep::Confirmation;
                    false
                }
                Err(e) => {
                    error!("Booking error: {}", e);
                    true
                }
            }
        };
        self.publish();

        if failed {
            self.notifier.error(BOOKING_FAILED_MESSAGE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationKind;
    use crate::test_support::{booking, movie, sample_movies, seats, FakeBackend, RecordingNotifier};

    fn contact() -> ContactDetails {
        ContactDetails::new("Bob", "bob@example.com", "+14155551234")
    }

    fn backend() -> FakeBackend {
        FakeBackend::new()
            .with_movies(vec![movie(7, "Dune", "Sci-Fi", 4.7, 12.5), movie(8, "Up", "Animation", 4.1, 9.0)])
            .with_seats(7, seats(1..=10, &[4]))
    }

    async fn wizard_at_review(
        api: FakeBackend,
        notifier: RecordingNotifier,
    ) -> BookingWizard<FakeBackend, RecordingNotifier> {
        let wizard = BookingWizard::new(api, notifier);
        wizard.activate(NavParams { movie_id: Some(7) }).await;
        wizard.next_step().await;
        wizard.toggle_seat(3);
        wizard.toggle_seat(5);
        wizard.next_step().await;
        assert_eq!(wizard.snapshot().step, WizardStep::Review);
        wizard
    }

    #[tokio::test]
    async fn test_activate_preselects_movie_from_nav() {
        let notifier = RecordingNotifier::new();
        let wizard = BookingWizard::new(backend(), notifier.clone());
        wizard.activate(NavParams { movie_id: Some(7) }).await;

        let state = wizard.snapshot();
        assert_eq!(state.movie.as_ref().map(|m| m.id), Some(7));
        assert_eq!(state.unit_price(), 12.5);
        assert_eq!(
            notifier.last(),
            Some((NotificationKind::Success, "Dune selected!".to_string()))
        );
    }

    #[tokio::test]
    async fn test_activate_ignores_unknown_nav_movie() {
        let notifier = RecordingNotifier::new();
        let wizard = BookingWizard::new(backend(), notifier.clone());
        wizard.activate(NavParams { movie_id: Some(99) }).await;
        assert!(wizard.snapshot().movie.is_none());
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_activate_failure_shows_inline_error() {
        let notifier = RecordingNotifier::new();
        let wizard = BookingWizard::new(FakeBackend::new().failing("movies"), notifier.clone());
        wizard.activate(NavParams::default()).await;
        assert!(wizard.snapshot().movies.is_failed());
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_next_without_movie_stays_with_one_error() {
        let notifier = RecordingNotifier::new();
        let api = backend();
        let wizard = BookingWizard::new(api.clone(), notifier.clone());
        wizard.activate(NavParams::default()).await;

        wizard.next_step().await;

        assert_eq!(wizard.snapshot().step, WizardStep::Movie);
        assert_eq!(notifier.messages().len(), 1);
        assert_eq!(
            notifier.last(),
            Some((NotificationKind::Error, "Please select a movie first".to_string()))
        );
        assert_eq!(api.count_calls("GET seats"), 0);
    }

    #[tokio::test]
    async fn test_selecting_movie_clears_seats() {
        let wizard = BookingWizard::new(backend(), RecordingNotifier::new());
        wizard.activate(NavParams { movie_id: Some(7) }).await;
        wizard.next_step().await;
        wizard.toggle_seat(1);
        wizard.previous_step().await;
        assert_eq!(wizard.snapshot().step, WizardStep::Movie);

        assert!(wizard.select_movie(8));
        let state = wizard.snapshot();
        assert!(state.selection.is_empty());
        assert_eq!(state.unit_price(), 9.0);
    }

    #[tokio::test]
    async fn test_seat_toggles_update_count_and_total() {
        let wizard = BookingWizard::new(backend(), RecordingNotifier::new());
        wizard.activate(NavParams { movie_id: Some(7) }).await;
        wizard.next_step().await;

        let state = wizard.snapshot();
        assert_eq!(state.step, WizardStep::Seats);
        assert_eq!(state.seats.ready().map(Vec::len), Some(10));

        assert_eq!(wizard.toggle_seat(3), Some(true));
        assert_eq!(wizard.snapshot().running_total(), 12.5);
        assert_eq!(wizard.toggle_seat(5), Some(true));
        assert_eq!(wizard.snapshot().selection.len(), 2);
        assert_eq!(wizard.snapshot().running_total(), 25.0);
        assert_eq!(wizard.toggle_seat(3), Some(false));
        assert_eq!(wizard.snapshot().running_total(), 12.5);
    }

    #[tokio::test]
    async fn test_booked_and_unknown_seats_are_inert() {
        let wizard = BookingWizard::new(backend(), RecordingNotifier::new());
        wizard.activate(NavParams { movie_id: Some(7) }).await;
        wizard.next_step().await;

        assert_eq!(wizard.toggle_seat(4), None);
        assert_eq!(wizard.toggle_seat(42), None);
        assert!(wizard.snapshot().selection.is_empty());
    }

    #[tokio::test]
    async fn test_next_without_seats_stays_on_seats() {
        let notifier = RecordingNotifier::new();
        let wizard = BookingWizard::new(backend(), notifier.clone());
        wizard.activate(NavParams { movie_id: Some(7) }).await;
        wizard.next_step().await;
        wizard.next_step().await;

        assert_eq!(wizard.snapshot().step, WizardStep::Seats);
        assert_eq!(
            notifier.last(),
            Some((NotificationKind::Error, "Please select at least one seat".to_string()))
        );
    }

    #[tokio::test]
    async fn test_seat_load_failure_is_inline() {
        let api = backend().failing("seats");
        let wizard = BookingWizard::new(api, RecordingNotifier::new());
        wizard.activate(NavParams { movie_id: Some(7) }).await;
        wizard.next_step().await;
        let state = wizard.snapshot();
        assert_eq!(state.step, WizardStep::Seats);
        assert!(state.seats.is_failed());
        assert_eq!(wizard.toggle_seat(1), None);
    }

    #[tokio::test]
    async fn test_review_summary_is_local() {
        let api = backend();
        let wizard = wizard_at_review(api.clone(), RecordingNotifier::new()).await;
        let calls_before = api.calls().len();

        let review = wizard.snapshot().review().expect("summary");
        assert_eq!(review.movie_title, "Dune");
        assert_eq!(review.seat_labels, "A3, A5");
        assert_eq!(review.seat_count, 2);
        assert_eq!(review.unit_price, 12.5);
        assert_eq!(review.total, 25.0);
        assert_eq!(api.calls().len(), calls_before);
    }

    #[tokio::test]
    async fn test_submit_renders_server_record() {
        let created = booking("BK1000", 7, &[3, 5], 25.0, "CONFIRMED");
        let api = backend().with_created(created.clone());
        let notifier = RecordingNotifier::new();
        let wizard = wizard_at_review(api.clone(), notifier.clone()).await;

        wizard.submit(&ContactDetails::new(" Bob ", "bob@example.com", "+14155551234")).await;

        let state = wizard.snapshot();
        assert_eq!(state.step, WizardStep::Confirmation);
        assert!(!state.submitting);
        let confirmation = state.confirmation.expect("confirmation");
        assert_eq!(confirmation.total_amount, 25.0);
        assert_eq!(confirmation.status, "CONFIRMED");

        let requests = api.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].movie_id, 7);
        assert_eq!(requests[0].seat_numbers, vec![3, 5]);
        assert_eq!(requests[0].customer_name, "Bob");
        assert_eq!(notifier.count(NotificationKind::Error), 0);
    }

    #[tokio::test]
    async fn test_confirmation_trusts_server_total() {
        let created = booking("BK1001", 7, &[3, 5], 22.5, "PENDING");
        let api = backend().with_created(created);
        let wizard = wizard_at_review(api, RecordingNotifier::new()).await;

        wizard.submit(&contact()).await;

        let state = wizard.snapshot();
        assert_eq!(state.running_total(), 25.0);
        let confirmation = state.confirmation.expect("confirmation");
        assert_eq!(confirmation.total_amount, 22.5);
        assert_eq!(confirmation.status, "PENDING");
    }

    #[tokio::test]
    async fn test_invalid_contact_never_hits_network() {
        let api = backend().with_created(booking("BK1", 7, &[3], 12.5, "CONFIRMED"));
        let notifier = RecordingNotifier::new();
        let wizard = wizard_at_review(api.clone(), notifier.clone()).await;

        wizard.submit(&ContactDetails::new("Bob", "bob@", "+14155551234")).await;
        assert_eq!(
            notifier.last(),
            Some((NotificationKind::Error, "Please enter a valid email address".to_string()))
        );

        wizard.submit(&ContactDetails::new("Bob", "bob@example.com", "abc")).await;
        assert_eq!(
            notifier.last(),
            Some((NotificationKind::Error, "Please enter a valid phone number".to_string()))
        );

        wizard.submit(&ContactDetails::new("", "bob@example.com", "+1415")).await;
        assert_eq!(
            notifier.last(),
            Some((NotificationKind::Error, "Please fill all required fields".to_string()))
        );

        assert_eq!(api.count_calls("POST"), 0);
        assert_eq!(wizard.snapshot().step, WizardStep::Review);
    }

    #[tokio::test]
    async fn test_server_failure_stays_on_review() {
        let api = backend().failing("create");
        let notifier = RecordingNotifier::new();
        let wizard = wizard_at_review(api.clone(), notifier.clone()).await;

        wizard.submit(&contact()).await;

        let state = wizard.snapshot();
        assert_eq!(state.step, WizardStep::Review);
        assert!(!state.submitting);
        assert_eq!(state.selection.ids(), &[3, 5]);
        assert_eq!(
            notifier.last(),
            Some((NotificationKind::Error, BOOKING_FAILED_MESSAGE.to_string()))
        );

        // The user may retry.
        wizard.submit(&contact()).await;
        assert_eq!(api.count_calls("POST"), 2);
    }

    #[tokio::test]
    async fn test_back_from_review_reloads_seats() {
        let api = backend();
        let wizard = wizard_at_review(api.clone(), RecordingNotifier::new()).await;
        wizard.previous_step().await;

        let state = wizard.snapshot();
        assert_eq!(state.step, WizardStep::Seats);
        assert!(state.selection.is_empty());
        assert_eq!(api.count_calls("GET seats/7"), 2);
    }

    #[tokio::test]
    async fn test_confirmation_is_terminal() {
        let api = backend().with_created(booking("BK1000", 7, &[3, 5], 25.0, "CONFIRMED"));
        let wizard = wizard_at_review(api, RecordingNotifier::new()).await;
        wizard.submit(&contact()).await;

        wizard.previous_step().await;
        wizard.next_step().await;
        assert!(!wizard.select_movie(8));
        assert_eq!(wizard.snapshot().step, WizardStep::Confirmation);
    }

    #[tokio::test]
    async fn test_teardown_discards_late_results() {
        let api = FakeBackend::new().with_movies(sample_movies());
        let wizard = BookingWizard::new(api, RecordingNotifier::new());
        wizard.activate(NavParams::default()).await;
        wizard.teardown();
        assert!(wizard.snapshot().movies.ready().is_some());
        wizard.select_movie(1);
        wizard.next_step().await;
        // Seat results arriving after teardown are dropped.
        assert!(wizard.snapshot().seats.is_loading());
    }

    #[tokio::test]
    async fn test_listener_sees_seats_loading() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let wizard = BookingWizard::new(backend(), RecordingNotifier::new()).with_listener(
            move |state: &WizardState| {
                sink.lock().unwrap().push((state.step, state.seats.is_loading()));
            },
        );
        wizard.activate(NavParams { movie_id: Some(7) }).await;
        seen.lock().unwrap().clear();

        wizard.next_step().await;

        assert_eq!(
            *seen.lock().unwrap(),
            vec![(WizardStep::Seats, true), (WizardStep::Seats, false)]
        );
    }

    #[test]
    fn test_booking_request_requires_selection() {
        let mut state = WizardState::default();
        assert_eq!(
            state.booking_request(&contact()),
            Err(BookingError::IncompleteSelection)
        );
        state.movie = Some(movie(1, "A", "Drama", 4.0, 10.0));
        assert_eq!(
            state.booking_request(&contact()),
            Err(BookingError::IncompleteSelection)
        );
    }

    #[test]
    fn test_step_numbers() {
        let numbers: Vec<u8> = WizardStep::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }
}
