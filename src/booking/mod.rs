//! The seat-booking wizard: movie, seats, contact details, confirmation.

pub mod selection;
pub mod validation;
pub mod wizard;

pub use selection::SeatSelection;
pub use validation::{is_valid_email, is_valid_phone, validate_contact, ContactDetails};
pub use wizard::{BookingWizard, ReviewSummary, WizardState, WizardStep, BOOKING_FAILED_MESSAGE};
