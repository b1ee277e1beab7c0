use std::sync::LazyLock;

use regex::Regex;

use crate::error::BookingError;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("valid phone pattern"));

/// Contact fields typed into the review step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactDetails {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Formatting characters (spaces, dashes, parentheses) are ignored.
pub fn is_valid_phone(phone: &str) -> bool {
    let stripped: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    PHONE_REGEX.is_match(&stripped)
}

/// Check the contact fields in display order and return the trimmed values.
pub fn validate_contact(contact: &ContactDetails) -> Result<ContactDetails, BookingError> {
    let contact = contact.trimmed();
    if contact.name.is_empty() || contact.email.is_empty() || contact.phone.is_empty() {
        return Err(BookingError::MissingContactDetails);
    }
    if !is_valid_email(&contact.email) {
        return Err(BookingError::InvalidEmail);
    }
    if !is_valid_phone(&contact.phone) {
        return Err(BookingError::InvalidPhone);
    }
    Ok(contact)
}
