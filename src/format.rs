//! Display formatting shared by every page.
//!
//! Output follows en-US conventions. Timestamps are shown in the offset they
//! carry; no timezone conversion happens on the client.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Row letter printed in front of every seat id.
pub const SEAT_ROW_PREFIX: &str = "A";

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%b %d, %Y, %I:%M:%S %p",
    "%b %d, %Y %I:%M:%S %p",
];

/// Format an amount as USD, e.g. `$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = amount < 0.0 && fixed != "0.00";
    format!("{}${}.{}", if negative { "-" } else { "" }, grouped, cents)
}

/// Parse the timestamp shapes the backend is known to send.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim().replace('\u{202f}', " ");
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(&value) {
        return Some(dt.naive_local());
    }
    for fmt in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&value, fmt) {
            return Some(dt);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(millis) = value.parse::<i64>() {
        return DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc());
    }
    None
}

/// Long date, e.g. `Monday, October 19, 2026`. Unparseable input is returned verbatim.
pub fn format_date(value: &str) -> String {
    format_with(value, "%A, %B %-d, %Y")
}

/// Long date with time, e.g. `Monday, October 19, 2026 at 10:15 AM`.
pub fn format_date_time(value: &str) -> String {
    format_with(value, "%A, %B %-d, %Y at %I:%M %p")
}

/// Numeric date, e.g. `10/19/2026`.
pub fn format_short_date(value: &str) -> String {
    format_with(value, "%-m/%-d/%Y")
}

fn format_with(value: &str, pattern: &str) -> String {
    match parse_timestamp(value) {
        Some(dt) => dt.format(pattern).to_string(),
        None => value.to_string(),
    }
}

pub fn seat_label(id: u32) -> String {
    format!("{}{}", SEAT_ROW_PREFIX, id)
}

pub fn seat_labels(ids: &[u32]) -> String {
    ids.iter()
        .map(|id| seat_label(*id))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Style class for a booking status, e.g. `CONFIRMED` -> `status-confirmed`.
pub fn status_class(status: &str) -> String {
    let slug: String = status
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    format!("status-{}", slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_two_decimals() {
        assert_eq!(format_currency(25.0), "$25.00");
        assert_eq!(format_currency(12.5), "$12.50");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn test_currency_groups_thousands() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(999.99), "$999.99");
    }

    #[test]
    fn test_currency_negative() {
        assert_eq!(format_currency(-3.0), "-$3.00");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_format_date_iso() {
        assert_eq!(format_date("2026-10-19T10:15:30Z"), "Monday, October 19, 2026");
        assert_eq!(format_date("2024-03-01"), "Friday, March 1, 2024");
    }

    #[test]
    fn test_format_date_gson_default() {
        assert_eq!(format_date("Oct 19, 2026, 10:15:30 AM"), "Monday, October 19, 2026");
        assert_eq!(format_date("Oct 19, 2026 10:15:30 PM"), "Monday, October 19, 2026");
        assert_eq!(
            format_date_time("Oct 19, 2026, 9:05:00\u{202f}PM"),
            "Monday, October 19, 2026 at 09:05 PM"
        );
    }

    #[test]
    fn test_format_date_epoch_millis() {
        assert_eq!(format_short_date("1700000000000"), "11/14/2023");
    }

    #[test]
    fn test_format_date_keeps_offset_wall_time() {
        assert_eq!(
            format_date_time("2026-10-19T23:30:00-07:00"),
            "Monday, October 19, 2026 at 11:30 PM"
        );
    }

    #[test]
    fn test_format_date_unparseable_is_verbatim() {
        assert_eq!(format_date("soon"), "soon");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_seat_labels() {
        assert_eq!(seat_label(7), "A7");
        assert_eq!(seat_labels(&[3, 5]), "A3, A5");
        assert_eq!(seat_labels(&[]), "");
    }

    #[test]
    fn test_status_class() {
        assert_eq!(status_class("CONFIRMED"), "status-confirmed");
        assert_eq!(status_class("Pending Payment"), "status-pending-payment");
    }
}
