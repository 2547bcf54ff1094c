//! Birth date formatting
//!
//! Dates are typed and stored as `YYYY-MM-DD` and reordered for the
//! spreadsheet only when a request is built.

use chrono::NaiveDate;

use crate::models::RegistrationData;

/// Digits in a complete `YYYYMMDD` date
const DATE_DIGITS: usize = 8;

/// Message shown when the birth date is filled in but not a real date
pub const INVALID_BIRTH_DATE: &str = "Data de nascimento inválida (use AAAA-MM-DD)";

/// Shape typed text as a (possibly partial) `YYYY-MM-DD` date
///
/// Only the first eight digits are kept; the `-` separators are inserted
/// after the year and the month. Slashes, letters and spaces are dropped.
pub fn format_date_input(typed: &str) -> String {
    let mut formatted = String::with_capacity(DATE_DIGITS + 2);
    for (i, digit) in typed
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(DATE_DIGITS)
        .enumerate()
    {
        if i == 4 || i == 6 {
            formatted.push('-');
        }
        formatted.push(digit);
    }
    formatted
}

/// Check that `value` is exactly `YYYY-MM-DD` and names a calendar day
pub fn is_iso_date(value: &str) -> bool {
    let shaped = value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    shaped && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// Error for a birth date that is set but would be sent mangled
///
/// An empty birth date is left to step validation.
pub fn birth_date_error(data: &RegistrationData) -> Option<&'static str> {
    let birth_date = data.birth_date.trim();
    if birth_date.is_empty() || is_iso_date(birth_date) {
        None
    } else {
        Some(INVALID_BIRTH_DATE)
    }
}

/// Reorder an ISO `YYYY-MM-DD` date into `DD/MM/YYYY`
///
/// Returns an empty string for empty input or input that does not split into
/// at least three `-` separated parts. No calendar check is made.
pub fn convert_date(iso_date: &str) -> String {
    if iso_date.is_empty() {
        return String::new();
    }

    let parts: Vec<&str> = iso_date.split('-').collect();
    if parts.len() < 3 {
        return String::new();
    }

    let (year, month, day) = (parts[0], parts[1], parts[2]);
    format!("{}/{}/{}", day, month, year)
}
