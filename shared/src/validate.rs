//! Submit-gate validation rules
//!
//! Four checks, run synchronously in a fixed order, short-circuiting on
//! the first failure: required fields, phone format, date not in the
//! past, weekly closing day. The order is part of the product contract -
//! a draft with a bad phone AND an empty name reports the missing field.

use crate::error::ValidationError;
use crate::reservation::ReservationDraft;
use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

/// Phone numbers accept digits, spaces, `+`, `-`, `(`, `)`.
pub const PHONE_MIN_LEN: usize = 8;
pub const PHONE_MAX_LEN: usize = 20;

/// The restaurant's weekly closing day.
pub const CLOSED_WEEKDAY: Weekday = Weekday::Mon;

fn phone_char_ok(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')')
}

/// Phone format check: 8-20 characters from the allowed set.
pub fn phone_is_valid(phone: &str) -> bool {
    let len = phone.chars().count();
    (PHONE_MIN_LEN..=PHONE_MAX_LEN).contains(&len) && phone.chars().all(phone_char_ok)
}

/// Run the submit gate against a draft.
///
/// `today` is the local calendar date; the past-date rule compares whole
/// days (time-of-day is already stripped at this granularity). Returns
/// the parsed reservation date on success.
///
/// Empty-string checks are exact, not trimmed: whitespace-only input
/// counts as filled.
pub fn validate_draft(
    draft: &ReservationDraft,
    today: NaiveDate,
) -> Result<NaiveDate, ValidationError> {
    for (field, value) in draft.required_fields() {
        if value.is_empty() {
            debug!(field, "required field empty");
            return Err(ValidationError::MissingField);
        }
    }

    if !phone_is_valid(&draft.phone) {
        debug!(len = draft.phone.chars().count(), "phone format rejected");
        return Err(ValidationError::InvalidPhoneFormat);
    }

    let date = match NaiveDate::parse_from_str(&draft.date, "%Y-%m-%d") {
        Ok(date) => date,
        Err(err) => {
            // A well-formed host only emits ISO dates or the empty string,
            // so this is unreachable in practice; bucket it with the date rule.
            debug!(date = %draft.date, error = %err, "unparseable date rejected");
            return Err(ValidationError::PastDate);
        }
    };

    if date < today {
        return Err(ValidationError::PastDate);
    }

    if date.weekday() == CLOSED_WEEKDAY {
        return Err(ValidationError::ClosedDay);
    }

    Ok(date)
}
