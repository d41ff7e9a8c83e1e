//! Booking date window
//!
//! The date input accepts [today, today + 60 days]. The window feeds the
//! host's min/max input constraints; the past-date rule is still
//! re-checked at submit time, so the contract holds both ways.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// How far ahead a table can be booked, in days.
pub const BOOKING_WINDOW_DAYS: u64 = 60;

/// Selectable date range for the booking date input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingWindow {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl BookingWindow {
    /// Standard window starting today.
    pub fn from_today(today: NaiveDate) -> Self {
        Self::with_span(today, BOOKING_WINDOW_DAYS)
    }

    /// Window with a custom span (configuration override).
    pub fn with_span(today: NaiveDate, days: u64) -> Self {
        Self {
            min: today,
            max: today
                .checked_add_days(Days::new(days))
                .unwrap_or(NaiveDate::MAX),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.min..=self.max).contains(&date)
    }

    /// ISO string for the host's `min` input attribute.
    pub fn min_iso(&self) -> String {
        self.min.format("%Y-%m-%d").to_string()
    }

    /// ISO string for the host's `max` input attribute.
    pub fn max_iso(&self) -> String {
        self.max.format("%Y-%m-%d").to_string()
    }
}
