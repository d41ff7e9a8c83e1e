//! Error types for the booking flow
//!
//! Every user-visible failure is a validation failure; the message shown
//! in the form banner is the `Display` text of [`ValidationError`].
//! [`BookingError`] adds the engine-level failures a host can hit
//! (submitting twice, acting in the wrong state, a backend rejection).

use crate::reservation::FormState;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Submit-gate failure kinds, in the order the gate checks them.
///
/// The `Display` text is the exact banner message for each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    /// A required field (name, phone, date, time, guests) was empty
    #[error("please fill in all required fields.")]
    MissingField,

    /// Phone must be 8-20 chars of digits, spaces, `+`, `-`, `(`, `)`
    #[error("please enter a valid phone number.")]
    InvalidPhoneFormat,

    /// Selected date is before today (local midnight)
    #[error("please select a future date.")]
    PastDate,

    /// Selected date falls on the weekly closing day
    #[error("we are closed on Mondays, please choose another day.")]
    ClosedDay,
}

impl ValidationError {
    /// Stable identifier for logs and diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidPhoneFormat => "invalid_phone_format",
            Self::PastDate => "past_date",
            Self::ClosedDay => "closed_day",
        }
    }

    /// The banner message shown to the guest
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Booking engine error types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookingError {
    /// The submit gate rejected the draft; the form stays editable
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A submission or reset sequence is already running
    #[error("a submission is already in flight")]
    SubmissionInFlight,

    /// The operation is not allowed in the current form state
    #[error("cannot {action} while the form is {state:?}")]
    InvalidState {
        action: &'static str,
        state: FormState,
    },

    /// The submission backend reported a failure
    #[error("submission backend failed: {0}")]
    Backend(String),
}

/// Result type for booking operations
pub type BookingResult<T> = Result<T, BookingError>;
