//! Booking events - presentation effects broadcast by the form controller
//!
//! The controller never touches the DOM; it emits these events on a
//! broadcast channel and the host adapter mirrors them into visibility,
//! class, and style changes. Events carry data only, no host references.

use crate::reservation::FormState;
use serde::{Deserialize, Serialize};

/// Presentation event emitted by the booking controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingEvent {
    /// The form moved between lifecycle states
    StateChanged { from: FormState, to: FormState },

    /// Show the error banner, replacing any previous one.
    /// `generation` ties the banner to its auto-dismiss timer.
    ErrorShown { message: String, generation: u64 },

    /// The banner reached its lifetime without being replaced
    ErrorDismissed { generation: u64 },

    /// Validation passed: disable the submit control and show the
    /// loading label while the submission runs
    SubmitPending,

    /// The backend rejected the submission: re-enable the submit
    /// control and restore its label
    SubmitFailed { message: String },

    /// Start the form's exit transition (fade/slide out)
    FormHidden,

    /// Reveal the success panel (fade/slide in)
    SuccessShown,

    /// Start the success panel's exit transition
    SuccessHiding,

    /// Clear all fields, restore form visibility and the submit
    /// control's enabled state and original label
    FormReset,
}
