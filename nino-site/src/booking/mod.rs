//! Reservation booking flow
//!
//! [`BookingController`] drives the form's lifecycle, the
//! [`SubmissionBackend`] trait carries validated drafts (simulated by
//! default), and [`BookingWindow`] produces the selectable date range
//! for the host's date input.

mod backend;
mod controller;
mod window;

#[cfg(test)]
mod tests;

pub use backend::{DEFAULT_SUBMIT_LATENCY_MS, SimulatedBackend, SubmissionBackend};
pub use controller::{BookingController, DEFAULT_BANNER_TTL_MS, DEFAULT_TRANSITION_MS};
pub use window::{BOOKING_WINDOW_DAYS, BookingWindow};
