//! Shared types for the Da Nino site engine
//!
//! Common types used across the engine crates: the reservation draft and
//! form states, the booking error taxonomy, the presentation events the
//! form controller broadcasts, and the submit-gate validation rules.

pub mod error;
pub mod events;
pub mod reservation;
pub mod validate;

// Re-exports
pub use error::{BookingError, BookingResult, ValidationError};
pub use events::BookingEvent;
pub use reservation::{FormState, ReservationDraft};
