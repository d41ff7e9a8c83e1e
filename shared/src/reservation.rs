//! Reservation draft and form states

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Booking form lifecycle state
///
/// Linear flow `EDITING -> SUBMITTING -> SUCCESS`, with an explicit
/// reset transition `SUCCESS -> EDITING`. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormState {
    Editing,
    Submitting,
    Success,
}

/// Transient reservation record assembled from the form at submit time
///
/// Values are carried verbatim as the host read them from the inputs;
/// parsing and rule checks happen in the submit gate. The draft never
/// outlives the page session: it is either discarded on a validation
/// failure or logged and handed to the submission backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDraft {
    pub name: String,
    pub phone: String,
    /// ISO `YYYY-MM-DD`, as emitted by the host's date input
    pub date: String,
    pub time: String,
    pub guests: String,
    /// Optional fields passed through unvalidated (email, notes, ...)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extras: BTreeMap<String, String>,
}

impl ReservationDraft {
    /// Required fields in gate order, as `(field name, value)` pairs
    pub fn required_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("name", self.name.as_str()),
            ("phone", self.phone.as_str()),
            ("date", self.date.as_str()),
            ("time", self.time.as_str()),
            ("guests", self.guests.as_str()),
        ]
    }
}
