//! Submission backends
//!
//! The controller hands validated drafts to a capability trait so a real
//! reservations API can be wired in later and tests can substitute
//! deterministic fakes. The shipped backend simulates network latency
//! and always succeeds.

use shared::{BookingResult, ReservationDraft};
use std::time::Duration;
use tracing::{info, instrument};

/// Default simulated latency in milliseconds.
pub const DEFAULT_SUBMIT_LATENCY_MS: u64 = 1500;

/// Trait for reservation submission backends
#[allow(async_fn_in_trait)]
pub trait SubmissionBackend {
    /// Deliver a validated draft, reporting success or failure.
    async fn submit(&self, draft: &ReservationDraft) -> BookingResult<()>;
}

/// Stand-in for the future reservations API.
///
/// Waits the configured latency and reports success; no network call is
/// made.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    latency: Duration,
}

impl SimulatedBackend {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_SUBMIT_LATENCY_MS))
    }
}

impl SubmissionBackend for SimulatedBackend {
    #[instrument(skip(self, draft), fields(latency_ms = self.latency.as_millis() as u64))]
    async fn submit(&self, draft: &ReservationDraft) -> BookingResult<()> {
        tokio::time::sleep(self.latency).await;
        info!(
            name = %draft.name,
            date = %draft.date,
            time = %draft.time,
            guests = %draft.guests,
            "reservation sent (simulated)"
        );
        Ok(())
    }
}
