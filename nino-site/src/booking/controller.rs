//! Booking form controller
//!
//! Linear state machine `EDITING -> SUBMITTING -> SUCCESS` with an
//! explicit `SUCCESS -> EDITING` reset. Validation gates the submit
//! transition; every presentation effect is broadcast as a
//! [`BookingEvent`] for the host adapter to mirror into the DOM.
//!
//! Timing: the injected backend owns the simulated network latency; the
//! controller owns the transition budget between panel swaps and the
//! error banner's auto-dismiss lifetime. Submitting while a sequence is
//! already running is rejected with a typed error.

use crate::booking::backend::SubmissionBackend;
use chrono::{Local, NaiveDate};
use parking_lot::Mutex;
use shared::validate::validate_draft;
use shared::{
    BookingError, BookingEvent, BookingResult, FormState, ReservationDraft, ValidationError,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

/// Transition budget the host needs between panel swaps.
pub const DEFAULT_TRANSITION_MS: u64 = 300;
/// Error banner lifetime before auto-dismiss.
pub const DEFAULT_BANNER_TTL_MS: u64 = 5000;
/// Event buffer per subscriber; a lagging host drops oldest events.
const EVENT_CAPACITY: usize = 64;

type TodaySource = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

#[derive(Debug)]
struct Banner {
    message: String,
    generation: u64,
}

#[derive(Debug)]
struct FormInner {
    state: FormState,
    banner: Option<Banner>,
    banner_generation: u64,
    /// A submit or reset sequence is currently running
    in_flight: bool,
}

/// The booking form state machine.
pub struct BookingController<B> {
    inner: Arc<Mutex<FormInner>>,
    backend: B,
    event_tx: broadcast::Sender<BookingEvent>,
    today: TodaySource,
    transition: Duration,
    banner_ttl: Duration,
}

impl<B> std::fmt::Debug for BookingController<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingController")
            .field("state", &self.inner.lock().state)
            .field("transition", &self.transition)
            .field("banner_ttl", &self.banner_ttl)
            .finish()
    }
}

impl<B: SubmissionBackend> BookingController<B> {
    /// Create a controller in `EDITING` with product-default timings.
    pub fn new(backend: B) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            inner: Arc::new(Mutex::new(FormInner {
                state: FormState::Editing,
                banner: None,
                banner_generation: 0,
                in_flight: false,
            })),
            backend,
            event_tx,
            today: Arc::new(|| Local::now().date_naive()),
            transition: Duration::from_millis(DEFAULT_TRANSITION_MS),
            banner_ttl: Duration::from_millis(DEFAULT_BANNER_TTL_MS),
        }
    }

    /// Override where "today" comes from (fixed dates in tests).
    pub fn with_today(mut self, today: impl Fn() -> NaiveDate + Send + Sync + 'static) -> Self {
        self.today = Arc::new(today);
        self
    }

    /// Override the transition budget between panel swaps.
    pub fn with_transition_delay(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    /// Override the banner auto-dismiss lifetime.
    pub fn with_banner_ttl(mut self, banner_ttl: Duration) -> Self {
        self.banner_ttl = banner_ttl;
        self
    }

    /// Subscribe to presentation events.
    pub fn subscribe(&self) -> broadcast::Receiver<BookingEvent> {
        self.event_tx.subscribe()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> FormState {
        self.inner.lock().state
    }

    /// Message of the currently shown error banner, if any.
    pub fn error_message(&self) -> Option<String> {
        self.inner.lock().banner.as_ref().map(|b| b.message.clone())
    }

    /// Submit a draft assembled from the current form values.
    ///
    /// Runs the validation gate; on failure the form stays in `EDITING`
    /// and the error banner replaces any previous one. On success the
    /// draft is logged, handed to the backend, and the form walks
    /// `SUBMITTING` into `SUCCESS`, emitting the panel-swap events along
    /// the way.
    #[instrument(skip(self, draft), fields(date = %draft.date, guests = %draft.guests))]
    pub async fn submit(&self, draft: ReservationDraft) -> BookingResult<()> {
        let today = (self.today)();
        {
            let mut inner = self.inner.lock();
            if inner.state != FormState::Editing {
                return Err(BookingError::InvalidState {
                    action: "submit",
                    state: inner.state,
                });
            }
            if inner.in_flight {
                warn!("submit rejected, a submission is already in flight");
                return Err(BookingError::SubmissionInFlight);
            }
            if let Err(rule) = validate_draft(&draft, today) {
                self.show_banner(&mut inner, rule);
                return Err(rule.into());
            }
            inner.in_flight = true;
        }

        self.emit(BookingEvent::SubmitPending);
        // Diagnostic record of the full draft before the (simulated) send
        info!(
            name = %draft.name,
            phone = %draft.phone,
            date = %draft.date,
            time = %draft.time,
            guests = %draft.guests,
            extras = ?draft.extras,
            "reservation draft validated"
        );

        if let Err(err) = self.backend.submit(&draft).await {
            self.inner.lock().in_flight = false;
            warn!(error = %err, "submission backend failed");
            self.emit(BookingEvent::SubmitFailed {
                message: err.to_string(),
            });
            return Err(err);
        }

        self.set_state(FormState::Submitting);
        sleep(self.transition).await;
        self.set_state(FormState::Success);
        Ok(())
    }

    /// Return from the success panel to an empty, editable form.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> BookingResult<()> {
        {
            let mut inner = self.inner.lock();
            if inner.state != FormState::Success {
                return Err(BookingError::InvalidState {
                    action: "reset",
                    state: inner.state,
                });
            }
            if inner.in_flight {
                return Err(BookingError::SubmissionInFlight);
            }
            inner.in_flight = true;
        }

        self.emit(BookingEvent::SuccessHiding);
        sleep(self.transition).await;
        self.set_state(FormState::Editing);
        Ok(())
    }

    /// Move to a new state and emit the matching panel event.
    /// Reaching a sequence terminal (`SUCCESS` or `EDITING`) clears the
    /// in-flight flag.
    fn set_state(&self, to: FormState) {
        let from;
        {
            let mut inner = self.inner.lock();
            from = inner.state;
            inner.state = to;
            if to != FormState::Submitting {
                inner.in_flight = false;
            }
        }
        debug!(?from, ?to, "form state changed");
        self.emit(BookingEvent::StateChanged { from, to });
        match to {
            FormState::Submitting => self.emit(BookingEvent::FormHidden),
            FormState::Success => self.emit(BookingEvent::SuccessShown),
            FormState::Editing => self.emit(BookingEvent::FormReset),
        }
    }

    /// Replace the banner and arm its auto-dismiss timer. The generation
    /// counter keeps a stale timer from clearing a newer banner.
    fn show_banner(&self, inner: &mut FormInner, rule: ValidationError) {
        inner.banner_generation += 1;
        let generation = inner.banner_generation;
        let message = rule.message();
        inner.banner = Some(Banner {
            message: message.clone(),
            generation,
        });
        debug!(rule = rule.kind(), generation, "validation failed");
        self.emit(BookingEvent::ErrorShown {
            message,
            generation,
        });

        let inner_ref = Arc::clone(&self.inner);
        let event_tx = self.event_tx.clone();
        let ttl = self.banner_ttl;
        tokio::spawn(async move {
            sleep(ttl).await;
            let mut inner = inner_ref.lock();
            let still_current = inner
                .banner
                .as_ref()
                .is_some_and(|b| b.generation == generation);
            if still_current {
                inner.banner = None;
                let _ = event_tx.send(BookingEvent::ErrorDismissed { generation });
            }
        });
    }

    /// Hosts may come and go; an event with no listeners is fine.
    fn emit(&self, event: BookingEvent) {
        let _ = self.event_tx.send(event);
    }
}
