use super::*;
use chrono::NaiveDate;
use shared::{BookingError, BookingEvent, BookingResult, FormState, ReservationDraft, ValidationError};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::broadcast;

/// Backend that records calls; latency and outcome are configurable.
#[derive(Debug, Clone)]
struct RecordingBackend {
    calls: Arc<AtomicUsize>,
    latency: Duration,
    fail: bool,
}

impl RecordingBackend {
    fn ok() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            latency: Duration::from_millis(1500),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::ok()
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SubmissionBackend for RecordingBackend {
    async fn submit(&self, _draft: &ReservationDraft) -> BookingResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.latency).await;
        if self.fail {
            Err(BookingError::Backend("temporarily unavailable".into()))
        } else {
            Ok(())
        }
    }
}

// 2025-03-05 is a Wednesday; 2025-03-11 the following Tuesday
fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()
}

fn valid_draft() -> ReservationDraft {
    ReservationDraft {
        name: "Mario".into(),
        phone: "333-1234567".into(),
        date: "2025-03-11".into(),
        time: "20:00".into(),
        guests: "4".into(),
        ..Default::default()
    }
}

fn controller(backend: RecordingBackend) -> BookingController<RecordingBackend> {
    BookingController::new(backend).with_today(fixed_today)
}

fn drain(rx: &mut broadcast::Receiver<BookingEvent>) -> Vec<BookingEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

// ========================================================================
// Submit flow
// ========================================================================

#[tokio::test(start_paused = true)]
async fn valid_submission_walks_to_success() {
    let backend = RecordingBackend::ok();
    let ctrl = controller(backend.clone());
    let mut rx = ctrl.subscribe();

    ctrl.submit(valid_draft()).await.unwrap();

    assert_eq!(ctrl.state(), FormState::Success);
    assert_eq!(backend.call_count(), 1);
    assert_eq!(
        drain(&mut rx),
        vec![
            BookingEvent::SubmitPending,
            BookingEvent::StateChanged {
                from: FormState::Editing,
                to: FormState::Submitting,
            },
            BookingEvent::FormHidden,
            BookingEvent::StateChanged {
                from: FormState::Submitting,
                to: FormState::Success,
            },
            BookingEvent::SuccessShown,
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn validation_failure_keeps_editing_and_skips_the_backend() {
    let backend = RecordingBackend::ok();
    let ctrl = controller(backend.clone());
    let mut rx = ctrl.subscribe();

    let mut draft = valid_draft();
    draft.guests.clear();
    let err = ctrl.submit(draft).await.unwrap_err();

    assert_eq!(
        err,
        BookingError::Validation(ValidationError::MissingField)
    );
    assert_eq!(ctrl.state(), FormState::Editing);
    assert_eq!(backend.call_count(), 0);
    assert_eq!(
        drain(&mut rx),
        vec![BookingEvent::ErrorShown {
            message: "please fill in all required fields.".into(),
            generation: 1,
        }]
    );
    assert_eq!(
        ctrl.error_message().as_deref(),
        Some("please fill in all required fields.")
    );
}

#[tokio::test(start_paused = true)]
async fn monday_draft_is_rejected_as_closed() {
    let ctrl = controller(RecordingBackend::ok());
    let mut draft = valid_draft();
    draft.date = "2025-03-10".into(); // a Monday
    let err = ctrl.submit(draft).await.unwrap_err();
    assert_eq!(err, BookingError::Validation(ValidationError::ClosedDay));
    assert_eq!(ctrl.state(), FormState::Editing);
}

#[tokio::test(start_paused = true)]
async fn submit_after_success_is_rejected() {
    let ctrl = controller(RecordingBackend::ok());
    ctrl.submit(valid_draft()).await.unwrap();
    let err = ctrl.submit(valid_draft()).await.unwrap_err();
    assert_eq!(
        err,
        BookingError::InvalidState {
            action: "submit",
            state: FormState::Success,
        }
    );
}

#[tokio::test(start_paused = true)]
async fn second_submit_while_in_flight_is_rejected() {
    let ctrl = Arc::new(controller(RecordingBackend::ok()));

    let first = {
        let ctrl = Arc::clone(&ctrl);
        tokio::spawn(async move { ctrl.submit(valid_draft()).await })
    };
    // let the first submission reach the backend's latency sleep
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }

    let err = ctrl.submit(valid_draft()).await.unwrap_err();
    assert_eq!(err, BookingError::SubmissionInFlight);

    first.await.unwrap().unwrap();
    assert_eq!(ctrl.state(), FormState::Success);
}

// ========================================================================
// Backend failure
// ========================================================================

#[tokio::test(start_paused = true)]
async fn backend_failure_returns_to_editing_and_clears_the_guard() {
    let backend = RecordingBackend::failing();
    let ctrl = controller(backend.clone());
    let mut rx = ctrl.subscribe();

    let err = ctrl.submit(valid_draft()).await.unwrap_err();
    assert_eq!(err, BookingError::Backend("temporarily unavailable".into()));
    assert_eq!(ctrl.state(), FormState::Editing);

    let events = drain(&mut rx);
    assert!(events.contains(&BookingEvent::SubmitFailed {
        message: "submission backend failed: temporarily unavailable".into(),
    }));

    // the in-flight guard is released: the retry reaches the backend again
    let err = ctrl.submit(valid_draft()).await.unwrap_err();
    assert_eq!(err, BookingError::Backend("temporarily unavailable".into()));
    assert_eq!(backend.call_count(), 2);
}

// ========================================================================
// Error banner lifetime
// ========================================================================

#[tokio::test(start_paused = true)]
async fn banner_auto_dismisses_after_its_lifetime() {
    let ctrl = controller(RecordingBackend::ok());
    let mut rx = ctrl.subscribe();

    let mut draft = valid_draft();
    draft.name.clear();
    ctrl.submit(draft).await.unwrap_err();
    assert!(ctrl.error_message().is_some());

    tokio::time::sleep(Duration::from_millis(5100)).await;

    assert_eq!(ctrl.error_message(), None);
    let events = drain(&mut rx);
    assert!(events.contains(&BookingEvent::ErrorDismissed { generation: 1 }));
}

#[tokio::test(start_paused = true)]
async fn newer_banner_survives_the_stale_dismiss_timer() {
    let ctrl = controller(RecordingBackend::ok());
    let mut rx = ctrl.subscribe();

    let mut missing = valid_draft();
    missing.name.clear();
    ctrl.submit(missing).await.unwrap_err(); // generation 1

    tokio::time::sleep(Duration::from_millis(3000)).await;

    let mut bad_phone = valid_draft();
    bad_phone.phone = "12".into();
    ctrl.submit(bad_phone).await.unwrap_err(); // generation 2

    // generation 1's timer fires at t=5s and must not clear the new banner
    tokio::time::sleep(Duration::from_millis(2500)).await;
    assert_eq!(
        ctrl.error_message().as_deref(),
        Some("please enter a valid phone number.")
    );

    // generation 2 expires at t=8s
    tokio::time::sleep(Duration::from_millis(3000)).await;
    assert_eq!(ctrl.error_message(), None);

    let dismissals: Vec<_> = drain(&mut rx)
        .into_iter()
        .filter(|e| matches!(e, BookingEvent::ErrorDismissed { .. }))
        .collect();
    assert_eq!(
        dismissals,
        vec![BookingEvent::ErrorDismissed { generation: 2 }]
    );
}

// ========================================================================
// Reset
// ========================================================================

#[tokio::test(start_paused = true)]
async fn reset_returns_to_an_empty_editable_form() {
    let ctrl = controller(RecordingBackend::ok());
    ctrl.submit(valid_draft()).await.unwrap();

    let mut rx = ctrl.subscribe();
    ctrl.reset().await.unwrap();

    assert_eq!(ctrl.state(), FormState::Editing);
    assert_eq!(
        drain(&mut rx),
        vec![
            BookingEvent::SuccessHiding,
            BookingEvent::StateChanged {
                from: FormState::Success,
                to: FormState::Editing,
            },
            BookingEvent::FormReset,
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn reset_outside_success_is_rejected() {
    let ctrl = controller(RecordingBackend::ok());
    let err = ctrl.reset().await.unwrap_err();
    assert_eq!(
        err,
        BookingError::InvalidState {
            action: "reset",
            state: FormState::Editing,
        }
    );
}

#[tokio::test(start_paused = true)]
async fn the_form_can_be_used_again_after_reset() {
    let backend = RecordingBackend::ok();
    let ctrl = controller(backend.clone());

    ctrl.submit(valid_draft()).await.unwrap();
    ctrl.reset().await.unwrap();
    ctrl.submit(valid_draft()).await.unwrap();

    assert_eq!(ctrl.state(), FormState::Success);
    assert_eq!(backend.call_count(), 2);
}
