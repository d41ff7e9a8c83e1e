//! Booking flow demo against the simulated backend.
//!
//! Renders the menu placeholder, submits a sample reservation, and
//! prints the event stream a host adapter would mirror into the DOM.
//!
//! Run with: `cargo run -p nino-site --example booking_demo`

use chrono::{Datelike, Days, Local, Weekday};
use nino_site::{BookingController, BookingWindow, SimulatedBackend, SiteConfig, popup};
use shared::ReservationDraft;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    nino_site::setup_environment()?;

    let config = SiteConfig::from_env();

    let placeholder = popup::menu_placeholder(&config)?;
    println!(
        "menu placeholder: {0}x{0} units, caption: {1}",
        placeholder.bitmap.size(),
        placeholder.caption
    );

    let today = Local::now().date_naive();
    let window = BookingWindow::from_today(today);
    println!("booking window: {} .. {}", window.min_iso(), window.max_iso());

    // first open evening inside the window (skip the Monday closure)
    let mut date = today.checked_add_days(Days::new(2)).unwrap_or(today);
    if date.weekday() == Weekday::Mon {
        date = date.succ_opt().unwrap_or(date);
    }

    let ctrl = BookingController::new(SimulatedBackend::new(config.submit_latency))
        .with_transition_delay(config.transition)
        .with_banner_ttl(config.banner_ttl);
    let mut events = ctrl.subscribe();

    let draft = ReservationDraft {
        name: "Mario".into(),
        phone: "333-1234567".into(),
        date: date.format("%Y-%m-%d").to_string(),
        time: "20:00".into(),
        guests: "4".into(),
        ..Default::default()
    };

    ctrl.submit(draft).await?;
    while let Ok(event) = events.try_recv() {
        println!("event: {}", serde_json::to_string(&event)?);
    }

    ctrl.reset().await?;
    while let Ok(event) = events.try_recv() {
        println!("event: {}", serde_json::to_string(&event)?);
    }

    println!("final state: {:?}", ctrl.state());
    Ok(())
}
