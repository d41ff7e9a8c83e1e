//! # nino-site
//!
//! Interaction engine for the Da Nino marketing site.
//!
//! The engine is host-agnostic: each behavior module owns its state and
//! emits plain data (events, flags, geometry results); a thin host
//! adapter mirrors that data into the DOM. Nothing here touches a
//! document - the booking controller broadcasts [`shared::BookingEvent`]s,
//! the navigation/scroll modules return the flags and offsets the host
//! applies, and the QR popup hands back a rendered bitmap plus caption.

pub mod booking;
pub mod config;
pub mod logger;
pub mod nav;
pub mod popup;
pub mod scroll;

// Re-exports
pub use booking::{BookingController, BookingWindow, SimulatedBackend, SubmissionBackend};
pub use config::SiteConfig;
pub use nav::NavState;
pub use popup::QrPopup;

/// One-stop environment setup for binaries: dotenv plus console logging.
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logger::init_logger("info")
}
