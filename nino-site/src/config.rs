//! Site engine configuration
//!
//! # Environment variables
//!
//! Every setting can be overridden through the environment:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | SITE_ORIGIN | https://www.pizzeria-da-nino.it | Public origin feeding the menu QR |
//! | BOOKING_WINDOW_DAYS | 60 | How far ahead a table can be booked |
//! | SUBMIT_LATENCY_MS | 1500 | Simulated submission latency |
//! | TRANSITION_MS | 300 | Host CSS transition budget between panels |
//! | BANNER_TTL_MS | 5000 | Error banner auto-dismiss delay |
//! | ENVIRONMENT | development | development \| staging \| production |

use std::time::Duration;

/// Engine configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Public origin of the site (no trailing slash)
    pub origin: String,
    /// Booking window span in days
    pub booking_window_days: u64,
    /// Simulated submission latency
    pub submit_latency: Duration,
    /// Transition budget the host needs between panel swaps
    pub transition: Duration,
    /// Error banner lifetime before auto-dismiss
    pub banner_ttl: Duration,
    /// Running environment: development | staging | production
    pub environment: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: "https://www.pizzeria-da-nino.it".into(),
            booking_window_days: 60,
            submit_latency: Duration::from_millis(1500),
            transition: Duration::from_millis(300),
            banner_ttl: Duration::from_millis(5000),
            environment: "development".into(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from environment variables, falling back to
    /// the defaults above.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            origin: std::env::var("SITE_ORIGIN").unwrap_or(defaults.origin),
            booking_window_days: env_u64("BOOKING_WINDOW_DAYS", defaults.booking_window_days),
            submit_latency: Duration::from_millis(env_u64(
                "SUBMIT_LATENCY_MS",
                defaults.submit_latency.as_millis() as u64,
            )),
            transition: Duration::from_millis(env_u64(
                "TRANSITION_MS",
                defaults.transition.as_millis() as u64,
            )),
            banner_ttl: Duration::from_millis(env_u64(
                "BANNER_TTL_MS",
                defaults.banner_ttl.as_millis() as u64,
            )),
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
        }
    }

    /// URL the menu QR placeholder points at.
    pub fn menu_url(&self) -> String {
        format!("{}/menu.html", self.origin.trim_end_matches('/'))
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
